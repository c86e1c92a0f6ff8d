use ppm_to_sprite::{Sprite, HEIGHT, WIDTH};
use sprite_macros::include_sprite;

const GRADIENT: Sprite = include_sprite!("gradient");

#[test]
fn embeds_pixels_row_major() {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let expected = [(x * 10) as u8, (y * 10) as u8, 7];
            assert_eq!(GRADIENT[y][x], expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn matches_runtime_loader() {
    let text = include_str!("../img/gradient.ppm");
    let sprite = ppm_to_sprite::load_sprite(text.as_bytes()).unwrap();
    assert_eq!(sprite, GRADIENT);
}

macro_rules! sprite {
    ($name:literal) => {
        include_sprite!($name)
    };
}

const FORWARDED: Sprite = sprite!(r"gradient");

#[test]
fn literal_forwarded_through_macro_rules() {
    assert_eq!(FORWARDED, GRADIENT);
}
