use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::iproduct;
use log::debug;

use crate::{
    ppm::{Decimal, PpmReader, HEIGHT, WIDTH},
    Sprite,
};

/// Writes the pixel map in `input` to `out` as `pub const <name>: Sprite = [...];`.
///
/// Pixels are written as they're read, so if a channel value fails to parse,
/// everything before it has already been written. A bad header fails before
/// anything is written. Lines after the last pixel are never read.
///
/// Channel values are neither range-checked nor limited in width; they're
/// echoed as canonical decimal integers.
pub fn convert(input: impl BufRead, name: &str, mut out: impl Write) -> Result<()> {
    let mut ppm = PpmReader::new(input);
    ppm.read_header()?;
    debug!("header ok, writing {name}");

    writeln!(out, "pub const {name}: Sprite = [")?;
    for (y, x) in iproduct!(0..HEIGHT, 0..WIDTH) {
        if x == 0 {
            if y == 0 {
                writeln!(out, "    [")?;
            } else {
                writeln!(out, "    ], [")?;
            }
        }

        let [r, g, b] = ppm.next_pixel::<Decimal>()?;
        writeln!(out, "        [{r}, {g}, {b}],")?;
    }
    writeln!(out, "    ]")?;
    writeln!(out, "];")?;
    writeln!(out)?;
    out.flush()?;

    debug!("read {} lines", ppm.line_no());
    Ok(())
}

/// Reads the pixel map into memory. Unlike [`convert`], every channel value
/// must fit in a `u8`.
pub fn load_sprite(input: impl BufRead) -> Result<Sprite> {
    let mut ppm = PpmReader::new(input);
    ppm.read_header()?;

    let mut sprite = [[[0; 3]; WIDTH]; HEIGHT];
    for (y, x) in iproduct!(0..HEIGHT, 0..WIDTH) {
        sprite[y][x] = ppm.next_pixel()?;
    }
    Ok(sprite)
}
