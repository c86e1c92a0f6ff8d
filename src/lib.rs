//! Turns 18x24 "P3" pixel maps into Rust sprite constants.

pub mod convert;
pub mod name;
pub mod ppm;

pub use convert::{convert, load_sprite};
pub use name::NameSource;
pub use ppm::{HEIGHT, MAX_VALUE, WIDTH};

/// `HEIGHT` rows of `WIDTH` RGB pixels, top row first.
pub type Sprite = [[[u8; 3]; WIDTH]; HEIGHT];
