use std::{
    fmt,
    io::{self, BufRead},
    str::FromStr,
};

use anyhow::{ensure, Context, Result};

pub const WIDTH: usize = 18;
pub const HEIGHT: usize = 24;
pub const MAX_VALUE: u32 = 255;

const FORMAT_TAG: &str = "P3";

/// Reads a "P3" pixel map one line at a time, keeping track of the line
/// number for error messages.
///
/// The format is strict: a four-line header, then one channel value per line.
pub struct PpmReader<R> {
    lines: io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> PpmReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            lines: input.lines(),
            line_no: 0,
        }
    }

    /// 1-based number of the last line read, or 0 before the first read.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Trailing whitespace is dropped.
    fn next_line(&mut self) -> Result<String> {
        self.line_no += 1;
        let mut line = self
            .lines
            .next()
            .with_context(|| format!("line {}: unexpected end of input", self.line_no))??;
        line.truncate(line.trim_end().len());
        Ok(line)
    }

    /// Consumes the four header lines. Nothing past them is read.
    pub fn read_header(&mut self) -> Result<()> {
        let tag = self.next_line()?;
        ensure!(
            tag == FORMAT_TAG,
            "line {}: expected format tag {FORMAT_TAG:?}, got {tag:?}",
            self.line_no
        );

        let comment = self.next_line()?;
        ensure!(
            comment.starts_with('#'),
            "line {}: expected a comment starting with '#', got {comment:?}",
            self.line_no
        );

        let dims = self.next_line()?;
        let expected = format!("{WIDTH} {HEIGHT}");
        ensure!(
            dims == expected,
            "line {}: expected dimensions {expected:?}, got {dims:?}",
            self.line_no
        );

        let max_value = self.next_line()?;
        let expected = MAX_VALUE.to_string();
        ensure!(
            max_value == expected,
            "line {}: expected max value {expected:?}, got {max_value:?}",
            self.line_no
        );

        Ok(())
    }

    /// Parses the next line as a single base-10 value.
    pub fn next_value<T>(&mut self) -> Result<T>
    where
        T: FromStr,
        T::Err: Into<anyhow::Error>,
    {
        let line = self.next_line()?;
        let value = line
            .trim_start()
            .parse::<T>()
            .map_err(|e| -> anyhow::Error { e.into() })
            .with_context(|| format!("line {}: invalid channel value {line:?}", self.line_no))?;
        Ok(value)
    }

    /// Red, green, blue: three consecutive lines.
    pub fn next_pixel<T>(&mut self) -> Result<[T; 3]>
    where
        T: FromStr,
        T::Err: Into<anyhow::Error>,
    {
        let r = self.next_value()?;
        let g = self.next_value()?;
        let b = self.next_value()?;
        Ok([r, g, b])
    }
}

/// A base-10 integer of any width, kept as canonical digits: no `+`, no
/// leading zeros, no `_` separators, and `-0` is `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal(String);

impl FromStr for Decimal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        // `_` is only allowed between digits, one at a time.
        ensure!(
            !digits.is_empty()
                && !digits.starts_with('_')
                && !digits.ends_with('_')
                && !digits.contains("__")
                && digits.chars().all(|c| c.is_ascii_digit() || c == '_'),
            "not a base-10 integer"
        );

        let digits: String = digits.chars().filter(|&c| c != '_').collect();
        let digits = digits.trim_start_matches('0');
        let canonical = match digits {
            "" => "0".to_string(),
            _ if negative => format!("-{digits}"),
            _ => digits.to_string(),
        };
        Ok(Decimal(canonical))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
