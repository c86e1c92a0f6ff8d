use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::PathBuf,
};

use anyhow::{Context as _, Result};
use clap::Parser;
use log::{debug, info, warn};
use ppm_to_sprite::{convert, name::is_identifier, NameSource};

/// Convert an 18x24 ASCII pixel map ("P3" PPM, one value per line) into a
/// Rust `Sprite` constant, printed to stdout.
#[derive(Parser)]
#[command()]
struct Args {
    /// Path to the pixel map.
    #[arg()]
    input: PathBuf,

    /// Name of the emitted constant. Defaults to the input's file name,
    /// uppercased, without its extension.
    #[arg(long)]
    name: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args = Args::parse();
    run(args, io::stdout().lock())
}

fn run(args: Args, out: impl Write) -> Result<()> {
    let name = NameSource::from(args.name).resolve(&args.input)?;
    debug!("constant name: {name}");
    if !is_identifier(&name) {
        warn!("{name:?} is not a valid Rust identifier; the output won't compile as-is");
    }

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    convert(BufReader::new(file), &name, out)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    info!("wrote {name} from {}", args.input.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use test_case::test_case;

    use super::*;

    const GRADIENT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/sprite-macros/img/gradient.ppm");

    fn run_with(argv: &[&str]) -> (Result<()>, String) {
        let args = Args::try_parse_from(argv.iter().copied()).unwrap_or_else(|e| panic!("{e}"));
        let mut out = vec![];
        let result = run(args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        let Err(e) = Args::try_parse_from(["ppm-to-sprite"]) else {
            panic!("parsed without an input path");
        };
        assert_eq!(e.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn name_flag_needs_a_value() {
        assert!(Args::try_parse_from(["ppm-to-sprite", "a.ppm", "--name"]).is_err());
    }

    #[test_case(&["ppm-to-sprite", GRADIENT], "GRADIENT"; "derived from path")]
    #[test_case(&["ppm-to-sprite", GRADIENT, "--name", "PLAYER"], "PLAYER"; "fixed by flag")]
    #[test_case(&["ppm-to-sprite", "--name", "BAT", GRADIENT], "BAT"; "flag before path")]
    fn writes_named_constant(argv: &[&str], name: &str) {
        let (result, out) = run_with(argv);
        result.unwrap();
        assert!(out.starts_with(&format!("pub const {name}: Sprite = [\n    [\n        [0, 0, 7],\n")));
        assert!(out.ends_with("    ]\n];\n\n"));
    }

    #[test]
    fn missing_file_writes_nothing() {
        let (result, out) = run_with(&["ppm-to-sprite", "no/such/sprite.ppm"]);
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.starts_with("failed to open no/such/sprite.ppm"), "{msg}");
        assert_eq!(out, "");
    }
}
