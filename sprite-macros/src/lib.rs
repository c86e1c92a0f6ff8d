//! Compile-time counterpart of the `ppm-to-sprite` binary.

use std::{
    env,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{bail, ensure, Context, Result};
use itertools::Itertools;
use ppm_to_sprite::load_sprite;
use proc_macro::{Delimiter, TokenStream, TokenTree};

/// Embeds `img/<name>.ppm`, relative to the calling crate's manifest
/// directory, as a `Sprite` array expression.
///
/// ```ignore
/// pub const PLAYER: Sprite = include_sprite!("player");
/// ```
///
/// The name is a plain or raw string literal without escapes. A missing file
/// or a malformed pixel map is a compile error, and editing the file triggers
/// a rebuild.
#[proc_macro]
pub fn include_sprite(input: TokenStream) -> TokenStream {
    let code = single_literal(input).and_then(|lit| {
        let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
        expand(&lit, Path::new(&manifest_dir))
    });

    let code = match code {
        Ok(code) => code,
        Err(e) => compile_error(&format!("include_sprite!: {e:#}")),
    };
    match code.parse() {
        Ok(tokens) => tokens,
        Err(e) => compile_error(&format!("include_sprite!: failed to tokenize sprite: {e:?}"))
            .parse()
            .unwrap(),
    }
}

/// The one token passed to the macro, as source text.
fn single_literal(input: TokenStream) -> Result<String> {
    let (token,) = input
        .into_iter()
        .collect_tuple()
        .context("expected exactly 1 argument: a string literal")?;

    match token {
        TokenTree::Literal(lit) => Ok(lit.to_string()),
        // a `$name:literal` forwarded from a macro_rules! arrives wrapped
        TokenTree::Group(group) if group.delimiter() == Delimiter::None => {
            single_literal(group.stream())
        }
        other => bail!("expected a string literal, got `{other}`"),
    }
}

/// Expands to a block that pulls the file in with `include_bytes!`, so rustc
/// tracks it, and evaluates to the sprite's array expression.
fn expand(lit: &str, manifest_dir: &Path) -> Result<String> {
    let name = sprite_name(lit)?;
    let path = sprite_path(manifest_dir, &name);

    let file = File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let sprite = load_sprite(BufReader::new(file)).with_context(|| path.display().to_string())?;

    let path = path
        .to_str()
        .with_context(|| format!("path is not valid UTF-8: {}", path.display()))?;
    // Debug output of nested arrays is already a valid array expression.
    Ok(format!("{{ const _: &[u8] = include_bytes!({path:?}); {sprite:?} }}"))
}

fn sprite_path(manifest_dir: &Path, name: &str) -> PathBuf {
    manifest_dir.join("img").join(format!("{name}.ppm"))
}

/// `"player"`, `r"player"` and `r#"player"#` all give `player`.
fn sprite_name(lit: &str) -> Result<String> {
    let name = match lit.strip_prefix('r') {
        Some(raw) => {
            let fence = "#".repeat(raw.len() - raw.trim_start_matches('#').len());
            raw.strip_prefix(fence.as_str())
                .and_then(|s| s.strip_prefix('"'))
                .and_then(|s| s.strip_suffix(fence.as_str()))
                .and_then(|s| s.strip_suffix('"'))
        }
        None => {
            let name = lit.strip_prefix('"').and_then(|s| s.strip_suffix('"'));
            if let Some(name) = name {
                ensure!(!name.contains('\\'), "escape sequences aren't supported: {lit}");
            }
            name
        }
    };

    let name = name.with_context(|| format!("expected a string literal, got `{lit}`"))?;
    ensure!(!name.is_empty(), "sprite name is empty");
    Ok(name.to_string())
}

fn compile_error(msg: &str) -> String {
    // A debug-formatted str is always a valid string literal.
    format!("compile_error!({msg:?})")
}
