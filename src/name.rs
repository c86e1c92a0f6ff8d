use std::path::Path;

use anyhow::{Context, Result};

/// Where the emitted constant gets its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    /// Uppercased file name of the input, minus its extension.
    FromPath,
    Fixed(String),
}

impl NameSource {
    pub fn resolve(&self, path: &Path) -> Result<String> {
        match self {
            NameSource::FromPath => derive_name(path),
            NameSource::Fixed(name) => Ok(name.clone()),
        }
    }
}

impl From<Option<String>> for NameSource {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => NameSource::Fixed(name),
            None => NameSource::FromPath,
        }
    }
}

/// `foo/bar.ppm` => `BAR`. Only the last extension is stripped.
pub fn derive_name(path: &Path) -> Result<String> {
    let file_name = path
        .file_name()
        .with_context(|| format!("no file name in {}", path.display()))?;
    let file_name = file_name
        .to_str()
        .with_context(|| format!("file name is not valid UTF-8: {file_name:?}"))?;

    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => file_name,
    };
    Ok(stem.to_uppercase())
}

/// ASCII-only check; good enough to catch names like `MY-SPRITE` or `2X`.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_ascii_alphabetic()) {
        return false;
    }
    name != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
