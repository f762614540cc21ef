//! asset/naming.rs
//! Compound asset suffixes and logical path resolution.
//!
//! Packaged assets are named `<name>.<inner>.bin`, e.g. `text.xml.bin` is an
//! XML document inside the `.bin` obfuscation wrapper. Logical paths are
//! `/`-separated and always relative to the game root.
use std::path::{Path, PathBuf};

use crate::types::AssetError;

/// Wrapper suffix of obfuscated assets.
pub const BIN_SUFFIX: &str = ".bin";

/// Last segment of a logical path.
fn file_part(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// True when the file name ends in `.bin` and has a non-empty stem.
pub fn is_wrapped(name: &str) -> bool {
    let file = file_part(name);
    let n = file.len();
    n > BIN_SUFFIX.len() && file.is_char_boundary(n - BIN_SUFFIX.len())
        && file[n - BIN_SUFFIX.len()..].eq_ignore_ascii_case(BIN_SUFFIX)
}

/// `text.xml.bin` → `text.xml`. Unwrapped names are returned unchanged.
pub fn inner_name(name: &str) -> &str {
    if is_wrapped(name) {
        &name[..name.len() - BIN_SUFFIX.len()]
    } else {
        name
    }
}

/// `text.xml` → `text.xml.bin`. Already wrapped names are returned unchanged.
pub fn wrapped_name(name: &str) -> String {
    if is_wrapped(name) {
        name.to_string()
    } else {
        format!("{name}{BIN_SUFFIX}")
    }
}

/// Declared inner format of a wrapped name: `island1.xml.bin` → `xml`.
pub fn inner_format(name: &str) -> Option<&str> {
    if !is_wrapped(name) {
        return None;
    }
    let inner = inner_name(name);
    let file = file_part(inner);
    match file.rfind('.') {
        Some(i) if i > 0 && i + 1 < file.len() => Some(&file[i + 1..]),
        _ => None,
    }
}

/// Split a logical path into its components, rejecting anything that could
/// escape the game root.
pub fn logical_components(logical: &str) -> Result<Vec<&str>, AssetError> {
    let invalid = |reason| AssetError::InvalidPath { path: logical.to_string(), reason };

    if logical.trim().is_empty() {
        return Err(invalid("empty path"));
    }
    if logical.starts_with('/') || logical.starts_with('\\') || logical.contains(':') {
        return Err(invalid("absolute path"));
    }

    let mut parts = Vec::new();
    for part in logical.split(['/', '\\']) {
        match part {
            "" | "." => continue,
            ".." => return Err(invalid("parent directory component")),
            p => parts.push(p),
        }
    }
    if parts.is_empty() {
        return Err(invalid("empty path"));
    }
    Ok(parts)
}

/// Join a logical path onto `root` component by component.
pub fn resolve(root: &Path, logical: &str) -> Result<PathBuf, AssetError> {
    let mut path = root.to_path_buf();
    for part in logical_components(logical)? {
        path.push(part);
    }
    Ok(path)
}
