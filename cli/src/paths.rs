//! Default output locations for the single-file commands.

use std::path::{Path, PathBuf};

use gootool_core::asset::naming::{inner_name, is_wrapped, BIN_SUFFIX};

/// Written to when a decoded input has no `.bin` suffix to strip.
pub const DECODED_SUFFIX: &str = ".out";

/// `-` selects stdout.
pub fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

/// `text.xml.bin` → `text.xml`; anything else gets `.out` appended.
pub fn decoded_output(input: &Path) -> PathBuf {
    let name = file_name(input);
    let out = if is_wrapped(&name) {
        inner_name(&name).to_string()
    } else {
        format!("{name}{DECODED_SUFFIX}")
    };
    input.with_file_name(out)
}

/// `text.xml` → `text.xml.bin`. Always appends, so `x.bin` → `x.bin.bin`
/// rather than the input itself.
pub fn encoded_output(input: &Path) -> PathBuf {
    input.with_file_name(format!("{}{BIN_SUFFIX}", file_name(input)))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
