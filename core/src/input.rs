//! # Target List Loading
//!
//! Turns one CLI argument into an ordered list of targets. An argument
//! that names an existing file contributes its lines; anything else is a
//! single literal target. No deduplication, no trimming beyond the line
//! terminator.

use std::fs;
use std::path::Path;

use originmap_common::error::InputError;

/// Loads the target list backing `arg`.
///
/// * Existing file: its lines in file order, trailing newline stripped,
///   blank lines kept as empty entries.
/// * Anything else: a one-element list holding `arg` verbatim.
///
/// An existing path that cannot be read (permissions, directory, race)
/// is fatal; the scan must not start on a partial list.
pub fn load_targets(arg: &str) -> Result<Vec<String>, InputError> {
    let path = Path::new(arg);

    if !path.exists() {
        return Ok(vec![arg.to_string()]);
    }

    let content = fs::read_to_string(path).map_err(|source| InputError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().map(str::to_string).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
