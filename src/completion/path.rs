use std::fs;
use std::io;
use std::path::{is_separator, Path, MAIN_SEPARATOR};

/// Splits a fragment after its last separator.
///
/// The directory half is returned exactly as typed (`./`, `../`, `/` and
/// nested parts included) so completed names can be glued straight back on.
/// Trailing separators are ignored, so `bar/` looks for `bar` in its parent
/// and completes to itself.
pub fn split_fragment(fragment: &str) -> (&str, &str) {
    let trimmed = fragment.trim_end_matches(is_separator);
    if trimmed.is_empty() {
        // the root, or nothing at all
        return (fragment, "");
    }
    match trimmed.rfind(is_separator) {
        Some(idx) => {
            let split = idx + trimmed[idx..].chars().next().map_or(1, char::len_utf8);
            trimmed.split_at(split)
        }
        None => ("", trimmed),
    }
}

/// Entries of the fragment's directory whose names start with its last part.
///
/// Relative directories are looked up under `base`. Each result carries the
/// typed directory prefix, and directories get a trailing separator.
pub fn matching_entries(base: &Path, fragment: &str) -> io::Result<Vec<String>> {
    let (dir, prefix) = split_fragment(fragment);
    let scan = if dir.is_empty() {
        base.to_path_buf()
    } else {
        base.join(dir)
    };

    let mut matches = Vec::new();
    for entry in fs::read_dir(&scan)? {
        let entry = entry?;
        let file_name = entry.file_name();
        // names that are not valid UTF-8 cannot be typed back into the buffer
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.starts_with(prefix) {
            continue;
        }

        let mut candidate = format!("{dir}{name}");
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            candidate.push(MAIN_SEPARATOR);
        }
        matches.push(candidate);
    }
    matches.sort();
    Ok(matches)
}
