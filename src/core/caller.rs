//! Caller-site resolution
//!
//! Depth counts frames outward from the code that invoked a logging call:
//! depth 1 is that call site itself, depth 2 is its caller, and so on.
//! Depth 0 disables annotation.
//!
//! Depth 1 comes straight from `#[track_caller]`. Deeper sites are found by
//! walking the stack: the frame matching the depth-1 location is located and
//! the walk continues outward from there.

use std::panic::Location;
use std::path::{Path, PathBuf};

/// Returned when the requested frame cannot be resolved.
pub const UNKNOWN_SITE: &str = "???:0";

/// Resolve the caller site `depth` frames above the code calling this function.
///
/// # Examples
///
/// ```
/// use leveled_logger::core::caller::{resolve, UNKNOWN_SITE};
///
/// assert_eq!(resolve(0), "");
/// assert_eq!(resolve(usize::MAX), UNKNOWN_SITE);
/// ```
#[track_caller]
#[inline(never)]
pub fn resolve(depth: usize) -> String {
    resolve_from(depth, Location::caller())
}

/// Resolve a caller site anchored on `origin`, the depth-1 location.
pub fn resolve_from(depth: usize, origin: &Location<'_>) -> String {
    match depth {
        0 => String::new(),
        1 => site(Path::new(origin.file()), origin.line()),
        _ => walk(depth, origin).unwrap_or_else(|| UNKNOWN_SITE.to_string()),
    }
}

fn walk(depth: usize, origin: &Location<'_>) -> Option<String> {
    let origin_file = Path::new(origin.file());
    let mut frames: Vec<Option<(PathBuf, u32)>> = Vec::new();

    backtrace::trace(|frame| {
        let mut resolved = false;
        backtrace::resolve_frame(frame, |symbol| {
            resolved = true;
            let location = match (symbol.filename(), symbol.lineno()) {
                (Some(file), Some(line)) => Some((file.to_path_buf(), line)),
                _ => None,
            };
            frames.push(location);
        });
        if !resolved {
            frames.push(None);
        }
        true
    });

    let anchor = frames.iter().position(|frame| {
        matches!(frame, Some((file, line)) if *line == origin.line() && file.ends_with(origin_file))
    })?;
    let target = anchor.checked_add(depth - 1)?;

    frames
        .get(target)
        .and_then(|frame| frame.as_ref())
        .map(|(file, line)| site(file, *line))
}

fn site(file: &Path, line: u32) -> String {
    let name = file
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| file.to_string_lossy());
    format!("{}:{}", name, line)
}
