//! Request path helpers used by the matcher.
//!
//! A request path goes through three steps before it is walked against a
//! compiled filter:
//!
//! 1. [`strip_query`] drops everything from the first `?` on.
//! 2. [`trim_slashes`] removes a single leading and a single trailing `/`.
//! 3. [`request_segments`] splits on `/`, skipping empty pieces, and optionally
//!    splits a piece containing `.` once more, in front of its last dot.
//!
//! The dot rule lets an extension such as `.json` occupy its own slot, so
//! `file/<name>.json` matches `file/report.json`. A piece never yields more
//! than two segments: `archive.tar.gz` is `archive.tar` and `.gz`.

/// Keep only the part of the path before the first `?`.
pub fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(index) => &path[..index],
        None => path,
    }
}

/// Remove one leading and one trailing slash, if present.
pub fn trim_slashes(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Split a normalized path into request segments.
///
/// With `split_dots`, `report.pdf` becomes `report` and `.pdf`, and
/// `a.b.c` becomes `a.b` and `.c`.
pub fn request_segments(path: &str, split_dots: bool) -> Vec<&str> {
    let mut segments = Vec::new();
    for piece in path.split('/').filter(|piece| !piece.is_empty()) {
        if split_dots {
            push_dot_pieces(piece, &mut segments);
        } else {
            segments.push(piece);
        }
    }
    segments
}

// Split at the last '.', which stays with the second half.
fn push_dot_pieces<'a>(piece: &'a str, out: &mut Vec<&'a str>) {
    match piece.rfind('.') {
        Some(index) => {
            let (stem, suffix) = piece.split_at(index);
            if !stem.is_empty() {
                out.push(stem);
            }
            out.push(suffix);
        }
        None => out.push(piece),
    }
}
