//! Path resolution
//!
//! Pure string manipulation turning user input plus the current directory
//! into the absolute key used by the tree. Existence is never checked here.

/// Resolve `raw` against `cwd` and normalize the result.
///
/// - `""` and `"."` yield `cwd` unchanged
/// - a leading `/` makes the path absolute
/// - `..` drops the last segment, staying at `/` when already there
/// - anything else is appended to `cwd`
pub fn resolve(raw: &str, cwd: &str) -> String {
    if raw.is_empty() || raw == "." {
        return normalize(cwd);
    }
    if raw.starts_with('/') {
        return normalize(raw);
    }
    normalize(&join(cwd, raw))
}

/// Collapse repeated separators and fold `.` / `..` segments.
pub fn normalize(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Append `name` to `dir` with a single separator.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent key of a normalized path. The root is its own parent.
pub fn parent(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => path[..pos].to_string(),
    }
}

/// Last segment of a normalized path; empty for the root.
pub fn file_name(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}
