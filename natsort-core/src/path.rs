//! Path-aware segmentation
//!
//! Splits a path-like string into components so numeral runs never span a
//! separator. The root anchor is kept as its own component, which keeps
//! `/a/b` and `a/b` distinct.

/// Component used for the root of an absolute path
pub const ROOT: &str = "/";

#[inline]
fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Split a path into its components
///
/// Redundant separators and `.` components are dropped; `..` is kept as is.
/// An empty input has no components.
pub fn split_path(input: &str) -> Vec<&str> {
    let mut components = Vec::new();
    if input.starts_with(is_separator) {
        components.push(ROOT);
    }
    components.extend(
        input
            .split(is_separator)
            .filter(|part| !part.is_empty() && *part != "."),
    );
    components
}

/// Join components produced by [`split_path`] back into a normalized path
pub fn join_components(components: &[&str]) -> String {
    match components.split_first() {
        Some((&ROOT, rest)) => format!("{ROOT}{}", rest.join("/")),
        Some(_) => components.join("/"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path() {
        assert_eq!(split_path("tmp/a1/path1"), ["tmp", "a1", "path1"]);
    }

    #[test]
    fn test_absolute_path_keeps_root() {
        assert_eq!(split_path("/a/b"), ["/", "a", "b"]);
        assert_ne!(split_path("/a/b"), split_path("a/b"));
        assert_eq!(split_path("/"), ["/"]);
    }

    #[test]
    fn test_redundant_separators_collapse() {
        assert_eq!(split_path("a//b/./c/"), ["a", "b", "c"]);
        assert_eq!(split_path("./a"), ["a"]);
        assert_eq!(split_path("a/../b"), ["a", "..", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_path("").is_empty());
        assert_eq!(join_components(&[]), "");
    }

    #[test]
    fn test_components_keep_spaces() {
        assert_eq!(split_path("tmp/a1 (1)/path1"), ["tmp", "a1 (1)", "path1"]);
    }

    #[test]
    fn test_join_reproduces_normalized_form() {
        for (input, normalized) in [
            ("tmp/a1/path1", "tmp/a1/path1"),
            ("/a//b/", "/a/b"),
            ("./x/./y", "x/y"),
            ("/", "/"),
        ] {
            assert_eq!(join_components(&split_path(input)), normalized);
        }
    }
}
