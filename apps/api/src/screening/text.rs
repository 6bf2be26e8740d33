//! Text helpers shared by the analyzer: ASCII sanitizing and title casing.

/// Replaces every run of non-ASCII code points with a single space.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push(' ');
            in_run = true;
        }
    }

    out
}

/// Uppercases the first character of each whitespace-delimited token and
/// lowercases the rest. Interior whitespace is preserved as-is.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_token_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            out.push(c);
            at_token_start = true;
        } else if at_token_start {
            out.extend(c.to_uppercase());
            at_token_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_non_ascii_runs() {
        assert_eq!(sanitize("Python—SQL"), "Python SQL");
        assert_eq!(sanitize("caf\u{e9}\u{e9}\u{e9} bar"), "caf  bar");
        assert_eq!(sanitize("plain ascii"), "plain ascii");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_title_case_mixed_input() {
        assert_eq!(title_case("PYTHON"), "Python");
        assert_eq!(title_case("sql"), "Sql");
        assert_eq!(title_case("machine LEARNING"), "Machine Learning");
    }

    #[test]
    fn test_title_case_only_splits_on_whitespace() {
        assert_eq!(title_case("node.js"), "Node.js");
        assert_eq!(title_case("c++"), "C++");
    }
}
