use regex::Regex;
use std::sync::LazyLock;

/// Matches a PR reference such as `(#1234)`, capturing the digits.
static PR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#(\d+)\)").expect("PR pattern is a valid regex"));

/// Extract the PR number from a commit log line.
///
/// GitHub squash merges end the subject with the PR reference:
///   `here is the message (#1234)`
/// Only the first reference on the line is returned.
pub fn parse_pr_number(log_line: &str) -> Option<&str> {
    PR_PATTERN
        .captures(log_line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract PR numbers from commit log lines, in order.
/// Lines without a reference contribute nothing.
pub fn parse_pr_numbers<I, S>(git_log_lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    git_log_lines
        .into_iter()
        .filter_map(|line| parse_pr_number(line.as_ref()).map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pr_number() {
        assert_eq!(parse_pr_number("fix thing (#1234)"), Some("1234"));
    }

    #[test]
    fn test_parse_pr_number_absent() {
        assert_eq!(parse_pr_number("no ref here"), None);
        assert_eq!(parse_pr_number("refs #1234 without parens"), None);
        assert_eq!(parse_pr_number("empty (#)"), None);
    }

    #[test]
    fn test_parse_pr_number_first_match_only() {
        assert_eq!(parse_pr_number("revert \"x (#10)\" (#11)"), Some("10"));
    }

    #[test]
    fn test_parse_pr_number_mid_line() {
        assert_eq!(parse_pr_number("abc1234 Bump deps (#77) [skip ci]"), Some("77"));
    }

    #[test]
    fn test_parse_pr_numbers() {
        assert_eq!(parse_pr_numbers(["a (#1)", "b", "c (#23)"]), vec!["1", "23"]);
    }

    #[test]
    fn test_parse_pr_numbers_owned_lines() {
        let lines = vec!["x".to_string(), "y (#5)".to_string()];
        assert_eq!(parse_pr_numbers(&lines), vec!["5"]);
    }

    #[test]
    fn test_parse_pr_numbers_empty() {
        assert!(parse_pr_numbers(Vec::<String>::new()).is_empty());
    }
}
