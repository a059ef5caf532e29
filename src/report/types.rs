/// Metadata derived from a single PR payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrSummary {
    /// PR number, when the payload carries one
    pub number: Option<u64>,
    /// PR title (empty when absent)
    pub title: String,
    /// Label names in payload order
    pub labels: Vec<String>,
    /// Milestone title (empty when absent)
    pub milestone: String,
    /// Changelog types taken from `changelog/*` labels
    pub changelog_types: Vec<String>,
    /// Whether the PR comes from a fork
    pub from_contributor: bool,
}

impl PrSummary {
    /// Contributor origin as shown in reports.
    pub fn origin(&self) -> &'static str {
        if self.from_contributor {
            "external contributor (fork)"
        } else {
            "internal"
        }
    }

    /// `#<number>` or `#?` when the payload had no number.
    pub fn display_number(&self) -> String {
        match self.number {
            Some(n) => format!("#{}", n),
            None => "#?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(number: Option<u64>, from_contributor: bool) -> PrSummary {
        PrSummary {
            number,
            title: String::new(),
            labels: vec![],
            milestone: String::new(),
            changelog_types: vec![],
            from_contributor,
        }
    }

    #[test]
    fn test_origin() {
        assert_eq!(summary(None, true).origin(), "external contributor (fork)");
        assert_eq!(summary(None, false).origin(), "internal");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(summary(Some(42), false).display_number(), "#42");
        assert_eq!(summary(None, false).display_number(), "#?");
    }
}
