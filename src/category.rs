//! Test categories selected by test-name prefix

use crate::results::TestResult;
use std::fmt;

/// A named partition of test results.
///
/// Declaration order is the order rows appear in the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Every result.
    All,
    Acceptance,
    Integration,
    Unit,
    /// Lint results reported as tests.
    Eslint,
}

impl Category {
    /// All categories in table order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Acceptance,
        Category::Integration,
        Category::Unit,
        Category::Eslint,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Acceptance => "acceptance",
            Category::Integration => "integration",
            Category::Unit => "unit",
            Category::Eslint => "eslint",
        }
    }

    /// Returns true if `result` belongs to this category.
    ///
    /// Compares the first `name().len()` characters of the test name with
    /// the category name, ignoring case. `All` matches everything.
    pub fn belongs_to(&self, result: &TestResult) -> bool {
        if *self == Category::All {
            return true;
        }
        let label = self.name();
        result
            .name
            .chars()
            .take(label.chars().count())
            .flat_map(char::to_lowercase)
            .eq(label.chars())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(Category::All.belongs_to(&TestResult::passed("")));
        assert!(Category::All.belongs_to(&TestResult::passed("whatever")));
    }

    #[test]
    fn test_prefix_match_ignores_case() {
        assert!(Category::Unit.belongs_to(&TestResult::passed("Unit | Service | session")));
        assert!(Category::Unit.belongs_to(&TestResult::passed("UNIT thing")));
        assert!(Category::Acceptance.belongs_to(&TestResult::passed("acceptance: login")));
        assert!(Category::Eslint.belongs_to(&TestResult::passed("ESLint | app/router.js")));
    }

    #[test]
    fn test_prefix_only() {
        assert!(!Category::Unit.belongs_to(&TestResult::passed("my unit test")));
        assert!(!Category::Integration.belongs_to(&TestResult::passed("integ")));
        // Any continuation after the prefix is accepted.
        assert!(Category::Unit.belongs_to(&TestResult::passed("unittest.case")));
    }

    #[test]
    fn test_non_ascii_name_does_not_panic() {
        assert!(!Category::Unit.belongs_to(&TestResult::passed("ünit")));
        assert!(!Category::Eslint.belongs_to(&TestResult::passed("é")));
    }

    #[test]
    fn test_categories_are_exclusive() {
        let result = TestResult::passed("integration | component | x");
        let matching: Vec<_> = Category::ALL
            .iter()
            .filter(|c| **c != Category::All && c.belongs_to(&result))
            .collect();
        assert_eq!(matching, vec![&Category::Integration]);
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["all", "acceptance", "integration", "unit", "eslint"]);
    }
}
