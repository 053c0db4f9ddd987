/// Label reported when the service's reply matches no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Outcome of a successful classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClassificationResult {
    /// A label taken from the categorizer's set.
    Category(String),
    /// The reply was not exactly one of the labels.
    Uncategorized,
}

impl ClassificationResult {
    pub fn as_str(&self) -> &str {
        match self {
            ClassificationResult::Category(label) => label,
            ClassificationResult::Uncategorized => UNCATEGORIZED,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            ClassificationResult::Category(label) => Some(label),
            ClassificationResult::Uncategorized => None,
        }
    }

    pub fn is_uncategorized(&self) -> bool {
        matches!(self, ClassificationResult::Uncategorized)
    }
}

impl std::fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<str> for ClassificationResult {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ClassificationResult {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
