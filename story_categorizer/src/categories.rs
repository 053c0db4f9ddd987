use crate::classification::UNCATEGORIZED;

/// The ten themes stories are sorted into, in prompt order.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Grief & Loss",
    "Chronic Illness & Disability",
    "Work Stress & Burnout",
    "Academic Pressure",
    "Discrimination & Exclusion",
    "Loneliness & Social Anxiety",
    "Trauma & PTSD",
    "Bullying & Harassment",
    "Self-Esteem & Body Image",
    "Addiction & Recovery",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CategorySetError {
    #[error("a category set needs at least one label")]
    Empty,
    #[error("category labels must not be empty")]
    EmptyLabel,
    #[error("category label {0:?} has leading or trailing whitespace")]
    UntrimmedLabel(String),
    #[error("category label {0:?} is listed twice")]
    DuplicateLabel(String),
    #[error("\"Uncategorized\" is reserved for unmatched replies")]
    ReservedLabel,
}

/// Ordered, non-empty list of unique labels.
///
/// Membership is the only thing classification asks of it. Order is kept
/// because the labels are shown to the model as a comma-joined list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    pub fn new<I, S>(labels: I) -> Result<Self, CategorySetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checked: Vec<String> = Vec::new();
        for label in labels {
            let label = label.into();
            if label.trim().is_empty() {
                return Err(CategorySetError::EmptyLabel);
            }
            // Replies are trimmed before matching, so such a label could never match.
            if label.trim() != label {
                return Err(CategorySetError::UntrimmedLabel(label));
            }
            if label == UNCATEGORIZED {
                return Err(CategorySetError::ReservedLabel);
            }
            if checked.contains(&label) {
                return Err(CategorySetError::DuplicateLabel(label));
            }
            checked.push(label);
        }
        if checked.is_empty() {
            return Err(CategorySetError::Empty);
        }
        Ok(Self { labels: checked })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// The stored label equal to `label`. Case-sensitive, no normalization.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|candidate| candidate.as_str() == label)
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn joined(&self) -> String {
        self.labels.join(", ")
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for CategorySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined())
    }
}
