use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Rank,
    Score,
    Author,
    Comments,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Rank => "rank",
            Field::Score => "score",
            Field::Author => "author",
            Field::Comments => "comments",
        };
        f.write_str(name)
    }
}

/// Recoverable problems found while reading a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFault {
    /// The sub-element was absent.
    MissingField,
    /// The sub-element was present but held no usable digits.
    MalformedNumeric,
    /// The text exceeded the length limit and was shortened.
    Truncated,
}

/// A field fallback, reported alongside the extracted data instead of mixed into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub page: usize,
    pub position: usize,
    pub field: Field,
    pub fault: FieldFault,
    pub fallback: String,
}

impl Notice {
    pub fn new(
        page: usize,
        position: usize,
        field: Field,
        fault: FieldFault,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            page,
            position,
            field,
            fault,
            fallback: fallback.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = format!("post {} on page {}", self.position + 1, self.page);
        match self.fault {
            FieldFault::MissingField => write!(
                f,
                "{entry} has no {}. Value '{}' has been given.",
                self.field, self.fallback
            ),
            FieldFault::MalformedNumeric => write!(
                f,
                "{entry} had an invalid {}. Value '{}' has been given.",
                self.field, self.fallback
            ),
            FieldFault::Truncated => write!(
                f,
                "The {} of {entry} is too long and has been shortened.",
                self.field
            ),
        }
    }
}
