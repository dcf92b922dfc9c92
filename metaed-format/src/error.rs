use metaed_core::IssueKind;

/// Errors from parsing a single field value.
///
/// These never escape the mapper; they are turned into issues.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a player count (expected N or MIN-MAX with MIN <= MAX)")]
    BadRange(String),

    #[error("'{0}' is not a date (expected YYYY-MM-DD, YYYY-MM or YYYY)")]
    BadDate(String),

    #[error("'{0}' is not a timestamp (expected YYYY-MM-DDTHH:MM:SS)")]
    BadTimestamp(String),
}

impl ValueError {
    /// The issue kind this error is reported as.
    pub fn kind(&self) -> IssueKind {
        match self {
            Self::NotANumber(_) => IssueKind::MalformedNumber,
            Self::BadRange(_) => IssueKind::MalformedRange,
            Self::BadDate(_) | Self::BadTimestamp(_) => IssueKind::MalformedDate,
        }
    }
}
