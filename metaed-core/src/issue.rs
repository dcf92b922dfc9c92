//! Recoverable problems found while mapping or rendering a game.
//!
//! Nothing in the mapper or renderer fails outright. Each problem is handed
//! to a caller-supplied callback as an [`Issue`] and processing continues.

use serde::Serialize;

/// Kinds of reportable problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IssueKind {
    /// Key not part of the game schema.
    UnknownKey,
    /// Value should have been a number.
    MalformedNumber,
    /// Player count is not `N` or `min-max` with `min <= max`.
    MalformedRange,
    /// Value should have been a date or timestamp.
    MalformedDate,
    /// More than one value given for a single-valued field.
    MultipleValuesForScalar,
    /// Value was out of range and has been clamped.
    ValueClamped,
    /// A required field (the title) is missing.
    MissingRequiredField,
    /// Value cannot be written so that it reads back, e.g. a second list
    /// value starting with `#`. It is left out of the output.
    UnwritableValue,
}

impl IssueKind {
    /// Short label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnknownKey => "unknown key",
            Self::MalformedNumber => "malformed number",
            Self::MalformedRange => "malformed range",
            Self::MalformedDate => "malformed date",
            Self::MultipleValuesForScalar => "multiple values",
            Self::ValueClamped => "value clamped",
            Self::MissingRequiredField => "missing field",
            Self::UnwritableValue => "unwritable value",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    /// Offending key (parsing) or field name (rendering).
    pub field: String,
    /// Source line, when the issue came from parsed text.
    pub line: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn new(
        kind: IssueKind,
        field: impl Into<String>,
        line: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            field: field.into(),
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        write!(f, "{} ({}): {}", self.kind, self.field, self.message)
    }
}

/// Callback receiving issues found while parsing.
///
/// Called synchronously, in source order. It cannot stop the parse; callers
/// wanting an early exit track that themselves between entries.
pub type ParseErrorCb<'a> = &'a mut dyn FnMut(Issue);

/// Callback receiving issues found while rendering, in field order.
pub type WriteErrorCb<'a> = &'a mut dyn FnMut(Issue);
