use metaed_core::{Issue, IssueKind};

/// Caller-owned collection of issues for one document.
///
/// Optionally carries an abort limit: once that many issues have been
/// recorded, [`IssueLog::should_abort`] turns true and document-level loops
/// stop before the next entry. The mappers themselves never stop early.
#[derive(Debug, Default, Clone)]
pub struct IssueLog {
    issues: Vec<Issue>,
    abort_after: Option<usize>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop document processing once `limit` issues have been recorded.
    pub fn with_abort_after(limit: usize) -> Self {
        Self {
            issues: Vec::new(),
            abort_after: Some(limit),
        }
    }

    pub fn record(&mut self, issue: Issue) {
        log::debug!("{}", issue);
        self.issues.push(issue);
    }

    pub fn should_abort(&self) -> bool {
        self.abort_after
            .is_some_and(|limit| self.issues.len() >= limit)
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Number of recorded issues of one kind.
    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    pub fn clear(&mut self) {
        self.issues.clear();
    }
}

impl Extend<Issue> for IssueLog {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.record(issue);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(kind: IssueKind) -> Issue {
        Issue::new(kind, "k", Some(1), "m")
    }

    #[test]
    fn records_and_counts() {
        let mut log = IssueLog::new();
        log.record(issue(IssueKind::UnknownKey));
        log.record(issue(IssueKind::UnknownKey));
        log.record(issue(IssueKind::ValueClamped));
        assert_eq!(log.len(), 3);
        assert_eq!(log.count(IssueKind::UnknownKey), 2);
        assert_eq!(log.count(IssueKind::MalformedDate), 0);
        assert!(!log.should_abort());
    }

    #[test]
    fn abort_limit() {
        let mut log = IssueLog::with_abort_after(2);
        log.record(issue(IssueKind::UnknownKey));
        assert!(!log.should_abort());
        log.record(issue(IssueKind::UnknownKey));
        assert!(log.should_abort());
        log.clear();
        assert!(!log.should_abort());
    }
}
