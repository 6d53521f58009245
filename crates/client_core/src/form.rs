use shared::protocol::RecommendResponse;

use crate::Recommender;

/// Display phase derived from the form fields. Exactly one is active at any
/// instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Pending,
    Shown,
    Failed,
}

/// Local state behind the recommendation form: the typed query, the
/// in-flight flag, and the mutually exclusive result/error outcome.
///
/// Nothing here is persisted; the query is replaced on every keystroke and
/// consumed at submission time.
#[derive(Debug, Clone, Default)]
pub struct RecommendForm {
    pub query: String,
    pub result: Option<RecommendResponse>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RecommendForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Replaces the query wholesale, keystroke style.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Submission is allowed only with a non-empty query and no request
    /// already in flight. The guard lives at the UI level; there is no
    /// request-level abort behind it.
    pub fn can_submit(&self) -> bool {
        !self.query.is_empty() && !self.loading
    }

    pub fn phase(&self) -> FormPhase {
        if self.loading {
            FormPhase::Pending
        } else if self.result.is_some() {
            FormPhase::Shown
        } else if self.error.is_some() {
            FormPhase::Failed
        } else {
            FormPhase::Idle
        }
    }

    /// Runs one submission round trip. A blocked submission (empty query or
    /// already pending) returns without touching state or the network.
    ///
    /// No timeout is attached: a request that never settles leaves the form
    /// pending, with the submit control disabled.
    pub async fn submit(&mut self, recommender: &dyn Recommender) {
        if !self.can_submit() {
            return;
        }

        self.error = None;
        self.result = None;
        self.loading = true;

        let outcome = recommender.recommend(&self.query).await;

        // Dropped on every exit path, before the outcome is recorded.
        self.loading = false;
        match outcome {
            Ok(response) => self.result = Some(response),
            Err(err) => self.error = Some(err.message()),
        }
    }
}
