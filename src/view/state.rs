//! Comparison view state machine.

use tracing::debug;

use super::Tab;
use crate::client::TransportError;
use crate::envelope::ResponseEnvelope;

/// What happens to the active tab when a new envelope arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPolicy {
    /// Go back to the contact tab
    #[default]
    ResetOnSubmit,
    /// Keep whatever tab was active
    Preserve,
}

impl TabPolicy {
    pub fn from_preserve_flag(preserve: bool) -> Self {
        if preserve {
            TabPolicy::Preserve
        } else {
            TabPolicy::ResetOnSubmit
        }
    }
}

/// Active tab plus submission lifecycle.
///
/// At most one submission is in flight: `begin_submission` refuses while
/// loading, and every outcome clears the loading flag.
#[derive(Debug, Clone, Default)]
pub struct ComparisonState {
    envelope: Option<ResponseEnvelope>,
    active_tab: Tab,
    loading: bool,
    error: Option<String>,
    policy: TabPolicy,
}

impl ComparisonState {
    pub fn new(policy: TabPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// State showing an envelope that is already available.
    pub fn with_envelope(envelope: ResponseEnvelope, policy: TabPolicy) -> Self {
        let mut state = Self::new(policy);
        state.install(envelope);
        state
    }

    pub fn envelope(&self) -> Option<&ResponseEnvelope> {
        self.envelope.as_ref()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last transport failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> TabPolicy {
        self.policy
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Start a submission. Returns false, changing nothing, while one is in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.loading {
            debug!("submission refused: another one is in flight");
            return false;
        }
        self.loading = true;
        self.envelope = None;
        self.error = None;
        true
    }

    /// Settle the in-flight submission.
    pub fn finish_submission(&mut self, outcome: Result<ResponseEnvelope, TransportError>) {
        self.loading = false;
        match outcome {
            Ok(envelope) => self.install(envelope),
            Err(err) => {
                self.envelope = None;
                self.error = Some(err.to_string());
            }
        }
    }

    /// Replace the envelope wholesale.
    pub fn install(&mut self, envelope: ResponseEnvelope) {
        self.envelope = Some(envelope);
        self.error = None;
        if self.policy == TabPolicy::ResetOnSubmit {
            self.active_tab = Tab::Contact;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submission_refused_while_loading() {
        let mut state = ComparisonState::default();
        assert!(state.begin_submission());
        assert!(!state.begin_submission());
        assert!(state.is_loading());
    }

    #[test]
    fn begin_clears_previous_results_and_error() {
        let mut state = ComparisonState::with_envelope(ResponseEnvelope::default(), TabPolicy::default());
        state.begin_submission();
        state.finish_submission(Err(TransportError::Interrupted));
        assert!(state.error().is_some());

        assert!(state.begin_submission());
        assert!(state.envelope().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn failure_clears_loading_and_leaves_no_results() {
        let mut state = ComparisonState::default();
        state.begin_submission();
        state.finish_submission(Err(TransportError::Rejected {
            status: 500,
            detail: "All model calls failed.".to_string(),
        }));
        assert!(!state.is_loading());
        assert!(state.envelope().is_none());
        assert_eq!(state.error(), Some("All model calls failed."));
    }

    #[test]
    fn reset_policy_returns_to_contact() {
        let mut state = ComparisonState::new(TabPolicy::ResetOnSubmit);
        state.select_tab(Tab::Skills);
        state.begin_submission();
        state.finish_submission(Ok(ResponseEnvelope::default()));
        assert_eq!(state.active_tab(), Tab::Contact);
        assert!(!state.is_loading());
    }

    #[test]
    fn preserve_policy_keeps_tab() {
        let mut state = ComparisonState::new(TabPolicy::Preserve);
        state.select_tab(Tab::Skills);
        state.begin_submission();
        state.finish_submission(Ok(ResponseEnvelope::default()));
        assert_eq!(state.active_tab(), Tab::Skills);
    }
}
