//! Submit button state for the contact form

use serde::Serialize;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::state::{Observable, Subscription};

/// Lifecycle of one submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Success,
    Failure,
}

impl SubmitState {
    pub fn label(self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Inquiry",
            SubmitState::Sending => "Sending Inquiry...",
            SubmitState::Success => "Inquiry Successfully sent",
            SubmitState::Failure => "Sending Inquiry Failed..Try Again",
        }
    }

    /// The button is inert while a request is in flight
    pub fn is_disabled(self) -> bool {
        self == SubmitState::Sending
    }
}

/// Observable submit state; success falls back to idle after a delay
#[derive(Debug, Clone)]
pub struct SubmitButton {
    state: Observable<SubmitState>,
    revert_after: Duration,
}

impl SubmitButton {
    pub fn new(revert_after: Duration) -> Self {
        Self {
            state: Observable::new(SubmitState::Idle),
            revert_after,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    pub fn label(&self) -> &'static str {
        self.state().label()
    }

    pub fn subscribe(&self) -> Subscription<SubmitState> {
        self.state.subscribe()
    }

    pub fn begin_sending(&self) {
        self.state.set(SubmitState::Sending);
    }

    pub fn fail(&self) {
        self.state.set(SubmitState::Failure);
    }

    /// Show success, then revert to idle unless something else happened meanwhile
    pub fn succeed(&self) -> JoinHandle<()> {
        self.state.set(SubmitState::Success);
        let state = self.state.clone();
        let delay = self.revert_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.compare_and_set(&SubmitState::Success, SubmitState::Idle);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SubmitState::Idle.label(), "Send Inquiry");
        assert_eq!(SubmitState::Sending.label(), "Sending Inquiry...");
        assert_eq!(SubmitState::Success.label(), "Inquiry Successfully sent");
        assert_eq!(
            SubmitState::Failure.label(),
            "Sending Inquiry Failed..Try Again"
        );
        assert!(SubmitState::Sending.is_disabled());
        assert!(!SubmitState::Failure.is_disabled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_reverts_after_delay() {
        let button = SubmitButton::new(Duration::from_secs(5));
        button.begin_sending();
        assert_eq!(button.state(), SubmitState::Sending);

        let revert = button.succeed();
        assert_eq!(button.label(), "Inquiry Successfully sent");

        tokio::time::advance(Duration::from_secs(4)).await;
        tokio::task::yield_now().await;
        assert_eq!(button.state(), SubmitState::Success);

        revert.await.unwrap();
        assert_eq!(button.state(), SubmitState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_revert_skips_newer_state() {
        let button = SubmitButton::new(Duration::from_secs(5));
        let revert = button.succeed();
        button.begin_sending();
        revert.await.unwrap();
        assert_eq!(button.state(), SubmitState::Sending);
    }

    #[tokio::test]
    async fn test_failure_stays() {
        let button = SubmitButton::new(Duration::from_secs(5));
        let mut sub = button.subscribe();
        button.begin_sending();
        assert_eq!(sub.changed().await, Some(SubmitState::Sending));
        button.fail();
        assert_eq!(sub.changed().await, Some(SubmitState::Failure));
        assert_eq!(button.label(), "Sending Inquiry Failed..Try Again");
    }
}
