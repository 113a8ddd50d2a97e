//! Per-form interaction state: the submitting flag, the transient error and an
//! optional inline notice. The UI keeps one `FormStatus` per mounted form and
//! feeds it every step of the submit cycle.

use crate::features::auth::{
    flow::SubmitOutcome,
    forms::FormInput,
    types::SuccessAction,
};

/// Placeholder rendered in the error slot so the layout does not jump.
pub const EMPTY_SLOT: &str = "\u{a0}";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<&'static str>,
}

/// What the page must do once a submission settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settlement {
    /// Leave the page. The form stays disabled so it cannot be sent twice.
    Navigate {
        url: String,
        notice: Option<&'static str>,
    },
    /// Nothing further; the form is usable again.
    Stay,
    /// Clear the error and re-enable the form after the reset delay.
    ScheduleReset,
}

impl FormStatus {
    /// Validates `input` and, when it passes, marks the form as submitting.
    ///
    /// Returns `None` while a submission is in flight (double-submit guard) or
    /// when validation fails; in the latter case the message is shown and the
    /// form stays enabled.
    pub fn prepare<I: FormInput>(&mut self, input: &I) -> Option<I::Request> {
        if self.submitting {
            return None;
        }

        match input.validate() {
            Ok(request) => {
                self.submitting = true;
                self.error = None;
                self.notice = None;
                Some(request)
            }
            Err(message) => {
                self.error = Some(message.to_string());
                None
            }
        }
    }

    pub fn settle(&mut self, outcome: SubmitOutcome) -> Settlement {
        match outcome {
            SubmitOutcome::Succeeded(SuccessAction::Redirect(url)) => {
                Settlement::Navigate { url, notice: None }
            }
            SubmitOutcome::Succeeded(SuccessAction::NotifyThenRedirect { notice, target }) => {
                Settlement::Navigate {
                    url: target.to_string(),
                    notice: Some(notice),
                }
            }
            SubmitOutcome::Succeeded(SuccessAction::Notify(notice)) => {
                self.submitting = false;
                self.notice = Some(notice);
                Settlement::Stay
            }
            SubmitOutcome::Rejected(message) | SubmitOutcome::Failed(message) => {
                self.error = Some(message);
                Settlement::ScheduleReset
            }
        }
    }

    /// Runs when the reset delay elapsed.
    pub fn reset(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    pub fn error_text(&self) -> String {
        self.error
            .clone()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| EMPTY_SLOT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::{
        csrf::CsrfStore,
        flow::submit,
        forms::{LoginInput, RegisterInput, ResetPasswordInput},
        testing::{ManualScheduler, MemoryCsrf, RecordingTransport},
        timer::{ResetTimer, ERROR_RESET_DELAY},
        types::{AuthResponse, FormRequest, LoginRequest},
        validation::PASSWORDS_DIFFER,
    };
    use std::{cell::RefCell, rc::Rc, time::Duration};

    const GOOD_PASSWORD: &str = "Str0ng!Passw0rd";

    fn rejected() -> AuthResponse {
        serde_json::from_value(serde_json::json!({
            "result": 0,
            "error": "Invalid credentials",
            "csrf": "abc"
        }))
        .expect("valid envelope")
    }

    fn login_input() -> LoginInput {
        LoginInput {
            email: "user@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
        }
    }

    /// Mirrors what a page does: prepare, submit, settle, arm the reset.
    async fn run_cycle<I: FormInput>(
        status: &Rc<RefCell<FormStatus>>,
        timer: &mut ResetTimer<ManualScheduler>,
        transport: &RecordingTransport,
        csrf: &MemoryCsrf,
        input: &I,
    ) -> Option<Settlement> {
        let request = status.borrow_mut().prepare(input)?;
        let outcome = submit(transport, csrf, &request).await;
        let settlement = status.borrow_mut().settle(outcome);
        if settlement == Settlement::ScheduleReset {
            let status = Rc::clone(status);
            timer.arm(ERROR_RESET_DELAY, move || status.borrow_mut().reset());
        }
        Some(settlement)
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_network() {
        let transport = RecordingTransport::default();
        let csrf = MemoryCsrf::new("t");
        let status = Rc::new(RefCell::new(FormStatus::default()));
        let mut timer = ResetTimer::new(ManualScheduler::default());

        let register = RegisterInput {
            name: "Anna".to_string(),
            email: "anna@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
            repeat_password: "Str0ng!Passw0rX".to_string(),
        };
        let reset = ResetPasswordInput {
            email: "anna@example.com".to_string(),
            password: GOOD_PASSWORD.to_string(),
            repeat_password: String::new(),
            reset_token: None,
        };

        assert_eq!(run_cycle(&status, &mut timer, &transport, &csrf, &register).await, None);
        assert_eq!(run_cycle(&status, &mut timer, &transport, &csrf, &reset).await, None);

        assert!(transport.calls().is_empty());
        let status = status.borrow();
        assert!(!status.submitting);
        assert_eq!(status.error.as_deref(), Some(PASSWORDS_DIFFER));
    }

    #[tokio::test]
    async fn successful_login_navigates_exactly_once() {
        let transport = RecordingTransport::replying([Ok(serde_json::from_value(
            serde_json::json!({"result": 1, "url": "/main"}),
        )
        .expect("valid envelope"))]);
        let csrf = MemoryCsrf::new("t");
        let status = Rc::new(RefCell::new(FormStatus::default()));
        let mut timer = ResetTimer::new(ManualScheduler::default());

        let first = run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;
        let second = run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;

        assert_eq!(
            first,
            Some(Settlement::Navigate {
                url: "/main".to_string(),
                notice: None
            })
        );
        assert_eq!(second, None);
        assert_eq!(transport.calls().len(), 1);
        assert!(status.borrow().submitting);
    }

    #[tokio::test]
    async fn failure_clears_no_earlier_than_reset_delay() {
        let transport = RecordingTransport::replying([Ok(rejected())]);
        let csrf = MemoryCsrf::new("initial");
        let scheduler = ManualScheduler::default();
        let status = Rc::new(RefCell::new(FormStatus::default()));
        let mut timer = ResetTimer::new(scheduler.clone());

        let settlement = run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;

        assert_eq!(settlement, Some(Settlement::ScheduleReset));
        assert_eq!(status.borrow().error_text(), "Invalid credentials");
        assert_eq!(csrf.current(), "abc");

        scheduler.advance(ERROR_RESET_DELAY - Duration::from_millis(1));
        assert!(status.borrow().submitting);
        assert_eq!(status.borrow().error_text(), "Invalid credentials");

        // Still locked: a resubmit inside the window is ignored.
        assert_eq!(
            run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await,
            None
        );

        scheduler.advance(Duration::from_millis(1));
        assert!(!status.borrow().submitting);
        assert_eq!(status.borrow().error_text(), EMPTY_SLOT);
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn next_submission_carries_renewed_token() {
        let transport = RecordingTransport::replying([
            Ok(rejected()),
            Ok(serde_json::from_value(serde_json::json!({"result": 1, "url": "/main"}))
                .expect("valid envelope")),
        ]);
        let csrf = MemoryCsrf::new("initial");
        let scheduler = ManualScheduler::default();
        let status = Rc::new(RefCell::new(FormStatus::default()));
        let mut timer = ResetTimer::new(scheduler.clone());

        run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;
        scheduler.advance(ERROR_RESET_DELAY);
        run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;

        let calls = transport.calls();
        assert_eq!(calls[0].0, LoginRequest::PATH);
        assert!(calls[1].1.ends_with("csrf_token=abc"));
    }

    #[tokio::test]
    async fn teardown_with_pending_reset_leaves_state_alone() {
        let transport = RecordingTransport::replying([Ok(rejected())]);
        let csrf = MemoryCsrf::new("initial");
        let scheduler = ManualScheduler::default();
        let status = Rc::new(RefCell::new(FormStatus::default()));

        {
            let mut timer = ResetTimer::new(scheduler.clone());
            run_cycle(&status, &mut timer, &transport, &csrf, &login_input()).await;
            assert_eq!(scheduler.pending(), 1);
        }

        let before = status.borrow().clone();
        scheduler.advance(ERROR_RESET_DELAY * 2);
        assert_eq!(*status.borrow(), before);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn notify_success_reenables_form() {
        let mut status = FormStatus {
            submitting: true,
            ..FormStatus::default()
        };

        let settlement = status.settle(SubmitOutcome::Succeeded(SuccessAction::Notify("sent")));

        assert_eq!(settlement, Settlement::Stay);
        assert!(!status.submitting);
        assert_eq!(status.notice, Some("sent"));
    }

    #[test]
    fn prepare_clears_previous_error_and_notice() {
        let mut status = FormStatus {
            submitting: false,
            error: Some("old".to_string()),
            notice: Some("sent"),
        };

        assert!(status.prepare(&login_input()).is_some());
        assert_eq!(status.error, None);
        assert_eq!(status.notice, None);
        assert!(status.submitting);
    }
}
