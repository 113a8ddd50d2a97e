//! Leptos glue for the submit cycle every auth page shares: validate and lock
//! the form, post, then navigate or show the failure and arm the reset timer.
//! The timer is cancelled when the page unmounts, and the timer callback only
//! uses `try_` accessors so it cannot touch a disposed signal.

use crate::features::auth::{
    flow::SubmitOutcome,
    forms::FormInput,
    status::{FormStatus, Settlement},
    timer::{BrowserScheduler, ResetTimer, ERROR_RESET_DELAY},
};
use leptos::prelude::*;
use tracing::{debug, error};

#[derive(Clone, Copy)]
pub struct AuthForm {
    status: RwSignal<FormStatus>,
    timer: StoredValue<ResetTimer<BrowserScheduler>, LocalStorage>,
}

/// Creates the form state for the current component and ties the reset
/// timer's lifetime to it.
pub fn use_auth_form() -> AuthForm {
    let status = RwSignal::new(FormStatus::default());
    let timer = StoredValue::new_local(ResetTimer::new(BrowserScheduler));

    on_cleanup(move || {
        timer.try_update_value(ResetTimer::cancel);
    });

    AuthForm { status, timer }
}

impl AuthForm {
    pub fn submitting(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.with(|status| status.submitting))
    }

    pub fn error_text(&self) -> Signal<String> {
        let status = self.status;
        Signal::derive(move || status.with(FormStatus::error_text))
    }

    pub fn notice(&self) -> Signal<Option<&'static str>> {
        let status = self.status;
        Signal::derive(move || status.with(|status| status.notice))
    }

    /// Returns the request to dispatch, or `None` when the form is locked or
    /// the input failed validation.
    pub fn prepare<I: FormInput>(&self, input: &I) -> Option<I::Request> {
        self.status
            .try_update(|status| status.prepare(input))
            .flatten()
    }

    pub fn settle(&self, outcome: SubmitOutcome) {
        let Some(settlement) = self.status.try_update(|status| status.settle(outcome)) else {
            debug!("form unmounted before its submission settled");
            return;
        };

        match settlement {
            Settlement::Navigate { url, notice } => navigate(&url, notice),
            Settlement::Stay => {}
            Settlement::ScheduleReset => {
                let status = self.status;
                self.timer.try_update_value(|timer| {
                    timer.arm(ERROR_RESET_DELAY, move || {
                        status.try_update(FormStatus::reset);
                    });
                });
            }
        }
    }
}

/// Full page load; the targets are rendered by the server.
fn navigate(url: &str, notice: Option<&str>) {
    let Some(window) = web_sys::window() else {
        error!("no window available for navigation");
        return;
    };

    if let Some(notice) = notice {
        if window.alert_with_message(notice).is_err() {
            debug!("notification dialog was suppressed");
        }
    }

    if let Err(err) = window.location().set_href(url) {
        error!(?err, "navigation failed");
    }
}
