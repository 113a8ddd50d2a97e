//! Test doubles for the submission flow: a recording transport, an in-memory
//! CSRF store and a scheduler driven by a virtual clock.

use crate::{
    app_lib::AppError,
    features::auth::{csrf::CsrfStore, flow::FormTransport, timer::Scheduler, types::AuthResponse},
};
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
    time::Duration,
};

#[derive(Default)]
pub struct RecordingTransport {
    replies: RefCell<VecDeque<Result<AuthResponse, AppError>>>,
    calls: RefCell<Vec<(String, String)>>,
}

impl RecordingTransport {
    pub fn replying(replies: impl IntoIterator<Item = Result<AuthResponse, AppError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    /// `(path, body)` of every request, in order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.borrow().clone()
    }
}

impl FormTransport for RecordingTransport {
    async fn post_form(&self, path: &'static str, body: String) -> Result<AuthResponse, AppError> {
        self.calls.borrow_mut().push((path.to_string(), body));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted reply".to_string())))
    }
}

#[derive(Default)]
pub struct MemoryCsrf(RefCell<String>);

impl MemoryCsrf {
    pub fn new(token: &str) -> Self {
        Self(RefCell::new(token.to_string()))
    }
}

impl CsrfStore for MemoryCsrf {
    fn current(&self) -> String {
        self.0.borrow().clone()
    }

    fn replace(&self, token: String) {
        *self.0.borrow_mut() = token;
    }
}

struct Entry {
    due: Duration,
    callback: Option<Box<dyn FnOnce()>>,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler whose clock only moves when `advance` is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    entries: Rc<RefCell<Vec<Entry>>>,
}

pub struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl ManualScheduler {
    /// Moves the clock forward and runs every callback that came due.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        let now = self.now.get();

        let due: Vec<Box<dyn FnOnce()>> = self
            .entries
            .borrow_mut()
            .iter_mut()
            .filter(|entry| entry.due <= now && !entry.cancelled.get())
            .filter_map(|entry| entry.callback.take())
            .collect();
        self.entries
            .borrow_mut()
            .retain(|entry| entry.callback.is_some() && !entry.cancelled.get());

        for callback in due {
            callback();
        }
    }

    /// Callbacks that are neither cancelled nor fired.
    pub fn pending(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.callback.is_some() && !entry.cancelled.get())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce() + 'static>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.entries.borrow_mut().push(Entry {
            due: self.now.get() + delay,
            callback: Some(callback),
            cancelled: Rc::clone(&cancelled),
        });
        ManualHandle(cancelled)
    }
}
