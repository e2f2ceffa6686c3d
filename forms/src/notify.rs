//! Notification and navigation ports.
//!
//! Controllers never show UI directly. They report through a [`Notifier`]
//! (a toast stack in the browser, stdout/stderr in the CLI) and move the
//! user on through a [`Navigator`] (the router in the browser, a log line in
//! the CLI).

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Path of the application home view.
pub const HOME_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// One user-visible notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Failure, text: text.into() }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.level == NoticeLevel::Failure
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Notifier that just remembers what it was told.
#[derive(Debug, Default)]
pub struct NoticeLog(Mutex<Vec<Notice>>);

impl NoticeLog {
    pub fn notices(&self) -> Vec<Notice> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).last().cloned()
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, notice: Notice) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(notice);
    }
}

/// Navigator that records every requested path.
#[derive(Debug, Default)]
pub struct NavigationLog(Mutex<Vec<String>>);

impl NavigationLog {
    pub fn paths(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for NavigationLog {
    fn navigate(&self, path: &str) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_owned());
    }
}
