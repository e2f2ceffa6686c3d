//! Reactive adapters for the notification and navigation ports.
//!
//! [`NoticeBoard`] is provided as context by the root component; form pages
//! hand it to the controllers as their `Notifier`, and the notice stack
//! renders whatever it holds.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use forms::{Navigator, Notice, Notifier};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Oldest notices are dropped past this many.
pub const MAX_NOTICES: usize = 5;

/// A notice plus the id used to dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostedNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Bounded, dismissible notice list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    items: Vec<PostedNotice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(PostedNotice { id, notice });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    /// Returns `false` if `id` was not present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[PostedNotice] {
        &self.items
    }
}

/// Context handle over the shared [`NoticeQueue`].
#[derive(Clone, Copy, Debug)]
pub struct NoticeBoard {
    queue: RwSignal<NoticeQueue>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(NoticeQueue::default()) }
    }

    /// Reactive snapshot of the visible notices.
    pub fn items(&self) -> Vec<PostedNotice> {
        self.queue.with(|q| q.items().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        #[cfg(feature = "csr")]
        {
            if notice.is_failure() {
                log::warn!("{}", notice.text);
            } else {
                log::info!("{}", notice.text);
            }
        }
        self.queue.update(|q| {
            q.push(notice);
        });
    }
}

/// `Navigator` over the function returned by `use_navigate`.
pub struct RouterNavigator<F>(pub F);

impl<F: Fn(&str, NavigateOptions)> Navigator for RouterNavigator<F> {
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
