//! Dismissible stack of success/failure notices.

#[cfg(test)]
#[path = "notice_stack_test.rs"]
mod notice_stack_test;

use forms::NoticeLevel;
use leptos::prelude::*;

use crate::util::notify::{NoticeBoard, PostedNotice};

fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Failure => "notice notice--failure",
    }
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let board = expect_context::<NoticeBoard>();

    view! {
        <ul class="notice-stack" role="status" aria-live="polite">
            <For
                each=move || board.items()
                key=|item| item.id
                children=move |item: PostedNotice| {
                    let id = item.id;
                    view! {
                        <li class=notice_class(item.notice.level)>
                            <span class="notice__text">{item.notice.text}</span>
                            <button
                                class="notice__dismiss"
                                type="button"
                                aria-label="Dismiss"
                                on:click=move |_| board.dismiss(id)
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
