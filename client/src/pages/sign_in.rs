//! Sign-in page: email + password against `POST /login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the token is written to `localStorage`, a notice is posted and
//! the router moves to `/`. Validation, the in-flight guard and notice text
//! all live in `forms::SignInForm`; this page only wires signals to it.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use forms::{Field, LoanApi, Session, SignInForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::field_input::FieldInput;
use crate::net::api::BrowserApi;
use crate::util::notify::{NoticeBoard, RouterNavigator};
use crate::util::storage::LocalStorageTokens;
use crate::util::submit::finish_sign_in;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in…" } else { "Sign in" }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let notices = expect_context::<NoticeBoard>();
    let navigate = use_navigate();
    let form = RwSignal::new(SignInForm::new());
    let busy = move || form.with(SignInForm::is_busy);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(credentials)) = form.try_update(|f| f.begin_submit(&notices)) else {
            return;
        };
        let navigator = RouterNavigator(navigate.clone());
        spawn_local(async move {
            let result = BrowserApi::default().login(&credentials).await;
            let session = Session::new(LocalStorageTokens);
            let _ = finish_sign_in(form, result, &session, &notices, &navigator);
        });
    };

    let inputs = Field::SIGN_IN
        .into_iter()
        .map(|field| {
            let value = Signal::derive(move || form.with(|f| f.value(field).to_owned()));
            let on_input = Callback::new(move |raw: String| {
                form.update(|f| {
                    f.set(field, raw);
                });
            });
            view! { <FieldInput field=field value=value on_input=on_input/> }
        })
        .collect_view();

    view! {
        <section class="form-page">
            <h1>"Sign in"</h1>
            <form class="form" on:submit=on_submit>
                {inputs}
                <button class="form__submit" type="submit" disabled=busy>
                    {move || submit_label(busy())}
                </button>
            </form>
        </section>
    }
}
