//! Loan-application page: eleven fields against `POST /apply-loan`.
//!
//! The access token is read from `localStorage` when the form is submitted,
//! not when the page renders, so signing in from another tab counts.

#[cfg(test)]
#[path = "loan_form_test.rs"]
mod loan_form_test;

use forms::{Field, LoanApi, LoanForm, Session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::estimate_panel::EstimatePanel;
use crate::components::field_input::FieldInput;
use crate::net::api::BrowserApi;
use crate::util::notify::{NoticeBoard, RouterNavigator};
use crate::util::storage::LocalStorageTokens;
use crate::util::submit::finish_loan_application;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Submitting…" } else { "Submit application" }
}

#[component]
pub fn LoanFormPage() -> impl IntoView {
    let notices = expect_context::<NoticeBoard>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoanForm::new());
    let busy = move || form.with(LoanForm::is_busy);
    let estimate = Signal::derive(move || form.with(LoanForm::estimate));
    let signed_in = Session::new(LocalStorageTokens).is_signed_in();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session = Session::new(LocalStorageTokens);
        let Some(Ok((token, application))) = form.try_update(|f| f.begin_submit(&session, &notices)) else {
            return;
        };
        let navigator = RouterNavigator(navigate.clone());
        spawn_local(async move {
            let result = BrowserApi::default().apply_loan(&token, &application).await;
            let _ = finish_loan_application(form, result, &notices, &navigator);
        });
    };

    let inputs = Field::LOAN
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
        <section class="form-page form-page--loan">
            <h1>"Loan application"</h1>
            <Show when=move || !signed_in>
                <p class="form-page__hint">
                    "You are not signed in. " <A href="/login">"Sign in"</A> " before submitting."
                </p>
            </Show>
            <form class="form" on:submit=on_submit>
                {inputs}
                <button class="form__submit" type="submit" disabled=busy>
                    {move || submit_label(busy())}
                </button>
            </form>
            <EstimatePanel estimate=estimate/>
        </section>
    }
}
