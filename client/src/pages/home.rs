//! Landing page: session status plus links to the two forms.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use forms::Session;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::storage::LocalStorageTokens;

fn session_summary(signed_in: bool) -> &'static str {
    if signed_in {
        "You are signed in. You can submit a loan application."
    } else {
        "You are not signed in. Sign in before applying for a loan."
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let signed_in = Session::new(LocalStorageTokens).is_signed_in();

    view! {
        <section class="home">
            <h1>"Loan Desk"</h1>
            <p class="home__status">{session_summary(signed_in)}</p>
            <nav class="home__links">
                <A href="/login">"Sign in"</A>
                <A href="/apply">"Apply for a loan"</A>
            </nav>
        </section>
    }
}
