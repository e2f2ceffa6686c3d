//! Root component: router, shared context and the notice stack.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::notice_stack::NoticeStack;
use crate::pages::home::HomePage;
use crate::pages::loan_form::LoanFormPage;
use crate::pages::sign_in::SignInPage;
use crate::util::notify::NoticeBoard;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(NoticeBoard::new());

    view! {
        <Title text="Loan Desk"/>
        <Router>
            <NoticeStack/>
            <main class="page">
                <Routes fallback=|| view! { <p class="page__missing">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/login") view=SignInPage/>
                    <Route path=path!("/apply") view=LoanFormPage/>
                </Routes>
            </main>
        </Router>
    }
}
