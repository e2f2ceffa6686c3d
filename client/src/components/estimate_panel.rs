//! Live repayment preview shown beside the loan form.

#[cfg(test)]
#[path = "estimate_panel_test.rs"]
mod estimate_panel_test;

use forms::Estimate;
use forms::estimate::round_cents;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// `Rs. 12,345.68` style rendering.
#[must_use]
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", round_cents(value).abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && round_cents(value) != 0.0 { "-" } else { "" };
    format!("{sign}Rs. {grouped}.{cents}")
}

#[must_use]
pub fn summary_rows(estimate: &Estimate) -> [(&'static str, String); 3] {
    [
        ("Monthly payment", format_amount(estimate.monthly_payment)),
        ("Total repayment", format_amount(estimate.total_repayment)),
        ("Total interest", format_amount(estimate.total_interest)),
    ]
}

#[component]
pub fn EstimatePanel(#[prop(into)] estimate: Signal<Option<Estimate>>) -> impl IntoView {
    view! {
        <aside class="estimate">
            <h2 class="estimate__title">"Repayment estimate"</h2>
            {move || match estimate.get() {
                Some(estimate) => {
                    let rows = summary_rows(&estimate)
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                        .collect_view();
                    view! { <dl class="estimate__rows">{rows}</dl> }.into_any()
                }
                None => view! {
                    <p class="estimate__empty">"Enter amount, rate and term to see an estimate."</p>
                }
                .into_any(),
            }}
        </aside>
    }
}
