//! Terminal adapters for the notification and navigation ports, plus the
//! plain-text estimate renderers used by `loandesk estimate`.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::fmt::Write as _;

use forms::estimate::round_cents;
use forms::{Estimate, Navigator, Notice, Notifier};

/// Success notices go to stdout, failures to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_failure() {
            eprintln!("{}", notice.text);
        } else {
            println!("{}", notice.text);
        }
    }
}

/// There is no view to move to in a terminal; redirects are only logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "redirect");
    }
}

#[must_use]
pub fn render_estimate(estimate: &Estimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "principal        {:>14.2}", round_cents(estimate.principal));
    let _ = writeln!(out, "annual rate      {:>13.2}%", estimate.annual_rate);
    let _ = writeln!(out, "term (months)    {:>14}", estimate.term_months);
    let _ = writeln!(out, "monthly payment  {:>14.2}", round_cents(estimate.monthly_payment));
    let _ = writeln!(out, "total repayment  {:>14.2}", round_cents(estimate.total_repayment));
    let _ = write!(out, "total interest   {:>14.2}", round_cents(estimate.total_interest));
    out
}

#[must_use]
pub fn render_schedule(estimate: &Estimate) -> String {
    let mut out = format!(
        "{:>5}  {:>12}  {:>12}  {:>12}  {:>14}",
        "month", "payment", "principal", "interest", "balance"
    );
    for row in estimate.schedule() {
        let _ = write!(
            out,
            "\n{:>5}  {:>12.2}  {:>12.2}  {:>12.2}  {:>14.2}",
            row.month,
            round_cents(row.payment),
            round_cents(row.principal),
            round_cents(row.interest),
            round_cents(row.balance),
        );
    }
    out
}
