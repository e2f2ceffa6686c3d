//! Fixed-rate amortization: monthly installment, totals and schedule.
//!
//! The installment is the standard annuity payment
//! `P·r / (1 − (1 + r)^−n)` with `r` the monthly rate; a zero rate
//! degenerates to straight division of the principal over the term.

#[cfg(test)]
#[path = "estimate_test.rs"]
mod estimate_test;

use serde::Serialize;

/// Repayment summary for one principal/rate/term combination.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub principal: f64,
    /// Annual interest rate in percent.
    pub annual_rate: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

/// One row of the repayment schedule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Installment {
    pub month: u32,
    pub principal: f64,
    pub interest: f64,
    pub payment: f64,
    pub balance: f64,
}

impl Estimate {
    /// Returns `None` for a zero term or any negative/non-finite input.
    #[must_use]
    pub fn compute(principal: f64, annual_rate: f64, term_months: u32) -> Option<Self> {
        if term_months == 0 || !principal.is_finite() || !annual_rate.is_finite() {
            return None;
        }
        if principal < 0.0 || annual_rate < 0.0 {
            return None;
        }

        let n = f64::from(term_months);
        let r = monthly_rate(annual_rate);
        let monthly_payment = if r == 0.0 {
            principal / n
        } else {
            principal * r / (1.0 - (1.0 + r).powf(-n))
        };
        if !monthly_payment.is_finite() {
            return None;
        }
        let total_repayment = monthly_payment * n;

        Some(Self {
            principal,
            annual_rate,
            term_months,
            monthly_payment,
            total_repayment,
            total_interest: total_repayment - principal,
        })
    }

    /// Month-by-month breakdown. Lazy, so very long terms cost nothing
    /// until iterated.
    pub fn schedule(&self) -> impl Iterator<Item = Installment> + use<> {
        let r = monthly_rate(self.annual_rate);
        let payment = self.monthly_payment;
        let term = self.term_months;
        let mut balance = self.principal;

        (1..=term).map(move |month| {
            let interest = balance * r;
            let principal = payment - interest;
            balance -= principal;
            if month == term || balance < 0.0 {
                balance = 0.0;
            }
            Installment { month, principal, interest, payment, balance }
        })
    }
}

fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 1200.0
}

/// Round to whole cents for display.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
