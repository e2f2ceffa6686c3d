//! # loandesk
//!
//! Native front-end for the loan desk. It drives the same sign-in and
//! loan-application controllers as the browser client (`forms`), swapping in
//! a `reqwest` transport, a JSON-file token store and console output for the
//! browser's fetch, `localStorage` and toast stack.

pub mod config;
pub mod console;
pub mod error;
pub mod http;
pub mod store;

pub use error::CliError;
