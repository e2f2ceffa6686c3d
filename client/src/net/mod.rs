//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the shared `LoanApi` port over `fetch`; response decoding
//! lives in `forms::wire` so the browser and CLI interpret bodies alike.

pub mod api;
