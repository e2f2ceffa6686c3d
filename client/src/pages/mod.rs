//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state in a signal and drives the shared
//! controller from `forms`; widgets come from `components`.

pub mod home;
pub mod loan_form;
pub mod sign_in;
