//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`clock`, `theme`) so components depend on small
//! focused models provided through Leptos context.

pub mod clock;
pub mod theme;
