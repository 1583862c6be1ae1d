//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the clock chrome and read/write shared state from
//! Leptos context providers.

pub mod clock_face;
pub mod control_bar;
pub mod gmt_selector;
