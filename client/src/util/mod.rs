//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure time
//! arithmetic from page and component logic to improve reuse and testability.

pub mod clock_math;
pub mod gmt;
pub mod notice;
pub mod shortcuts;
pub mod theme_storage;
pub mod ticker;
