//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep color math and date formatting out of page and
//! component code so it stays testable on native targets.

pub mod color;
pub mod date;
