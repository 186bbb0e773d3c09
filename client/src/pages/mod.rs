//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wires router state (params, navigation) into a view component
//! that takes plain props and callbacks, and delegates rendering details to
//! `components`.

pub mod category;
pub mod dashboard;
