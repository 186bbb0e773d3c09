//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is split by view (`dashboard`, `category`, `hunting`) so each
//! component depends on a small focused model. Pages hold these in
//! `RwSignal`s; the pure helpers here do the filtering and bookkeeping.

pub mod category;
pub mod dashboard;
pub mod hunting;
