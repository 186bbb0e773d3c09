//! Static data tables rendered by the dashboard and category views.
//!
//! DESIGN
//! ======
//! Every table is a `'static` slice compiled into the binary. Views only
//! read from here; nothing in the client mutates these records.

pub mod categories;
pub mod hunting_locations;

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;
