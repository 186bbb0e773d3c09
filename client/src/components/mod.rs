//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, chips and the curated hunting list from the
//! static tables in `data`. They hold only local UI signals (search text,
//! accordion state) and never write back to the tables.

pub mod artifact_hunting;
pub mod category_avatar;
pub mod category_card;
pub mod chip;
pub mod location_card;
pub mod star_rating;
