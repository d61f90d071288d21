//! Bounded-sum solving shared by both axes
//!
//! This module holds the exact-arithmetic core of the layout:
//! - Unit reduction (GCD of a size set) so the table stays small
//! - The combination solver (best sum not exceeding a target, fewest pieces)

mod combination;
mod unit;

pub use combination::*;
pub use unit::*;
