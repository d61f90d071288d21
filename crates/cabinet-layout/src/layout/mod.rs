//! Layout solving for both axes
//!
//! This module turns size sets into concrete layouts:
//! - Horizontal: modules fitted along a wall
//! - Vertical: rows stacked into a body height

mod horizontal;
mod types;
mod vertical;

pub use horizontal::*;
pub use types::*;
pub use vertical::*;
