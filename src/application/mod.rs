//! Application layer managing state and event wiring.
//!
//! This module coordinates between the domain layer and presentation layer,
//! owning the grid data, focus state, and the cell-editing lifecycle.

pub mod state;

pub use state::*;
