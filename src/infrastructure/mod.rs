//! Infrastructure layer providing external service integrations.
//!
//! This module contains the key-value store abstraction and the grid
//! persistence built on top of it.

pub mod persistence;

pub use persistence::*;
