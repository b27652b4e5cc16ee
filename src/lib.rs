//! gridpad - Terminal Grid Editor Library
//!
//! A small terminal grid-editing widget: a fixed-size numeric table with
//! keyboard and mouse-driven cell focus, single-cell editing, and
//! persistence to a local key-value store.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
