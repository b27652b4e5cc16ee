//! Domain layer: the grid data model and the pure focus-transition functions.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
