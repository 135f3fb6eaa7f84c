//! Request handlers.

pub mod description;
pub mod health;

pub use description::*;
pub use health::*;
