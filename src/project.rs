//! Project Configuration Storage
//!
//! The project file (`project.toml`) is the standard configuration
//! storage: a `[properties]` table of string values, loaded whole and
//! saved atomically. `InterceptedProperties` layers registered value
//! providers on top of it so individual properties can live elsewhere.

pub mod intercepted;
pub mod store;

pub use intercepted::{InterceptedProperties, ResolvedProperty};
pub use store::ProjectStore;
