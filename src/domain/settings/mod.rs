//! Scoped settings domain

mod scope;
mod store;

pub use scope::ConfigScope;
pub use store::{is_truthy, ScopeConfig};
