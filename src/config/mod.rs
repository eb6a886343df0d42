//! Box options and their JSON representation.

mod core;

pub use self::core::BoxOptions;
