//! Domain primitives shared by the storage and HTTP layers.

pub mod character;
pub mod error;
pub mod pagination;
pub mod types;
