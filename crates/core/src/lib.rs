//! Domain types shared by the persistence and HTTP layers.

pub mod enums;
pub mod error;
pub mod types;
pub mod upload;
