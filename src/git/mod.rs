pub mod context;
pub mod factory;
pub mod operations;
pub mod path;
pub mod types;

pub use context::PathContext;
pub use factory::StatusEntryBuilder;
pub use operations::{StatusQuery, read_statuses};
pub use types::*;
