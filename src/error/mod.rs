// src/error/mod.rs
pub mod operation_result;
pub mod types;

pub use operation_result::{ErrorKind, OperationResult};
pub use types::{AppError, AppResult};
