pub mod client;
pub mod error;

pub use client::{HomeworkSource, PracticumClient};
pub use error::ApiError;
