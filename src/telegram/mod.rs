pub mod client;
pub mod error;
pub mod types;

pub use client::{Notifier, TelegramClient};
pub use error::TelegramError;
