pub mod client;
pub mod data;

pub use client::{Client, Config, ConfigBuilder, Website};
pub use data::{ApiResponse, CAPCHA_NOT_READY};
