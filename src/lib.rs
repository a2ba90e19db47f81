pub mod auth;
pub mod data;
pub mod progress;
pub mod service;
pub mod solver;
pub(crate) mod utils;
