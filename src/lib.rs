pub mod accounts;
pub mod api;
pub mod cli;
pub mod data_paths;
pub mod display;
pub mod errors;
pub mod logging;
pub mod orders;
pub mod portfolio;
pub mod session;
pub mod types;
