pub mod config;
pub mod decimal;
pub mod duration;
pub mod error;
pub mod format;
pub mod models;
pub mod net_worth;
pub mod rates;
