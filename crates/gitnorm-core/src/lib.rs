pub mod config;
pub mod error;
pub mod logging;

pub mod table;
pub mod url_norm;
