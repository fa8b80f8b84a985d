pub mod handlers;
pub mod models;
pub mod queries;
pub mod utils;
