pub mod config;
pub mod injections;
pub mod metrics;
pub mod pipeline;
