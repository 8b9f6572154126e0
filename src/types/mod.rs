pub mod completion;
pub mod config;
pub mod habit;
pub mod report;
pub mod schedule;
pub mod stats;
