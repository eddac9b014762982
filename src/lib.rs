pub mod commands;
pub mod fs;
pub mod models;
pub mod parser;
pub mod report;
