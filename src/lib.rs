pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod llm;
pub mod resolver;
