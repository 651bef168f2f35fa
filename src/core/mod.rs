//! Document model, file boundary, configuration and editor session

pub mod config;
pub mod document;
pub mod error;
pub mod file_io;
pub mod session;
