#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskLiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Process error: {0}")]
    Process(String),
}

pub type Result<T> = std::result::Result<T, TaskLiteError>;
