//! Error types for cmajor

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CMajorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Note {note} shifted by {shift} semitones is out of range")]
    NoteOutOfRange { note: i32, shift: u8 },
}

pub type Result<T> = std::result::Result<T, CMajorError>;
