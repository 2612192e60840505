use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid text span {start}..{end} for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
    #[error("gender label must not be empty")]
    EmptyGenderLabel,
}

pub type Result<T> = std::result::Result<T, ModelError>;
