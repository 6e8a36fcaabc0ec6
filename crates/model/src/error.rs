use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Segment index {index} is out of range (model has {len} segments)")]
    OutOfRange { index: usize, len: usize },
}
