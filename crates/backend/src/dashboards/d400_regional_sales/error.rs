use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
}
