use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be at least 1x1")]
    InvalidConfig,
}

pub type Result<T> = core::result::Result<T, GameError>;
