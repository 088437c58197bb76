use paperdesk_core::{Price, Quantity};
use thiserror::Error;

/// Structured rejections handed back to callers.
///
/// All variants are validation failures raised before any state changes;
/// nothing in the engine fails transiently or fatally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("order symbol must not be empty")]
    EmptySymbol,

    #[error("order quantity must be a positive integer, got {0}")]
    InvalidQuantity(Quantity),

    #[error("limit order requires a limit price")]
    MissingLimitPrice,

    #[error("limit price must be positive, got {0}")]
    InvalidLimitPrice(Price),

    #[error("market order must not carry a limit price")]
    UnexpectedLimitPrice,
}

pub type Result<T> = std::result::Result<T, EngineError>;
