//! Error types for hydraulic calculations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;
