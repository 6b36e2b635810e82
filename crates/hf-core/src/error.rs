use thiserror::Error;

#[derive(Error, Debug)]
pub enum HfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown {what} code: {code}")]
    UnknownCode { what: &'static str, code: String },
}
