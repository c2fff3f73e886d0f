//! `bledefs` Errors
//!
//! Every fallible operation in this crate is a parse or a conversion, so there is a single error
//! type. Each variant keeps the input that was rejected so the message can be shown as is.

/// A parse or conversion failure
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid BLE addr string: {0}")]
    InvalidAddr(String),
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),
    /// A string did not match any name of the enumeration `kind`
    #[error("invalid {kind} string: {input}")]
    InvalidName { kind: &'static str, input: String },
    /// A raw value is not assigned to any variant of the enumeration `kind`
    #[error("invalid {kind} value: {raw}")]
    InvalidRaw { kind: &'static str, raw: u8 },
}

impl Error {
    /// The rejected input, as text
    pub fn input(&self) -> String {
        match self {
            Error::InvalidAddr(input) | Error::InvalidUuid(input) => input.clone(),
            Error::InvalidName { input, .. } => input.clone(),
            Error::InvalidRaw { raw, .. } => raw.to_string(),
        }
    }
}
