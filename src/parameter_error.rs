//! Error handling for parameter validation and extraction

use std::io;

/// Unified error to report invalid arm configuration, whether it was given
/// directly or read from a YAML file.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    NonFinite(String),
    NonPositiveLength { name: &'static str, value: f64 },
    InvertedLimits { joint: &'static str, min: f64, max: f64 },
    NegativeAccelTime(f64),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::NonFinite(ref msg) =>
                write!(f, "Non-finite value: {}", msg),
            ParameterError::NonPositiveLength { name, value } =>
                write!(f, "Link length {} must be positive, found {}", name, value),
            ParameterError::InvertedLimits { joint, min, max } =>
                write!(f, "Limits of {}: minimum {}° exceeds maximum {}°", joint, min, max),
            ParameterError::NegativeAccelTime(value) =>
                write!(f, "Acceleration time cannot be negative, found {}", value),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
