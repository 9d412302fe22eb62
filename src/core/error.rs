// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for keyed-serdes.
//!
//! Errors fall into three families, reported by [`SerdeError::kind`]:
//! - Serialization failures (mis-sized numeric payloads, malformed text)
//! - Invalid arguments (unsupported declared types, incomplete serde pairs)
//! - Configuration failures (unknown character encodings)

use thiserror::Error;

/// Maximum number of payload bytes rendered in a size mismatch preview.
const PREVIEW_LIMIT: usize = 16;

/// Broad classification of a [`SerdeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bytes or values could not be converted.
    Serialization,
    /// The caller asked for something this layer does not offer.
    InvalidArgument,
    /// An option value could not be applied.
    Configuration,
}

/// Errors that can occur while building serdes or converting values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeError {
    /// A fixed-width decoder received the wrong number of bytes.
    #[error("Size of data received by {codec} is not {expected} (received {actual} bytes: [{preview}])")]
    SizeMismatch {
        /// Codec that rejected the payload
        codec: &'static str,
        /// Width the codec requires
        expected: usize,
        /// Width it was given
        actual: usize,
        /// Hex rendering of the leading payload bytes
        preview: String,
    },

    /// A value could not be encoded or decoded.
    #[error("{codec} serialization error: {message}")]
    Serialization {
        /// Codec or charset context
        codec: String,
        /// Error message
        message: String,
    },

    /// No built-in serde exists for the declared type.
    #[error("Unknown class for built-in serializer: '{type_name}'")]
    UnsupportedType {
        /// Declared type that was requested
        type_name: String,
    },

    /// A serde was composed without one of its halves.
    #[error("{component} cannot be absent when composing a serde")]
    MissingComponent {
        /// Which half was missing ("encoder" or "decoder")
        component: &'static str,
    },

    /// A configured text encoding name is not recognized.
    #[error("Unsupported character encoding: '{name}'")]
    UnsupportedCharset {
        /// Encoding name as supplied by the caller
        name: String,
    },
}

impl SerdeError {
    /// Create a size mismatch error for `data`.
    pub fn size_mismatch(codec: &'static str, expected: usize, data: &[u8]) -> Self {
        let shown = &data[..data.len().min(PREVIEW_LIMIT)];
        let mut preview = hex::encode(shown);
        if data.len() > PREVIEW_LIMIT {
            preview.push_str("..");
        }
        SerdeError::SizeMismatch {
            codec,
            expected,
            actual: data.len(),
            preview,
        }
    }

    /// Create a serialization error.
    pub fn serialization(codec: impl Into<String>, message: impl Into<String>) -> Self {
        SerdeError::Serialization {
            codec: codec.into(),
            message: message.into(),
        }
    }

    /// Create an "unsupported type" error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        SerdeError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a "missing component" error.
    pub fn missing_component(component: &'static str) -> Self {
        SerdeError::MissingComponent { component }
    }

    /// Create an "unsupported charset" error.
    pub fn unsupported_charset(name: impl Into<String>) -> Self {
        SerdeError::UnsupportedCharset { name: name.into() }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerdeError::SizeMismatch { .. } | SerdeError::Serialization { .. } => {
                ErrorKind::Serialization
            }
            SerdeError::UnsupportedType { .. } | SerdeError::MissingComponent { .. } => {
                ErrorKind::InvalidArgument
            }
            SerdeError::UnsupportedCharset { .. } => ErrorKind::Configuration,
        }
    }

    /// True for serialization failures.
    pub fn is_serialization(&self) -> bool {
        self.kind() == ErrorKind::Serialization
    }

    /// True for invalid-argument failures.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            SerdeError::SizeMismatch {
                codec,
                expected,
                actual,
                preview,
            } => vec![
                ("codec", (*codec).to_string()),
                ("expected", expected.to_string()),
                ("actual", actual.to_string()),
                ("preview", preview.clone()),
            ],
            SerdeError::Serialization { codec, message } => {
                vec![("codec", codec.clone()), ("message", message.clone())]
            }
            SerdeError::UnsupportedType { type_name } => vec![("type", type_name.clone())],
            SerdeError::MissingComponent { component } => {
                vec![("component", (*component).to_string())]
            }
            SerdeError::UnsupportedCharset { name } => vec![("charset", name.clone())],
        }
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Serialization {
            codec: "IO".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type for keyed-serdes operations.
pub type Result<T> = std::result::Result<T, SerdeError>;
