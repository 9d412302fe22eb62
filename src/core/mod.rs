// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout keyed-serdes.
//!
//! This module provides the foundational types for the library:
//! - [`SerdeError`] - Error handling
//! - [`Charset`] - Text encodings for the string-based codecs
//! - [`Configs`] / [`EncodingConfig`] - Codec configuration
//! - [`ValueKind`] - The closed set of declared value types with a built-in serde
//! - [`Side`] - Whether a codec handles key-position or value-position data

pub mod charset;
pub mod config;
pub mod error;

use std::any::TypeId;

use serde::{Deserialize, Serialize};

pub use charset::Charset;
pub use config::{Configs, EncodingConfig, Role, ENCODING_OPTION};
pub use error::{ErrorKind, Result, SerdeError};

/// Position of the data within a keyed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Message key
    Key,
    /// Message value
    Value,
}

impl Side {
    /// Build from the "is this the key" flag used by channel clients.
    pub fn from_is_key(is_key: bool) -> Self {
        if is_key {
            Side::Key
        } else {
            Side::Value
        }
    }

    /// Check if this is the key side.
    pub fn is_key(&self) -> bool {
        matches!(self, Side::Key)
    }

    /// Option name segment for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Key => "key",
            Side::Value => "value",
        }
    }
}

/// Declared value type with a built-in serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Signed 16-bit integer
    Short,
    /// Signed 32-bit integer
    Integer,
    /// Signed 64-bit integer
    Long,
    /// 32-bit IEEE-754 float
    Float,
    /// 64-bit IEEE-754 float
    Double,
    /// Text
    String,
    /// Owned byte vector
    ByteArray,
    /// Immutable byte buffer
    RawBuffer,
    /// 128-bit UUID
    Uuid,
}

impl ValueKind {
    /// Every supported kind.
    pub const ALL: [ValueKind; 9] = [
        ValueKind::Short,
        ValueKind::Integer,
        ValueKind::Long,
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::String,
        ValueKind::ByteArray,
        ValueKind::RawBuffer,
        ValueKind::Uuid,
    ];

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Short => "short",
            ValueKind::Integer => "integer",
            ValueKind::Long => "long",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::ByteArray => "byte_array",
            ValueKind::RawBuffer => "raw_buffer",
            ValueKind::Uuid => "uuid",
        }
    }

    /// Fixed wire width in bytes, or `None` for variable-length kinds.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            ValueKind::Short => Some(2),
            ValueKind::Integer | ValueKind::Float => Some(4),
            ValueKind::Long | ValueKind::Double => Some(8),
            _ => None,
        }
    }

    /// Map a Rust type to its kind, if it has a built-in serde.
    pub fn of<T: 'static>() -> Option<Self> {
        let id = TypeId::of::<T>();
        let table = [
            (TypeId::of::<i16>(), ValueKind::Short),
            (TypeId::of::<i32>(), ValueKind::Integer),
            (TypeId::of::<i64>(), ValueKind::Long),
            (TypeId::of::<f32>(), ValueKind::Float),
            (TypeId::of::<f64>(), ValueKind::Double),
            (TypeId::of::<String>(), ValueKind::String),
            (TypeId::of::<Vec<u8>>(), ValueKind::ByteArray),
            (TypeId::of::<bytes::Bytes>(), ValueKind::RawBuffer),
            (TypeId::of::<uuid::Uuid>(), ValueKind::Uuid),
        ];
        table
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, kind)| *kind)
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ValueKind {
    type Err = SerdeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "short" | "i16" => Ok(ValueKind::Short),
            "integer" | "int" | "i32" => Ok(ValueKind::Integer),
            "long" | "i64" => Ok(ValueKind::Long),
            "float" | "f32" => Ok(ValueKind::Float),
            "double" | "f64" => Ok(ValueKind::Double),
            "string" | "str" => Ok(ValueKind::String),
            "byte_array" | "bytearray" | "bytes" => Ok(ValueKind::ByteArray),
            "raw_buffer" | "rawbuffer" | "bytebuffer" | "buffer" => Ok(ValueKind::RawBuffer),
            "uuid" => Ok(ValueKind::Uuid),
            _ => Err(SerdeError::unsupported_type(s)),
        }
    }
}
