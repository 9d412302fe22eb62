// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec configuration.
//!
//! Options arrive as a flat [`Configs`] map from option name to an arbitrary
//! JSON value. Each configurable codec reads only the names it recognizes;
//! everything else is ignored.
//!
//! The text-encoding options are resolved into an [`EncodingConfig`], which
//! holds the key-side and value-side choice for one [`Role`]. A codec resolves
//! only the side it serves, and reads the fallback only when its scoped
//! option is absent:
//!
//! | Role    | Key side                     | Value side                     | Fallback                 |
//! |---------|------------------------------|--------------------------------|--------------------------|
//! | Encoder | `key.serializer.encoding`    | `value.serializer.encoding`    | `serializer.encoding`    |
//! | Decoder | `key.deserializer.encoding`  | `value.deserializer.encoding`  | `deserializer.encoding`  |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::charset::Charset;
use super::error::Result;
use super::Side;

/// Suffix of every text-encoding option name.
pub const ENCODING_OPTION: &str = "encoding";

/// Immutable-by-convention option map handed to codecs before first use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configs {
    entries: HashMap<String, Value>,
}

impl Configs {
    /// Create an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace an option.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Get an option value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Get an option value if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no options are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Configs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Direction a codec works in, which selects its option names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Value to bytes
    Encoder,
    /// Bytes to value
    Decoder,
}

impl Role {
    /// Option name segment for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Encoder => "serializer",
            Role::Decoder => "deserializer",
        }
    }

    /// Side-scoped option name, e.g. `key.serializer.encoding`.
    pub fn scoped_option(&self, side: Side, option: &str) -> String {
        format!("{}.{}.{option}", side.as_str(), self.as_str())
    }

    /// Unscoped fallback option name, e.g. `serializer.encoding`.
    pub fn shared_option(&self, option: &str) -> String {
        format!("{}.{option}", self.as_str())
    }
}

/// Text encodings chosen for the key side and the value side of one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodingConfig {
    /// Encoding for key-position data, if configured
    pub key: Option<Charset>,
    /// Encoding for value-position data, if configured
    pub value: Option<Charset>,
}

impl EncodingConfig {
    /// Resolve the encoding for one `side` of `role`, leaving the other side unset.
    ///
    /// Options for the other side are never read, so they cannot fail this call.
    pub fn for_side(configs: &Configs, role: Role, side: Side) -> Result<Self> {
        let mut config = Self::default();
        config.set(side, Self::resolve(configs, role, side)?);
        Ok(config)
    }

    /// Encoding named for `side` of `role`, if any.
    ///
    /// The side-scoped option is read first. The shared fallback is read only
    /// when the scoped option is absent. Unknown encoding names fail; values
    /// that are not strings are ignored.
    pub fn resolve(configs: &Configs, role: Role, side: Side) -> Result<Option<Charset>> {
        let scoped = role.scoped_option(side, ENCODING_OPTION);
        match configs.get(&scoped) {
            Some(value) => charset_option(&scoped, value),
            None => {
                let shared = role.shared_option(ENCODING_OPTION);
                configs
                    .get(&shared)
                    .map_or(Ok(None), |value| charset_option(&shared, value))
            }
        }
    }

    /// Encoding configured for `side`, if any.
    pub fn get(&self, side: Side) -> Option<Charset> {
        match side {
            Side::Key => self.key,
            Side::Value => self.value,
        }
    }

    /// Set the encoding for `side`.
    pub fn set(&mut self, side: Side, charset: Option<Charset>) {
        match side {
            Side::Key => self.key = charset,
            Side::Value => self.value = charset,
        }
    }
}

fn charset_option(name: &str, value: &Value) -> Result<Option<Charset>> {
    match value {
        Value::String(encoding) => encoding.parse().map(Some),
        other => {
            warn!(option = name, value = %other, "ignoring non-string encoding option");
            Ok(None)
        }
    }
}
