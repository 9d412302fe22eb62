// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! UUID codec.
//!
//! A UUID travels as its 36-character hyphenated text form, written through
//! the same charset options as the string codec. Decoding accepts only that
//! form; the simple, braced and URN forms are rejected.

use uuid::Uuid;

use crate::core::{Configs, Result, SerdeError, Side};
use crate::encoding::codec::{Decoder, Encoder};
use crate::encoding::string::{StringDecoder, StringEncoder};

/// Length of the hyphenated text form; the only form accepted on decode.
const HYPHENATED_LEN: usize = 36;

/// Encoder for [`Uuid`] values.
#[derive(Debug, Clone, Default)]
pub struct UuidEncoder {
    text: StringEncoder,
}

impl UuidEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Encoder<Uuid> for UuidEncoder {
    fn name(&self) -> &'static str {
        "UuidEncoder"
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        self.text.configure(configs, side)
    }

    fn encode(&self, _channel: &str, value: Option<&Uuid>) -> Result<Option<Vec<u8>>> {
        let text = value.map(|id| id.hyphenated().to_string());
        self.text.encode_str(text.as_deref())
    }

    fn close(&mut self) {
        self.text.close();
    }
}

/// Decoder for [`Uuid`] values.
#[derive(Debug, Clone, Default)]
pub struct UuidDecoder {
    text: StringDecoder,
}

impl UuidDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Decoder<Uuid> for UuidDecoder {
    fn name(&self) -> &'static str {
        "UuidDecoder"
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        self.text.configure(configs, side)
    }

    fn decode(&self, channel: &str, data: Option<&[u8]>) -> Result<Option<Uuid>> {
        let Some(text) = self.text.decode(channel, data)? else {
            return Ok(None);
        };
        if text.len() != HYPHENATED_LEN {
            return Err(SerdeError::serialization(
                "UuidDecoder",
                format!(
                    "expected {HYPHENATED_LEN}-character hyphenated UUID, got {} characters",
                    text.chars().count()
                ),
            ));
        }
        Uuid::parse_str(&text).map(Some).map_err(|e| {
            SerdeError::serialization("UuidDecoder", format!("error parsing data into UUID: {e}"))
        })
    }

    fn close(&mut self) {
        self.text.close();
    }
}
