// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Verbatim byte codecs.
//!
//! Both codecs copy: the encoded bytes never alias the caller's value and the
//! decoded value never aliases the input slice.

use bytes::Bytes;

use crate::core::Result;
use crate::encoding::codec::{Decoder, Encoder};

/// Encoder for immutable [`Bytes`] buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBufferEncoder;

impl Encoder<Bytes> for RawBufferEncoder {
    fn name(&self) -> &'static str {
        "RawBufferEncoder"
    }

    fn encode(&self, _channel: &str, value: Option<&Bytes>) -> Result<Option<Vec<u8>>> {
        Ok(value.map(|buf| buf.to_vec()))
    }
}

/// Decoder for immutable [`Bytes`] buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBufferDecoder;

impl Decoder<Bytes> for RawBufferDecoder {
    fn name(&self) -> &'static str {
        "RawBufferDecoder"
    }

    fn decode(&self, _channel: &str, data: Option<&[u8]>) -> Result<Option<Bytes>> {
        Ok(data.map(Bytes::copy_from_slice))
    }
}

/// Encoder for owned byte vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayEncoder;

impl Encoder<Vec<u8>> for ByteArrayEncoder {
    fn name(&self) -> &'static str {
        "ByteArrayEncoder"
    }

    fn encode(&self, _channel: &str, value: Option<&Vec<u8>>) -> Result<Option<Vec<u8>>> {
        Ok(value.cloned())
    }
}

/// Decoder for owned byte vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayDecoder;

impl Decoder<Vec<u8>> for ByteArrayDecoder {
    fn name(&self) -> &'static str {
        "ByteArrayDecoder"
    }

    fn decode(&self, _channel: &str, data: Option<&[u8]>) -> Result<Option<Vec<u8>>> {
        Ok(data.map(<[u8]>::to_vec))
    }
}
