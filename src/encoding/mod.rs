// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Codec implementations and the serde factory.
//!
//! This module provides:
//! - [`codec`] - The [`Encoder`] / [`Decoder`] traits
//! - [`numeric`] - Fixed-width big-endian numeric codecs
//! - [`string`] - Configurable string codec
//! - [`buffer`] - Verbatim byte codecs
//! - [`uuid_codec`] - UUID codec
//! - [`pair`] - [`Serde`], an owned encoder/decoder pair
//! - [`registry`] - [`Serdes`], the factory for built-in and composed serdes

pub mod buffer;
pub mod codec;
pub mod numeric;
pub mod pair;
pub mod registry;
pub mod string;
pub mod uuid_codec;

pub use buffer::{ByteArrayDecoder, ByteArrayEncoder, RawBufferDecoder, RawBufferEncoder};
pub use codec::{Decoder, Encoder};
pub use numeric::{
    DoubleDecoder, DoubleEncoder, FixedWidth, FixedWidthDecoder, FixedWidthEncoder, FloatDecoder,
    FloatEncoder, IntegerDecoder, IntegerEncoder, LongDecoder, LongEncoder, ShortDecoder,
    ShortEncoder,
};
pub use pair::Serde;
pub use registry::{AnySerde, BuiltinValue, Serdes};
pub use string::{StringDecoder, StringEncoder};
pub use uuid_codec::{UuidDecoder, UuidEncoder};
