// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Fixed-width numeric codecs.
//!
//! Every numeric value is written big-endian at its natural width:
//!
//! | Codec   | Rust type | Width | Layout                         |
//! |---------|-----------|-------|--------------------------------|
//! | Short   | `i16`     | 2     | two's-complement               |
//! | Integer | `i32`     | 4     | two's-complement               |
//! | Long    | `i64`     | 8     | two's-complement               |
//! | Float   | `f32`     | 4     | IEEE-754 raw bits              |
//! | Double  | `f64`     | 8     | IEEE-754 raw bits              |
//!
//! Floats travel as their raw bit pattern, so NaN payloads survive a round
//! trip unchanged. Decoders reject any payload whose length differs from the
//! width; nothing is truncated or padded.

use std::marker::PhantomData;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::core::{Result, SerdeError};
use crate::encoding::codec::{Decoder, Encoder};

mod sealed {
    pub trait Sealed {}
}

/// A numeric type with a fixed big-endian wire layout.
pub trait FixedWidth: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Wire width in bytes.
    const WIDTH: usize;
    /// Encoder identifier.
    const ENCODER_NAME: &'static str;
    /// Decoder identifier.
    const DECODER_NAME: &'static str;

    /// Append the big-endian representation to `out`.
    fn write_be(self, out: &mut Vec<u8>) -> Result<()>;

    /// Read from exactly `WIDTH` bytes.
    fn read_be(data: &[u8]) -> Result<Self>;
}

macro_rules! fixed_width {
    ($ty:ty, $width:expr, $enc:literal, $dec:literal, |$v:ident, $out:ident| $write:expr, |$cur:ident| $read:expr) => {
        impl sealed::Sealed for $ty {}

        impl FixedWidth for $ty {
            const WIDTH: usize = $width;
            const ENCODER_NAME: &'static str = $enc;
            const DECODER_NAME: &'static str = $dec;

            fn write_be(self, $out: &mut Vec<u8>) -> Result<()> {
                let $v = self;
                $write?;
                Ok(())
            }

            fn read_be(data: &[u8]) -> Result<Self> {
                let mut $cur = data;
                Ok($read?)
            }
        }
    };
}

fixed_width!(i16, 2, "ShortEncoder", "ShortDecoder",
    |v, out| out.write_i16::<BigEndian>(v),
    |cur| cur.read_i16::<BigEndian>());
fixed_width!(i32, 4, "IntegerEncoder", "IntegerDecoder",
    |v, out| out.write_i32::<BigEndian>(v),
    |cur| cur.read_i32::<BigEndian>());
fixed_width!(i64, 8, "LongEncoder", "LongDecoder",
    |v, out| out.write_i64::<BigEndian>(v),
    |cur| cur.read_i64::<BigEndian>());
fixed_width!(f32, 4, "FloatEncoder", "FloatDecoder",
    |v, out| out.write_u32::<BigEndian>(v.to_bits()),
    |cur| cur.read_u32::<BigEndian>().map(f32::from_bits));
fixed_width!(f64, 8, "DoubleEncoder", "DoubleDecoder",
    |v, out| out.write_u64::<BigEndian>(v.to_bits()),
    |cur| cur.read_u64::<BigEndian>().map(f64::from_bits));

/// Stateless encoder for a [`FixedWidth`] type.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthEncoder<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T: FixedWidth> FixedWidthEncoder<T> {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: FixedWidth> Default for FixedWidthEncoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedWidth> Encoder<T> for FixedWidthEncoder<T> {
    fn name(&self) -> &'static str {
        T::ENCODER_NAME
    }

    fn encode(&self, _channel: &str, value: Option<&T>) -> Result<Option<Vec<u8>>> {
        let Some(&value) = value else {
            return Ok(None);
        };
        let mut out = Vec::with_capacity(T::WIDTH);
        value.write_be(&mut out)?;
        Ok(Some(out))
    }
}

/// Stateless decoder for a [`FixedWidth`] type.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: FixedWidth> FixedWidthDecoder<T> {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: FixedWidth> Default for FixedWidthDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FixedWidth> Decoder<T> for FixedWidthDecoder<T> {
    fn name(&self) -> &'static str {
        T::DECODER_NAME
    }

    fn decode(&self, _channel: &str, data: Option<&[u8]>) -> Result<Option<T>> {
        let Some(data) = data else {
            return Ok(None);
        };
        if data.len() != T::WIDTH {
            return Err(SerdeError::size_mismatch(T::DECODER_NAME, T::WIDTH, data));
        }
        T::read_be(data).map(Some)
    }
}

/// Encoder for `i16`.
pub type ShortEncoder = FixedWidthEncoder<i16>;
/// Decoder for `i16`.
pub type ShortDecoder = FixedWidthDecoder<i16>;
/// Encoder for `i32`.
pub type IntegerEncoder = FixedWidthEncoder<i32>;
/// Decoder for `i32`.
pub type IntegerDecoder = FixedWidthDecoder<i32>;
/// Encoder for `i64`.
pub type LongEncoder = FixedWidthEncoder<i64>;
/// Decoder for `i64`.
pub type LongDecoder = FixedWidthDecoder<i64>;
/// Encoder for `f32`.
pub type FloatEncoder = FixedWidthEncoder<f32>;
/// Decoder for `f32`.
pub type FloatDecoder = FixedWidthDecoder<f32>;
/// Encoder for `f64`.
pub type DoubleEncoder = FixedWidthEncoder<f64>;
/// Decoder for `f64`.
pub type DoubleDecoder = FixedWidthDecoder<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = "testTopic";

    fn round_trip<T: FixedWidth>(value: T) -> T {
        let bytes = FixedWidthEncoder::<T>::new()
            .encode(TOPIC, Some(&value))
            .unwrap()
            .unwrap();
        assert_eq!(bytes.len(), T::WIDTH);
        FixedWidthDecoder::<T>::new()
            .decode(TOPIC, Some(bytes.as_slice()))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_integer_minus_one_is_all_ones() {
        let bytes = IntegerEncoder::new().encode(TOPIC, Some(&-1)).unwrap();
        assert_eq!(bytes, Some(vec![0xff, 0xff, 0xff, 0xff]));
        assert_eq!(
            IntegerDecoder::new().decode(TOPIC, bytes.as_deref()).unwrap(),
            Some(-1)
        );
    }

    #[test]
    fn test_integer_round_trip() {
        for value in [423412424, -41243432, 0, i32::MIN, i32::MAX] {
            assert_eq!(round_trip(value), value);
        }
    }

    #[test]
    fn test_long_round_trip() {
        for value in [922337203685477580i64, -922337203685477581, i64::MIN, i64::MAX] {
            assert_eq!(round_trip(value), value);
        }
    }

    #[test]
    fn test_short_layout() {
        let bytes = ShortEncoder::new().encode(TOPIC, Some(&0x1234)).unwrap();
        assert_eq!(bytes, Some(vec![0x12, 0x34]));
        assert_eq!(round_trip(i16::MIN), i16::MIN);
    }

    #[test]
    fn test_float_round_trip() {
        for value in [5678567.12312f32, -5678567.12341, 0.0, -0.0, f32::INFINITY] {
            assert_eq!(round_trip(value).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_double_round_trip() {
        for value in [5678567.12312f64, -5678567.12341, f64::MIN_POSITIVE, f64::NEG_INFINITY] {
            assert_eq!(round_trip(value).to_bits(), value.to_bits());
        }
    }

    #[test]
    fn test_float_preserves_nan_payload() {
        for bits in [0x7f800001u32, 0x7f800002, 0xffc00000] {
            let value = f32::from_bits(bits);
            assert_eq!(round_trip(value).to_bits(), bits);
        }
    }

    #[test]
    fn test_double_preserves_nan_payload() {
        let bits = 0x7ff0_0000_0000_0001u64;
        assert_eq!(round_trip(f64::from_bits(bits)).to_bits(), bits);
    }

    #[test]
    fn test_null_handling() {
        assert_eq!(LongEncoder::new().encode(TOPIC, None).unwrap(), None);
        assert_eq!(LongDecoder::new().decode(TOPIC, None).unwrap(), None);
        assert_eq!(FloatEncoder::new().encode(TOPIC, None).unwrap(), None);
        assert_eq!(FloatDecoder::new().decode(TOPIC, None).unwrap(), None);
    }

    #[test]
    fn test_float_decoder_rejects_wrong_sizes() {
        let decoder = FloatDecoder::new();
        for len in [0usize, 3, 5] {
            let err = decoder.decode(TOPIC, Some(vec![0u8; len].as_slice())).unwrap_err();
            assert!(err.is_serialization(), "length {len}");
            assert!(matches!(
                err,
                SerdeError::SizeMismatch { codec: "FloatDecoder", expected: 4, actual, .. } if actual == len
            ));
        }
    }

    #[test]
    fn test_every_decoder_rejects_wrong_sizes() {
        fn check<T: FixedWidth + std::fmt::Debug>() {
            let decoder = FixedWidthDecoder::<T>::new();
            for len in [0, T::WIDTH - 1, T::WIDTH + 1] {
                let result = decoder.decode(TOPIC, Some(vec![0u8; len].as_slice()));
                assert!(result.is_err(), "{} accepted {len} bytes", T::DECODER_NAME);
            }
        }
        check::<i16>();
        check::<i32>();
        check::<i64>();
        check::<f32>();
        check::<f64>();
    }

    #[test]
    fn test_codec_names() {
        assert_eq!(Encoder::<i32>::name(&IntegerEncoder::new()), "IntegerEncoder");
        assert_eq!(Decoder::<f64>::name(&DoubleDecoder::new()), "DoubleDecoder");
    }
}
