// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Serde factory for the built-in value types.
//!
//! The set of built-in serdes is fixed at compile time; there is no runtime
//! registration. A serde can be obtained:
//! - by constructor ([`Serdes::long`], [`Serdes::string`], ...)
//! - by declared kind ([`Serdes::lookup`]) or kind name ([`Serdes::lookup_name`])
//! - by Rust type, checked at runtime ([`Serdes::serde_from`]) or at compile
//!   time ([`Serdes::of`])
//! - by composing an arbitrary encoder and decoder ([`Serdes::compose`])
//!
//! # Example
//!
//! ```
//! use keyed_serdes::encoding::{AnySerde, Serdes};
//! use keyed_serdes::ValueKind;
//!
//! # fn main() -> keyed_serdes::Result<()> {
//! let serde = Serdes::serde_from::<i64>()?;
//! let other = Serdes::long();
//! let bytes = other.encode("topic", Some(&423412424))?;
//! assert_eq!(serde.decode("topic", bytes.as_deref())?, Some(423412424));
//!
//! assert!(matches!(Serdes::lookup(ValueKind::Float), AnySerde::Float(_)));
//! assert!(Serdes::lookup_name("DummyClass").is_err());
//! # Ok(())
//! # }
//! ```

use std::any::Any;

use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

use crate::core::{Result, SerdeError, ValueKind};
use crate::encoding::buffer::{ByteArrayDecoder, ByteArrayEncoder, RawBufferDecoder, RawBufferEncoder};
use crate::encoding::codec::{Decoder, Encoder};
use crate::encoding::numeric::{FixedWidthDecoder, FixedWidthEncoder};
use crate::encoding::pair::Serde;
use crate::encoding::string::{StringDecoder, StringEncoder};
use crate::encoding::uuid_codec::{UuidDecoder, UuidEncoder};

/// Rust types with a built-in serde.
pub trait BuiltinValue: Sized + 'static {
    /// Declared kind of this type.
    const KIND: ValueKind;

    /// Create the built-in serde.
    fn serde() -> Serde<Self>;
}

macro_rules! builtin {
    ($ty:ty, $kind:ident, $encoder:expr, $decoder:expr) => {
        impl BuiltinValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;

            fn serde() -> Serde<Self> {
                Serde::new($encoder, $decoder)
            }
        }
    };
}

builtin!(i16, Short, FixedWidthEncoder::<i16>::new(), FixedWidthDecoder::<i16>::new());
builtin!(i32, Integer, FixedWidthEncoder::<i32>::new(), FixedWidthDecoder::<i32>::new());
builtin!(i64, Long, FixedWidthEncoder::<i64>::new(), FixedWidthDecoder::<i64>::new());
builtin!(f32, Float, FixedWidthEncoder::<f32>::new(), FixedWidthDecoder::<f32>::new());
builtin!(f64, Double, FixedWidthEncoder::<f64>::new(), FixedWidthDecoder::<f64>::new());
builtin!(String, String, StringEncoder::new(), StringDecoder::new());
builtin!(Vec<u8>, ByteArray, ByteArrayEncoder, ByteArrayDecoder);
builtin!(Bytes, RawBuffer, RawBufferEncoder, RawBufferDecoder);
builtin!(Uuid, Uuid, UuidEncoder::new(), UuidDecoder::new());

/// A built-in serde of any supported kind.
#[derive(Debug)]
pub enum AnySerde {
    /// `i16`
    Short(Serde<i16>),
    /// `i32`
    Integer(Serde<i32>),
    /// `i64`
    Long(Serde<i64>),
    /// `f32`
    Float(Serde<f32>),
    /// `f64`
    Double(Serde<f64>),
    /// `String`
    String(Serde<String>),
    /// `Vec<u8>`
    ByteArray(Serde<Vec<u8>>),
    /// [`Bytes`]
    RawBuffer(Serde<Bytes>),
    /// [`Uuid`]
    Uuid(Serde<Uuid>),
}

impl AnySerde {
    /// Declared kind of the wrapped serde.
    pub fn kind(&self) -> ValueKind {
        match self {
            AnySerde::Short(_) => ValueKind::Short,
            AnySerde::Integer(_) => ValueKind::Integer,
            AnySerde::Long(_) => ValueKind::Long,
            AnySerde::Float(_) => ValueKind::Float,
            AnySerde::Double(_) => ValueKind::Double,
            AnySerde::String(_) => ValueKind::String,
            AnySerde::ByteArray(_) => ValueKind::ByteArray,
            AnySerde::RawBuffer(_) => ValueKind::RawBuffer,
            AnySerde::Uuid(_) => ValueKind::Uuid,
        }
    }

    /// Close the wrapped serde.
    pub fn close(&mut self) {
        match self {
            AnySerde::Short(s) => s.close(),
            AnySerde::Integer(s) => s.close(),
            AnySerde::Long(s) => s.close(),
            AnySerde::Float(s) => s.close(),
            AnySerde::Double(s) => s.close(),
            AnySerde::String(s) => s.close(),
            AnySerde::ByteArray(s) => s.close(),
            AnySerde::RawBuffer(s) => s.close(),
            AnySerde::Uuid(s) => s.close(),
        }
    }

    /// Unwrap into a typed serde, or `None` if `T` is not the wrapped type.
    pub fn into_typed<T: 'static>(self) -> Option<Serde<T>> {
        let erased: Box<dyn Any> = match self {
            AnySerde::Short(s) => Box::new(s),
            AnySerde::Integer(s) => Box::new(s),
            AnySerde::Long(s) => Box::new(s),
            AnySerde::Float(s) => Box::new(s),
            AnySerde::Double(s) => Box::new(s),
            AnySerde::String(s) => Box::new(s),
            AnySerde::ByteArray(s) => Box::new(s),
            AnySerde::RawBuffer(s) => Box::new(s),
            AnySerde::Uuid(s) => Box::new(s),
        };
        erased.downcast::<Serde<T>>().ok().map(|serde| *serde)
    }
}

/// Factory for built-in and composed serdes.
pub struct Serdes;

impl Serdes {
    /// Serde for `i16`.
    pub fn short() -> Serde<i16> {
        i16::serde()
    }

    /// Serde for `i32`.
    pub fn integer() -> Serde<i32> {
        i32::serde()
    }

    /// Serde for `i64`.
    pub fn long() -> Serde<i64> {
        i64::serde()
    }

    /// Serde for `f32`.
    pub fn float() -> Serde<f32> {
        f32::serde()
    }

    /// Serde for `f64`.
    pub fn double() -> Serde<f64> {
        f64::serde()
    }

    /// Serde for `String`, UTF-8 until configured otherwise.
    pub fn string() -> Serde<String> {
        String::serde()
    }

    /// Serde for `Vec<u8>`.
    pub fn byte_array() -> Serde<Vec<u8>> {
        <Vec<u8>>::serde()
    }

    /// Serde for [`Bytes`].
    pub fn raw_buffer() -> Serde<Bytes> {
        Bytes::serde()
    }

    /// Serde for [`Uuid`].
    pub fn uuid() -> Serde<Uuid> {
        Uuid::serde()
    }

    /// Compile-time checked lookup by Rust type.
    pub fn of<T: BuiltinValue>() -> Serde<T> {
        T::serde()
    }

    /// Built-in serde for a declared kind.
    pub fn lookup(kind: ValueKind) -> AnySerde {
        match kind {
            ValueKind::Short => AnySerde::Short(Self::short()),
            ValueKind::Integer => AnySerde::Integer(Self::integer()),
            ValueKind::Long => AnySerde::Long(Self::long()),
            ValueKind::Float => AnySerde::Float(Self::float()),
            ValueKind::Double => AnySerde::Double(Self::double()),
            ValueKind::String => AnySerde::String(Self::string()),
            ValueKind::ByteArray => AnySerde::ByteArray(Self::byte_array()),
            ValueKind::RawBuffer => AnySerde::RawBuffer(Self::raw_buffer()),
            ValueKind::Uuid => AnySerde::Uuid(Self::uuid()),
        }
    }

    /// Built-in serde for a declared kind name such as `"long"`.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError::UnsupportedType`] for names outside the fixed set.
    pub fn lookup_name(type_name: &str) -> Result<AnySerde> {
        type_name.parse::<ValueKind>().map(Self::lookup)
    }

    /// Built-in serde for the Rust type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError::UnsupportedType`] if `T` has no built-in serde.
    pub fn serde_from<T: 'static>() -> Result<Serde<T>> {
        let unsupported = || SerdeError::unsupported_type(std::any::type_name::<T>());
        let kind = ValueKind::of::<T>().ok_or_else(unsupported)?;
        Self::lookup(kind).into_typed().ok_or_else(unsupported)
    }

    /// Pair an explicit encoder with an explicit decoder.
    ///
    /// # Errors
    ///
    /// Returns [`SerdeError::MissingComponent`] if either half is absent.
    pub fn compose<T>(
        encoder: Option<Box<dyn Encoder<T>>>,
        decoder: Option<Box<dyn Decoder<T>>>,
    ) -> Result<Serde<T>> {
        let encoder = encoder.ok_or_else(|| SerdeError::missing_component("encoder"))?;
        let decoder = decoder.ok_or_else(|| SerdeError::missing_component("decoder"))?;
        debug!(
            encoder = encoder.name(),
            decoder = decoder.name(),
            "composed serde"
        );
        Ok(Serde::from_boxed(encoder, decoder))
    }

    /// Every declared kind with a built-in serde.
    pub fn supported_kinds() -> &'static [ValueKind] {
        &ValueKind::ALL
    }
}
