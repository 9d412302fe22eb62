// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encoder and decoder traits.
//!
//! A codec converts one direction of a single value type. `None` stands for
//! a null value on the value side and for an absent payload on the byte side;
//! `Some(Vec::new())` is a present, zero-length payload and is not the same
//! thing.
//!
//! ## Lifecycle
//!
//! 1. Create the codec.
//! 2. Optionally [`configure`](Encoder::configure) it once.
//! 3. Call [`encode`](Encoder::encode) / [`decode`](Decoder::decode) any number of times.
//! 4. [`close`](Encoder::close) it. Closing twice is allowed.

use crate::core::{Configs, Result, Side};

/// Converts values of type `T` into bytes.
pub trait Encoder<T>: Send + Sync {
    /// Stable identifier used in errors and logs.
    fn name(&self) -> &'static str;

    /// Apply options before first use.
    ///
    /// Unrecognized options are ignored. The default implementation
    /// recognizes none.
    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        let _ = (configs, side);
        Ok(())
    }

    /// Encode `value` for `channel`. A null value encodes to no bytes.
    fn encode(&self, channel: &str, value: Option<&T>) -> Result<Option<Vec<u8>>>;

    /// Release configuration state. Must be idempotent.
    fn close(&mut self) {}
}

/// Converts bytes into values of type `T`.
pub trait Decoder<T>: Send + Sync {
    /// Stable identifier used in errors and logs.
    fn name(&self) -> &'static str;

    /// Apply options before first use.
    ///
    /// Unrecognized options are ignored. The default implementation
    /// recognizes none.
    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        let _ = (configs, side);
        Ok(())
    }

    /// Decode `data` received on `channel`. No bytes decode to a null value.
    fn decode(&self, channel: &str, data: Option<&[u8]>) -> Result<Option<T>>;

    /// Release configuration state. Must be idempotent.
    fn close(&mut self) {}
}

impl<T, E: Encoder<T> + ?Sized> Encoder<T> for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        (**self).configure(configs, side)
    }

    fn encode(&self, channel: &str, value: Option<&T>) -> Result<Option<Vec<u8>>> {
        (**self).encode(channel, value)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<T, D: Decoder<T> + ?Sized> Decoder<T> for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        (**self).configure(configs, side)
    }

    fn decode(&self, channel: &str, data: Option<&[u8]>) -> Result<Option<T>> {
        (**self).decode(channel, data)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
