// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Paired encoder and decoder for one value type.

use tracing::debug;

use crate::core::{Configs, Result, Side};
use crate::encoding::codec::{Decoder, Encoder};

/// One encoder and one matching decoder, owned together.
///
/// Both halves are closed when the serde is closed or dropped, so every
/// exit path releases them.
///
/// # Example
///
/// ```
/// use keyed_serdes::encoding::Serdes;
///
/// # fn main() -> keyed_serdes::Result<()> {
/// let serde = Serdes::long();
/// let bytes = serde.encode("orders", Some(&923372036854775807))?;
/// assert_eq!(serde.decode("orders", bytes.as_deref())?, Some(923372036854775807));
/// # Ok(())
/// # }
/// ```
pub struct Serde<T> {
    encoder: Box<dyn Encoder<T>>,
    decoder: Box<dyn Decoder<T>>,
    closed: bool,
}

impl<T> Serde<T> {
    /// Pair `encoder` with `decoder`.
    pub fn new(encoder: impl Encoder<T> + 'static, decoder: impl Decoder<T> + 'static) -> Self {
        Self::from_boxed(Box::new(encoder), Box::new(decoder))
    }

    /// Pair two boxed codecs.
    pub fn from_boxed(encoder: Box<dyn Encoder<T>>, decoder: Box<dyn Decoder<T>>) -> Self {
        Self {
            encoder,
            decoder,
            closed: false,
        }
    }

    /// The encoder half.
    pub fn encoder(&self) -> &dyn Encoder<T> {
        self.encoder.as_ref()
    }

    /// The decoder half.
    pub fn decoder(&self) -> &dyn Decoder<T> {
        self.decoder.as_ref()
    }

    /// Mutable access to the encoder, e.g. to configure it alone.
    pub fn encoder_mut(&mut self) -> &mut dyn Encoder<T> {
        self.encoder.as_mut()
    }

    /// Mutable access to the decoder, e.g. to configure it alone.
    pub fn decoder_mut(&mut self) -> &mut dyn Decoder<T> {
        self.decoder.as_mut()
    }

    /// Configure both halves for `side`.
    pub fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        self.encoder.configure(configs, side)?;
        self.decoder.configure(configs, side)
    }

    /// Encode `value` with the encoder half.
    pub fn encode(&self, channel: &str, value: Option<&T>) -> Result<Option<Vec<u8>>> {
        self.encoder.encode(channel, value)
    }

    /// Decode `data` with the decoder half.
    pub fn decode(&self, channel: &str, data: Option<&[u8]>) -> Result<Option<T>> {
        self.decoder.decode(channel, data)
    }

    /// Close both halves. Later calls do nothing.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.encoder.close();
        self.decoder.close();
        debug!(
            encoder = self.encoder.name(),
            decoder = self.decoder.name(),
            "closed serde"
        );
    }

    /// Check if [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<T> Drop for Serde<T> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<T> std::fmt::Debug for Serde<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Serde")
            .field("encoder", &self.encoder.name())
            .field("decoder", &self.decoder.name())
            .field("closed", &self.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::encoding::numeric::{IntegerDecoder, IntegerEncoder};
    use crate::encoding::string::{StringDecoder, StringEncoder};

    struct CountingEncoder(Arc<AtomicUsize>);

    impl Encoder<i32> for CountingEncoder {
        fn name(&self) -> &'static str {
            "CountingEncoder"
        }

        fn encode(&self, channel: &str, value: Option<&i32>) -> Result<Option<Vec<u8>>> {
            IntegerEncoder::new().encode(channel, value)
        }

        fn close(&mut self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let serde = Serde::new(IntegerEncoder::new(), IntegerDecoder::new());
        let bytes = serde.encode("topic", Some(&-41243432)).unwrap();
        assert_eq!(serde.decode("topic", bytes.as_deref()).unwrap(), Some(-41243432));
        assert_eq!(serde.encoder().name(), "IntegerEncoder");
        assert_eq!(serde.decoder().name(), "IntegerDecoder");
    }

    #[test]
    fn test_close_is_idempotent() {
        let closes = Arc::new(AtomicUsize::new(0));
        let mut serde = Serde::new(CountingEncoder(closes.clone()), IntegerDecoder::new());
        serde.close();
        serde.close();
        assert!(serde.is_closed());
        drop(serde);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes_on_error_path() {
        let closes = Arc::new(AtomicUsize::new(0));

        fn decode_short(closes: Arc<AtomicUsize>) -> Result<Option<i32>> {
            let serde = Serde::new(CountingEncoder(closes), IntegerDecoder::new());
            serde.decode("topic", Some(&[0x01, 0x02][..]))
        }

        assert!(decode_short(closes.clone()).is_err());
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_configure_one_half() {
        let configs = Configs::new()
            .with("value.serializer.encoding", "UTF-16LE")
            .with("value.deserializer.encoding", "UTF-16LE");

        let mut serde = Serde::new(StringEncoder::new(), StringDecoder::new());
        serde.decoder_mut().configure(&configs, Side::Value).unwrap();
        let bytes = serde.encode("topic", Some(&"ab".to_string())).unwrap();
        assert_eq!(bytes, Some(b"ab".to_vec()));
        assert_eq!(
            serde.decode("topic", Some(&[0x61, 0x00, 0x62, 0x00][..])).unwrap(),
            Some("ab".to_string())
        );

        serde.encoder_mut().configure(&configs, Side::Value).unwrap();
        let bytes = serde.encode("topic", Some(&"ab".to_string())).unwrap();
        assert_eq!(bytes, Some(vec![0x61, 0x00, 0x62, 0x00]));
        assert_eq!(
            serde.decode("topic", bytes.as_deref()).unwrap(),
            Some("ab".to_string())
        );
    }

    #[test]
    fn test_debug_names_halves() {
        let serde = Serde::new(IntegerEncoder::new(), IntegerDecoder::new());
        let debug = format!("{serde:?}");
        assert!(debug.contains("IntegerEncoder"));
        assert!(debug.contains("closed: false"));
    }
}
