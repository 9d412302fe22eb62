// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Configurable string codec.
//!
//! Strings are written as the raw bytes of the configured [`Charset`] with
//! no length prefix. The charset defaults to UTF-8 and can be chosen per
//! side through the options described in [`crate::core::config`].

use tracing::debug;

use crate::core::{Charset, Configs, EncodingConfig, Result, Role, Side};
use crate::encoding::codec::{Decoder, Encoder};

/// Encoder for `String` values.
#[derive(Debug, Clone, Default)]
pub struct StringEncoder {
    charset: Option<Charset>,
}

impl StringEncoder {
    /// Create an encoder using the default charset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with a fixed charset.
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            charset: Some(charset),
        }
    }

    /// Charset in effect.
    pub fn charset(&self) -> Charset {
        self.charset.unwrap_or_default()
    }

    /// Encode a borrowed string slice.
    pub fn encode_str(&self, value: Option<&str>) -> Result<Option<Vec<u8>>> {
        value.map(|text| self.charset().encode(text)).transpose()
    }
}

impl Encoder<String> for StringEncoder {
    fn name(&self) -> &'static str {
        "StringEncoder"
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        if let Some(charset) = EncodingConfig::for_side(configs, Role::Encoder, side)?.get(side) {
            debug!(codec = "StringEncoder", side = side.as_str(), %charset, "configured charset");
            self.charset = Some(charset);
        }
        Ok(())
    }

    fn encode(&self, _channel: &str, value: Option<&String>) -> Result<Option<Vec<u8>>> {
        self.encode_str(value.map(String::as_str))
    }

    fn close(&mut self) {
        self.charset = None;
    }
}

/// Decoder for `String` values.
#[derive(Debug, Clone, Default)]
pub struct StringDecoder {
    charset: Option<Charset>,
}

impl StringDecoder {
    /// Create a decoder using the default charset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a fixed charset.
    pub fn with_charset(charset: Charset) -> Self {
        Self {
            charset: Some(charset),
        }
    }

    /// Charset in effect.
    pub fn charset(&self) -> Charset {
        self.charset.unwrap_or_default()
    }
}

impl Decoder<String> for StringDecoder {
    fn name(&self) -> &'static str {
        "StringDecoder"
    }

    fn configure(&mut self, configs: &Configs, side: Side) -> Result<()> {
        if let Some(charset) = EncodingConfig::for_side(configs, Role::Decoder, side)?.get(side) {
            debug!(codec = "StringDecoder", side = side.as_str(), %charset, "configured charset");
            self.charset = Some(charset);
        }
        Ok(())
    }

    fn decode(&self, _channel: &str, data: Option<&[u8]>) -> Result<Option<String>> {
        data.map(|bytes| self.charset().decode(bytes)).transpose()
    }

    fn close(&mut self) {
        self.charset = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = "testTopic";

    fn configured(encoding: &str, side: Side) -> (StringEncoder, StringDecoder) {
        let configs = Configs::new()
            .with(format!("{}.serializer.encoding", side.as_str()), encoding)
            .with(format!("{}.deserializer.encoding", side.as_str()), encoding);
        let mut encoder = StringEncoder::new();
        encoder.configure(&configs, side).unwrap();
        let mut decoder = StringDecoder::new();
        decoder.configure(&configs, side).unwrap();
        (encoder, decoder)
    }

    #[test]
    fn test_default_is_utf8() {
        let encoder = StringEncoder::new();
        assert_eq!(encoder.charset(), Charset::Utf8);
        let bytes = encoder
            .encode(TOPIC, Some(&"h\u{e9}".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(bytes, vec![0x68, 0xc3, 0xa9]);
    }

    #[test]
    fn test_round_trip_per_encoding() {
        for encoding in ["UTF8", "UTF-16"] {
            let (encoder, decoder) = configured(encoding, Side::Key);
            let text = "my string".to_string();
            let bytes = encoder.encode(TOPIC, Some(&text)).unwrap();
            assert_eq!(
                decoder.decode(TOPIC, bytes.as_deref()).unwrap(),
                Some(text),
                "encoding {encoding}"
            );
            let null = encoder.encode(TOPIC, None).unwrap();
            assert_eq!(decoder.decode(TOPIC, null.as_deref()).unwrap(), None);
        }
    }

    #[test]
    fn test_empty_string_is_present_and_empty() {
        let (encoder, decoder) = configured("UTF-16", Side::Value);
        let bytes = encoder.encode(TOPIC, Some(&String::new())).unwrap();
        assert_eq!(bytes, Some(Vec::new()));
        assert_eq!(
            decoder.decode(TOPIC, bytes.as_deref()).unwrap(),
            Some(String::new())
        );
    }

    #[test]
    fn test_side_scoping() {
        let configs = Configs::new().with("key.serializer.encoding", "UTF-16");
        let mut value_side = StringEncoder::new();
        value_side.configure(&configs, Side::Value).unwrap();
        assert_eq!(value_side.charset(), Charset::Utf8);

        let mut key_side = StringEncoder::new();
        key_side.configure(&configs, Side::Key).unwrap();
        assert_eq!(key_side.charset(), Charset::Utf16);
    }

    #[test]
    fn test_unrecognized_options_ignored() {
        let configs = Configs::new().with("key.serializer.compression", "zstd");
        let mut encoder = StringEncoder::with_charset(Charset::Utf16Le);
        encoder.configure(&configs, Side::Key).unwrap();
        assert_eq!(encoder.charset(), Charset::Utf16Le);
    }

    #[test]
    fn test_unknown_encoding_fails_configure() {
        let configs = Configs::new().with("value.deserializer.encoding", "NOPE-1");
        let mut decoder = StringDecoder::new();
        let err = decoder.configure(&configs, Side::Value).unwrap_err();
        assert_eq!(err.kind(), crate::core::ErrorKind::Configuration);
        assert_eq!(decoder.charset(), Charset::Utf8);
    }

    #[test]
    fn test_bad_option_on_other_side_is_ignored() {
        let configs = Configs::new()
            .with("key.serializer.encoding", "UTF-16")
            .with("value.serializer.encoding", "NOT-A-CHARSET");
        let mut encoder = StringEncoder::new();
        encoder.configure(&configs, Side::Key).unwrap();
        assert_eq!(encoder.charset(), Charset::Utf16);

        let mut value_side = StringEncoder::new();
        assert!(value_side.configure(&configs, Side::Value).is_err());
    }

    #[test]
    fn test_bad_fallback_overridden_by_scoped_option() {
        let configs = Configs::new()
            .with("serializer.encoding", "NOT-A-CHARSET")
            .with("key.serializer.encoding", "UTF-8")
            .with("deserializer.encoding", "NOT-A-CHARSET")
            .with("key.deserializer.encoding", "UTF-16LE");
        let mut encoder = StringEncoder::new();
        encoder.configure(&configs, Side::Key).unwrap();
        assert_eq!(encoder.charset(), Charset::Utf8);

        let mut decoder = StringDecoder::new();
        decoder.configure(&configs, Side::Key).unwrap();
        assert_eq!(decoder.charset(), Charset::Utf16Le);
    }

    #[test]
    fn test_close_resets_configuration() {
        let (mut encoder, mut decoder) = configured("UTF-16", Side::Key);
        encoder.close();
        decoder.close();
        encoder.close();
        assert_eq!(encoder.charset(), Charset::Utf8);
        assert_eq!(decoder.charset(), Charset::Utf8);
    }

    #[test]
    fn test_malformed_bytes_fail() {
        let decoder = StringDecoder::new();
        let err = decoder.decode(TOPIC, Some(&[0xff, 0xfe, 0xfd][..])).unwrap_err();
        assert!(err.is_serialization());
    }
}
