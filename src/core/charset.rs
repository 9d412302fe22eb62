// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text encodings selectable by name for the string-based codecs.
//!
//! Conversion is strict in both directions: characters the charset cannot
//! represent and malformed byte sequences are reported as errors, never
//! replaced.

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};

use super::error::{Result, SerdeError};

const BOM_BE: [u8; 2] = [0xfe, 0xff];
const BOM_LE: [u8; 2] = [0xff, 0xfe];

/// Character encoding used to turn strings into bytes and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Charset {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16 with a big-endian byte order mark on output
    Utf16,
    /// UTF-16 big-endian, no byte order mark
    Utf16Be,
    /// UTF-16 little-endian, no byte order mark
    Utf16Le,
    /// ISO-8859-1 (Latin-1)
    Iso8859_1,
    /// 7-bit US-ASCII
    UsAscii,
}

impl std::str::FromStr for Charset {
    type Err = SerdeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_ascii_lowercase();
        match normalized.as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(Charset::Utf8),
            "utf-16" | "utf16" | "utf_16" | "unicode" => Ok(Charset::Utf16),
            "utf-16be" | "utf_16be" | "x-utf-16be" | "unicodebigunmarked" => Ok(Charset::Utf16Be),
            "utf-16le" | "utf_16le" | "x-utf-16le" | "unicodelittleunmarked" => {
                Ok(Charset::Utf16Le)
            }
            "iso-8859-1" | "iso8859-1" | "iso8859_1" | "iso_8859_1" | "iso_8859-1"
            | "iso-latin-1" | "latin1" | "l1" | "8859_1" | "cp819" | "ibm819" => {
                Ok(Charset::Iso8859_1)
            }
            "us-ascii" | "ascii" | "us_ascii" | "ascii7" | "iso646-us" | "646" => {
                Ok(Charset::UsAscii)
            }
            _ => Err(SerdeError::unsupported_charset(s)),
        }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Charset {
    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::UsAscii => "US-ASCII",
        }
    }

    /// Encode `text` into bytes.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Charset::Utf8 => Ok(text.as_bytes().to_vec()),
            Charset::Utf16 => {
                if text.is_empty() {
                    return Ok(Vec::new());
                }
                let mut out = Vec::with_capacity(2 + text.len() * 2);
                out.extend_from_slice(&BOM_BE);
                write_utf16::<BigEndian>(&mut out, text)?;
                Ok(out)
            }
            Charset::Utf16Be => {
                let mut out = Vec::with_capacity(text.len() * 2);
                write_utf16::<BigEndian>(&mut out, text)?;
                Ok(out)
            }
            Charset::Utf16Le => {
                let mut out = Vec::with_capacity(text.len() * 2);
                write_utf16::<LittleEndian>(&mut out, text)?;
                Ok(out)
            }
            Charset::Iso8859_1 => self.encode_single_byte(text, 0xff),
            Charset::UsAscii => self.encode_single_byte(text, 0x7f),
        }
    }

    /// Decode `data` into a string.
    pub fn decode(&self, data: &[u8]) -> Result<String> {
        match self {
            Charset::Utf8 => std::str::from_utf8(data)
                .map(str::to_owned)
                .map_err(|e| SerdeError::serialization(self.name(), e.to_string())),
            Charset::Utf16 => {
                if data.starts_with(&BOM_BE) {
                    self.decode_utf16::<BigEndian>(&data[2..])
                } else if data.starts_with(&BOM_LE) {
                    self.decode_utf16::<LittleEndian>(&data[2..])
                } else {
                    self.decode_utf16::<BigEndian>(data)
                }
            }
            Charset::Utf16Be => self.decode_utf16::<BigEndian>(data),
            Charset::Utf16Le => self.decode_utf16::<LittleEndian>(data),
            Charset::Iso8859_1 => Ok(data.iter().map(|&b| char::from(b)).collect()),
            Charset::UsAscii => {
                if let Some(pos) = data.iter().position(|b| !b.is_ascii()) {
                    return Err(SerdeError::serialization(
                        self.name(),
                        format!("byte 0x{:02x} at offset {pos} is not ASCII", data[pos]),
                    ));
                }
                Ok(data.iter().map(|&b| char::from(b)).collect())
            }
        }
    }

    fn encode_single_byte(&self, text: &str, max: u32) -> Result<Vec<u8>> {
        text.chars()
            .map(|c| {
                let code = u32::from(c);
                if code <= max {
                    Ok(code as u8)
                } else {
                    Err(SerdeError::serialization(
                        self.name(),
                        format!("character U+{code:04X} is not representable"),
                    ))
                }
            })
            .collect()
    }

    fn decode_utf16<B: ByteOrder>(&self, data: &[u8]) -> Result<String> {
        if data.len() % 2 != 0 {
            return Err(SerdeError::serialization(
                self.name(),
                format!("odd byte length {}", data.len()),
            ));
        }
        let units = data.chunks_exact(2).map(B::read_u16);
        char::decode_utf16(units)
            .map(|r| {
                r.map_err(|e| {
                    SerdeError::serialization(
                        self.name(),
                        format!("unpaired surrogate 0x{:04x}", e.unpaired_surrogate()),
                    )
                })
            })
            .collect()
    }
}

fn write_utf16<B: ByteOrder>(out: &mut Vec<u8>, text: &str) -> Result<()> {
    for unit in text.encode_utf16() {
        out.write_u16::<B>(unit)?;
    }
    Ok(())
}
