// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Keyed Serdes
//!
//! Typed serialization for keyed message channels.
//!
//! A [`Serde`] pairs an [`Encoder`] and a [`Decoder`] for one value type.
//! Every call carries the channel name the value belongs to, and a null
//! value (`None`) always maps to an absent payload (`None`), never to an
//! empty one.
//!
//! ## Architecture
//!
//! - `core/` - Errors, charsets, configuration and the declared value kinds
//! - `encoding/` - Codec traits, the built-in codecs and the [`Serdes`] factory
//!
//! ## Wire formats
//!
//! | Kind       | Bytes                                              |
//! |------------|----------------------------------------------------|
//! | Short      | 2, big-endian two's-complement                     |
//! | Integer    | 4, big-endian two's-complement                     |
//! | Long       | 8, big-endian two's-complement                     |
//! | Float      | 4, big-endian IEEE-754 raw bits                    |
//! | Double     | 8, big-endian IEEE-754 raw bits                    |
//! | String     | text in the configured charset, no length prefix   |
//! | ByteArray  | verbatim                                           |
//! | RawBuffer  | verbatim                                           |
//! | Uuid       | hyphenated text in the configured charset          |
//!
//! ## Example: Configuring a string serde
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use keyed_serdes::{Configs, Serdes, Side};
//!
//! let configs = Configs::new()
//!     .with("key.serializer.encoding", "UTF-16")
//!     .with("key.deserializer.encoding", "UTF-16");
//!
//! let mut serde = Serdes::string();
//! serde.configure(&configs, Side::Key)?;
//!
//! let bytes = serde.encode("users", Some(&"my string".to_string()))?;
//! assert_eq!(serde.decode("users", bytes.as_deref())?.as_deref(), Some("my string"));
//! serde.close();
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use crate::core::{
    Charset, Configs, EncodingConfig, ErrorKind, Result, Role, SerdeError, Side, ValueKind,
};

// Codecs and serde factory
pub mod encoding;

pub use encoding::{AnySerde, BuiltinValue, Decoder, Encoder, Serde, Serdes};
