//! # emx-filetype
//!
//! Classifies the text encoding of a file from its raw bytes.
//!
//! Every input maps to exactly one [`Verdict`]:
//!
//! | Verdict   | Label                |
//! |-----------|----------------------|
//! | `Empty`   | `empty`              |
//! | `Ascii`   | `ASCII text`         |
//! | `Iso8859` | `ISO-8859 text`      |
//! | `Utf8`    | `UTF-8 Unicode text` |
//! | `Data`    | `data`               |
//!
//! ## How It Works
//!
//! A single forward pass keeps three hypotheses open (ASCII, ISO-8859-1,
//! UTF-8). Each byte can only rule a hypothesis out, never back in:
//!
//! - **ASCII**: `0x07..=0x0D`, `0x1B` and `0x20..=0x7E`
//! - **ISO-8859-1**: the ASCII set plus `0xA0..=0xFF`
//! - **UTF-8**: lead bytes declare a 1-4 byte sequence, the rest must be
//!   `10xxxxxx` continuation bytes
//!
//! Control bytes such as `NUL` rule out all three at once.
//!
//! ## Verdict Order
//!
//! 1. No bytes → `Empty`
//! 2. ASCII survived → `Ascii`
//! 3. UTF-8 survived and a multi-byte sequence was seen → `Utf8`
//! 4. ISO-8859-1 survived → `Iso8859`
//! 5. Otherwise → `Data`
//!
//! Steps 3 and 4 swap with [`DetectConfig::prefer_utf8`] set to `false`.
//!
//! ```rust
//! use emx_filetype::{classify_bytes, Verdict};
//!
//! assert_eq!(classify_bytes(b"caf\xC3\xA9"), Verdict::Utf8);
//! assert_eq!(classify_bytes(b"caf\xE9"), Verdict::Iso8859);
//! assert_eq!(classify_bytes(b"\x00\x01"), Verdict::Data);
//! ```

pub mod bytes;
pub mod detector;
pub mod error;
pub mod source;
pub mod utf8;

pub use detector::{classify, classify_bytes, ClassificationState, DetectConfig, Detector, Verdict};
pub use error::DetectError;
pub use source::{ByteSource, ReaderSource};
pub use utf8::{Utf8Failure, Utf8Sequence};
