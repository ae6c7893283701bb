//! Text encodings tried by the loader, in fallback order.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Bytes Windows-1252 leaves undefined.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8D, 0x8F, 0x90, 0x9D];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "utf-8-sig")]
    Utf8Bom,
    #[serde(rename = "cp1252")]
    Windows1252,
    #[serde(rename = "latin1")]
    Latin1,
    #[serde(rename = "iso-8859-1")]
    Iso8859_1,
}

impl TextEncoding {
    /// Order in which the loader attempts to decode a file.
    pub const FALLBACK_ORDER: [TextEncoding; 5] = [
        Self::Utf8,
        Self::Utf8Bom,
        Self::Windows1252,
        Self::Latin1,
        Self::Iso8859_1,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-sig",
            Self::Windows1252 => "cp1252",
            Self::Latin1 => "latin1",
            Self::Iso8859_1 => "iso-8859-1",
        }
    }

    /// Decodes `bytes` without replacement characters.
    ///
    /// Returns `None` when the bytes are not valid in this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Self::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
            Self::Utf8Bom => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(body)
            }
            Self::Windows1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
            // encoding_rs folds the ISO-8859-1 label into Windows-1252, so the
            // one-byte-per-code-point mapping is done directly.
            Self::Latin1 | Self::Iso8859_1 => {
                Some(Cow::Owned(bytes.iter().copied().map(char::from).collect()))
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
