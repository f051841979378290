//! Decoding of embedded `data:` resources into typed byte buffers.
//!
//! Accepts `data:[<mediatype>][;param=value]*[;base64],<payload>`. Base64
//! payloads are decoded leniently: whitespace, missing padding, URL-safe
//! symbols and a dangling final symbol are tolerated. Characters outside the
//! alphabet are rejected.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Media type assumed when the data URI does not declare one.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Why a data URI could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataUriError {
    /// Input does not start with `data:`
    #[error("missing `data:` scheme")]
    MissingScheme,

    /// No `,` separating metadata from payload
    #[error("missing `,` between metadata and payload")]
    MissingComma,

    /// Payload is declared base64 but is not
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// A decoded data URI: the declared media type and the payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataUri {
    /// Declared media type, lowercased (e.g. "image/jpeg")
    pub media_type: String,

    /// Decoded payload
    #[serde(rename = "byte_length", serialize_with = "serialize_len")]
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// Decode a data URI string.
    pub fn decode(input: &str) -> Result<Self, DataUriError> {
        let input = input.trim();
        let rest = strip_scheme(input).ok_or(DataUriError::MissingScheme)?;
        let (meta, payload) = rest.split_once(',').ok_or(DataUriError::MissingComma)?;

        let mut segments = meta.split(';');
        let media_type = segments
            .next()
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string());

        let is_base64 = meta
            .rsplit(';')
            .next()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("base64"))
            && meta.contains(';');

        let bytes = if is_base64 {
            decode_base64(payload)?
        } else {
            percent_decode(payload)
        };

        Ok(Self { media_type, bytes })
    }

    /// Decoded payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn strip_scheme(input: &str) -> Option<&str> {
    let prefix = input.get(..5)?;
    if prefix.eq_ignore_ascii_case("data:") {
        Some(&input[5..])
    } else {
        None
    }
}

fn decode_base64(payload: &str) -> Result<Vec<u8>, DataUriError> {
    let mut cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let trimmed_len = cleaned.trim_end_matches('=').len();
    cleaned.truncate(trimmed_len);

    // A single leftover symbol carries fewer than 8 bits; drop it.
    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }

    LENIENT
        .decode(cleaned.as_bytes())
        .map_err(|e| DataUriError::InvalidBase64(e.to_string()))
}

fn percent_decode(payload: &str) -> Vec<u8> {
    let raw = payload.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' && i + 2 < raw.len() {
            if let (Some(hi), Some(lo)) = (hex_value(raw[i + 1]), hex_value(raw[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(raw[i]);
        i += 1;
    }
    out
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn serialize_len<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(bytes.len() as u64)
}
