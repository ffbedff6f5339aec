//! Best-effort decoding of the index document
//!
//! Decoding runs detect → decode → fallback. The detector is pluggable so
//! callers can pin an encoding instead of guessing.

use encoding_rs::{Encoding, UTF_8};

/// Picks the encoding to decode a document with
pub trait EncodingDetector {
    /// `None` means "no idea"; decoding then falls back to lossy UTF-8.
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding>;
}

/// Guesses with `chardetng` when the bytes are not already valid UTF-8
#[derive(Debug, Clone, Copy, Default)]
pub struct ChardetDetector;

impl EncodingDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            return Some(encoding);
        }
        if std::str::from_utf8(bytes).is_ok() {
            return Some(UTF_8);
        }

        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        Some(detector.guess(None, true))
    }
}

/// Always reports the same encoding
#[derive(Debug, Clone, Copy)]
pub struct FixedEncoding(pub &'static Encoding);

impl EncodingDetector for FixedEncoding {
    fn detect(&self, _bytes: &[u8]) -> Option<&'static Encoding> {
        Some(self.0)
    }
}

/// Result of decoding a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// Encoding the text was finally decoded with
    pub encoding: &'static Encoding,
    /// True when undecodable bytes were replaced
    pub lossy: bool,
}

/// Decode `bytes` with whatever `detector` picks, falling back to lossy UTF-8
pub fn decode(bytes: &[u8], detector: &dyn EncodingDetector) -> DecodedText {
    if let Some(encoding) = detector.detect(bytes) {
        let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
        if !had_errors {
            return DecodedText {
                text: text.into_owned(),
                encoding,
                lossy: false,
            };
        }
        tracing::debug!("{} could not decode the document cleanly", encoding.name());
    }

    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    DecodedText {
        text: text.into_owned(),
        encoding: UTF_8,
        lossy: had_errors,
    }
}
