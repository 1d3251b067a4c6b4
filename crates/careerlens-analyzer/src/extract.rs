//! Recover the JSON document embedded in an oracle reply
//!
//! Pure text slicing. Nothing is parsed here, so a reply that cannot be sliced
//! and a slice that cannot be parsed show up as different diagnostics.

use serde::Serialize;

/// Which extraction rule selected the document text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// A fence opened with a JSON language marker
    JsonFence,
    /// The first generic fence pair
    GenericFence,
    /// No fence; the whole reply
    Verbatim,
}

impl ExtractionSource {
    /// Short label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionSource::JsonFence => "json fence",
            ExtractionSource::GenericFence => "generic fence",
            ExtractionSource::Verbatim => "verbatim",
        }
    }
}

/// Text selected from a reply, ready for parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Trimmed document text
    pub text: String,
    /// Rule that produced it
    pub source: ExtractionSource,
}

struct FenceRule {
    opener: &'static str,
    source: ExtractionSource,
}

/// Ordered rule table, first match wins
///
/// When the oracle changes how it wraps replies, only this table changes.
const FENCE_RULES: &[FenceRule] = &[
    FenceRule {
        opener: "```json",
        source: ExtractionSource::JsonFence,
    },
    FenceRule {
        opener: "```",
        source: ExtractionSource::GenericFence,
    },
];

const CLOSING_FENCE: &str = "```";

/// Select the JSON document text from a raw reply
///
/// Only the first matching fenced block is used. Unclosed fences run to the
/// end of the reply; mismatched fences may yield malformed text, which the
/// parser then reports.
pub fn extract_document(reply: &str) -> ExtractedDocument {
    for rule in FENCE_RULES {
        if let Some(start) = reply.find(rule.opener) {
            let body = &reply[start + rule.opener.len()..];
            let end = body.find(CLOSING_FENCE).unwrap_or(body.len());
            return ExtractedDocument {
                text: body[..end].trim().to_string(),
                source: rule.source,
            };
        }
    }

    ExtractedDocument {
        text: reply.trim().to_string(),
        source: ExtractionSource::Verbatim,
    }
}
