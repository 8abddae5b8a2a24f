//! Lenient text extraction from `generateContent` responses.
//!
//! The response schema drifts between API versions and models, so the text is recovered by an
//! ordered matcher over the shapes in [`ResponseShape`] instead of a single strict schema.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Returned when the service produced no response at all.
pub const NO_RESPONSE_PLACEHOLDER: &str = "No response received from Gemini.";

/// One fragment of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A bare string part.
    Bare(String),
    /// An object part; only `text` is used (function calls, inline data etc. carry none).
    Object {
        #[serde(default)]
        text: Option<String>,
    },
    /// Anything else (numbers, arrays); never contributes text.
    Other(Value),
}

impl Part {
    /// Text carried by this part, if any. Empty strings count as no text.
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Part::Bare(s) => Some(s.as_str()),
            Part::Object { text } => text.as_deref(),
            Part::Other(_) => None,
        };
        text.filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

/// One alternative generated output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl Candidate {
    /// All part texts joined with `\n` and trimmed; `None` if nothing is left.
    pub fn joined_text(&self) -> Option<String> {
        let parts = self.content.as_ref()?.parts.as_ref()?;
        let joined = parts
            .iter()
            .filter_map(Part::text)
            .collect::<Vec<_>>()
            .join("\n");
        let trimmed = joined.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// Recognized response shapes, in matching order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// Top-level `text` field with non-empty trimmed content.
    PrimaryText(String),
    /// First candidate whose joined part text is non-empty.
    CandidateList(String),
    /// Nothing textual could be recovered.
    Unrecognized,
}

impl ResponseShape {
    /// Classifies a response: PrimaryText, then CandidateList, then Unrecognized.
    ///
    /// Fields are probed one at a time: a mistyped sibling field never hides a usable `text`, and
    /// a malformed candidate is logged and skipped.
    pub fn classify(response: &Value) -> Self {
        if let Some(text) = response.get("text").and_then(Value::as_str).map(str::trim) {
            if !text.is_empty() {
                return ResponseShape::PrimaryText(text.to_string());
            }
        }

        let candidates = match response.get("candidates") {
            None | Some(Value::Null) => return ResponseShape::Unrecognized,
            Some(Value::Array(candidates)) => candidates,
            Some(other) => {
                warn!(candidates = %other, "Gemini response candidates is not a list");
                return ResponseShape::Unrecognized;
            }
        };

        candidates
            .iter()
            .enumerate()
            .filter_map(|(index, raw)| match Candidate::deserialize(raw) {
                Ok(candidate) => Some(candidate),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed Gemini candidate");
                    None
                }
            })
            .find_map(|candidate| candidate.joined_text())
            .map(ResponseShape::CandidateList)
            .unwrap_or(ResponseShape::Unrecognized)
    }
}

/// Turns a response into displayable text.
///
/// `None` (no response at all) yields [`NO_RESPONSE_PLACEHOLDER`]; an unrecognized response is
/// returned as its serialized JSON.
pub fn extract_text(response: Option<&Value>) -> String {
    let Some(response) = response else {
        return NO_RESPONSE_PLACEHOLDER.to_string();
    };
    match ResponseShape::classify(response) {
        ResponseShape::PrimaryText(text) | ResponseShape::CandidateList(text) => text,
        ResponseShape::Unrecognized => response.to_string(),
    }
}
