//! Validation of fetched animation documents.
//!
//! Only the timeline header is read here; the full document is handed to the
//! player untouched.

use crate::constants::ANIMATION_CONTENT_TYPE;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to load animation: HTTP {0}")]
    Status(u16),
    #[error("response is not JSON (content-type: {0:?})")]
    NotJson(Option<String>),
    #[error("malformed animation document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("animation has no frames (ip={in_point}, op={out_point})")]
    EmptyTimeline { in_point: f64, out_point: f64 },
    #[error("fetch aborted")]
    Aborted,
}

/// Timeline fields of a Lottie document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AnimationHeader {
    #[serde(rename = "ip")]
    pub in_point: f64,
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    #[serde(rename = "w", default)]
    pub width: Option<f64>,
    #[serde(rename = "h", default)]
    pub height: Option<f64>,
    #[serde(rename = "nm", default)]
    pub name: Option<String>,
}

impl AnimationHeader {
    /// Frame count as the player reports it (`getDuration(true)`).
    pub fn total_frames(&self) -> f64 {
        self.out_point - self.in_point
    }

    pub fn duration_secs(&self) -> Option<f64> {
        (self.frame_rate > 0.0).then(|| self.total_frames() / self.frame_rate)
    }
}

/// Accepts any content type that mentions `application/json`, parameters included.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| ct.to_ascii_lowercase().contains(ANIMATION_CONTENT_TYPE))
        .unwrap_or(false)
}

/// Check a fetched response and parse its timeline header.
pub fn validate_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
) -> Result<AnimationHeader, AssetError> {
    if !(200..300).contains(&status) {
        return Err(AssetError::Status(status));
    }
    if !is_json_content_type(content_type) {
        return Err(AssetError::NotJson(content_type.map(str::to_owned)));
    }
    parse_header(body)
}

pub fn parse_header(body: &str) -> Result<AnimationHeader, AssetError> {
    let header: AnimationHeader = serde_json::from_str(body)?;
    let frames = header.total_frames();
    if !frames.is_finite() || frames <= 0.0 {
        return Err(AssetError::EmptyTimeline {
            in_point: header.in_point,
            out_point: header.out_point,
        });
    }
    Ok(header)
}
