// SPDX-License-Identifier: MIT

//! EXIF extraction for the coach-relevant subset of camera settings
//!
//! Extraction never fails from the caller's point of view: decode problems
//! are captured in [`ExifSummary::error`] and every field stays `None`.

use exif::{In, Tag, Value};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Coach-relevant EXIF fields, serialized under their EXIF tag names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExifSummary {
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "FNumber")]
    pub f_number: Option<f64>,
    #[serde(rename = "ISOSpeedRatings")]
    pub iso: Option<u32>,
    #[serde(rename = "FocalLength")]
    pub focal_length: Option<f64>,
    #[serde(rename = "ExposureTime")]
    pub exposure_time: Option<f64>,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Extract EXIF metadata from an image file.
///
/// Any decode failure surfaces as `error` on the summary rather than as a
/// returned error, so analysis can always proceed with whatever was read.
pub fn extract(image_path: &Path) -> ExifSummary {
    match read_fields(image_path) {
        Ok(summary) => summary,
        Err(reason) => {
            debug!("EXIF extraction failed for {:?}: {}", image_path, reason);
            ExifSummary {
                error: Some(reason),
                ..Default::default()
            }
        }
    }
}

fn read_fields(image_path: &Path) -> std::result::Result<ExifSummary, String> {
    let file = File::open(image_path).map_err(|e| e.to_string())?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| e.to_string())?;

    Ok(ExifSummary {
        model: ascii_field(&exif, Tag::Model),
        f_number: rational_field(&exif, Tag::FNumber).map(round2),
        iso: uint_field(&exif, Tag::PhotographicSensitivity),
        focal_length: rational_field(&exif, Tag::FocalLength).map(round2),
        exposure_time: rational_field(&exif, Tag::ExposureTime),
        error: None,
    })
}

fn ascii_field(exif: &exif::Exif, tag: Tag) -> Option<String> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Ascii(chunks) if !chunks.is_empty() => {
            let text = String::from_utf8_lossy(&chunks[0]);
            Some(text.trim_end_matches('\0').trim().to_string())
        }
        _ => None,
    }
}

fn rational_field(exif: &exif::Exif, tag: Tag) -> Option<f64> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) if !values.is_empty() && values[0].denom != 0 => {
            Some(values[0].to_f64())
        }
        _ => None,
    }
}

fn uint_field(exif: &exif::Exif, tag: Tag) -> Option<u32> {
    exif.get_field(tag, In::PRIMARY)?.value.get_uint(0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
