// SPDX-License-Identifier: MIT

//! EXIF-driven composition heuristics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::exif::{self, ExifSummary};
use crate::session::SkillLevel;

/// A detected composition concern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    ShallowDepthOfField,
    SubjectCentered,
}

impl Issue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::ShallowDepthOfField => "shallow_depth_of_field",
            Issue::SubjectCentered => "subject_centered",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing one image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionAnalysis {
    pub exif: ExifSummary,
    pub composition_summary: String,
    /// Issue order = detection order
    pub issues: Vec<Issue>,
}

/// Technical plus simple composition analysis
#[derive(Debug, Default)]
pub struct VisionAnalyzer;

const SHALLOW_DOF_F_NUMBER: f64 = 2.5;
const WIDE_FOCAL_LENGTH_MM: f64 = 30.0;

impl VisionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze an image; always produces an analysis, even when EXIF
    /// extraction fails (the failure is recorded on the summary's exif).
    ///
    /// `skill_level` is accepted for future level-aware heuristics and has
    /// no effect on the output yet.
    pub fn analyze(&self, image_path: &Path, skill_level: SkillLevel) -> VisionAnalysis {
        info!("Analyzing image: {:?}", image_path);
        let summary = exif::extract(image_path);
        Self::from_exif(summary, skill_level)
    }

    fn from_exif(exif: ExifSummary, _skill_level: SkillLevel) -> VisionAnalysis {
        let mut issues = Vec::new();
        let mut summary_parts = Vec::new();

        if let Some(f_number) = exif.f_number {
            if f_number < SHALLOW_DOF_F_NUMBER {
                issues.push(Issue::ShallowDepthOfField);
                summary_parts.push(
                    "Shallow depth of field - good for isolating subjects, but watch focus.",
                );
            }
        }

        if let Some(focal_length) = exif.focal_length {
            if focal_length < WIDE_FOCAL_LENGTH_MM {
                summary_parts.push(
                    "Wide focal length - consider adding strong foreground for depth.",
                );
            }
        }

        // Fixed heuristic: there is no real subject detection, so the
        // centered-subject nudge always fires.
        summary_parts.push(
            "Subject appears roughly central; try placing it on a third for stronger composition.",
        );
        issues.push(Issue::SubjectCentered);

        VisionAnalysis {
            exif,
            composition_summary: summary_parts.join(" "),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exif_with(f_number: Option<f64>, focal_length: Option<f64>) -> ExifSummary {
        ExifSummary {
            f_number,
            focal_length,
            ..Default::default()
        }
    }

    #[test]
    fn wide_aperture_flags_shallow_depth_of_field() {
        let analysis =
            VisionAnalyzer::from_exif(exif_with(Some(1.8), None), SkillLevel::Beginner);
        assert!(analysis.issues.contains(&Issue::ShallowDepthOfField));
    }

    #[test]
    fn narrow_aperture_is_not_flagged() {
        let analysis =
            VisionAnalyzer::from_exif(exif_with(Some(2.5), None), SkillLevel::Beginner);
        assert!(!analysis.issues.contains(&Issue::ShallowDepthOfField));
    }

    #[test]
    fn missing_aperture_is_not_flagged() {
        let analysis = VisionAnalyzer::from_exif(exif_with(None, None), SkillLevel::Beginner);
        assert!(!analysis.issues.contains(&Issue::ShallowDepthOfField));
    }

    #[test]
    fn subject_centered_always_fires() {
        let analysis = VisionAnalyzer::from_exif(ExifSummary::default(), SkillLevel::Advanced);
        assert!(analysis.issues.contains(&Issue::SubjectCentered));
        assert!(analysis.composition_summary.contains("roughly central"));
    }

    #[test]
    fn fast_wide_lens_reports_all_sentences_in_order() {
        let analysis =
            VisionAnalyzer::from_exif(exif_with(Some(1.8), Some(24.0)), SkillLevel::Beginner);
        assert_eq!(
            analysis.issues,
            vec![Issue::ShallowDepthOfField, Issue::SubjectCentered]
        );

        let summary = &analysis.composition_summary;
        let dof = summary.find("Shallow depth of field").unwrap();
        let wide = summary.find("Wide focal length").unwrap();
        let centered = summary.find("Subject appears roughly central").unwrap();
        assert!(dof < wide && wide < centered);
    }

    #[test]
    fn wide_focal_length_adds_sentence_but_no_issue() {
        let analysis =
            VisionAnalyzer::from_exif(exif_with(None, Some(24.0)), SkillLevel::Beginner);
        assert!(analysis.composition_summary.contains("Wide focal length"));
        assert_eq!(analysis.issues, vec![Issue::SubjectCentered]);
    }

    #[test]
    fn extraction_failure_still_produces_analysis() {
        let analyzer = VisionAnalyzer::new();
        let analysis = analyzer.analyze(Path::new("/nonexistent.jpg"), SkillLevel::Beginner);
        assert!(analysis.exif.error.is_some());
        assert_eq!(analysis.issues, vec![Issue::SubjectCentered]);
    }

    #[test]
    fn issue_tags_serialize_snake_case() {
        let json = serde_json::to_string(&Issue::ShallowDepthOfField).unwrap();
        assert_eq!(json, "\"shallow_depth_of_field\"");
    }
}
