// SPDX-License-Identifier: MIT

//! Coaching agent: turns analysis + question into principles and advice text

use serde::Serialize;
use tracing::debug;

use crate::knowledge::{self, Principle};
use crate::session::Session;
use crate::vision::{Issue, VisionAnalysis};

/// Fixed practice suggestion attached to every coaching response
pub const EXERCISE: &str = "Exercise: Take 10 photos of a similar scene. For each frame, \
     place the subject on a different third, keep the horizon straight, and review which \
     compositions feel strongest.";

/// Assembled coaching output
#[derive(Debug, Clone, Serialize)]
pub struct CoachingResponse {
    /// Newline-joined advice lines
    pub text: String,
    /// Retrieval result, in knowledge-base order
    pub principles: Vec<Principle>,
    /// Copied from the vision analysis, or empty for text-only queries
    pub issues: Vec<Issue>,
    pub exercise: &'static str,
}

/// Turns analysis + question + history into coaching text
#[derive(Debug, Default)]
pub struct CoachingAgent;

impl CoachingAgent {
    pub fn new() -> Self {
        Self
    }

    /// Build a coaching response. `vision = None` is the text-only path and
    /// works end to end; there are no error conditions.
    pub fn coach(
        &self,
        query: &str,
        vision: Option<&VisionAnalysis>,
        _session: &Session,
    ) -> CoachingResponse {
        let issues: Vec<Issue> = vision.map(|v| v.issues.clone()).unwrap_or_default();

        let mut retrieval_query = query.to_string();
        for issue in &issues {
            retrieval_query.push(' ');
            retrieval_query.push_str(issue.as_str());
        }
        debug!("Retrieval query: {}", retrieval_query);
        let principles = knowledge::retrieve(&retrieval_query);

        let mut lines = vec!["Here is how you can improve this photo:".to_string()];

        if issues.contains(&Issue::SubjectCentered) {
            lines.push(
                "- Move your main subject towards one of the thirds instead of the exact center."
                    .to_string(),
            );
        }
        if issues.contains(&Issue::ShallowDepthOfField) {
            lines.push(
                "- At very wide apertures, be careful where you place focus so key details stay sharp."
                    .to_string(),
            );
        }

        lines.push(
            "- Check that your horizon is level; a small tilt can make landscapes feel unbalanced."
                .to_string(),
        );
        lines.push(
            "- Use foreground elements or leading lines to guide the viewer's eye into the scene."
                .to_string(),
        );

        CoachingResponse {
            text: lines.join("\n"),
            principles,
            issues,
            exercise: EXERCISE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif::ExifSummary;

    fn analysis_with(issues: Vec<Issue>) -> VisionAnalysis {
        VisionAnalysis {
            exif: ExifSummary::default(),
            composition_summary: String::new(),
            issues,
        }
    }

    #[test]
    fn text_only_query_has_no_issues() {
        let agent = CoachingAgent::new();
        let response = agent.coach("rule of thirds", None, &Session::default());
        assert!(response.issues.is_empty());
        assert!(response.principles.iter().any(|p| p.id == 1));
    }

    #[test]
    fn centered_subject_adds_thirds_line() {
        let agent = CoachingAgent::new();
        let vision = analysis_with(vec![Issue::SubjectCentered]);
        let response = agent.coach("help", Some(&vision), &Session::default());
        assert!(response.text.contains("towards one of the thirds"));
        assert!(!response.text.contains("very wide apertures"));
    }

    #[test]
    fn advice_lines_come_in_fixed_order() {
        let agent = CoachingAgent::new();
        let vision = analysis_with(vec![Issue::ShallowDepthOfField, Issue::SubjectCentered]);
        let response = agent.coach("improve this", Some(&vision), &Session::default());

        let lines: Vec<&str> = response.text.lines().collect();
        assert_eq!(lines[0], "Here is how you can improve this photo:");
        assert!(lines[1].contains("towards one of the thirds"));
        assert!(lines[2].contains("very wide apertures"));
        assert!(lines[3].contains("horizon is level"));
        assert!(lines[4].contains("leading lines"));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn horizon_and_leading_lines_always_present() {
        let agent = CoachingAgent::new();
        let response = agent.coach("anything", None, &Session::default());
        assert!(response.text.contains("horizon is level"));
        assert!(response.text.contains("leading lines"));
    }

    #[test]
    fn exercise_is_fixed() {
        let agent = CoachingAgent::new();
        let a = agent.coach("one", None, &Session::default());
        let b = agent.coach("two", None, &Session::default());
        assert_eq!(a.exercise, b.exercise);
        assert!(a.exercise.starts_with("Exercise: Take 10 photos"));
    }

    #[test]
    fn issues_are_copied_from_vision() {
        let agent = CoachingAgent::new();
        let vision = analysis_with(vec![Issue::ShallowDepthOfField, Issue::SubjectCentered]);
        let response = agent.coach("q", Some(&vision), &Session::default());
        assert_eq!(response.issues, vision.issues);
    }
}
