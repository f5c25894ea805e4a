// SPDX-License-Identifier: MIT

//! Orchestrator: vision analysis, coaching, and session bookkeeping per call

use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::coach::{CoachingAgent, CoachingResponse};
use crate::session::{HistoryEntry, Session, SessionStore};
use crate::vision::{VisionAnalysis, VisionAnalyzer};

/// Combined payload returned to a UI/CLI caller
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub vision: Option<VisionAnalysis>,
    pub coach: CoachingResponse,
    pub session: Session,
}

/// Stateless pipeline over an injected session store
pub struct Orchestrator<S: SessionStore> {
    vision: VisionAnalyzer,
    coach: CoachingAgent,
    store: S,
}

impl<S: SessionStore> Orchestrator<S> {
    pub fn new(vision: VisionAnalyzer, coach: CoachingAgent, store: S) -> Self {
        Self {
            vision,
            coach,
            store,
        }
    }

    /// Run one coaching interaction.
    ///
    /// Vision analysis runs only when an image path is supplied; the coaching
    /// agent always runs. Exactly one history entry is appended per call.
    pub fn run(&mut self, user_id: &str, image_path: Option<&Path>, query: &str) -> RunResult {
        let mut session = self.store.get_or_default(user_id);
        debug!(
            "run: user={} history_len={} image={:?}",
            user_id,
            session.history.len(),
            image_path
        );

        let vision_result = image_path
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| self.vision.analyze(p, session.skill_level));

        let coach_result = self.coach.coach(query, vision_result.as_ref(), &session);

        session.history.push(HistoryEntry {
            timestamp: Utc::now(),
            query: query.to_string(),
            issues: vision_result
                .as_ref()
                .map(|v| v.issues.clone())
                .unwrap_or_default(),
        });
        self.store.put(user_id, session.clone());

        RunResult {
            vision: vision_result,
            coach: coach_result,
            session,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
