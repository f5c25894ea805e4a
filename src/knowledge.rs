// SPDX-License-Identifier: MIT

//! Static photography principles and keyword retrieval

use serde::Serialize;

use crate::session::SkillLevel;

/// A static advice record in the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Principle {
    pub id: u32,
    pub topic: &'static str,
    pub level: SkillLevel,
    pub text: &'static str,
}

/// The knowledge base, in fixed order; never mutated
pub const PRINCIPLES: &[Principle] = &[
    Principle {
        id: 1,
        topic: "rule of thirds",
        level: SkillLevel::Beginner,
        text: "Place key subjects near the intersections of a 3x3 grid.",
    },
    Principle {
        id: 2,
        topic: "leading lines",
        level: SkillLevel::Beginner,
        text: "Use lines like roads or fences to guide the viewer's eye.",
    },
    Principle {
        id: 3,
        topic: "horizon leveling",
        level: SkillLevel::Beginner,
        text: "Keep the horizon level unless you want a deliberate tilt.",
    },
    Principle {
        id: 4,
        topic: "foreground interest",
        level: SkillLevel::Intermediate,
        text: "Add a strong foreground element to create depth in landscapes.",
    },
];

/// Keyword retriever over the principle topics.
///
/// A principle matches when any word of its topic occurs as a substring of
/// the lower-cased query. Substring, not whole-word: "thirds" matches a query
/// containing "thirdsomething". With no matches, the first two entries are
/// returned as a fixed fallback, so the result is always non-empty.
pub fn retrieve(query: &str) -> Vec<Principle> {
    let q = query.to_lowercase();
    let hits: Vec<Principle> = PRINCIPLES
        .iter()
        .filter(|p| p.topic.split_whitespace().any(|word| q.contains(word)))
        .copied()
        .collect();

    if hits.is_empty() {
        PRINCIPLES[..2].to_vec()
    } else {
        hits
    }
}
