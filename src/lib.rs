// SPDX-License-Identifier: MIT

//! lenscoach: Local AI Photography Coach
//!
//! Analyzes a photo's EXIF metadata for composition heuristics, matches a
//! small knowledge base of photography principles against the question, and
//! assembles coaching text. An optional Ollama-backed assistant answers
//! free-text questions and generates creative shot lists.

pub mod assistant;
pub mod coach;
pub mod config;
pub mod error;
pub mod exif;
pub mod knowledge;
pub mod ollama;
pub mod orchestrator;
pub mod session;
pub mod vision;

pub use config::AppConfig;
pub use error::{CoachError, Result};
