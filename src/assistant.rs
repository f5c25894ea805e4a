// SPDX-License-Identifier: MIT

//! LLM-backed Q&A and shot-list generation over the local Ollama runtime
//!
//! This is the integration layer around the model: transport and generation
//! failures are turned into user-visible advisory strings, never propagated.

use tracing::warn;

use crate::config::EngineConfig;
use crate::knowledge::{self, Principle};
use crate::ollama::{GenerateOptions, OllamaClient};

/// Contexts shorter than this carry no usable grounding
const MIN_CONTEXT_LEN: usize = 50;
/// Above this many corruption markers the context is treated as garbage
const MAX_CORRUPTION_MARKS: usize = 5;
/// Shot lists get a looser sampling temperature than grounded answers
const SHOT_LIST_TEMPERATURE: f64 = 0.7;

/// Grounded question answering and creative planning
pub struct Assistant {
    client: OllamaClient,
    model: String,
    retries: u32,
}

impl Assistant {
    pub fn new(engine: &EngineConfig) -> Self {
        Self {
            client: OllamaClient::with_timeout(
                &engine.url,
                std::time::Duration::from_secs(engine.timeout_secs),
            ),
            model: engine.models.text.clone(),
            retries: engine.retries,
        }
    }

    /// Answer a photography question, grounded in retrieved principles.
    ///
    /// Always returns an answer string plus the principles used as context;
    /// model failures come back as advisory text.
    pub async fn answer(&self, question: &str) -> (String, Vec<Principle>) {
        let principles = knowledge::retrieve(question);
        let context = principles
            .iter()
            .map(|p| format!("{}: {}", p.topic, p.text))
            .collect::<Vec<_>>()
            .join("\n\n");

        if let Err(reason) = validate_context(&context) {
            return (
                format!(
                    "{}. Try asking about exposure, lighting, composition, or focus.",
                    reason
                ),
                principles,
            );
        }

        let prompt = answer_prompt(question, &context);
        match self
            .client
            .generate_with_retry(&self.model, &prompt, self.retries)
            .await
        {
            Ok(text) => {
                let answer = text.trim().to_string();
                if answer.len() < 10 {
                    (
                        "Error: model returned an empty response. Restart Ollama and try again."
                            .to_string(),
                        principles,
                    )
                } else {
                    (answer, principles)
                }
            }
            Err(e) => {
                warn!("Answer generation failed: {}", e);
                (
                    format!("Error: {}. Make sure Ollama is running with: ollama serve", e),
                    principles,
                )
            }
        }
    }

    /// Generate a 6-step creative shot list for a theme via chain-of-thought
    /// prompting. Failures come back as advisory text.
    pub async fn shot_list(&self, theme: &str) -> String {
        let prompt = shot_list_prompt(theme);
        match self
            .client
            .generate_with_options(
                &self.model,
                &prompt,
                GenerateOptions {
                    temperature: Some(SHOT_LIST_TEMPERATURE),
                },
            )
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!("Shot list generation failed: {}", e);
                format!("Error: {}. Make sure Ollama is running with: ollama serve", e)
            }
        }
    }
}

/// Check that retrieved context is usable (long enough, not corrupted)
fn validate_context(context: &str) -> std::result::Result<(), &'static str> {
    if context.len() < MIN_CONTEXT_LEN {
        return Err("No relevant information found");
    }

    // Markers typical of broken PDF text extraction
    let corruption = context.matches("/lf").count() + context.matches("BD/").count();
    if corruption > MAX_CORRUPTION_MARKS {
        return Err("Retrieved content appears corrupted");
    }

    Ok(())
}

fn answer_prompt(question: &str, context: &str) -> String {
    format!(
        "Based on the context below, answer this question: {}\n\n\
         Context:\n{}\n\n\
         Answer concisely:",
        question, context
    )
}

fn shot_list_prompt(theme: &str) -> String {
    format!(
        "You are a creative photography director.\n\
         Generate a detailed 6-step creative shot list for a photographer.\n\n\
         Let's think through this step-by-step:\n\n\
         1. **Mood & Tone:** What is the emotional atmosphere?\n\
         2. **Shot 1 (Wide/Establishing):** What establishes the scene?\n\
         3. **Shot 2 (Medium/Action):** What shows the main subject?\n\
         4. **Shot 3 (Close-up/Detail):** What intimate detail matters?\n\
         5. **Shot 4 (Creative/Angle):** What unconventional perspective?\n\
         6. **Shot 5 (Hero/Final):** What's the ultimate winning shot?\n\n\
         For EACH shot include: Composition technique, Lighting approach, One technical tip.\n\n\
         Theme: \"{}\"\n\n\
         CREATIVE SHOT LIST:",
        theme
    )
}
