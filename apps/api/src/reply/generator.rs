//! Reply Generation — orchestrates prompt composition, the remote call, and
//! the degraded-truth fallbacks.
//!
//! Flow: compose prompt → remote generate → fallback substitution.
//!
//! Every exit path yields text. Failure never propagates to the caller:
//! remote-unavailable, remote-error, and empty-response all degrade to a
//! locally-known truth string when a myth record is present, else to a fixed
//! placeholder. Callers that need to know why inspect [`GeneratedReply::kind`]
//! and [`GeneratedReply::reason`] rather than parsing the text.

use serde::Serialize;
use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::myths::models::{MythRecord, NutritionRecord};
use crate::reply::composer::build_prompt;
use crate::reply::style::ReplyFormat;

/// Shown when nothing is configured and nothing matched.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "LLM not configured and no DB match. Add GEMINI_API_KEY to enable comic replies.";

/// Shown when the remote service answered with nothing and nothing matched.
pub const EMPTY_REPLY_MESSAGE: &str = "No reply generated.";

/// Where the reply text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    /// The remote service answered with usable text.
    Success,
    /// The remote service failed or answered empty; text came from the
    /// database or a placeholder.
    Degraded,
    /// No remote service is configured.
    Unavailable,
}

/// A generated reply plus the reason it degraded, if it did.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReply {
    pub kind: ReplyKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Produces a reply for one query. `service` is `None` when no credential is
/// configured; `myth` is the record the caller already looked up, if any.
pub async fn generate_reply(
    service: Option<&dyn TextGenerator>,
    query: &str,
    myth: Option<&MythRecord>,
    tone: &str,
    format: ReplyFormat,
    animal_nutrition: Option<&NutritionRecord>,
    plant_nutrition: Option<&NutritionRecord>,
) -> GeneratedReply {
    let Some(service) = service else {
        let text = match myth {
            Some(m) => format!("{}\n(LLM disabled: showing DB truth.)", db_truth(m)),
            None => NOT_CONFIGURED_MESSAGE.to_string(),
        };
        return GeneratedReply {
            kind: ReplyKind::Unavailable,
            text,
            reason: Some("no credential configured".to_string()),
        };
    };

    let prompt = build_prompt(query, myth, tone, format, animal_nutrition, plant_nutrition);

    match service.generate(&prompt).await {
        Ok(raw) => {
            let text = raw.trim();
            if !text.is_empty() {
                info!("Remote reply generated ({} chars)", text.len());
                return GeneratedReply {
                    kind: ReplyKind::Success,
                    text: text.to_string(),
                    reason: None,
                };
            }
            warn!("Remote service returned empty text; degrading to DB truth");
            GeneratedReply {
                kind: ReplyKind::Degraded,
                text: myth.map_or_else(|| EMPTY_REPLY_MESSAGE.to_string(), db_truth),
                reason: Some("empty response".to_string()),
            }
        }
        Err(e) => {
            warn!("Remote generation failed: {e}");
            let text = match myth {
                Some(m) => format!("{}\n(LLM error: {e})", db_truth(m)),
                None => format!("(LLM error: {e})"),
            };
            GeneratedReply {
                kind: ReplyKind::Degraded,
                text,
                reason: Some(e.to_string()),
            }
        }
    }
}

/// The locally-known truth string shown when the remote service cannot answer.
fn db_truth(myth: &MythRecord) -> String {
    format!(
        "Verdict: Myth.\n{}\nAdvice: {}",
        myth.truth,
        myth.advice.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedReply(&'static str);

    #[async_trait]
    impl TextGenerator for FixedReply {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl TextGenerator for FailingBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn calcium_myth() -> MythRecord {
        MythRecord {
            myth: "Cow milk is the only source of calcium".to_string(),
            truth: "Plants contain calcium too.".to_string(),
            advice: Some("Try fortified plant milk.".to_string()),
            citations: None,
        }
    }

    async fn reply(
        service: Option<&dyn TextGenerator>,
        myth: Option<&MythRecord>,
    ) -> GeneratedReply {
        generate_reply(
            service,
            "cow milk is the only source of calcium",
            myth,
            "comic",
            ReplyFormat::Prose,
            None,
            None,
        )
        .await
    }

    #[tokio::test]
    async fn test_unconfigured_with_myth_shows_db_truth() {
        let myth = calcium_myth();
        let result = reply(None, Some(&myth)).await;
        assert_eq!(result.kind, ReplyKind::Unavailable);
        assert_eq!(
            result.text,
            "Verdict: Myth.\nPlants contain calcium too.\nAdvice: Try fortified plant milk.\n(LLM disabled: showing DB truth.)"
        );
    }

    #[tokio::test]
    async fn test_unconfigured_without_myth_shows_fixed_message() {
        let result = reply(None, None).await;
        assert_eq!(result.kind, ReplyKind::Unavailable);
        assert_eq!(
            result.text,
            "LLM not configured and no DB match. Add GEMINI_API_KEY to enable comic replies."
        );
    }

    #[tokio::test]
    async fn test_remote_success_returns_text_verbatim() {
        let backend = FixedReply("Verdict: Myth. Plants have you covered. Case closed. 🧠🔒");
        let result = reply(Some(&backend), None).await;
        assert_eq!(result.kind, ReplyKind::Success);
        assert!(result.reason.is_none());
        assert_eq!(
            result.text,
            "Verdict: Myth. Plants have you covered. Case closed. 🧠🔒"
        );
    }

    #[tokio::test]
    async fn test_empty_remote_reply_falls_back_to_db_truth_without_suffix() {
        let backend = FixedReply("   \n  ");
        let myth = calcium_myth();
        let result = reply(Some(&backend), Some(&myth)).await;
        assert_eq!(result.kind, ReplyKind::Degraded);
        assert_eq!(
            result.text,
            "Verdict: Myth.\nPlants contain calcium too.\nAdvice: Try fortified plant milk."
        );
    }

    #[tokio::test]
    async fn test_empty_remote_reply_without_myth_shows_placeholder() {
        let backend = FixedReply("");
        let result = reply(Some(&backend), None).await;
        assert_eq!(result.kind, ReplyKind::Degraded);
        assert_eq!(result.text, "No reply generated.");
    }

    #[tokio::test]
    async fn test_remote_error_with_myth_appends_error_note() {
        let myth = calcium_myth();
        let result = reply(Some(&FailingBackend), Some(&myth)).await;
        assert_eq!(result.kind, ReplyKind::Degraded);
        assert!(result.text.starts_with("Verdict: Myth.\nPlants contain calcium too."));
        assert!(result.text.ends_with("(LLM error: API error (status 429): quota exceeded)"));
        assert_eq!(
            result.reason.as_deref(),
            Some("API error (status 429): quota exceeded")
        );
    }

    #[tokio::test]
    async fn test_remote_error_without_myth_shows_only_error_note() {
        let result = reply(Some(&FailingBackend), None).await;
        assert_eq!(result.kind, ReplyKind::Degraded);
        assert_eq!(
            result.text,
            "(LLM error: API error (status 429): quota exceeded)"
        );
    }

    #[tokio::test]
    async fn test_absent_advice_renders_empty_not_none() {
        let myth = MythRecord {
            advice: None,
            ..calcium_myth()
        };
        let result = reply(None, Some(&myth)).await;
        assert!(result.text.contains("Advice: \n"));
        assert!(!result.text.contains("None"));
    }

    /// Every {service} × {myth} × {outcome} combination yields non-empty text.
    #[tokio::test]
    async fn test_every_path_returns_non_empty_text() {
        let myth = calcium_myth();
        let ok = FixedReply("A reply.");
        let empty = FixedReply("");

        let backends: [Option<&dyn TextGenerator>; 4] =
            [None, Some(&ok), Some(&empty), Some(&FailingBackend)];

        for backend in backends {
            for myth in [None, Some(&myth)] {
                let result = reply(backend, myth).await;
                assert!(
                    !result.text.trim().is_empty(),
                    "empty reply for backend/myth combination"
                );
            }
        }
    }
}
