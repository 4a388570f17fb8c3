use std::sync::Arc;

use crate::{
    constants::personalities,
    errors::{AppError, AppResult},
    models::{
        domain::{ChatMessage, Quiz, Role},
        dto::request::{ChatRequest, PersonalityInput},
    },
    services::{
        conversation_log::ConversationLog,
        generation_service::GenerationClient,
        prompt_builder::PromptBuilder,
        quiz_extractor::QuizExtractor,
        rate_limiter::{RateDecision, RateLimiter},
    },
};

#[derive(Debug)]
pub struct ChatOutcome {
    pub reply: String,
    pub rate: RateDecision,
}

/// Sequences one chat request: rate check, prompt build, generation call,
/// quiz validation, at most one regeneration, response assembly. The reply
/// goes back raw; the embedded quiz block, if any, stays in the text for the
/// client to extract.
pub struct ChatService {
    generator: Option<Arc<dyn GenerationClient>>,
    rate_limiter: Arc<RateLimiter>,
    conversations: Arc<ConversationLog>,
}

impl ChatService {
    pub fn new(
        generator: Option<Arc<dyn GenerationClient>>,
        rate_limiter: Arc<RateLimiter>,
        conversations: Arc<ConversationLog>,
    ) -> Self {
        Self {
            generator,
            rate_limiter,
            conversations,
        }
    }

    pub async fn chat(&self, caller_key: &str, request: ChatRequest) -> AppResult<ChatOutcome> {
        let rate = self.rate_limiter.check_and_consume(caller_key);
        if !rate.allowed {
            return Err(AppError::RateLimitExceeded { limit: rate.limit });
        }

        let generator = self.generator.as_ref().ok_or_else(|| {
            AppError::UpstreamError("Server misconfiguration: missing GEMINI_API_KEY".to_string())
        })?;

        let personality = with_catalog_defaults(request.personality);
        let persona_id = personality
            .as_ref()
            .and_then(|p| p.id.clone())
            .unwrap_or_else(|| "global".to_string());

        let prompt = PromptBuilder::build(
            personality.as_ref(),
            &request.message,
            request.previous.as_ref(),
            request.kanji_level.as_deref(),
        );
        let mut reply = generator.generate(&prompt).await?;

        if let Some(extracted) = QuizExtractor::extract(&reply) {
            let missing = Quiz::missing_fields(&extracted.quiz);
            if missing.is_empty() {
                if let Some(quiz) = Quiz::from_value(&extracted.quiz) {
                    log::debug!(
                        "quiz block ok: genre={} subfield={}",
                        quiz.genre,
                        quiz.subfield
                    );
                }
            } else {
                log::warn!("quiz JSON missing fields: {missing:?}");

                // One regeneration attempt, best effort: whatever comes back
                // replaces the reply, valid or not.
                let quiz_prompt =
                    PromptBuilder::build_quiz_only(personality.as_ref(), &request.message);
                match generator.generate(&quiz_prompt).await {
                    Ok(regenerated) => {
                        reply = regenerated;
                        let still_invalid = QuizExtractor::extract(&reply)
                            .map(|e| !Quiz::missing_fields(&e.quiz).is_empty())
                            .unwrap_or(true);
                        if still_invalid {
                            log::warn!("regeneration did not produce a valid quiz block");
                        }
                    }
                    Err(err) => log::error!("quiz regeneration failed: {err}"),
                }
            }
        }

        self.conversations.append(
            &persona_id,
            ChatMessage {
                role: Role::User,
                text: request.message.clone(),
            },
        );
        self.conversations.append(
            &persona_id,
            ChatMessage {
                role: Role::Assistant,
                text: reply.clone(),
            },
        );

        Ok(ChatOutcome { reply, rate })
    }
}

/// Fills unset persona fields from the startup catalog when the id is known.
/// Client-supplied fields win, so a customized descriptor passes through.
fn with_catalog_defaults(input: Option<PersonalityInput>) -> Option<PersonalityInput> {
    let input = input?;
    let base = match input.id.as_deref().and_then(personalities::find) {
        Some(base) => base,
        None => return Some(input),
    };

    Some(PersonalityInput {
        id: input.id,
        name: input.name.or_else(|| Some(base.name.clone())),
        tone: input.tone.or_else(|| Some(base.tone.clone())),
        extra: input.extra.or_else(|| Some(base.extra.clone())),
        genre: input.genre.or_else(|| Some(base.genre.clone())),
        subfields: input.subfields.or_else(|| Some(base.subfields.clone())),
    })
}
