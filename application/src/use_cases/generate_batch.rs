//! Question batch generation for a single difficulty tier.
//!
//! Walks the model chain strictly in order — one attempt per candidate, no
//! same-model retry, never in parallel (each attempt is a rate-limited
//! external call and only the first success is needed). Every attempt
//! outcome lands in an explicit accumulator; the chain either
//! short-circuits on the first success or exhausts into a typed error
//! carrying the last failure.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::{GatewayError, GenerationRequest, LlmGateway};
use crate::ports::random::RandomSource;
use eduquiz_domain::{
    Difficulty, EducationLevel, GeneratedQuestion, Model, ModelChain, PromptTemplate, RawQuestion,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a batch's chain was exhausted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The last observed failure carried the rate-limit/quota signature
    RateLimited,
    /// Generic failure, carrying the last attempt's error text
    Failed(String),
}

impl std::fmt::Display for ExhaustionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExhaustionReason::RateLimited => write!(f, "429 RESOURCE_EXHAUSTED"),
            ExhaustionReason::Failed(text) => write!(f, "{}", text),
        }
    }
}

/// One failed candidate attempt, kept for diagnostics
#[derive(Debug)]
pub struct AttemptFailure {
    pub model: Model,
    pub error: GatewayError,
}

/// Errors that can occur during batch generation
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("All models failed for {difficulty} batch: {reason}")]
    Exhausted {
        difficulty: Difficulty,
        reason: ExhaustionReason,
        /// Every attempt outcome, in chain order
        attempts: Vec<AttemptFailure>,
    },
}

impl BatchError {
    /// True when the exhaustion was rate-limit flavored
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            BatchError::Exhausted {
                reason: ExhaustionReason::RateLimited,
                ..
            }
        )
    }
}

/// Input for one tier batch
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub count: u32,
    pub difficulty: Difficulty,
    pub level: EducationLevel,
    pub grade: u8,
    pub topic: String,
    /// Preferred model heading the fallback chain
    pub preferred: Model,
}

/// Use case for generating the questions of one difficulty tier
pub struct QuestionBatchGenerator {
    gateway: Arc<dyn LlmGateway>,
    random: Arc<dyn RandomSource>,
    params: GenerationParams,
}

impl QuestionBatchGenerator {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        random: Arc<dyn RandomSource>,
        params: GenerationParams,
    ) -> Self {
        Self {
            gateway,
            random,
            params,
        }
    }

    /// Execute the batch.
    ///
    /// A zero count returns an empty sequence without touching the
    /// gateway. Otherwise the chain is walked in order and the first
    /// candidate that yields a valid, non-empty question array wins.
    pub async fn execute(
        &self,
        request: &BatchRequest,
    ) -> Result<Vec<GeneratedQuestion>, BatchError> {
        if request.count == 0 {
            return Ok(Vec::new());
        }

        let chain = ModelChain::for_preferred(request.preferred.clone());
        let generation = GenerationRequest::new(PromptTemplate::quiz_batch(
            request.count,
            request.difficulty,
            request.level,
            request.grade,
            &request.topic,
        ))
        .with_schema(PromptTemplate::question_array_schema())
        .with_temperature(self.params.temperature);

        let mut attempts: Vec<AttemptFailure> = Vec::new();

        for model in &chain {
            debug!("Generating {} batch using model {}", request.difficulty, model);
            match self.attempt(model, &generation, request.difficulty).await {
                Ok(questions) => {
                    info!(
                        "Model {} produced {} {} questions",
                        model,
                        questions.len(),
                        request.difficulty
                    );
                    return Ok(questions);
                }
                Err(error) => {
                    warn!(
                        "Model {} failed for {} batch: {}",
                        model, request.difficulty, error
                    );
                    attempts.push(AttemptFailure {
                        model: model.clone(),
                        error,
                    });
                }
            }
        }

        let last = attempts.last().expect("chain is never empty");
        let reason = if last.error.is_rate_limited() {
            ExhaustionReason::RateLimited
        } else {
            ExhaustionReason::Failed(last.error.to_string())
        };

        Err(BatchError::Exhausted {
            difficulty: request.difficulty,
            reason,
            attempts,
        })
    }

    /// One attempt against one candidate model.
    ///
    /// Any failure — transport, non-JSON body, non-array payload, empty
    /// array, arity-invalid item — maps to a [`GatewayError`] so the
    /// caller advances the chain. An empty-but-valid array is a failure,
    /// not "zero questions generated successfully".
    async fn attempt(
        &self,
        model: &Model,
        generation: &GenerationRequest,
        difficulty: Difficulty,
    ) -> Result<Vec<GeneratedQuestion>, GatewayError> {
        let body = self.gateway.generate(model, generation).await?;

        let raw: Vec<RawQuestion> = serde_json::from_str(&body)
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        if raw.is_empty() {
            return Err(GatewayError::MalformedResponse(
                "empty question array".to_string(),
            ));
        }

        let millis = chrono::Utc::now().timestamp_millis();
        raw.into_iter()
            .enumerate()
            .map(|(index, item)| {
                let id = format!(
                    "{}-{}-{}-{:08x}",
                    difficulty.as_str(),
                    index,
                    millis,
                    self.random.next_u64() as u32
                );
                item.into_question(id, difficulty)
                    .map_err(|e| GatewayError::MalformedResponse(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::{ChatSession, ChatSessionConfig};
    use async_trait::async_trait;
    use eduquiz_domain::{AnswerKey, ChatTurn};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Gateway scripted with a queue of generate() outcomes
    struct MockGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        async fn generate(
            &self,
            _model: &Model,
            _request: &GenerationRequest,
        ) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("script exhausted".to_string())))
        }

        async fn create_chat_session(
            &self,
            _model: &Model,
            _config: &ChatSessionConfig,
            _history: &[ChatTurn],
        ) -> Result<Box<dyn ChatSession>, GatewayError> {
            Err(GatewayError::Other("not a chat mock".to_string()))
        }
    }

    struct CountingRandom(AtomicUsize);

    impl RandomSource for CountingRandom {
        fn next_u64(&self) -> u64 {
            self.0.fetch_add(1, Ordering::SeqCst) as u64
        }
    }

    fn generator(gateway: Arc<MockGateway>) -> QuestionBatchGenerator {
        QuestionBatchGenerator::new(
            gateway,
            Arc::new(CountingRandom(AtomicUsize::new(0))),
            GenerationParams::default(),
        )
    }

    fn request(count: u32) -> BatchRequest {
        BatchRequest {
            count,
            difficulty: Difficulty::Recognition,
            level: EducationLevel::Primary,
            grade: 3,
            topic: "Phần cứng máy tính".to_string(),
            preferred: Model::default(),
        }
    }

    fn questions_json(count: usize) -> String {
        let items: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{
                        "text": "Câu hỏi {i}?",
                        "options": ["A. một", "B. hai", "C. ba", "D. bốn"],
                        "correctAnswer": "  b) ",
                        "explanation": "Giải thích {i}",
                        "difficulty": "recognition"
                    }}"#
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    fn failed(message: &str) -> Result<String, GatewayError> {
        Err(GatewayError::RequestFailed(message.to_string()))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_zero_count_skips_network_for_all_tiers() {
        for difficulty in Difficulty::all() {
            let gateway = Arc::new(MockGateway::new(vec![]));
            let batch = BatchRequest {
                difficulty,
                ..request(0)
            };
            let result = generator(gateway.clone()).execute(&batch).await.unwrap();

            assert!(result.is_empty());
            assert_eq!(gateway.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_first_candidate_success_short_circuits() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(questions_json(3))]));
        let result = generator(gateway.clone()).execute(&request(3)).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(gateway.call_count(), 1);
        // Normalization applied: "  b) " -> B, tier label attached
        assert!(result.iter().all(|q| q.correct_answer == AnswerKey::B));
        assert!(result.iter().all(|q| q.difficulty_label == "Nhận biết"));
    }

    #[tokio::test]
    async fn test_fallback_performs_exactly_k_plus_one_attempts() {
        // First two candidates fail, third succeeds.
        let gateway = Arc::new(MockGateway::new(vec![
            failed("status 500: boom"),
            failed("status 503: unavailable"),
            Ok(questions_json(2)),
        ]));
        let result = generator(gateway.clone()).execute(&request(2)).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_empty_array_is_a_failure_and_advances_chain() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("[]".to_string()),
            Ok(questions_json(1)),
        ]));
        let result = generator(gateway.clone()).execute(&request(1)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_advances_chain() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok("not json at all".to_string()),
            Ok(r#"{"object": "not an array"}"#.to_string()),
            Ok(questions_json(1)),
        ]));
        let result = generator(gateway.clone()).execute(&request(1)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(gateway.call_count(), 3);
    }

    #[tokio::test]
    async fn test_wrong_option_arity_advances_chain() {
        let three_options = r#"[{
            "text": "Câu hỏi?",
            "options": ["A. một", "B. hai", "C. ba"],
            "correctAnswer": "A",
            "explanation": "x",
            "difficulty": "recognition"
        }]"#;
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(three_options.to_string()),
            Ok(questions_json(1)),
        ]));
        let result = generator(gateway.clone()).execute(&request(1)).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_chain_raises_with_generic_reason() {
        let gateway = Arc::new(MockGateway::new(vec![
            failed("status 500: a"),
            failed("status 500: b"),
            failed("status 500: c"),
            failed("status 502: last one"),
        ]));
        let error = generator(gateway.clone())
            .execute(&request(2))
            .await
            .unwrap_err();

        assert_eq!(gateway.call_count(), 4);
        let BatchError::Exhausted {
            difficulty,
            reason,
            attempts,
        } = error;
        assert_eq!(difficulty, Difficulty::Recognition);
        assert_eq!(attempts.len(), 4);
        match reason {
            ExhaustionReason::Failed(text) => assert!(text.contains("last one")),
            other => panic!("expected generic reason, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_limited_last_failure_annotates_reason() {
        let gateway = Arc::new(MockGateway::new(vec![
            failed("status 500: a"),
            failed("status 500: b"),
            failed("status 500: c"),
            failed("status 429: quota exceeded"),
        ]));
        let error = generator(gateway).execute(&request(2)).await.unwrap_err();

        assert!(error.is_rate_limited());
        assert!(error.to_string().contains("429 RESOURCE_EXHAUSTED"));
    }

    #[tokio::test]
    async fn test_ids_are_unique_within_one_call() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(questions_json(12))]));
        let result = generator(gateway).execute(&request(12)).await.unwrap();

        let mut ids: Vec<_> = result.iter().map(|q| q.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
        assert!(result.iter().all(|q| q.id.starts_with("recognition-")));
    }
}
