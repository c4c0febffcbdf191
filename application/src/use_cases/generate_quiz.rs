//! Quiz orchestration across the three difficulty tiers.
//!
//! The credential gate runs once, before any batch launches. The three
//! tier batches then fan out concurrently — each owns its full
//! model-fallback sequence — and the orchestrator waits on the join
//! barrier until all of them settle. One tier exhausting its chain fails
//! the whole quiz; a missing tier would silently break the distribution
//! the caller planned for.

use crate::config::GenerationParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::random::{self, RandomSource};
use crate::ports::settings::SettingsStore;
use crate::use_cases::generate_batch::{BatchError, BatchRequest, QuestionBatchGenerator};
use eduquiz_domain::{Difficulty, DifficultyDistribution, EducationLevel, GeneratedQuestion};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can occur during quiz generation
#[derive(Error, Debug)]
pub enum GenerateQuizError {
    /// No API key resolvable; raised before any network attempt
    #[error("API Key not found. Please set it in Settings.")]
    MissingCredential,

    /// A tier exhausted its model chain
    #[error(transparent)]
    BatchFailed(#[from] BatchError),

    /// Every tier produced zero usable questions
    #[error(
        "Không thể tạo câu hỏi. Tất cả các model đều thất bại. Vui lòng kiểm tra API Key và Quota."
    )]
    AllBatchesFailed,

    /// A batch task died without settling
    #[error("Orchestration error: {0}")]
    Orchestration(String),
}

impl GenerateQuizError {
    /// True when the underlying failure was rate-limit flavored, so the
    /// caller can show a quota-specific message
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GenerateQuizError::BatchFailed(batch) if batch.is_rate_limited())
    }
}

/// Input for the quiz use case
#[derive(Debug, Clone)]
pub struct QuizRequest {
    pub level: EducationLevel,
    pub grade: u8,
    pub topic: String,
}

impl QuizRequest {
    pub fn new(level: EducationLevel, grade: u8, topic: impl Into<String>) -> Self {
        Self {
            level,
            grade,
            topic: topic.into(),
        }
    }
}

/// Use case for generating a complete quiz
pub struct GenerateQuizUseCase {
    settings: Arc<dyn SettingsStore>,
    gateway: Arc<dyn LlmGateway>,
    random: Arc<dyn RandomSource>,
    params: GenerationParams,
}

impl GenerateQuizUseCase {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        gateway: Arc<dyn LlmGateway>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            settings,
            gateway,
            random,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case.
    ///
    /// Returns the merged question set in randomized order, or the first
    /// failure once all batches have settled.
    pub async fn execute(
        &self,
        request: QuizRequest,
    ) -> Result<Vec<GeneratedQuestion>, GenerateQuizError> {
        let settings = self.settings.resolve();
        if !settings.has_api_key() {
            return Err(GenerateQuizError::MissingCredential);
        }
        let preferred = settings.preferred_or_default();

        let distribution = DifficultyDistribution::plan(request.level, request.grade);
        info!(
            "Generating quiz: {} questions for grade {} on '{}'",
            distribution.total(),
            request.grade,
            request.topic
        );

        let mut join_set = JoinSet::new();
        for difficulty in Difficulty::all() {
            let generator = QuestionBatchGenerator::new(
                Arc::clone(&self.gateway),
                Arc::clone(&self.random),
                self.params.clone(),
            );
            let batch = BatchRequest {
                count: distribution.count_for(difficulty),
                difficulty,
                level: request.level,
                grade: request.grade,
                topic: request.topic.clone(),
                preferred: preferred.clone(),
            };

            join_set.spawn(async move { (difficulty, generator.execute(&batch).await) });
        }

        // Join barrier: let every batch settle before acting on failures.
        let mut settled: Vec<(Difficulty, Result<Vec<GeneratedQuestion>, BatchError>)> = Vec::new();
        let mut join_failure: Option<String> = None;
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok(outcome) => settled.push(outcome),
                Err(e) => {
                    warn!("Batch task join error: {}", e);
                    join_failure = Some(e.to_string());
                }
            }
        }
        if let Some(reason) = join_failure {
            return Err(GenerateQuizError::Orchestration(reason));
        }

        // Concatenate in canonical tier order; batches settle in
        // arbitrary order.
        let mut questions = Vec::with_capacity(distribution.total() as usize);
        for difficulty in Difficulty::all() {
            let (_, outcome) = settled
                .iter_mut()
                .find(|(tier, _)| *tier == difficulty)
                .expect("every tier was spawned");
            match std::mem::replace(outcome, Ok(Vec::new())) {
                Ok(batch) => questions.extend(batch),
                Err(error) => return Err(error.into()),
            }
        }

        if questions.is_empty() {
            return Err(GenerateQuizError::AllBatchesFailed);
        }

        // Order carries no meaning; shuffling interleaves the tiers for
        // display.
        random::shuffle(self.random.as_ref(), &mut questions);

        info!("Quiz ready: {} questions", questions.len());
        Ok(questions)
    }
}
