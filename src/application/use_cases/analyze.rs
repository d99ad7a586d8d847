//! Orchestrates one upload: ingest, build the prompt, one LLM call, TRIZ
//! matching, assemble the report.
//!
//! Failure policy: an ingestion failure fails the whole request. Anything
//! after ingestion degrades instead: the report keeps its counts and raw
//! data and carries a human-readable `error`. No stage retries.
//!
//! Each run takes a ticket from a shared generation counter; if a newer
//! upload started while the LLM call was in flight, the stale run aborts
//! with `Superseded` so only the newest upload ever delivers a result.

use crate::application::use_cases::ingestion;
use crate::application::use_cases::prompt_builder::build_analysis_prompt;
use crate::application::use_cases::triz_matcher::TrizMatcher;
use crate::domain::analysis::AnalysisReport;
use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::LLMConfig;
use crate::domain::triz::TrizData;
use crate::infrastructure::llm_clients::LLMClient;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub struct AnalyzeUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
    triz: Arc<TrizData>,
    generation: Arc<AtomicU64>,
}

impl AnalyzeUseCase {
    pub fn new(
        llm_client: Arc<dyn LLMClient + Send + Sync>,
        triz: Arc<TrizData>,
        generation: Arc<AtomicU64>,
    ) -> Self {
        Self {
            llm_client,
            triz,
            generation,
        }
    }

    pub async fn execute(
        &self,
        config: &LLMConfig,
        bytes: &[u8],
        filename: &str,
    ) -> Result<AnalysisReport> {
        let table = ingestion::ingest(bytes, filename)?;
        let mut report =
            AnalysisReport::new(table.row_count(), table.column_count(), table.to_flat_text());

        info!(
            rows = report.row_count,
            columns = report.column_count,
            filename,
            "Starting analysis"
        );

        let prompt = build_analysis_prompt(&table);
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = self.llm_client.generate(config, &prompt).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            return Err(AppError::Superseded(
                "a newer upload replaced this analysis".to_string(),
            ));
        }

        let narrative = match outcome {
            Ok(narrative) => narrative,
            Err(err) => {
                warn!(error = %err, "Deep analysis failed, returning partial report");
                report.error = Some(err.to_string());
                return Ok(report);
            }
        };

        let narrative = match narrative {
            Some(text) if !text.is_empty() => text,
            _ => {
                let err = AppError::NoNarrative(
                    "analysis service returned no text".to_string(),
                );
                warn!(error = %err, "Returning partial report");
                report.error = Some(err.to_string());
                return Ok(report);
            }
        };

        let matcher = TrizMatcher::new(&self.triz);
        match matcher.apply(&narrative) {
            Ok(suggestions) => {
                report.suggestions = Some(suggestions);
                report.deep_analysis = Some(narrative);
            }
            Err(err) => {
                warn!(error = %err, "TRIZ matching failed, keeping narrative");
                report.deep_analysis = Some(narrative);
                report.error = Some(err.to_string());
            }
        }

        Ok(report)
    }
}
