use crate::domain::triz::{Parameter, Principle};
use serde::{Deserialize, Serialize};

/// Result of resolving a principle number against the reference dataset.
/// A number absent from the dataset stays in the output as `Missing` so the
/// expansion never silently drops or reorders entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value")]
pub enum PrincipleLookup {
    Found(Principle),
    Missing(u32),
}

/// One matched problem sentence with the parameter it resolved to and the
/// expanded principle list. References the shared dataset by value only at
/// the serialization boundary; during matching everything is borrowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub problem: String,
    pub parameter: Parameter,
    pub principles: Vec<PrincipleLookup>,
}

/// The user-facing result object for one upload. Downstream failures leave
/// `deep_analysis`/`suggestions` empty and set `error`; counts and raw data
/// survive as partial results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub row_count: usize,
    pub column_count: usize,
    pub raw_data: String,
    pub deep_analysis: Option<String>,
    pub suggestions: Option<Vec<Suggestion>>,
    pub error: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AnalysisReport {
    pub fn new(row_count: usize, column_count: usize, raw_data: String) -> Self {
        Self {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            row_count,
            column_count,
            raw_data,
            deep_analysis: None,
            suggestions: None,
            error: None,
            created_at: chrono::Utc::now(),
        }
    }
}
