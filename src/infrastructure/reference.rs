use crate::domain::error::{AppError, Result};
use crate::domain::triz::TrizData;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::sync::Arc;

static TRIZ_JSON: &str = include_str!("../../resources/triz.json");

static DATASET: OnceCell<Arc<TrizData>> = OnceCell::new();

/// The process-wide TRIZ reference dataset. Parsed and validated on first
/// access, then shared read-only; every caller gets the same `Arc`.
pub fn triz_data() -> Result<Arc<TrizData>> {
    DATASET
        .get_or_try_init(|| {
            let data: TrizData = serde_json::from_str(TRIZ_JSON).map_err(|e| {
                AppError::Internal(format!("Failed to parse TRIZ dataset: {}", e))
            })?;
            validate(&data)?;
            Ok(Arc::new(data))
        })
        .map(Arc::clone)
}

fn validate(data: &TrizData) -> Result<()> {
    if data.parameters.is_empty() {
        return Err(AppError::EmptyReference(
            "TRIZ dataset has no parameters".to_string(),
        ));
    }
    if data.inventive_principles.is_empty() {
        return Err(AppError::EmptyReference(
            "TRIZ dataset has no inventive principles".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for principle in &data.inventive_principles {
        if !seen.insert(principle.number) {
            return Err(AppError::Internal(format!(
                "Duplicate principle number {} in TRIZ dataset",
                principle.number
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_loads_and_is_shared() {
        let first = triz_data().unwrap();
        let second = triz_data().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_dataset_has_classical_dimensions() {
        let data = triz_data().unwrap();
        assert_eq!(data.parameters.len(), 39);
        assert_eq!(data.inventive_principles.len(), 40);
    }

    #[test]
    fn test_fallback_parameter_is_first_entry() {
        let data = triz_data().unwrap();
        assert_eq!(data.parameters[0].name, "Weight of moving object");
    }

    #[test]
    fn test_every_referenced_principle_number_resolves() {
        let data = triz_data().unwrap();
        for parameter in &data.parameters {
            for number in parameter
                .always_consider_principles
                .iter()
                .chain(parameter.averaged_principles.iter())
            {
                assert!(
                    data.principle(*number).is_some(),
                    "parameter {} references unknown principle {}",
                    parameter.name,
                    number
                );
            }
        }
    }

    #[test]
    fn test_every_parameter_has_synonyms_and_principles() {
        let data = triz_data().unwrap();
        for parameter in &data.parameters {
            assert!(!parameter.synonyms.is_empty(), "{}", parameter.name);
            assert!(
                !parameter.always_consider_principles.is_empty(),
                "{}",
                parameter.name
            );
        }
    }
}
