//! Maps problem-describing sentences of a generated narrative onto the TRIZ
//! reference tables.
//!
//! The matching policy is deliberately simple and order-sensitive, and the
//! exact policy is the contract:
//! - sentences are whatever `split('.')` yields, untrimmed. Abbreviations
//!   and decimal numbers therefore end a "sentence" early; changing that
//!   changes which sentences match, so it stays as-is (known accuracy
//!   limitation).
//! - the first parameter whose synonym occurs in the sentence wins; no
//!   scoring, no ranking.
//! - when nothing matches, the first parameter of the table is the answer.

use crate::domain::analysis::{PrincipleLookup, Suggestion};
use crate::domain::error::{AppError, Result};
use crate::domain::triz::{Parameter, TrizData};

const PROBLEM_KEYWORDS: [&str; 4] = ["challenge", "issue", "problem", "difficulty"];

pub struct TrizMatcher<'a> {
    data: &'a TrizData,
}

impl<'a> TrizMatcher<'a> {
    pub fn new(data: &'a TrizData) -> Self {
        Self { data }
    }

    /// Run the full pipeline over a narrative: extract problem sentences,
    /// resolve each to a parameter, expand that parameter's principles.
    /// One suggestion per problem sentence, in narrative order.
    pub fn apply(&self, narrative: &str) -> Result<Vec<Suggestion>> {
        if narrative.is_empty() {
            return Err(AppError::NoNarrative(
                "analysis returned no text to scan".to_string(),
            ));
        }

        extract_problems(narrative)
            .into_iter()
            .map(|problem| {
                let parameter = self.resolve_parameter(problem)?;
                let principles = self.expand_principles(parameter);
                Ok(Suggestion {
                    problem: problem.to_string(),
                    parameter: parameter.clone(),
                    principles,
                })
            })
            .collect()
    }

    /// Ordered scan with early return: the first parameter with any synonym
    /// occurring (case-insensitively) in the problem text wins. Falls back
    /// to the first parameter of the table, whatever the problem says.
    pub fn resolve_parameter(&self, problem: &str) -> Result<&'a Parameter> {
        let fallback = self.data.parameters.first().ok_or_else(|| {
            AppError::EmptyReference("parameter table has no entries".to_string())
        })?;

        let lowered = problem.to_lowercase();
        Ok(self
            .data
            .parameters
            .iter()
            .find(|param| {
                param
                    .synonyms
                    .iter()
                    .any(|synonym| lowered.contains(&synonym.to_lowercase()))
            })
            .unwrap_or(fallback))
    }

    /// `always_consider_principles` then `averaged_principles`, order
    /// preserved, duplicates preserved. Numbers absent from the principle
    /// table stay in the output as `Missing`.
    pub fn expand_principles(&self, parameter: &Parameter) -> Vec<PrincipleLookup> {
        parameter
            .always_consider_principles
            .iter()
            .chain(parameter.averaged_principles.iter())
            .map(|&number| match self.data.principle(number) {
                Some(principle) => PrincipleLookup::Found(principle.clone()),
                None => PrincipleLookup::Missing(number),
            })
            .collect()
    }
}

/// Split on periods and keep, in order, every sentence containing a
/// problem-indicating keyword. No trimming.
pub fn extract_problems(narrative: &str) -> Vec<&str> {
    narrative
        .split('.')
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            PROBLEM_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::triz::Principle;

    fn principle(number: u32, name: &str) -> Principle {
        Principle {
            number,
            name: name.to_string(),
            description: format!("{} description", name),
        }
    }

    fn parameter(name: &str, synonyms: &[&str], always: &[u32], averaged: &[u32]) -> Parameter {
        Parameter {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            always_consider_principles: always.to_vec(),
            averaged_principles: averaged.to_vec(),
        }
    }

    fn dataset() -> TrizData {
        TrizData {
            parameters: vec![
                parameter("Speed", &["speed", "fast"], &[13, 28], &[15]),
                parameter("Reliability", &["failure", "error"], &[11], &[10, 35]),
                parameter("Loss of time", &["delay", "waiting"], &[10, 20], &[35]),
            ],
            inventive_principles: vec![
                principle(10, "Preliminary action"),
                principle(11, "Beforehand cushioning"),
                principle(13, "The other way round"),
                principle(15, "Dynamics"),
                principle(20, "Continuity of useful action"),
                principle(28, "Mechanics substitution"),
                principle(35, "Parameter changes"),
            ],
        }
    }

    #[test]
    fn test_extract_keeps_keyword_sentences_in_order() {
        let narrative = "All good. There is an issue with delays. Fine. A problem remains.";
        let problems = extract_problems(narrative);
        assert_eq!(
            problems,
            vec![" There is an issue with delays", " A problem remains"]
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let problems = extract_problems("A CHALLENGE appeared. A Difficulty too.");
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn test_extract_does_not_trim() {
        let problems = extract_problems("Intro. The problem is speed.");
        assert_eq!(problems, vec![" The problem is speed"]);
    }

    #[test]
    fn test_extract_first_sentence_has_no_leading_space() {
        let problems = extract_problems("There is a problem with X. Everything else is fine.");
        assert_eq!(problems, vec!["There is a problem with X"]);
    }

    #[test]
    fn test_extract_no_keywords_yields_empty() {
        assert!(extract_problems("Everything works. All metrics are green.").is_empty());
    }

    #[test]
    fn test_naive_split_cuts_decimals() {
        // "3.5" ends the sentence at the period. Accepted behavior.
        let problems = extract_problems("The issue affects 3.5 percent of rows.");
        assert_eq!(problems, vec!["The issue affects 3"]);
    }

    #[test]
    fn test_apply_empty_narrative_is_no_narrative_error() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        assert!(matches!(
            matcher.apply("").unwrap_err(),
            AppError::NoNarrative(_)
        ));
    }

    #[test]
    fn test_apply_without_keywords_is_empty_not_error() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        assert!(matcher.apply("All metrics look healthy.").unwrap().is_empty());
    }

    #[test]
    fn test_resolve_first_match_in_order_wins() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        // Matches only parameters[2]; [0] and [1] must be skipped.
        let param = matcher
            .resolve_parameter(" the main issue is a delay in reporting")
            .unwrap();
        assert_eq!(param.name, "Loss of time");
    }

    #[test]
    fn test_resolve_earlier_parameter_shadows_later() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        // "failure" (parameters[1]) and "delay" (parameters[2]) both occur;
        // the scan order decides.
        let param = matcher
            .resolve_parameter("a failure causes a delay")
            .unwrap();
        assert_eq!(param.name, "Reliability");
    }

    #[test]
    fn test_resolve_defaults_to_first_parameter() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let param = matcher
            .resolve_parameter("an unrelated problem about nothing known")
            .unwrap();
        assert_eq!(param.name, "Speed");
    }

    #[test]
    fn test_resolve_empty_problem_defaults_to_first_parameter() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        assert_eq!(matcher.resolve_parameter("").unwrap().name, "Speed");
    }

    #[test]
    fn test_resolve_synonym_match_is_case_insensitive() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let param = matcher.resolve_parameter("the DELAY is severe").unwrap();
        assert_eq!(param.name, "Loss of time");
    }

    #[test]
    fn test_resolve_empty_parameter_table_is_explicit_error() {
        let data = TrizData {
            parameters: vec![],
            inventive_principles: vec![principle(1, "Segmentation")],
        };
        let matcher = TrizMatcher::new(&data);
        assert!(matches!(
            matcher.resolve_parameter("a problem").unwrap_err(),
            AppError::EmptyReference(_)
        ));
    }

    #[test]
    fn test_expand_concatenates_always_then_averaged() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let numbers: Vec<u32> = matcher
            .expand_principles(&data.parameters[0])
            .iter()
            .map(|lookup| match lookup {
                PrincipleLookup::Found(p) => p.number,
                PrincipleLookup::Missing(n) => *n,
            })
            .collect();
        assert_eq!(numbers, vec![13, 28, 15]);
    }

    #[test]
    fn test_expand_preserves_duplicates() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let param = parameter("Dup", &["dup"], &[10, 35], &[35, 10]);
        let expanded = matcher.expand_principles(&param);
        assert_eq!(expanded.len(), 4);
    }

    #[test]
    fn test_expand_marks_unknown_numbers_missing() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let param = parameter("Odd", &["odd"], &[13, 99], &[]);
        let expanded = matcher.expand_principles(&param);
        assert!(matches!(expanded[0], PrincipleLookup::Found(_)));
        assert_eq!(expanded[1], PrincipleLookup::Missing(99));
    }

    #[test]
    fn test_expand_is_idempotent() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let first = matcher.expand_principles(&data.parameters[1]);
        let second = matcher.expand_principles(&data.parameters[1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_apply_end_to_end_orders_suggestions_by_sentence() {
        let data = dataset();
        let matcher = TrizMatcher::new(&data);
        let narrative = "A failure problem exists. Later, a delay issue appears.";
        let suggestions = matcher.apply(narrative).unwrap();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].problem, "A failure problem exists");
        assert_eq!(suggestions[0].parameter.name, "Reliability");
        assert_eq!(suggestions[1].problem, " Later, a delay issue appears");
        assert_eq!(suggestions[1].parameter.name, "Loss of time");
        // Reliability expands to 11 then 10, 35.
        assert_eq!(suggestions[0].principles.len(), 3);
    }
}
