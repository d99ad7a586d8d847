//! Builds the single analysis request sent to the text-generation service.
//!
//! The instruction template is opaque configuration: one static string with
//! exactly one `{{data}}` substitution point. Wording changes here change
//! what the service returns, which in turn changes TRIZ matching, so treat
//! edits as behavior changes.

use crate::domain::table::Table;

const DATA_PLACEHOLDER: &str = "{{data}}";

const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this spreadsheet data and provide detailed insights:
Data:
{{data}}

Please provide a comprehensive, detailed and in-depth analytical report on this data, with a minimum length of 10,000 words. Analyze it the way an experienced data specialist would, covering but not limited to the following sections:

1. Executive summary:
- A short description of the dataset
- Key findings and highlights

2. Data structure analysis:
- A detailed description of the structure of the dataset
- An assessment of the quality and consistency of the data
- An evaluation of the completeness and suitability of the data fields

3. Descriptive statistics:
- Detailed statistics for every data field (min, max, mean, median, standard deviation, etc.)
- Distributions of the important variables
- Identification and explanation of the main tendencies

4. Correlation and relationship analysis:
- Identification and detailed description of correlations between variables
- Analysis of latent patterns and trends in the data
- Proposed and explained hypotheses about causal relationships

5. Time-based analysis (if applicable):
- Identification and description of trends over time
- Analysis of seasonality or cycles in the data

6. Segmentation and grouping:
- Identification and description of segments or groups within the data
- Analysis of the characteristics and behavior of each segment

7. Anomaly and outlier detection:
- Identification and detailed description of anomalies or outliers
- Analysis of the causes and potential impact of the anomalies

8. Data quality assessment:
- Identification and description of data quality problems (e.g. missing values, inconsistencies, entry errors)
- Proposed methods to improve data quality

9. Domain-specific deep dive:
- Based on the nature of the data, provide in-depth analysis of the relevant aspects (e.g. finance, marketing, operations)

10. Suggestions for further analysis and visualization:
- Propose advanced analytical methods (e.g. predictive models, regression analysis)
- Suggest chart types and visualizations suited to illustrating the key findings

11. Overall assessment and remarks:
- An overall evaluation of the meaning and value of the dataset
- Remarks on the reliability and limitations of the data

12. Applying the TRIZ methodology to problem solving:
- Identify the main problems evident from the data
- Apply TRIZ principles to propose creative solutions

13. Proposals and recommendations:
- Concrete proposals based on the data analysis
- Detailed recommendations for using and exploiting the data

14. Action plan:
- Concrete next steps to extract the maximum value from the data
- Areas that need further research or additional data collection

Please make sure the report is written in professional, clear and accessible language. Use concrete examples from the data to illustrate the analytical points. Format the report in Markdown so it is easy to read and clearly structured."#;

/// Substitute the flattened table into the instruction template.
pub fn build_analysis_prompt(table: &Table) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace(DATA_PLACEHOLDER, &table.to_flat_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(vec![
            vec!["region".to_string(), "sales".to_string()],
            vec!["north".to_string(), "120".to_string()],
        ])
    }

    #[test]
    fn test_template_has_exactly_one_placeholder() {
        assert_eq!(ANALYSIS_PROMPT_TEMPLATE.matches(DATA_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_template_names_fourteen_sections() {
        for section in 1..=14 {
            assert!(
                ANALYSIS_PROMPT_TEMPLATE.contains(&format!("\n{}. ", section)),
                "section {} missing",
                section
            );
        }
        assert!(!ANALYSIS_PROMPT_TEMPLATE.contains("\n15. "));
    }

    #[test]
    fn test_prompt_embeds_flattened_table() {
        let prompt = build_analysis_prompt(&sample());
        assert!(prompt.contains("region, sales\nnorth, 120"));
        assert!(!prompt.contains(DATA_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_keeps_surrounding_instructions() {
        let prompt = build_analysis_prompt(&sample());
        assert!(prompt.starts_with("Analyze this spreadsheet data"));
        assert!(prompt.contains("14. Action plan"));
    }
}
