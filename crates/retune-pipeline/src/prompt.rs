// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt construction for the extraction and modification exchanges.
//!
//! Kept pure so prompt contents can be asserted without a provider call.

use serde_json::Value;

use retune_core::Settings;
use retune_schema::Schema;

/// System prompt for the extraction stage: given the settings document,
/// instruct the model to output only a JSON array of relevant key names.
pub fn extraction_prompt(settings: &Settings) -> String {
    let document = pretty(&settings.to_value());
    let example: Vec<&str> = settings.keys().take(3).collect();
    let example = serde_json::to_string(&example).unwrap_or_else(|_| "[]".to_string());

    format!(
        "You are an assistant analyzing an application's settings document.\n\
         \n\
         Below is the current settings document as JSON:\n\
         \n\
         {document}\n\
         \n\
         ### Task\n\
         - Identify which settings keys are relevant to answering the user's \
         request, or would need to be adjusted to satisfy it.\n\
         - Output ONLY a JSON array of key names taken from the settings \
         document.\n\
         - Do NOT include explanations, additional text, or any formatting \
         other than a valid JSON array.\n\
         \n\
         ### Example output format\n\
         {example}\n"
    )
}

/// System prompt for the modification stage: current settings, the exact
/// keys to change, their constraints, and strict output-format rules, plus
/// an example payload built from the current values of the relevant keys.
pub fn modification_prompt(
    settings: &Settings,
    subset: &Schema,
    relevant_keys: &[String],
) -> String {
    let document = pretty(&settings.to_value());
    let keys =
        serde_json::to_string_pretty(relevant_keys).unwrap_or_else(|_| "[]".to_string());
    let constraints = pretty(&subset.to_document());

    let example: serde_json::Map<String, Value> = relevant_keys
        .iter()
        .filter_map(|key| settings.get(key).map(|v| (key.clone(), v.clone())))
        .collect();
    let example = pretty(&Value::Object(example));

    format!(
        "You are an assistant modifying an application's settings document.\n\
         \n\
         ### Current settings\n\
         {document}\n\
         \n\
         ### Modification task\n\
         - Adjust ONLY the following keys based on the user's request:\n\
         {keys}\n\
         - Modify each value in a way that aligns with the user's request.\n\
         - Do NOT leave all values unchanged. If the request is unclear, make \
         reasonable modifications.\n\
         - Ensure all values conform to these constraints:\n\
         \n\
         ### Valid ranges and constraints\n\
         {constraints}\n\
         \n\
         ### Strict output format\n\
         - Your entire response must be a valid JSON object.\n\
         - Ensure that ALL of the keys listed above are included in the \
         response, and no others.\n\
         - Do NOT return explanations, notes, or any additional text.\n\
         - Do NOT wrap the JSON in markdown formatting (e.g., ```json ... ```).\n\
         - At least some values must change based on the user's intent.\n\
         - The response should look exactly like this, but with modifications \
         applied to reflect the user's request:\n\
         \n\
         {example}\n"
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn study_settings() -> Settings {
        Settings::from_value(json!({
            "hours_per_week": 40,
            "exam_weight": 0.6,
            "grading_scale": "A-F"
        }))
        .unwrap()
    }

    fn study_schema() -> Schema {
        Schema::from_json(
            r#"{
                "properties": {
                    "exam_weight": {"type": "number", "minimum": 0.0, "maximum": 1.0}
                },
                "required": ["exam_weight"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn extraction_prompt_embeds_the_document() {
        let prompt = extraction_prompt(&study_settings());
        assert!(prompt.contains("\"hours_per_week\": 40"));
        assert!(prompt.contains("\"grading_scale\": \"A-F\""));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn extraction_prompt_example_uses_document_keys() {
        let prompt = extraction_prompt(&study_settings());
        // Keys iterate in sorted order; the example lists the first three.
        assert!(prompt.contains(r#"["exam_weight","grading_scale","hours_per_week"]"#));
    }

    #[test]
    fn modification_prompt_lists_keys_constraints_and_example() {
        let settings = study_settings();
        let schema = study_schema();
        let keys = vec!["exam_weight".to_string()];
        let subset = schema.for_keys(keys.iter().map(String::as_str));

        let prompt = modification_prompt(&settings, &subset, &keys);
        assert!(prompt.contains("\"exam_weight\""));
        assert!(prompt.contains("\"maximum\": 1.0"));
        // The example payload carries the current value.
        assert!(prompt.contains("\"exam_weight\": 0.6"));
        assert!(prompt.contains("valid JSON object"));
    }

    #[test]
    fn modification_prompt_skips_example_values_for_missing_keys() {
        let settings = study_settings();
        let schema = Schema::default();
        let keys = vec!["not_in_document".to_string()];
        let subset = schema.for_keys(keys.iter().map(String::as_str));

        let prompt = modification_prompt(&settings, &subset, &keys);
        assert!(prompt.contains("not_in_document"));
    }
}
