//! The structured-output boundary.
//!
//! The generative capability is untrusted: everything it returns passes
//! through here before it is enriched or returned to a caller. Validation is
//! deserialization into the declared types, with `serde_path_to_error`
//! recording which field failed.

use crate::error::SchemaError;
use crate::types::{GenerationRequest, GenerationResult};

/// Parse raw model output into a `GenerationResult`.
///
/// On mismatch the error names the offending field path; no partially-typed
/// data is ever returned.
pub fn parse_generation_result(raw: &str) -> Result<GenerationResult, SchemaError> {
    let cleaned = strip_code_fences(raw);
    let mut deserializer = serde_json::Deserializer::from_str(cleaned);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| SchemaError::new(e.path().to_string(), e.inner().to_string()))
}

/// Validate an inbound generation request.
///
/// A blank ingredient list is rejected here rather than being forwarded to
/// the model: it cannot produce a meaningful suggestion, and failing fast
/// avoids a wasted upstream call.
pub fn validate_request(request: &GenerationRequest) -> Result<(), SchemaError> {
    if request.ingredients.trim().is_empty() {
        return Err(SchemaError::new("ingredients", "must not be blank"));
    }
    Ok(())
}

/// Strip a Markdown code fence if the model wrapped its JSON in one, despite
/// being asked for JSON only.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_output() {
        let raw = r#"{"recipes": [{"name": "Stir Fry", "ingredients": [{"name": "chicken", "quantity": "1 lb"}], "instructions": "Cook it."}]}"#;
        let result = parse_generation_result(raw).unwrap();
        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].name, "Stir Fry");
        assert!(result.recipes[0].calories.is_none());
    }

    #[test]
    fn parses_empty_recipe_list() {
        let result = parse_generation_result(r#"{"recipes": []}"#).unwrap();
        assert!(result.recipes.is_empty());
    }

    #[test]
    fn error_names_the_offending_field() {
        // `name` holds a number instead of a string
        let raw = r#"{"recipes": [{"name": 42, "ingredients": [], "instructions": "x"}]}"#;
        let err = parse_generation_result(raw).unwrap_err();
        assert!(err.path.contains("recipes"), "path was: {}", err.path);
        assert!(err.path.contains("name"), "path was: {}", err.path);
    }

    #[test]
    fn rejects_non_json_output() {
        let err = parse_generation_result("Sure! Here are some recipes...").unwrap_err();
        assert!(!err.message.is_empty());
    }

    #[test]
    fn tolerates_fenced_json() {
        let raw = "```json\n{\"recipes\": []}\n```";
        let result = parse_generation_result(raw).unwrap();
        assert!(result.recipes.is_empty());
    }

    #[test]
    fn blank_request_is_rejected() {
        for ingredients in ["", "   ", "\n\t"] {
            let err = validate_request(&GenerationRequest {
                ingredients: ingredients.to_string(),
            })
            .unwrap_err();
            assert_eq!(err.path, "ingredients");
        }
    }

    #[test]
    fn non_blank_request_is_accepted() {
        validate_request(&GenerationRequest {
            ingredients: "chicken, broccoli, rice".to_string(),
        })
        .unwrap();
    }
}
