//! Wire contract shared by the pipeline and the HTTP API.
//!
//! Field names on the wire are camelCase, matching what the generation
//! prompt asks the model to emit.

use serde::{Deserialize, Serialize};

/// A single recipe ingredient.
///
/// `quantity` is unparsed free text ("2 cups", "a pinch"), not a structured
/// unit and amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// A recipe suggestion.
///
/// `calories` and `image_url` are normally absent when the model first
/// produces the candidate and are filled in during enrichment. A model that
/// fills them itself is allowed; enrichment overwrites `calories` with the
/// estimator's value and only touches `image_url` when it is still absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request for recipe generation.
///
/// `ingredients` is a single comma-separated free-text field, exactly as the
/// user typed it. No parsing happens before it is interpolated into the
/// prompt; the caller is responsible for comma separation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerationRequest {
    pub ingredients: String,
}

/// The pipeline's result: recipe candidates in generation order.
///
/// No dedup and no ranking guarantee. Zero recipes is a valid result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenerationResult {
    pub recipes: Vec<Recipe>,
}

/// Calorie estimate for one recipe's ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalorieInfo {
    pub calories: u32,
}
