//! End-to-end test of the public API: fake AI client through the pipeline
//! to an enriched, serializable result.

use std::sync::Arc;

use fridgechef_core::ai::FakeClient;
use fridgechef_core::calories::FixedCalorieEstimator;
use fridgechef_core::images::PlaceholderImageLookup;
use fridgechef_core::{GenerationRequest, GenerationResult, RecipePipeline};

const FRIDGE_RESPONSE: &str = r#"{"recipes": [
    {"name": "Chicken and Broccoli Stir Fry",
     "ingredients": [
        {"name": "chicken breast", "quantity": "1 lb"},
        {"name": "broccoli", "quantity": "2 cups"},
        {"name": "rice", "quantity": "1 cup"}
     ],
     "instructions": "Slice the chicken, stir-fry with broccoli, serve over rice."},
    {"name": "Broccoli Rice Bowl",
     "ingredients": [
        {"name": "broccoli", "quantity": "1 head"},
        {"name": "rice", "quantity": "2 cups"}
     ],
     "instructions": "Steam the broccoli and pile it on the rice."}
]}"#;

#[tokio::test]
async fn fridge_ingredients_become_enriched_suggestions() {
    let ai = FakeClient::with_response("chicken, broccoli, rice", FRIDGE_RESPONSE);
    let pipeline = RecipePipeline::new(
        Arc::new(ai),
        Arc::new(FixedCalorieEstimator::from_env()),
        Arc::new(PlaceholderImageLookup),
    );

    let result = pipeline
        .generate(GenerationRequest {
            ingredients: "chicken, broccoli, rice".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(result.recipes.len(), 2);
    for recipe in &result.recipes {
        assert!(!recipe.name.is_empty());
        assert!(!recipe.ingredients.is_empty());
        assert!(!recipe.instructions.is_empty());
        assert_eq!(recipe.calories, Some(500));
        let url = recipe.image_url.as_deref().unwrap();
        assert!(url.starts_with("https://picsum.photos/400/300?random="));
    }

    // The enriched result survives a wire round trip unchanged.
    let json = serde_json::to_string(&result).unwrap();
    let parsed: GenerationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}
