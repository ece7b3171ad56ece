//! Recipe generation prompt: free-text fridge ingredients in, structured
//! recipe suggestions out.

/// Prompt name for logging.
pub const RECIPE_GENERATION_PROMPT_NAME: &str = "recipe_generation";

/// Render the recipe generation prompt with the given ingredient list.
///
/// `ingredients` is interpolated as-is; it is the caller's comma-separated
/// free text. The prompt constrains the model to the `GenerationResult`
/// shape and asks for non-empty ingredient lists per recipe (a soft
/// invariant - the schema itself does not enforce it).
pub fn render_recipe_generation_prompt(ingredients: &str) -> String {
    format!(
        r#"You are a recipe assistant. Given the following ingredients available in the fridge, suggest some recipes that can be made with them.

Ingredients: {ingredients}

Respond with JSON only, no other text, in exactly this shape:
{{"recipes": [{{"name": "Recipe name", "ingredients": [{{"name": "ingredient", "quantity": "2 cups"}}], "instructions": "Step-by-step instructions as one string."}}]}}

Every recipe must have a non-empty ingredients list with quantities. If nothing sensible can be made, respond with {{"recipes": []}}."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_ingredients() {
        let prompt = render_recipe_generation_prompt("chicken, broccoli, rice");
        assert!(prompt.contains("Ingredients: chicken, broccoli, rice"));
    }

    #[test]
    fn constrains_output_shape() {
        let prompt = render_recipe_generation_prompt("eggs");
        assert!(prompt.contains(r#""recipes""#));
        assert!(prompt.contains(r#""quantity""#));
        assert!(prompt.contains("JSON only"));
    }
}
