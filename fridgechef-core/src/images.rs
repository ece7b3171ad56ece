//! Image lookup boundary.
//!
//! Best-effort and decorative: a failed lookup never blocks returning a
//! recipe. Behind a trait so a real image-search client can replace the
//! placeholder without touching the pipeline.

use async_trait::async_trait;
use url::Url;

use crate::error::UpstreamError;

/// Base URL for the placeholder image service.
pub const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/400/300";

/// Returns a URL for an image of the prepared meal.
#[async_trait]
pub trait ImageLookup: Send + Sync {
    async fn lookup(&self, meal_name: &str) -> Result<String, UpstreamError>;
}

/// Deterministic placeholder keyed by meal name: the same name yields the
/// same URL within a process. Not authoritative, not stable across services.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderImageLookup;

#[async_trait]
impl ImageLookup for PlaceholderImageLookup {
    async fn lookup(&self, meal_name: &str) -> Result<String, UpstreamError> {
        // Round-tripping through Url percent-encodes whatever the meal name
        // contains, so the result is always a syntactically valid URL.
        let raw = format!("{PLACEHOLDER_BASE_URL}?random={meal_name}");
        let url = Url::parse(&raw)
            .map_err(|e| UpstreamError::Api(format!("invalid placeholder URL for {meal_name:?}: {e}")))?;
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn url_embeds_the_meal_name() {
        let lookup = PlaceholderImageLookup;
        let url = lookup.lookup("Fried-Rice").await.unwrap();
        assert!(url.contains("Fried-Rice"), "url was: {url}");
    }

    #[tokio::test]
    async fn url_is_syntactically_valid() {
        let lookup = PlaceholderImageLookup;
        for name in ["Stir Fry", "Crème Brûlée", "Fish & Chips"] {
            let url = lookup.lookup(name).await.unwrap();
            Url::parse(&url).unwrap();
        }
    }

    #[tokio::test]
    async fn repeated_lookups_are_identical() {
        let lookup = PlaceholderImageLookup;
        let first = lookup.lookup("Shakshuka").await.unwrap();
        let second = lookup.lookup("Shakshuka").await.unwrap();
        assert_eq!(first, second);
    }
}
