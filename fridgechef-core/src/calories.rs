//! Calorie estimation boundary.
//!
//! The pipeline depends only on the `CalorieEstimator` trait, so the stub
//! can later be swapped for a real nutrition-database client without
//! touching the pipeline.

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::types::{CalorieInfo, Ingredient};

/// The estimate the stub answers with, for any ingredient list.
pub const FIXED_CALORIE_ESTIMATE: u32 = 500;

/// Estimates the calorie total for one recipe's ingredient list.
#[async_trait]
pub trait CalorieEstimator: Send + Sync {
    /// Estimate total calories.
    ///
    /// An empty ingredient list is allowed and must not fail.
    async fn estimate(&self, ingredients: &[Ingredient]) -> Result<CalorieInfo, UpstreamError>;
}

/// Stand-in for a real nutrition backend: always answers with a fixed
/// estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedCalorieEstimator;

impl FixedCalorieEstimator {
    /// Build from the environment.
    ///
    /// `CALORIE_API_KEY` is the credential a real nutrition backend would
    /// use; the stub answers whether or not it is set, so its absence never
    /// fails a request.
    pub fn from_env() -> Self {
        if std::env::var("CALORIE_API_KEY").is_err() {
            tracing::debug!("CALORIE_API_KEY not set, using fixed calorie estimates");
        }
        Self
    }
}

#[async_trait]
impl CalorieEstimator for FixedCalorieEstimator {
    async fn estimate(&self, _ingredients: &[Ingredient]) -> Result<CalorieInfo, UpstreamError> {
        Ok(CalorieInfo {
            calories: FIXED_CALORIE_ESTIMATE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fixed_estimate() {
        let estimator = FixedCalorieEstimator;
        let info = estimator
            .estimate(&[Ingredient {
                name: "rice".to_string(),
                quantity: "2 cups".to_string(),
            }])
            .await
            .unwrap();
        assert_eq!(info.calories, 500);
    }

    #[tokio::test]
    async fn empty_ingredient_list_does_not_fail() {
        let estimator = FixedCalorieEstimator;
        let info = estimator.estimate(&[]).await.unwrap();
        assert_eq!(info.calories, FIXED_CALORIE_ESTIMATE);
    }
}
