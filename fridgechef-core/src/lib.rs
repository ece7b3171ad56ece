pub mod ai;
pub mod calories;
pub mod error;
pub mod images;
pub mod pipeline;
pub mod prompts;
pub mod schema;
pub mod types;

pub use error::{ConfigError, GenerateError, SchemaError, UpstreamError};
pub use pipeline::{PipelineConfig, RecipePipeline};
pub use types::{CalorieInfo, GenerationRequest, GenerationResult, Ingredient, Recipe};
