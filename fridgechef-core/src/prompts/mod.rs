//! Prompt templates. One module per prompt, each exporting a name constant
//! and a `render_*` function.

pub mod recipe_generation;
