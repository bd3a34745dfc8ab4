pub mod spoonacular;
pub mod traits;

// Re-export common types
pub use spoonacular::{MenuItem, Nutrition, RecipeDetail, SearchResponse, SpoonacularClient};
pub use traits::FoodApi;
