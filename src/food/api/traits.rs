use async_trait::async_trait;

use crate::food::api::spoonacular::{MenuItem, RecipeDetail};
use crate::food::error::FoodError;

/// The two lookups the interactive session needs from the food service.
#[async_trait]
pub trait FoodApi: Send + Sync {
    /// Menu items matching free-text `query`, in the order the service returned them.
    async fn search_menu_items(&self, query: &str) -> Result<Vec<MenuItem>, FoodError>;

    /// Recipe information for a menu item id taken from a previous search.
    async fn fetch_recipe(&self, id: i64) -> Result<RecipeDetail, FoodError>;
}
