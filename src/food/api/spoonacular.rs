use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::time::Duration;
use url::Url;

use crate::config::{ClientSettings, MAX_RETRIES, MAX_RETRY_DELAY};
use crate::food::api::traits::FoodApi;
use crate::food::config::{ApiKey, FoodConfig};
use crate::food::error::FoodError;

// Error bodies are echoed to the user; keep them to a readable size.
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub restaurant_chain: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nutrition: Nutrition,
}

/// Fat, protein and carbs arrive as display strings with units ("12g").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    #[serde(deserialize_with = "null_as_default")]
    pub calories: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protein: String,
    #[serde(deserialize_with = "null_as_default")]
    pub carbs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub instructions: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gluten_free: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub vegan: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ready_in_minutes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub servings: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug)]
pub struct SpoonacularClient {
    api_key: ApiKey,
    base_url: String,
    client: Client,
    max_retries: u32,
    retry_backoff: Duration,
}

impl SpoonacularClient {
    pub fn new(config: FoodConfig, settings: &ClientSettings) -> Result<Self, FoodError> {
        // Validate once so per-request URL building only fails on bad input.
        Url::parse(&settings.base_url)?;

        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            api_key: config.spoonacular_api_key,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            client,
            max_retries: settings.max_retries.min(MAX_RETRIES),
            retry_backoff: settings.retry_backoff,
        })
    }

    pub fn search_url(&self, query: &str) -> Result<Url, FoodError> {
        let mut url = Url::parse(&format!("{}/food/menuItems/search", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("addMenuItemInformation", "true");
        Ok(url)
    }

    pub fn recipe_url(&self, id: i64) -> Result<Url, FoodError> {
        Ok(Url::parse(&format!("{}/recipes/{}/information", self.base_url, id))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &'static str) -> Result<T, FoodError> {
        let mut attempt = 0;
        loop {
            match self.get_json_once(url.clone(), context).await {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = retry_delay(self.retry_backoff, attempt);
                    attempt += 1;
                    warn!(
                        "{} request failed ({}), retry {}/{} in {:?}",
                        context, e, attempt, self.max_retries, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }

    async fn get_json_once<T: DeserializeOwned>(&self, url: Url, context: &'static str) -> Result<T, FoodError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("apikey", self.api_key.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(FoodError::Unauthorized);
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(FoodError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        serde_json::from_str(&body).map_err(|source| FoodError::Decode { context, source })
    }
}

#[async_trait]
impl FoodApi for SpoonacularClient {
    async fn search_menu_items(&self, query: &str) -> Result<Vec<MenuItem>, FoodError> {
        let url = self.search_url(query)?;
        let response: SearchResponse = self.get_json(url, "search").await?;
        debug!("search for {:?} returned {} menu items", query, response.menu_items.len());
        Ok(response.menu_items)
    }

    async fn fetch_recipe(&self, id: i64) -> Result<RecipeDetail, FoodError> {
        let url = self.recipe_url(id)?;
        self.get_json(url, "recipe").await
    }
}

/// Doubling backoff, capped so a single sleep stays short.
fn retry_delay(base: Duration, attempt: u32) -> Duration {
    base.checked_mul(2u32.saturating_pow(attempt))
        .unwrap_or(MAX_RETRY_DELAY)
        .min(MAX_RETRY_DELAY)
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
