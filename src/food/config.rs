use std::fmt;

use crate::food::error::FoodError;

pub const API_KEY_VAR: &str = "API_KEY";

/// Spoonacular credential. `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, FoodError> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            return Err(FoodError::Config(format!("{} is set but empty", API_KEY_VAR)));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub spoonacular_api_key: ApiKey,
}

impl FoodConfig {
    pub fn from_env() -> Result<Self, FoodError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, FoodError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_KEY_VAR).ok_or_else(|| {
            FoodError::Config(format!("{} environment variable not set", API_KEY_VAR))
        })?;

        Ok(Self {
            spoonacular_api_key: ApiKey::new(raw)?,
        })
    }
}
