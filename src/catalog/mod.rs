//! Static cooking knowledge: recipe catalog, ingredient records and tips.
//!
//! All tables are immutable `static` data, so every accessor here is safe to
//! call from any number of threads or tasks without synchronization.

pub mod matcher;
pub mod tables;

pub use matcher::{first_match, is_bidirectional_match, title_case};
pub use tables::{Cuisine, IngredientRecord, TipSet, INGREDIENT_RECORDS, RECIPE_CATALOG, TIP_SETS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recipe difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| LookupError::not_found("difficulty", s))
    }
}

/// Raised by the exact-key accessors below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no {table} entry for '{key}'")]
    NotFound { table: &'static str, key: String },
}

impl LookupError {
    fn not_found(table: &'static str, key: &str) -> Self {
        Self::NotFound {
            table,
            key: key.to_string(),
        }
    }
}

impl Cuisine {
    /// Recipe summaries for the given difficulty.
    pub fn recipes(&self, difficulty: Difficulty) -> &'static [&'static str] {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

/// Cuisine names in declaration order.
pub fn cuisines() -> Vec<&'static str> {
    RECIPE_CATALOG.iter().map(|c| c.name).collect()
}

/// Tip topics in declaration order.
pub fn topics() -> Vec<&'static str> {
    TIP_SETS.iter().map(|t| t.topic).collect()
}

/// Ingredient record keys (recipe names) in declaration order.
pub fn recipe_keys() -> Vec<&'static str> {
    INGREDIENT_RECORDS.iter().map(|r| r.recipe).collect()
}

pub fn cuisine(name: &str) -> Result<&'static Cuisine, LookupError> {
    RECIPE_CATALOG
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| LookupError::not_found("cuisine", name))
}

pub fn recipes(
    cuisine_name: &str,
    difficulty: Difficulty,
) -> Result<&'static [&'static str], LookupError> {
    Ok(cuisine(cuisine_name)?.recipes(difficulty))
}

pub fn ingredient_record(recipe: &str) -> Result<&'static IngredientRecord, LookupError> {
    INGREDIENT_RECORDS
        .iter()
        .find(|r| r.recipe == recipe)
        .ok_or_else(|| LookupError::not_found("ingredient", recipe))
}

pub fn tip_set(topic: &str) -> Result<&'static TipSet, LookupError> {
    TIP_SETS
        .iter()
        .find(|t| t.topic == topic)
        .ok_or_else(|| LookupError::not_found("tip", topic))
}
