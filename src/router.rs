//! Keyword intent router.
//!
//! Maps a raw user message straight to one of the cooking lookups without a
//! model round-trip. Recipe search is tried first, then ingredients, then
//! tips; a message that fits none of them is left for the model to answer.

use crate::catalog::{self, Difficulty};
use crate::tools::{self, DEFAULT_DIFFICULTY};
use regex::Regex;
use std::sync::OnceLock;

const RECIPE_KEYWORDS: &[&str] = &["recipe", "find", "show me", "suggest"];
const INGREDIENT_KEYWORDS: &[&str] = &["ingredient", "what do i need", "shopping list"];
const TIP_KEYWORDS: &[&str] = &["tip", "advice", "how to"];

/// Recipe-name extraction patterns, tried in order.
fn ingredient_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)ingredients? for (.+?)(?:\?|$)",
            r"(?i)what (?:do )?i need (?:for|to make) (.+?)(?:\?|$)",
            r"(?i)(.+?) ingredients?",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("ingredient pattern is valid"))
        .collect()
    })
}

/// A lookup the router resolved from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SearchRecipes {
        cuisine: String,
        difficulty: String,
    },
    ExtractIngredients {
        recipe_name: String,
    },
    CookingTips {
        topic: String,
    },
}

impl Intent {
    /// Tool name this intent corresponds to.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::SearchRecipes { .. } => "search_recipes",
            Self::ExtractIngredients { .. } => "extract_ingredients",
            Self::CookingTips { .. } => "get_cooking_tips",
        }
    }

    /// Run the lookup.
    pub fn dispatch(&self) -> String {
        match self {
            Self::SearchRecipes {
                cuisine,
                difficulty,
            } => tools::search_recipes(cuisine, difficulty),
            Self::ExtractIngredients { recipe_name } => tools::extract_ingredients(recipe_name),
            Self::CookingTips { topic } => tools::get_cooking_tips(topic),
        }
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Resolve a message to an intent, if it clearly asks for one.
pub fn route(message: &str) -> Option<Intent> {
    let lower = message.to_lowercase();

    if contains_any(&lower, RECIPE_KEYWORDS) {
        let cuisine = catalog::cuisines()
            .into_iter()
            .find(|c| lower.contains(c));
        if let Some(cuisine) = cuisine {
            let difficulty = Difficulty::ALL
                .iter()
                .map(Difficulty::as_str)
                .find(|d| lower.contains(d))
                .unwrap_or(DEFAULT_DIFFICULTY);
            return Some(Intent::SearchRecipes {
                cuisine: cuisine.to_string(),
                difficulty: difficulty.to_string(),
            });
        }
    }

    if contains_any(&lower, INGREDIENT_KEYWORDS) {
        let recipe_name = ingredient_patterns()
            .iter()
            .find_map(|re| re.captures(message))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());
        if let Some(recipe_name) = recipe_name {
            return Some(Intent::ExtractIngredients { recipe_name });
        }
    }

    if contains_any(&lower, TIP_KEYWORDS) {
        if let Some(topic) = catalog::topics().into_iter().find(|t| lower.contains(t)) {
            return Some(Intent::CookingTips {
                topic: topic.to_string(),
            });
        }
    }

    None
}
