//! System prompt builder.
//!
//! Layers (in order):
//! 1. Assistant persona and tool-usage instructions
//! 2. Capabilities generated from the catalog
//! 3. Example requests

use crate::catalog::{self, Difficulty};
use crate::config::CookingConfig;
use tracing::debug;

const PERSONA: &str = "You are a friendly and knowledgeable cooking assistant. \
Help users find recipes, understand ingredients, and learn cooking techniques. \
When users ask about recipes, use the search_recipes tool to find appropriate suggestions. \
When they want to know ingredients for a specific dish, use the extract_ingredients tool. \
For cooking advice and tips, use the get_cooking_tips tool. \
Be encouraging and make cooking seem approachable and fun! \
If a user's question is unclear, ask clarifying questions. \
Always provide helpful context and suggestions.";

const EXAMPLES: &[&str] = &[
    "Find me easy Italian recipes",
    "What ingredients do I need for Kung Pao Chicken?",
    "Give me cooking tips for pasta",
    "Show me medium difficulty Mexican dishes",
];

/// Build the complete system prompt.
pub fn build_system_prompt(config: &CookingConfig) -> String {
    let mut prompt = String::with_capacity(2048);

    if !config.name.is_empty() {
        prompt.push_str(&format!("Your name is {}.\n\n", config.name));
    }
    prompt.push_str(PERSONA);
    prompt.push_str("\n\n");

    let cuisines: Vec<String> = catalog::cuisines()
        .into_iter()
        .map(catalog::title_case)
        .collect();
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(Difficulty::as_str).collect();

    prompt.push_str("You have access to the following capabilities:\n");
    prompt.push_str(&format!(
        "1. Search for recipes by cuisine type ({}) and difficulty ({})\n",
        cuisines.join(", "),
        difficulties.join(", ")
    ));
    prompt.push_str("2. Extract ingredients for specific recipes with measurements and cooking times\n");
    prompt.push_str(&format!(
        "3. Provide cooking tips for topics like {}\n\n",
        catalog::topics().join(", ")
    ));

    prompt.push_str("Examples of what you can help with:\n");
    for example in EXAMPLES {
        prompt.push_str(&format!("- \"{}\"\n", example));
    }

    debug!("System prompt: {} chars", prompt.len());
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_catalog_capabilities() {
        let prompt = build_system_prompt(&CookingConfig::default());
        assert!(prompt.starts_with("Your name is CookingAssistant."));
        assert!(prompt.contains("(Italian, Chinese, Mexican, Indian) and difficulty (easy, medium, hard)"));
        assert!(prompt.contains("pasta, rice, chicken, vegetables, seasoning, knife skills"));
        assert!(prompt.contains("use the extract_ingredients tool"));
    }

    #[test]
    fn unnamed_assistant_skips_the_name_line() {
        let config = CookingConfig {
            name: String::new(),
            ..CookingConfig::default()
        };
        assert!(build_system_prompt(&config).starts_with("You are a friendly"));
    }
}
