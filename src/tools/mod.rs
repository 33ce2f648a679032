pub mod cooking;
pub mod traits;

pub use cooking::{extract_ingredients, get_cooking_tips, search_recipes, DEFAULT_DIFFICULTY};
pub use traits::{Tool, ToolDefinition};

use crate::types::ToolResult;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Read a required string argument.
fn required_str<'a>(args: &'a serde_json::Value, key: &str) -> Result<&'a str> {
    args[key]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("Missing '{}' argument", key))
}

// ---------------------------------------------------------------------------
// Cooking tools
// ---------------------------------------------------------------------------

pub struct SearchRecipesTool;

#[async_trait]
impl Tool for SearchRecipesTool {
    fn name(&self) -> &str {
        "search_recipes"
    }

    fn description(&self) -> &str {
        "Search for recipes based on cuisine type and difficulty level. \
         Returns a list of recipe suggestions with brief descriptions."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "cuisine": {
                    "type": "string",
                    "description": "The type of cuisine (e.g., Italian, Chinese, Mexican)"
                },
                "difficulty": {
                    "type": "string",
                    "description": "The difficulty level: easy, medium, or hard",
                    "default": DEFAULT_DIFFICULTY
                }
            },
            "required": ["cuisine"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        let cuisine = required_str(&args, "cuisine")?;
        let difficulty = match &args["difficulty"] {
            serde_json::Value::Null => DEFAULT_DIFFICULTY,
            value => value
                .as_str()
                .ok_or_else(|| anyhow::anyhow!("'difficulty' must be a string"))?,
        };
        Ok(search_recipes(cuisine, difficulty))
    }
}

pub struct ExtractIngredientsTool;

#[async_trait]
impl Tool for ExtractIngredientsTool {
    fn name(&self) -> &str {
        "extract_ingredients"
    }

    fn description(&self) -> &str {
        "Extract and list all ingredients needed for a specific recipe. \
         Returns detailed ingredient list with measurements."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "recipe_name": {
                    "type": "string",
                    "description": "The name of the recipe to extract ingredients for"
                }
            },
            "required": ["recipe_name"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        Ok(extract_ingredients(required_str(&args, "recipe_name")?))
    }
}

pub struct CookingTipsTool;

#[async_trait]
impl Tool for CookingTipsTool {
    fn name(&self) -> &str {
        "get_cooking_tips"
    }

    fn description(&self) -> &str {
        "Get helpful cooking tips and techniques for various cooking topics."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "topic": {
                    "type": "string",
                    "description": "The cooking topic or technique to get tips about"
                }
            },
            "required": ["topic"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<String> {
        Ok(get_cooking_tips(required_str(&args, "topic")?))
    }
}

// ---------------------------------------------------------------------------
// Tool registry
// ---------------------------------------------------------------------------

/// Name-addressed set of tools offered to the model.
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding the three cooking tools.
    pub fn cooking() -> Self {
        let mut registry = Self::new();
        registry.register(SearchRecipesTool);
        registry.register(ExtractIngredientsTool);
        registry.register(CookingTipsTool);
        registry
    }

    /// Add a tool. A tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        self.tools.retain(|t| t.name() != tool.name());
        self.tools.push(Box::new(tool));
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Tool definitions for the inference API, in registration order.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Execute a tool call by name. Failures are folded into the result.
    pub async fn execute(&self, name: &str, args: &serde_json::Value) -> ToolResult {
        let result = match self.tools.iter().find(|t| t.name() == name) {
            Some(tool) => tool.execute(args.clone()).await,
            None => Err(anyhow::anyhow!("Unknown tool: {}", name)),
        };

        match result {
            Ok(output) => {
                debug!("Tool {} returned {} chars", name, output.len());
                ToolResult {
                    tool_call_id: String::new(), // Set by caller
                    output,
                    success: true,
                }
            }
            Err(e) => ToolResult {
                tool_call_id: String::new(),
                output: format!("Error: {}", e),
                success: false,
            },
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::cooking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooking_registry_exposes_three_tools_in_order() {
        let registry = ToolRegistry::cooking();
        assert_eq!(
            registry.names(),
            vec!["search_recipes", "extract_ingredients", "get_cooking_tips"]
        );
    }

    #[test]
    fn definitions_keep_parameter_names() {
        let defs = ToolRegistry::cooking().definitions();
        assert_eq!(defs[0].parameters["required"], json!(["cuisine"]));
        assert_eq!(defs[0].parameters["properties"]["difficulty"]["default"], "medium");
        assert!(defs[1].parameters["properties"]["recipe_name"].is_object());
        assert!(defs[2].parameters["properties"]["topic"].is_object());
    }

    #[tokio::test]
    async fn missing_difficulty_uses_default() {
        let registry = ToolRegistry::cooking();
        let result = registry
            .execute("search_recipes", &json!({ "cuisine": "mexican" }))
            .await;
        assert!(result.success);
        assert_eq!(result.output, search_recipes("mexican", "medium"));

        let result = registry
            .execute("search_recipes", &json!({ "cuisine": "mexican", "difficulty": null }))
            .await;
        assert_eq!(result.output, search_recipes("mexican", "medium"));
    }

    #[tokio::test]
    async fn lookup_misses_are_successful_results() {
        let result = ToolRegistry::cooking()
            .execute("get_cooking_tips", &json!({ "topic": "sous vide" }))
            .await;
        assert!(result.success);
        assert!(result.output.starts_with("Sorry, I don't have tips for 'sous vide'."));
    }

    #[tokio::test]
    async fn missing_argument_is_a_failed_result() {
        let result = ToolRegistry::cooking()
            .execute("extract_ingredients", &json!({}))
            .await;
        assert!(!result.success);
        assert_eq!(result.output, "Error: Missing 'recipe_name' argument");
    }

    #[tokio::test]
    async fn unknown_tool_is_a_failed_result() {
        let result = ToolRegistry::cooking().execute("exec", &json!({})).await;
        assert!(!result.success);
        assert_eq!(result.output, "Error: Unknown tool: exec");
    }

    #[tokio::test]
    async fn register_replaces_same_name() {
        struct Stub;

        #[async_trait]
        impl Tool for Stub {
            fn name(&self) -> &str {
                "get_cooking_tips"
            }
            fn description(&self) -> &str {
                "stub"
            }
            fn parameters_schema(&self) -> serde_json::Value {
                json!({ "type": "object" })
            }
            async fn execute(&self, _args: serde_json::Value) -> Result<String> {
                Ok("stubbed".into())
            }
        }

        let mut registry = ToolRegistry::cooking();
        registry.register(Stub);
        assert_eq!(registry.names().len(), 3);
        let result = registry.execute("get_cooking_tips", &json!({})).await;
        assert_eq!(result.output, "stubbed");
    }
}
