//! The three cooking lookups exposed to the model.
//!
//! Every outcome, including "no match" and invalid input, is a plain string:
//! the text is injected verbatim into the model's context, so the wording
//! and layout here are part of the tool contract.

use crate::catalog::{self, first_match, title_case, Difficulty, INGREDIENT_RECORDS, TIP_SETS};
use std::fmt::Write as _;

/// Difficulty used when the caller does not supply one.
pub const DEFAULT_DIFFICULTY: &str = "medium";

pub const INVALID_DIFFICULTY: &str = "Invalid difficulty level. Please choose: easy, medium, or hard";

/// List recipe summaries for a cuisine at a difficulty level.
///
/// The header echoes `cuisine` and `difficulty` exactly as supplied.
pub fn search_recipes(cuisine: &str, difficulty: &str) -> String {
    let Ok(entry) = catalog::cuisine(&cuisine.to_lowercase()) else {
        return format!(
            "Sorry, I don't have recipes for {} cuisine. Available cuisines: {}",
            cuisine,
            catalog::cuisines().join(", ")
        );
    };

    let Ok(level) = difficulty.parse::<Difficulty>() else {
        return INVALID_DIFFICULTY.to_string();
    };

    let mut result = format!("Here are {} {} recipes:\n\n", difficulty, cuisine);
    for (i, recipe) in entry.recipes(level).iter().enumerate() {
        let _ = writeln!(result, "{}. {}", i + 1, recipe);
    }
    result
}

/// Ingredient list, servings and timings for the first recipe matching `recipe_name`.
pub fn extract_ingredients(recipe_name: &str) -> String {
    let Some(record) = first_match(INGREDIENT_RECORDS, |r| r.recipe, recipe_name) else {
        return format!(
            "Sorry, I don't have ingredient information for '{}'. \
             Try asking about specific recipes like 'Spaghetti Aglio e Olio', \
             'Kung Pao Chicken', 'Butter Chicken', 'Chicken Enchiladas', or 'Caprese Salad'.",
            recipe_name
        );
    };

    let mut result = format!("Ingredients for {}:\n\n", title_case(record.recipe));
    let _ = writeln!(result, "Servings: {}", record.servings);
    let _ = writeln!(result, "Prep Time: {}", record.prep_time);
    let _ = writeln!(result, "Cook Time: {}\n", record.cook_time);
    result.push_str("Ingredients:\n");
    for ingredient in record.ingredients {
        let _ = writeln!(result, "• {}", ingredient);
    }
    result
}

/// Numbered tips for the first topic matching `topic`.
pub fn get_cooking_tips(topic: &str) -> String {
    let Some(set) = first_match(TIP_SETS, |t| t.topic, topic) else {
        return format!(
            "Sorry, I don't have tips for '{}'. Available topics: {}",
            topic,
            catalog::topics().join(", ")
        );
    };

    let mut result = format!("Cooking tips for {}:\n\n", title_case(set.topic));
    for (i, tip) in set.tips.iter().enumerate() {
        let _ = writeln!(result, "{}. {}", i + 1, tip);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_renders_header_and_numbered_entries() {
        let out = search_recipes("Italian", "Easy");
        assert!(out.starts_with("Here are Easy Italian recipes:\n\n"));
        assert!(out.contains("1. Spaghetti Aglio e Olio - "));
        assert!(out.contains("3. Bruschetta - "));
        assert!(out.ends_with("(15 min)\n"));
    }

    #[test]
    fn unknown_cuisine_lists_available_ones() {
        assert_eq!(
            search_recipes("French", "easy"),
            "Sorry, I don't have recipes for French cuisine. \
             Available cuisines: italian, chinese, mexican, indian"
        );
    }

    #[test]
    fn unknown_cuisine_is_reported_before_bad_difficulty() {
        assert!(search_recipes("thai", "extreme").starts_with("Sorry"));
    }

    #[test]
    fn bad_difficulty_returns_fixed_message() {
        assert_eq!(search_recipes("chinese", "extreme"), INVALID_DIFFICULTY);
    }

    #[test]
    fn ingredients_render_in_fixed_order() {
        let out = extract_ingredients("Caprese Salad");
        let expected = "Ingredients for Caprese Salad:\n\n\
                        Servings: 4 people\n\
                        Prep Time: 10 minutes\n\
                        Cook Time: 0 minutes\n\n\
                        Ingredients:\n\
                        • 4 large ripe tomatoes, sliced\n";
        assert!(out.starts_with(expected), "{out}");
        assert_eq!(out.lines().filter(|l| l.starts_with("• ")).count(), 7);
    }

    #[test]
    fn over_specified_recipe_name_still_matches() {
        let out = extract_ingredients("How do I make butter chicken tonight?");
        assert!(out.starts_with("Ingredients for Butter Chicken:"));
        assert!(out.contains("Servings: 6 people"));
    }

    #[test]
    fn unknown_recipe_suggests_examples() {
        let out = extract_ingredients("Beef Wellington");
        assert!(out.starts_with("Sorry, I don't have ingredient information for 'Beef Wellington'."));
        assert!(out.ends_with("'Chicken Enchiladas', or 'Caprese Salad'."));
    }

    #[test]
    fn tips_title_case_the_matched_topic() {
        let out = get_cooking_tips("KNIFE");
        assert!(out.starts_with("Cooking tips for Knife Skills:\n\n1. Keep knives sharp"));
        assert!(out.contains("5. Clean and dry knives immediately after use\n"));
    }

    #[test]
    fn unknown_topic_lists_all_topics() {
        assert_eq!(
            get_cooking_tips("baking"),
            "Sorry, I don't have tips for 'baking'. \
             Available topics: pasta, rice, chicken, vegetables, seasoning, knife skills"
        );
    }
}
