//! Text and JSON rendering of recipes

use std::fmt::Write as _;

use serde_json::{json, Value};

use crate::config::DisplayConfig;
use crate::domain::entities::Recipe;

/// Truncate to at most `len` characters
fn clip(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Label used when the user picks a recipe from a menu
pub fn selection_label(recipe: &Recipe, display: &DisplayConfig) -> String {
    format!(
        "{} ({}...)",
        recipe.title(),
        recipe.id().short(display.id_prefix_len)
    )
}

/// Sort for display: oldest first, id as tie-breaker.
///
/// Repositories return recipes in no particular order.
pub fn sorted_for_display(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.sort_by(|a, b| {
        a.created_at()
            .cmp(&b.created_at())
            .then_with(|| a.id().cmp(b.id()))
    });
    recipes
}

/// Multi-line card for one recipe
pub struct RecipeCard<'a> {
    recipe: &'a Recipe,
    display: &'a DisplayConfig,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe, display: &'a DisplayConfig) -> Self {
        Self { recipe, display }
    }

    pub fn render(&self) -> String {
        let r = self.recipe;
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", r.title());
        let _ = writeln!(out, "Description: {}", r.description());
        let _ = writeln!(out, "Ingredients:");
        for ingredient in r.ingredients() {
            let _ = writeln!(out, "  - {}", ingredient);
        }
        let _ = writeln!(out, "ID: {}...", r.id().short(self.display.id_prefix_len));
        let _ = writeln!(
            out,
            "Created: {}",
            clip(&r.created_at_string(), self.display.timestamp_len)
        );
        let _ = writeln!(
            out,
            "Updated: {}",
            clip(&r.updated_at_string(), self.display.timestamp_len)
        );
        out
    }
}

/// All recipes, with a total line, or a hint when there are none
pub fn render_list(recipes: &[Recipe], display: &DisplayConfig) -> String {
    if recipes.is_empty() {
        return "No recipes found. Add your first recipe!\n".to_string();
    }

    let mut out = format!("Total recipes: {}\n", recipes.len());
    for recipe in recipes {
        out.push('\n');
        out.push_str(&RecipeCard::new(recipe, display).render());
    }
    out
}

/// JSON event wrapping a recipe, one line per event on stdout
pub fn recipe_event(event: &str, recipe: &Recipe) -> Value {
    json!({
        "event": event,
        "recipe": recipe,
    })
}
