//! Demo command handler
//!
//! Walks one recipe through its whole lifecycle against the session:
//! create, get, list, update, delete, then confirm it is gone.

use std::io::Write;

use anyhow::{bail, Result};
use serde_json::json;

use recipebook::config::DisplayConfig;
use recipebook::presentation::view::{recipe_event, RecipeCard};
use recipebook::presentation::{RecipeForm, RecipeSession};
use recipebook::RecipeBookError;

const DEMO_TITLE: &str = "Chocolate Chip Cookies";
const DEMO_DESCRIPTION: &str = "Classic homemade cookies";
const DEMO_INGREDIENTS: &[&str] = &[
    "2 cups flour",
    "1 cup sugar",
    "1 cup chocolate chips",
    "2 eggs",
];
const DEMO_UPDATED_DESCRIPTION: &str = "Updated: The best chocolate chip cookies ever!";

pub fn cmd_demo(
    session: &RecipeSession,
    display: &DisplayConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut emit = |event: serde_json::Value, text: String| -> Result<()> {
        if json {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
        } else {
            write!(out, "{}", text)?;
        }
        Ok(())
    };

    emit(json!({"event": "start"}), "Recipe Manager - demo\n\n".to_string())?;

    // 1. Create
    let draft = RecipeForm::new(DEMO_TITLE, DEMO_DESCRIPTION, DEMO_INGREDIENTS.join("\n"))
        .into_new_recipe()
        .map_err(RecipeBookError::from)?;
    let created = session
        .create()
        .execute(draft)
        .map_err(RecipeBookError::from)?;
    emit(
        recipe_event("created", &created),
        format!(
            "Step 1: Creating a recipe...\n✓ Recipe created with ID: {}\n  Title: {}\n  Created at: {}\n\n",
            created.id(),
            created.title(),
            created.created_at()
        ),
    )?;

    // 2. Get
    let Some(retrieved) = session
        .get()
        .execute(created.id())
        .map_err(RecipeBookError::from)?
    else {
        bail!("recipe {} was not found right after it was created", created.id());
    };
    emit(
        recipe_event("retrieved", &retrieved),
        format!(
            "Step 2: Retrieving the recipe...\n✓ Recipe found:\n{}\n",
            RecipeCard::new(&retrieved, display).render()
        ),
    )?;

    // 3. List
    let total = session.recipe_count().map_err(RecipeBookError::from)?;
    emit(
        json!({"event": "listed", "total": total}),
        format!("Step 3: Listing all recipes...\n✓ Total recipes: {}\n\n", total),
    )?;

    // 4. Update
    let updated = session
        .update()
        .execute(retrieved.with_description(DEMO_UPDATED_DESCRIPTION))
        .map_err(RecipeBookError::from)?;
    emit(
        recipe_event("updated", &updated),
        format!(
            "Step 4: Updating the recipe...\n✓ Recipe updated\n  New description: {}\n  Updated at: {}\n\n",
            updated.description(),
            updated.updated_at()
        ),
    )?;

    // 5. Delete
    session
        .delete()
        .execute(created.id())
        .map_err(RecipeBookError::from)?;
    emit(
        json!({"event": "deleted", "id": created.id()}),
        "Step 5: Deleting the recipe...\n✓ Recipe deleted\n\n".to_string(),
    )?;

    // 6. Verify
    let still_there = session
        .get()
        .execute(created.id())
        .map_err(RecipeBookError::from)?
        .is_some();
    if still_there {
        bail!("recipe {} still exists after delete", created.id());
    }
    emit(
        json!({"event": "verified", "deleted": true}),
        "Step 6: Verifying deletion...\n✓ Recipe successfully deleted\n\n".to_string(),
    )?;

    emit(
        json!({"event": "complete"}),
        "All steps completed!\n".to_string(),
    )?;
    Ok(())
}
