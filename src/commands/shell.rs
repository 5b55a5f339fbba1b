//! Interactive shell
//!
//! Menu-driven recipe management over one `RecipeSession`. Not-found and
//! validation errors are shown to the user and the menu continues; anything
//! else ends the shell.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use is_terminal::IsTerminal;

use recipebook::config::DisplayConfig;
use recipebook::domain::ports::{RepositoryError, RepositoryOperation};
use recipebook::presentation::view::{render_list, selection_label, sorted_for_display, RecipeCard};
use recipebook::presentation::{RecipeForm, RecipeSession};
use recipebook::{Recipe, RecipeBookError, RecipeBookResult, RecipeId};

const MENU: &[&str] = &[
    "List all recipes",
    "Add new recipe",
    "Update recipe",
    "Delete recipe",
    "Quit",
];

pub fn cmd_shell(session: &RecipeSession, display: &DisplayConfig) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        return Err(RecipeBookError::NotInteractive.into());
    }

    println!("Recipe Manager");
    loop {
        let total = session.recipe_count().map_err(RecipeBookError::from)?;
        println!("\nTotal recipes: {}", total);

        let selection = Select::new()
            .with_prompt("Choose an action")
            .items(MENU)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => show_all(session, display),
            1 => add_interactive(session),
            2 => update_interactive(session, display),
            3 => delete_interactive(session, display),
            _ => break,
        };

        if let Err(err) = outcome {
            match err.downcast_ref::<RecipeBookError>() {
                Some(e) if e.is_user_facing() => println!("✗ {}", e),
                _ => return Err(err),
            }
        }
    }

    Ok(())
}

fn show_all(session: &RecipeSession, display: &DisplayConfig) -> Result<()> {
    let recipes = session.list().execute().map_err(RecipeBookError::from)?;
    print!("{}", render_list(&sorted_for_display(recipes), display));
    Ok(())
}

fn add_interactive(session: &RecipeSession) -> Result<()> {
    let form = prompt_form(&RecipeForm::default())?;
    let created = submit_new(session, form)?;
    println!("✓ Recipe '{}' created successfully!", created.title());
    Ok(())
}

fn update_interactive(session: &RecipeSession, display: &DisplayConfig) -> Result<()> {
    let Some(id) = pick_recipe(session, display, "Select a recipe to update")? else {
        println!("No recipes available to update.");
        return Ok(());
    };

    let current = session
        .get()
        .execute(&id)
        .map_err(RecipeBookError::from)?
        .ok_or_else(|| {
            RecipeBookError::from(RepositoryError::not_found(&id, RepositoryOperation::Update))
        })?;

    println!("Editing: {}", current.title());
    let form = prompt_form(&RecipeForm::from_recipe(&current))?;
    let updated = submit_edit(session, &id, form)?;
    println!("✓ Recipe '{}' updated successfully!", updated.title());
    Ok(())
}

fn delete_interactive(session: &RecipeSession, display: &DisplayConfig) -> Result<()> {
    let Some(id) = pick_recipe(session, display, "Select a recipe to delete")? else {
        println!("No recipes available to delete.");
        return Ok(());
    };

    if let Some(recipe) = session.get().execute(&id).map_err(RecipeBookError::from)? {
        print!("{}", RecipeCard::new(&recipe, display).render());
    }

    println!("This action cannot be undone!");
    let confirmed = Confirm::new()
        .with_prompt("Delete this recipe?")
        .default(false)
        .interact()?;
    if !confirmed {
        println!("Deletion cancelled.");
        return Ok(());
    }

    let removed = remove(session, &id)?;
    println!("✓ Recipe '{}' deleted successfully!", removed.title());
    Ok(())
}

fn pick_recipe(
    session: &RecipeSession,
    display: &DisplayConfig,
    prompt: &str,
) -> Result<Option<RecipeId>> {
    let choices = choices(session, display)?;
    if choices.is_empty() {
        return Ok(None);
    }

    let labels: Vec<&str> = choices.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(choices.into_iter().nth(selection).map(|(_, id)| id))
}

fn prompt_form(initial: &RecipeForm) -> Result<RecipeForm> {
    let title: String = Input::new()
        .with_prompt("Recipe title")
        .with_initial_text(initial.title.clone())
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::new()
        .with_prompt("Description")
        .with_initial_text(initial.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let ingredients_text = prompt_ingredients(&initial.ingredients_text)?;

    Ok(RecipeForm::new(title, description, ingredients_text))
}

fn prompt_ingredients(current: &str) -> Result<String> {
    if !current.trim().is_empty() {
        println!("Current ingredients:");
        for line in current.lines() {
            println!("  - {}", line);
        }
        let replace = Confirm::new()
            .with_prompt("Replace ingredients?")
            .default(false)
            .interact()?;
        if !replace {
            return Ok(current.to_string());
        }
    }

    println!("Enter ingredients one per line; leave blank to finish.");
    let mut lines = Vec::new();
    loop {
        let line: String = Input::new()
            .with_prompt(format!("Ingredient {}", lines.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Menu labels and ids, oldest recipe first
pub fn choices(
    session: &RecipeSession,
    display: &DisplayConfig,
) -> RecipeBookResult<Vec<(String, RecipeId)>> {
    let recipes = sorted_for_display(session.list().execute()?);
    Ok(recipes
        .iter()
        .map(|r| (selection_label(r, display), r.id().clone()))
        .collect())
}

/// Validate the form and store a new recipe
pub fn submit_new(session: &RecipeSession, form: RecipeForm) -> RecipeBookResult<Recipe> {
    let recipe = form.into_new_recipe()?;
    Ok(session.create().execute(recipe)?)
}

/// Validate the form and apply it to the stored recipe `id`
pub fn submit_edit(
    session: &RecipeSession,
    id: &RecipeId,
    form: RecipeForm,
) -> RecipeBookResult<Recipe> {
    let current = session
        .get()
        .execute(id)?
        .ok_or_else(|| RepositoryError::not_found(id, RepositoryOperation::Update))?;
    let edited = form.apply_to(current)?;
    Ok(session.update().execute(edited)?)
}

/// Delete `id`, returning the recipe as it was just before removal
pub fn remove(session: &RecipeSession, id: &RecipeId) -> RecipeBookResult<Recipe> {
    let recipe = session
        .get()
        .execute(id)?
        .ok_or_else(|| RepositoryError::not_found(id, RepositoryOperation::Delete))?;
    session.delete().execute(id)?;
    Ok(recipe)
}
