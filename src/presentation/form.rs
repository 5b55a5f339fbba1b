//! Recipe form input
//!
//! The core accepts any recipe without validation; this is where user input
//! is checked before a use case runs. All three fields are required and the
//! ingredients are entered one per line.

use std::fmt;

use crate::domain::entities::Recipe;

/// A form field the user must fill in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Ingredients,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Title => write!(f, "title"),
            FormField::Description => write!(f, "description"),
            FormField::Ingredients => write!(f, "ingredients"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("please fill in all required fields (missing: {})", field_list(.missing))]
    MissingFields { missing: Vec<FormField> },
}

fn field_list(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw text as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    /// One ingredient per line
    pub ingredients_text: String,
}

impl RecipeForm {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        ingredients_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ingredients_text: ingredients_text.into(),
        }
    }

    /// Pre-fill a form for editing an existing recipe
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title().to_string(),
            description: recipe.description().to_string(),
            ingredients_text: recipe.ingredients().join("\n"),
        }
    }

    /// Check required fields and return the cleaned values
    pub fn validate(&self) -> Result<(String, String, Vec<String>), FormError> {
        let title = self.title.trim();
        let description = self.description.trim();
        let ingredients = parse_ingredients(&self.ingredients_text);

        let mut missing = Vec::new();
        if title.is_empty() {
            missing.push(FormField::Title);
        }
        if description.is_empty() {
            missing.push(FormField::Description);
        }
        if ingredients.is_empty() {
            missing.push(FormField::Ingredients);
        }

        if !missing.is_empty() {
            return Err(FormError::MissingFields { missing });
        }
        Ok((title.to_string(), description.to_string(), ingredients))
    }

    /// Build a brand-new recipe from the form
    pub fn into_new_recipe(self) -> Result<Recipe, FormError> {
        let (title, description, ingredients) = self.validate()?;
        Ok(Recipe::new(title, description, ingredients))
    }

    /// Apply the form to an existing recipe, keeping its id and creation time
    pub fn apply_to(self, recipe: Recipe) -> Result<Recipe, FormError> {
        let (title, description, ingredients) = self.validate()?;
        Ok(recipe
            .with_title(title)
            .with_description(description)
            .with_ingredients(ingredients))
    }
}

/// Split on newlines, trim each line, drop blank lines; order is kept
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ingredients_trims_and_skips_blank_lines() {
        let parsed = parse_ingredients("  2 cups flour\n\n1 cup sugar  \r\n   \n2 eggs");
        assert_eq!(parsed, vec!["2 cups flour", "1 cup sugar", "2 eggs"]);
    }

    #[test]
    fn valid_form_builds_recipe() {
        let form = RecipeForm::new(" Cookies ", "Classic homemade cookies", "flour\nsugar");
        let recipe = form.into_new_recipe().unwrap();

        assert_eq!(recipe.title(), "Cookies");
        assert_eq!(recipe.ingredients(), ["flour", "sugar"]);
        assert!(!recipe.id().as_str().is_empty());
    }

    #[test]
    fn blank_fields_are_all_reported() {
        let err = RecipeForm::new("  ", "", "\n \n").validate().unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields {
                missing: vec![
                    FormField::Title,
                    FormField::Description,
                    FormField::Ingredients
                ]
            }
        );
        assert_eq!(
            err.to_string(),
            "please fill in all required fields (missing: title, description, ingredients)"
        );
    }

    #[test]
    fn single_missing_field() {
        let err = RecipeForm::new("Tea", "Hot drink", "").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "please fill in all required fields (missing: ingredients)"
        );
    }

    #[test]
    fn from_recipe_round_trips_through_apply() {
        let original = Recipe::new("Tea", "Hot drink", vec!["water".into(), "tea leaf".into()]);
        let form = RecipeForm::from_recipe(&original);
        assert_eq!(form.ingredients_text, "water\ntea leaf");

        let edited = RecipeForm {
            description: "Hot drink, sweetened".to_string(),
            ..form
        }
        .apply_to(original.clone())
        .unwrap();

        assert_eq!(edited.id(), original.id());
        assert_eq!(edited.created_at(), original.created_at());
        assert_eq!(edited.description(), "Hot drink, sweetened");
        assert_eq!(edited.ingredients(), original.ingredients());
    }

    #[test]
    fn apply_rejects_invalid_form_without_touching_recipe() {
        let original = Recipe::new("Tea", "Hot drink", vec!["water".into()]);
        let result = RecipeForm::new("", "x", "y").apply_to(original);
        assert!(result.is_err());
    }
}
