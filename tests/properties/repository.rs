//! Property tests for the recipe repository contract.

use proptest::prelude::*;

use recipebook::{InMemoryRecipeRepository, Recipe, RecipeId, RecipeRepository};

fn text() -> impl Strategy<Value = String> {
    ".{0,40}"
}

fn ingredients() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(".{0,24}", 0..8)
}

fn recipe() -> impl Strategy<Value = Recipe> {
    (text(), text(), ingredients()).prop_map(|(t, d, i)| Recipe::new(t, d, i))
}

#[derive(Debug, Clone)]
enum Op {
    Add(Recipe),
    /// Delete the n-th live id (modulo), or a missing id when none exist
    Delete(usize),
    DeleteMissing,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => recipe().prop_map(Op::Add),
        2 => any::<usize>().prop_map(Op::Delete),
        1 => Just(Op::DeleteMissing),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `get_recipe(add_recipe(r).id)` returns `r` field for field.
    #[test]
    fn property_add_then_get_preserves_every_field(r in recipe()) {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add_recipe(r.clone()).unwrap();
        let fetched = repo.get_recipe(added.id()).unwrap().unwrap();

        prop_assert_eq!(&added, &r);
        prop_assert_eq!(fetched.id(), r.id());
        prop_assert_eq!(fetched.title(), r.title());
        prop_assert_eq!(fetched.description(), r.description());
        prop_assert_eq!(fetched.ingredients(), r.ingredients());
        prop_assert_eq!(fetched.created_at(), r.created_at());
        prop_assert!(!fetched.created_at_string().is_empty());
    }

    /// PROPERTY: update keeps id/created_at and never moves updated_at back.
    #[test]
    fn property_update_preserves_identity(
        r in recipe(),
        title in text(),
        description in text(),
        new_ingredients in ingredients(),
    ) {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add_recipe(r).unwrap();

        let edit = added
            .clone()
            .with_title(title.clone())
            .with_description(description.clone())
            .with_ingredients(new_ingredients.clone());
        let updated = repo.update_recipe(edit).unwrap();

        prop_assert_eq!(updated.id(), added.id());
        prop_assert_eq!(updated.created_at(), added.created_at());
        prop_assert!(updated.updated_at() >= added.updated_at());
        prop_assert_eq!(updated.title(), title.as_str());
        prop_assert_eq!(updated.description(), description.as_str());
        prop_assert_eq!(updated.ingredients(), new_ingredients.as_slice());
    }

    /// PROPERTY: update/delete of an unknown id fail and change nothing.
    #[test]
    fn property_missing_id_mutations_leave_storage_unchanged(
        stored in proptest::collection::vec(recipe(), 0..6),
        ghost in recipe(),
    ) {
        let repo = InMemoryRecipeRepository::new();
        for r in stored {
            repo.add_recipe(r).unwrap();
        }
        let mut before = repo.list_recipes().unwrap();
        before.sort_by(|a, b| a.id().cmp(b.id()));

        prop_assert!(repo.update_recipe(ghost.clone()).unwrap_err().is_not_found());
        prop_assert!(repo.delete_recipe(ghost.id()).unwrap_err().is_not_found());

        let mut after = repo.list_recipes().unwrap();
        after.sort_by(|a, b| a.id().cmp(b.id()));
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: list length == successful adds - successful deletes, and
    /// deleted ids are gone from both get and list.
    #[test]
    fn property_list_tracks_adds_and_deletes(ops in proptest::collection::vec(op(), 0..40)) {
        let repo = InMemoryRecipeRepository::new();
        let mut live: Vec<RecipeId> = Vec::new();
        let mut deleted: Vec<RecipeId> = Vec::new();
        let mut adds = 0usize;
        let mut deletes = 0usize;

        for op in ops {
            match op {
                Op::Add(r) => {
                    let id = r.id().clone();
                    repo.add_recipe(r).unwrap();
                    live.push(id);
                    adds += 1;
                }
                Op::Delete(n) if !live.is_empty() => {
                    let id = live.remove(n % live.len());
                    repo.delete_recipe(&id).unwrap();
                    deleted.push(id);
                    deletes += 1;
                }
                Op::Delete(_) | Op::DeleteMissing => {
                    let missing = RecipeId::new("missing-id");
                    prop_assert!(repo.delete_recipe(&missing).is_err());
                }
            }
        }

        let listed = repo.list_recipes().unwrap();
        prop_assert_eq!(listed.len(), adds - deletes);
        for id in &deleted {
            prop_assert!(repo.get_recipe(id).unwrap().is_none());
            prop_assert!(listed.iter().all(|r| r.id() != id));
        }
        for id in &live {
            prop_assert!(listed.iter().any(|r| r.id() == id));
        }
    }

    /// PROPERTY: mutating a returned recipe never changes stored state.
    #[test]
    fn property_returned_copies_are_isolated(r in recipe(), junk in text()) {
        let repo = InMemoryRecipeRepository::new();
        let added = repo.add_recipe(r).unwrap();

        let mut copy = repo.get_recipe(added.id()).unwrap().unwrap();
        copy.set_title(junk.clone());
        copy.set_description(junk.clone());
        copy.set_ingredients(vec![junk]);

        let again = repo.get_recipe(added.id()).unwrap().unwrap();
        prop_assert_eq!(again, added);
    }
}
