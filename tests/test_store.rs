use recipe_box::{
    import_and_save, FetchConfig, InputSource, NewRecipe, RecipeBoxError, RecipeFilters,
    RecipeForm, RecipeStore, RecipeUpdate,
};
use tempfile::TempDir;

fn temp_store() -> (TempDir, RecipeStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::new(dir.path().join("data").join("recipes.json"));
    (dir, store)
}

fn new_recipe(title: &str, category: &str, tags: &[&str], ingredients: &str) -> NewRecipe {
    NewRecipe {
        title: title.to_string(),
        category: vec![category.to_string()],
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ingredients: ingredients.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_get_and_persist() {
    let (_dir, store) = temp_store();

    let created = store
        .create(new_recipe("Kapustnica", "lunch", &["traditional"], "• kyslá kapusta"))
        .await
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(store.get(&created.id).await, Some(created.clone()));

    // a second store over the same file sees the data
    let reopened = RecipeStore::new(store.path());
    assert_eq!(reopened.get(&created.id).await, Some(created));

    let raw = std::fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"createdAt\""));
    assert!(raw.starts_with("[\n  {"));
}

#[tokio::test]
async fn test_update_merges_fields() {
    let (_dir, store) = temp_store();
    let created = store
        .create(new_recipe("Guláš", "dinner", &["meat"], "• 500 g mäsa"))
        .await
        .unwrap();

    let updated = store
        .update(
            &created.id,
            RecipeUpdate {
                title: Some("Segedínsky guláš".to_string()),
                description: Some(Some("S kyslou kapustou".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Segedínsky guláš");
    assert_eq!(updated.description.as_deref(), Some("S kyslou kapustou"));
    assert_eq!(updated.ingredients, "• 500 g mäsa");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let missing = store.update("missing", RecipeUpdate::default()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete() {
    let (_dir, store) = temp_store();
    let created = store
        .create(new_recipe("Lievance", "breakfast", &[], ""))
        .await
        .unwrap();

    assert!(store.delete(&created.id).await.unwrap());
    assert!(!store.delete(&created.id).await.unwrap());
    assert!(store.get(&created.id).await.is_none());
}

#[tokio::test]
async fn test_list_filters() {
    let (_dir, store) = temp_store();
    store
        .create(new_recipe("Ovsená kaša", "breakfast", &["vegan", "quick"], "• ovsené vločky"))
        .await
        .unwrap();
    store
        .create(new_recipe("Kurací vývar", "lunch", &["meat"], "• 1 kg kuracieho mäsa"))
        .await
        .unwrap();
    store
        .create(new_recipe("Čokoládová pena", "dessert", &["quick"], "• 200 g čokolády"))
        .await
        .unwrap();

    let all = store.list(&RecipeFilters::default()).await;
    assert_eq!(all.len(), 3);

    let quick = store
        .list(&RecipeFilters {
            tags: vec!["quick".to_string()],
            ..Default::default()
        })
        .await;
    assert_eq!(quick.len(), 2);

    let quick_desserts = store
        .list(&RecipeFilters {
            category: Some("dessert".to_string()),
            tags: vec!["quick".to_string()],
            ..Default::default()
        })
        .await;
    assert_eq!(quick_desserts.len(), 1);
    assert_eq!(quick_desserts[0].title, "Čokoládová pena");

    let by_ingredient = store
        .list(&RecipeFilters {
            search: Some("MÄSA".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(by_ingredient.len(), 1);
    assert_eq!(by_ingredient[0].title, "Kurací vývar");
}

#[tokio::test]
async fn test_reads_legacy_data_file() {
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(
        store.path(),
        r#"[{
            "id": "legacy-1",
            "title": "Bryndzové halušky",
            "category": "dinner",
            "tags": [],
            "ingredients": [{"id": "1", "name": "bryndza", "amount": 250, "unit": "g"}],
            "instructions": "Uvar halušky.",
            "createdAt": "2023-05-01T08:00:00.000Z",
            "updatedAt": "2023-05-01T08:00:00.000Z"
        }]"#,
    )
    .unwrap();

    let recipe = store.get("legacy-1").await.unwrap();
    assert_eq!(recipe.category, vec!["dinner"]);
    assert_eq!(recipe.ingredients, "• 250 g bryndza");
}

#[tokio::test]
async fn test_edit_through_form() {
    let (_dir, store) = temp_store();
    let created = store
        .create(new_recipe("Rizoto", "dinner", &[], "• ryža"))
        .await
        .unwrap();

    let mut form = RecipeForm::from_recipe(&created);
    form.ingredients.push_str("\n- parmezán");
    form.add_tag("veggie");

    let updated = store
        .update(&created.id, form.into_update().unwrap())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.ingredients, "• ryža\n• parmezán");
    assert_eq!(updated.tags, vec!["veggie"]);
}

#[tokio::test]
async fn test_import_pasted_text_and_save() {
    let (_dir, store) = temp_store();
    let text = "Palacinky\nIngrediencie:\n- 2 hrnčeky múky\nPostup:\n1. Zmiešaj";

    let recipe = import_and_save(
        &store,
        &InputSource::Text(text.to_string()),
        &FetchConfig::default(),
        &["dessert".to_string()],
        &["Quick".to_string()],
    )
    .await
    .unwrap();

    assert_eq!(recipe.title, "Palacinky");
    assert_eq!(recipe.ingredients, "• 2 hrnčeky múky");
    assert_eq!(recipe.instructions, "1. Zmiešaj");
    assert_eq!(recipe.category, vec!["dessert"]);
    assert_eq!(recipe.tags, vec!["quick"]);
    assert_eq!(store.list(&RecipeFilters::default()).await.len(), 1);
}

#[tokio::test]
async fn test_unparseable_record_blocks_writes() {
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    let contents = r#"[
        {"id": "1", "title": "Kept", "createdAt": "2024-01-01T10:00:00Z", "updatedAt": "2024-01-01T10:00:00Z"},
        {"id": "2", "title": "Bad", "createdAt": "yesterday", "updatedAt": "yesterday"}
    ]"#;
    std::fs::write(store.path(), contents).unwrap();

    let result = store.create(new_recipe("New", "lunch", &[], "")).await;
    assert!(matches!(result, Err(RecipeBoxError::Json(_))));
    assert!(store.delete("1").await.is_err());
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), contents);

    // readers still work, they just see nothing
    assert!(store.list(&RecipeFilters::default()).await.is_empty());
}
