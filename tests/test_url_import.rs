use recipe_box::{
    import_and_save, import_draft, FetchConfig, InputSource, RecipeBoxError, RecipeStore,
};

fn create_recipe_page(body: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page | Best Recipes</title>
            <style>.recipe {{ color: red; }}</style>
        </head>
        <body>
            <header><a href="/">Home</a></header>
            {body}
            <script>window.trackPageView();</script>
        </body>
        </html>
        "#
    )
}

const RECIPE_CARD: &str = r#"
    <article class="recipe">
        <h1>Lemon Drizzle Cake</h1>
        <p class="byline">By Mary Berry</p>
        <p>A light sponge soaked in a tangy lemon syrup.</p>
        <h2>Ingredients</h2>
        <ul>
            <li>▢ 225 g butter</li>
            <li>▢ 225 g caster sugar</li>
            <li>▢ 4 eggs</li>
        </ul>
        <h2>Instructions</h2>
        <ol>
            <li>1. Beat the butter and sugar together.</li>
            <li>2. Bake for 45 minutes.</li>
        </ol>
        <div style="display: none">Hidden promo text</div>
    </article>
"#;

#[tokio::test]
async fn test_url_import_parses_page() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(create_recipe_page(RECIPE_CARD))
        .create_async()
        .await;

    let url = format!("{}/recipe", server.url());
    let draft = import_draft(&InputSource::Url(url), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(draft.title, "Lemon Drizzle Cake");
    assert_eq!(
        draft.description.as_deref(),
        Some("A light sponge soaked in a tangy lemon syrup.")
    );
    assert_eq!(
        draft.ingredients,
        "• 225 g butter\n• 225 g caster sugar\n• 4 eggs"
    );
    assert_eq!(
        draft.instructions,
        "1. Beat the butter and sugar together.\n2. Bake for 45 minutes."
    );
    assert!(!draft.instructions.contains("trackPageView"));
    assert!(!draft.instructions.contains("Hidden promo"));
}

#[tokio::test]
async fn test_url_import_http_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/missing")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/missing", server.url());
    let result = import_draft(&InputSource::Url(url), &FetchConfig::default()).await;

    match result {
        Err(RecipeBoxError::HttpStatus(status)) => assert_eq!(status, 404),
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_url_import_sends_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/recipe")
        .match_header("user-agent", "recipe-box-test")
        .with_status(200)
        .with_body(create_recipe_page(RECIPE_CARD))
        .create_async()
        .await;

    let config = FetchConfig {
        user_agent: "recipe-box-test".to_string(),
        ..Default::default()
    };
    let url = format!("{}/recipe", server.url());
    import_draft(&InputSource::Url(url), &config).await.unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn test_url_import_page_without_recipe_keeps_text() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/blog")
        .with_status(200)
        .with_body(create_recipe_page("<p>just some thoughts about dinner</p>"))
        .create_async()
        .await;

    let url = format!("{}/blog", server.url());
    let draft = import_draft(&InputSource::Url(url), &FetchConfig::default())
        .await
        .unwrap();

    assert_eq!(draft.ingredients, "");
    assert!(draft.instructions.contains("just some thoughts about dinner"));
}

#[tokio::test]
async fn test_url_import_and_save() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipe")
        .with_status(200)
        .with_body(create_recipe_page(RECIPE_CARD))
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = RecipeStore::new(dir.path().join("recipes.json"));
    let url = format!("{}/recipe", server.url());

    let recipe = import_and_save(
        &store,
        &InputSource::Url(url),
        &FetchConfig::default(),
        &["dessert".to_string()],
        &[],
    )
    .await
    .unwrap();

    assert_eq!(recipe.title, "Lemon Drizzle Cake");
    assert_eq!(recipe.category, vec!["dessert"]);
    assert_eq!(store.get(&recipe.id).await, Some(recipe));
}
