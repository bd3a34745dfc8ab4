use async_trait::async_trait;
use foodsearch::food::api::{FoodApi, MenuItem, Nutrition, RecipeDetail};
use foodsearch::food::config::FoodConfig;
use foodsearch::{FoodError, Session, SessionOutcome};
use std::io::Cursor;
use std::sync::Mutex;

/// Canned search results that remembers every recipe lookup.
struct FakeFoodApi {
    items: Vec<MenuItem>,
    recipe: RecipeDetail,
    search_fails: bool,
    recipe_fails: bool,
    recipe_calls: Mutex<Vec<i64>>,
}

impl FakeFoodApi {
    fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            recipe: RecipeDetail {
                instructions: "Grill the patty, toast the bun.".to_string(),
                gluten_free: false,
                vegan: false,
                ready_in_minutes: 12,
                servings: 1,
            },
            search_fails: false,
            recipe_fails: false,
            recipe_calls: Mutex::new(Vec::new()),
        }
    }

    fn recipe_calls(&self) -> Vec<i64> {
        self.recipe_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodApi for FakeFoodApi {
    async fn search_menu_items(&self, _query: &str) -> Result<Vec<MenuItem>, FoodError> {
        if self.search_fails {
            return Err(FoodError::Unauthorized);
        }
        Ok(self.items.clone())
    }

    async fn fetch_recipe(&self, id: i64) -> Result<RecipeDetail, FoodError> {
        self.recipe_calls.lock().unwrap().push(id);
        if self.recipe_fails {
            return Err(FoodError::Status {
                status: 404,
                body: "recipe not found".to_string(),
            });
        }
        Ok(self.recipe.clone())
    }
}

fn menu_item(id: i64, title: &str, chain: &str) -> MenuItem {
    MenuItem {
        id,
        title: title.to_string(),
        restaurant_chain: chain.to_string(),
        image: format!("https://img.example.com/{}.jpg", id),
        nutrition: Nutrition {
            calories: 540.0,
            fat: "28g".to_string(),
            protein: "25g".to_string(),
            carbs: "45g".to_string(),
        },
    }
}

fn sample_items() -> Vec<MenuItem> {
    vec![
        menu_item(42, "X", "Chain One"),
        menu_item(7, "Whopper", "Burger King"),
    ]
}

async fn run_session(api: &FakeFoodApi, stdin: &str) -> (Result<SessionOutcome, FoodError>, String) {
    let mut output = Vec::new();
    let result = {
        let mut session = Session::new(api, Cursor::new(stdin.to_string()), &mut output);
        session.run("burger").await
    };
    (result, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_non_integer_selection_ends_without_recipe_call() {
    let api = FakeFoodApi::new(sample_items());
    let (result, output) = run_session(&api, "forty-two\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::InvalidSelection("forty-two".to_string()));
    assert!(output.contains("Invalid ID"));
    assert!(api.recipe_calls().is_empty());
}

#[tokio::test]
async fn test_unknown_id_ends_without_recipe_call() {
    let api = FakeFoodApi::new(sample_items());
    let (result, output) = run_session(&api, "99\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::NotFound(99));
    assert!(output.contains("No matching item found"));
    assert!(api.recipe_calls().is_empty());
}

#[tokio::test]
async fn test_selected_id_is_passed_to_recipe_lookup() {
    let api = FakeFoodApi::new(sample_items());
    let (result, output) = run_session(&api, "42\nno\n").await;

    assert_eq!(result.unwrap(), SessionOutcome::Declined);
    assert_eq!(api.recipe_calls(), vec![42]);
    assert!(output.contains("Found: "));
    assert!(output.contains("Chain One"));
    assert!(output.contains("Ready in: 12 minutes"));
    assert!(output.contains("No recipe requested."));
    assert!(!output.contains("Grill the patty"));
}

#[tokio::test]
async fn test_yes_prints_instructions_regardless_of_case() {
    for answer in ["yes", "Yes", "YES", "yes "] {
        let api = FakeFoodApi::new(sample_items());
        let (result, output) = run_session(&api, &format!("7\n{}\n", answer)).await;

        assert_eq!(result.unwrap(), SessionOutcome::InstructionsShown, "answer {:?}", answer);
        assert!(output.contains("Grill the patty, toast the bun."));
    }
}

#[tokio::test]
async fn test_other_answers_decline_instructions() {
    for answer in ["y", "no", ""] {
        let api = FakeFoodApi::new(sample_items());
        let (result, output) = run_session(&api, &format!("7\n{}\n", answer)).await;

        assert_eq!(result.unwrap(), SessionOutcome::Declined, "answer {:?}", answer);
        assert!(!output.contains("Grill the patty"));
    }
}

#[tokio::test]
async fn test_closed_stdin_is_an_invalid_selection() {
    let api = FakeFoodApi::new(sample_items());
    let (result, _) = run_session(&api, "").await;

    assert_eq!(result.unwrap(), SessionOutcome::InvalidSelection(String::new()));
    assert!(api.recipe_calls().is_empty());
}

#[tokio::test]
async fn test_listing_keeps_response_order() {
    let api = FakeFoodApi::new(vec![
        menu_item(3, "Fries", "Chain A"),
        menu_item(1, "Shake", "Chain B"),
        menu_item(2, "Nuggets", "Chain C"),
    ]);
    let (_, output) = run_session(&api, "abc\n").await;

    let fries = output.find("  3 - Fries").unwrap();
    let shake = output.find("  1 - Shake").unwrap();
    let nuggets = output.find("  2 - Nuggets").unwrap();
    assert!(fries < shake && shake < nuggets);
    assert_eq!(output.matches("Restaurant: ").count(), 3);
}

#[tokio::test]
async fn test_search_failure_propagates() {
    let mut api = FakeFoodApi::new(sample_items());
    api.search_fails = true;
    let (result, output) = run_session(&api, "42\nyes\n").await;

    assert!(matches!(result, Err(FoodError::Unauthorized)));
    assert!(output.is_empty());
    assert!(api.recipe_calls().is_empty());
}

#[tokio::test]
async fn test_recipe_failure_ends_session_with_error() {
    let mut api = FakeFoodApi::new(sample_items());
    api.recipe_fails = true;
    let (result, output) = run_session(&api, "42\nyes\n").await;

    assert!(
        matches!(result, Err(FoodError::Status { status: 404, .. })),
        "got {:?}",
        result
    );
    assert_eq!(api.recipe_calls(), vec![42]);
    assert!(!output.contains("Is it Vegan?"));
    assert!(!output.contains("Do you want the recipe?"));
}

#[test]
fn test_absent_credential_stops_before_any_client_exists() {
    let err = FoodConfig::from_lookup(|_| None).unwrap_err();
    assert!(matches!(err, FoodError::Config(_)));
    assert_eq!(err.exit_code(), 78);
}
