use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

use crate::food::api::{FoodApi, MenuItem};
use crate::food::display;
use crate::food::error::FoodError;

/// How a session that did not fail came to an end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The selection line was not an integer.
    InvalidSelection(String),
    /// The selection parsed but no listed item carries that id.
    NotFound(i64),
    Declined,
    InstructionsShown,
}

/// One search → select → detail → instructions pass over a terminal.
pub struct Session<'a, A: FoodApi + ?Sized, R, W> {
    api: &'a A,
    input: R,
    output: W,
}

impl<'a, A, R, W> Session<'a, A, R, W>
where
    A: FoodApi + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a A, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub async fn run(&mut self, query: &str) -> Result<SessionOutcome, FoodError> {
        let items = self.api.search_menu_items(query).await?;
        info!("search for {:?} returned {} items", query, items.len());
        display::render_menu_items(&mut self.output, &items)?;

        let line = self.prompt("\nPlease enter the ID of the item you want to know more about: ")?;
        let Some(selected_id) = parse_selection(&line) else {
            writeln!(self.output, "{}", "❌ Invalid ID. Please enter a valid number.".red())?;
            return Ok(SessionOutcome::InvalidSelection(line));
        };

        let Some(item) = find_item(&items, selected_id) else {
            writeln!(
                self.output,
                "{}",
                "❌ No matching item found with the specified ID.".red()
            )?;
            return Ok(SessionOutcome::NotFound(selected_id));
        };

        let recipe = self.api.fetch_recipe(item.id).await?;
        display::render_details(&mut self.output, item, &recipe)?;

        let answer = self.prompt("\nDo you want the recipe? (yes/no): ")?;
        if wants_instructions(&answer) {
            display::render_instructions(&mut self.output, &recipe)?;
            Ok(SessionOutcome::InstructionsShown)
        } else {
            writeln!(self.output, "No recipe requested.")?;
            Ok(SessionOutcome::Declined)
        }
    }

    /// EOF reads as an empty answer.
    fn prompt(&mut self, question: &str) -> Result<String, FoodError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

pub fn parse_selection(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// First match wins; the service does not promise unique ids.
pub fn find_item(items: &[MenuItem], id: i64) -> Option<&MenuItem> {
    items.iter().find(|item| item.id == id)
}

pub fn wants_instructions(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
