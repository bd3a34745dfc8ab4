use colored::Colorize;
use std::io::{self, Write};

use crate::food::api::{MenuItem, RecipeDetail};

const RULE: &str = "--------------------------------------------------";

pub fn render_menu_items<W: Write>(out: &mut W, items: &[MenuItem]) -> io::Result<()> {
    writeln!(
        out,
        "\n🍔✨ Browse for more information on the Menu Items Found in the restaurants near you..:✨🍔"
    )?;
    writeln!(out, "{}", RULE)?;

    if items.is_empty() {
        writeln!(out, "{}", "No menu items matched your search.".yellow())?;
        writeln!(out, "{}", RULE)?;
        return Ok(());
    }

    for item in items {
        writeln!(out, "{}", format!("{:>3} - {}", item.id, item.title).cyan().bold())?;
        writeln!(out, "{}{}", "   Restaurant: ".green().bold(), item.restaurant_chain)?;
        writeln!(out, "{}", RULE)?;
    }
    Ok(())
}

pub fn render_details<W: Write>(out: &mut W, item: &MenuItem, recipe: &RecipeDetail) -> io::Result<()> {
    writeln!(
        out,
        "\n🍔 Found: {} at {}",
        item.title.bright_yellow(),
        item.restaurant_chain
    )?;
    writeln!(out, "🖼️ Image: {}", item.image)?;

    let nutrition = &item.nutrition;
    writeln!(out, "🔥 Calories in {}: {:.0} kcal", item.title, nutrition.calories)?;
    writeln!(out, "🔥 Carbs in {}: {}", item.title, nutrition.carbs)?;
    writeln!(out, "🔥 Protein in {}: {}", item.title, nutrition.protein)?;
    writeln!(out, "🔥 Fats in {}: {}", item.title, nutrition.fat)?;

    writeln!(out, "\n🌱 Is it Vegan? {}", yes_no(recipe.vegan))?;
    writeln!(out, "🍞 Is it Gluten-Free? {}", yes_no(recipe.gluten_free))?;
    writeln!(out, "⏳ Ready in: {} minutes", recipe.ready_in_minutes)?;
    writeln!(out, "🍽️ Servings: {}", recipe.servings)?;
    Ok(())
}

pub fn render_instructions<W: Write>(out: &mut W, recipe: &RecipeDetail) -> io::Result<()> {
    writeln!(out, "\n{}", "🥗 Recipe Instructions:".green().bold())?;
    if recipe.instructions.trim().is_empty() {
        writeln!(out, "{}", "No instructions were provided for this recipe.".yellow())
    } else {
        writeln!(out, "{}", recipe.instructions)
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes ✅"
    } else {
        "No ❌"
    }
}
