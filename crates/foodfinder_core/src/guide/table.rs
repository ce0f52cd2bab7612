//! Fixed-width table rendering.
//!
//! Layout: name left-aligned in 30 columns, cuisine left-aligned in 20,
//! price right-aligned in 6, each preceded by one space, framed by a
//! 60-character rule.

use crate::model::restaurant::Restaurant;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::io::{self, Write};

pub const TABLE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 30;
const CUISINE_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 6;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid word regex"));

/// Capitalizes each whitespace-separated word, lower-casing the rest.
pub fn titleize(text: &str) -> String {
    WORD_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let mut chars = caps[0].chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Writes a centered, upper-cased section header.
pub fn write_action_header<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "\n{:^width$}\n", text.to_uppercase(), width = TABLE_WIDTH)
}

/// Formats one table row.
pub fn format_row(restaurant: &Restaurant) -> String {
    format!(
        " {:<nw$} {:<cw$} {:>pw$}",
        titleize(&restaurant.name),
        titleize(&restaurant.cuisine),
        restaurant.formatted_price(),
        nw = NAME_WIDTH,
        cw = CUISINE_WIDTH,
        pw = PRICE_WIDTH
    )
}

/// Writes the header, one row per restaurant, and the framing rules.
pub fn write_restaurant_table<W: Write>(out: &mut W, restaurants: &[Restaurant]) -> io::Result<()> {
    let rule = "-".repeat(TABLE_WIDTH);
    writeln!(
        out,
        " {:<nw$} {:<cw$} {:>pw$}",
        "Name",
        "Cuisine",
        "Price",
        nw = NAME_WIDTH,
        cw = CUISINE_WIDTH,
        pw = PRICE_WIDTH
    )?;
    writeln!(out, "{rule}")?;
    for restaurant in restaurants {
        writeln!(out, "{}", format_row(restaurant))?;
    }
    if restaurants.is_empty() {
        writeln!(out, "No listings found")?;
    }
    writeln!(out, "{rule}")
}
