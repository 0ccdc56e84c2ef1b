use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use sift::api::{CmdMessage, MessageLevel};
use sift::config::SiftConfig;
use sift::journal::JournalEntry;
use sift::model::{Color, Product};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const MIN_NAME_WIDTH: usize = 8;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }

    let name_width = products
        .iter()
        .map(|p| p.name.width())
        .max()
        .unwrap_or(0)
        .max(MIN_NAME_WIDTH);

    for product in products {
        let padding = " ".repeat(name_width - product.name.width());
        println!(
            "  {}{}  {} {}",
            product.name.bold(),
            padding,
            paint(product.color),
            product.size
        );
    }
}

fn paint(color: Color) -> ColoredString {
    let label = format!("{:<6}", color.as_str());
    match color {
        Color::Red => label.red(),
        Color::Green => label.green(),
        Color::Blue => label.blue(),
    }
}

pub(super) fn print_entries(entries: &[JournalEntry]) {
    if entries.is_empty() {
        println!("Journal is empty.");
        return;
    }

    for entry in entries {
        println!(
            "{} {}  {}",
            format!("{}.", entry.key).yellow(),
            entry.text,
            format_time_ago(entry.created_at).dimmed()
        );
    }
}

pub(super) fn print_config(config: &SiftConfig) {
    println!("export-file = {}", config.export_file);
    match &config.catalog {
        Some(path) => println!("catalog     = {}", path.display()),
        None => println!("catalog     = {}", "(built-in sample)".dimmed()),
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
