use console::style;
use tabled::{settings::{Alignment, Style}, Table, Tabled};

use crate::models::{Cart, CartTotals, CatalogItem, OrderSnapshot};

const NAME_WIDTH: usize = 30;

#[derive(Tabled)]
struct CatalogTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Category")]
    category: String,
}

#[derive(Tabled)]
struct CartTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

pub fn format_price(amount: u64, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

pub fn format_catalog_table(items: &[CatalogItem], currency: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<CatalogTableRow> = items
        .iter()
        .map(|item| CatalogTableRow {
            id: item.id,
            name: truncate(&item.name),
            unit: item.unit_label.clone(),
            price: format_price(u64::from(item.unit_price), currency),
            category: item.category.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

pub fn format_cart_table(cart: &Cart, currency: &str) -> String {
    if cart.is_empty() {
        return String::new();
    }

    let rows: Vec<CartTableRow> = cart
        .lines()
        .iter()
        .map(|line| CartTableRow {
            id: line.id(),
            name: truncate(&line.item.name),
            unit: line.item.unit_label.clone(),
            quantity: line.quantity,
            subtotal: format_price(line.line_total(), currency),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());
    table.to_string()
}

pub fn format_totals(totals: &CartTotals, currency: &str) -> String {
    format!(
        "{}: {} ({} items)",
        style("Total").bold(),
        style(format_price(totals.total_price, currency)).green(),
        totals.total_item_count
    )
}

pub fn format_order_summary(order: &OrderSnapshot, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", style("Order").bold(), style(&order.order_id).cyan()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Placed").bold(),
        style(order.placed_at.format("%Y-%m-%d %H:%M:%S")).dim()
    ));
    output.push_str(&format!("{}: {}\n", style("Lines").bold(), order.lines.len()));
    output.push_str(&format_totals(&order.totals, currency));
    output.push('\n');

    output
}

fn truncate(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}
