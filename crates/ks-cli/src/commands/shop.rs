use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ks_core::ShopItem;

pub fn run() -> Result<(), String> {
    println!("  {}", "Shop".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Id", "Item", "Cost", "Health", "Mood"]);

    for item in ShopItem::ALL {
        let def = item.definition();
        table.add_row(vec![
            def.glyph.to_string(),
            item.to_string(),
            def.name.to_string(),
            def.cost.to_string(),
            format_boost(def.health),
            format_boost(def.mood),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {}",
        "Buy with `kittyspin simulate --buy <id>` or keys 1-3 in `kittyspin play`.".dimmed()
    );
    Ok(())
}

fn format_boost(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{amount:.0}")
    } else {
        "--".to_string()
    }
}
