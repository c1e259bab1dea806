use std::collections::HashMap;

use colored::Colorize;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use ks_core::SymbolId;
use ks_engine::SymbolGenerator;

pub fn run(draws: u64, seed: u64) -> Result<(), String> {
    let generator = SymbolGenerator::standard();
    let mut rng = StdRng::seed_from_u64(seed);

    let mut counts: HashMap<SymbolId, u64> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(generator.draw(&mut rng)).or_default() += 1;
    }

    println!(
        "  {} {}",
        "Symbol Odds".bold(),
        format!("({draws} draws, seed={seed})").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "", "Id", "Name", "Category", "Value", "Weight", "Expected", "Observed",
    ]);

    let table_ref = generator.table();
    let mut worst: f64 = 0.0;
    for def in table_ref.iter() {
        let expected = table_ref.probability(def.id);
        let observed = if draws == 0 {
            "--".to_string()
        } else {
            let share = counts.get(&def.id).copied().unwrap_or(0) as f64 / draws as f64;
            worst = worst.max((share - expected).abs());
            format!("{:.2}%", share * 100.0)
        };
        table.add_row(vec![
            def.glyph.clone(),
            def.id.to_string(),
            def.name.clone(),
            def.category.to_string(),
            def.value.to_string(),
            format!("{:.2}", def.weight),
            format!("{:.2}%", expected * 100.0),
            observed,
        ]);
    }
    for idx in 4..8 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");
    println!();
    println!("  Total weight: {:.2}", table_ref.total_weight());
    if draws > 0 {
        println!("  Largest deviation: {:.3}%", worst * 100.0);
    }
    Ok(())
}
