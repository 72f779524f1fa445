//! # Materials QC Studio CLI
//!
//! Terminal front-end for the compliance engine. Prompts for a material
//! grade and the measured composition, prints the compliance report, and
//! finishes with a tensile summary demo.

use std::io::{self, BufRead, Write};

use qc_core::compliance::{evaluate, MeasurementSet};
use qc_core::report::render;
use qc_core::series::{summarize, TensileGeometry};
use qc_core::specs::SpecRegistry;

fn prompt(text: &str) -> String {
    print!("{}", text);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn main() {
    println!("Materials QC Studio - Compliance Checker");
    println!("========================================");
    println!();

    let registry = SpecRegistry::builtin();
    let ids = registry.list_ids();

    println!("Available material specs:");
    for (i, id) in ids.iter().enumerate() {
        println!("  {}. {}", i + 1, id);
    }
    println!();

    let choice = prompt("Select spec [1]: ");
    let index = choice.parse::<usize>().unwrap_or(1).clamp(1, ids.len()) - 1;

    let spec = match registry.lookup(ids[index]) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!();
    println!("Enter measured composition for {} (blank to skip):", spec.id);

    let mut measurements = MeasurementSet::new();
    for range in &spec.chemical {
        let raw = prompt(&format!(
            "  {} % ({} - {}): ",
            range.symbol, range.min, range.max
        ));
        measurements.insert_text(range.symbol.as_str(), raw);
    }

    let verdict = evaluate(spec, &measurements);

    println!();
    println!("═══════════════════════════════════════");
    for line in render(&verdict) {
        println!("{}", line);
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("Verdict JSON (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&verdict) {
        println!("{}", json);
    }

    // Quick tensile summary demo on a fixed three-point series
    println!();
    println!("Tensile summary demo (10 mm bar, 50 mm gauge):");
    let geometry = TensileGeometry {
        diameter_mm: 10.0,
        gauge_length_mm: 50.0,
    };
    let samples = [(20_000.0, 1.0), (66_800.0, 4.5), (58_000.0, 7.5)];
    match summarize(&samples, &geometry) {
        Ok(summary) => {
            println!("  UTS:        {:.1} MPa", summary.ultimate_stress_mpa);
            println!("  Elongation: {:.1} %", summary.elongation_percent);
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
