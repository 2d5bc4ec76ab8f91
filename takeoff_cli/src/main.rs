//! # Takeoff CLI Application
//!
//! Terminal front end for the material take-off engine. Collects a
//! handful of deck dimensions, assembles a quote and prints the
//! materials list with price annotations from the built-in price book.

use std::io::{self, BufRead, Write};

use takeoff_core::assemblies::{AssemblyRequest, DeckInput, RoofInput};
use takeoff_core::pricing::{PriceBook, DEFAULT_MATCH_THRESHOLD};
use takeoff_core::site::RegionCode;
use takeoff_core::{assemble_quote, QuoteRequest, SiteSpec, StockLengthCatalog};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_yes(prompt: &str) -> bool {
    prompt_str(prompt, "n").to_ascii_lowercase().starts_with('y')
}

fn main() {
    println!("Takeoff CLI - Construction Material Estimator");
    println!("=============================================");
    println!();
    println!("Quick deck quote. Press Enter to accept a default.");
    println!();

    let deck_length_m = prompt_f64("Deck length (m) [4.8]: ", 4.8);
    let deck_width_m = prompt_f64("Deck width (m) [3.6]: ", 3.6);
    let deck_height_mm = prompt_f64("Deck height above ground (mm) [600]: ", 600.0);
    let region_raw = prompt_str("Region VIC/NSW/QLD [VIC]: ", "VIC");
    let with_roof = prompt_yes("Add a gable sheet roof? [y/N]: ");
    let pitch_deg = if with_roof {
        prompt_f64("Roof pitch (deg) [15.0]: ", 15.0)
    } else {
        0.0
    };

    let region = match RegionCode::parse(&region_raw) {
        Ok(region) => region,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    let deck = DeckInput {
        deck_length_m: Some(deck_length_m),
        deck_width_m: Some(deck_width_m),
        deck_height_mm: Some(deck_height_mm),
        joist_spacing_mm: Some(450.0),
        bearer_spacing_mm: Some(1800.0),
        stump_spacing_mm: Some(1500.0),
        stump_width_mm: Some(90.0),
        board_width_mm: Some(90.0),
        board_gap_mm: Some(5.0),
        board_length_m: Some(4.8),
        joist_size: Some("90x45".to_string()),
        bearer_size: Some("140x45".to_string()),
        decking_board_size: Some("Merbau Decking 90x19".to_string()),
        ..Default::default()
    };

    let mut assemblies = vec![AssemblyRequest::Deck(deck)];
    if with_roof {
        assemblies.push(AssemblyRequest::Roof(RoofInput {
            roof_width_m: Some(deck_width_m),
            roof_length_m: Some(deck_length_m),
            pitch_deg: Some(pitch_deg),
            rafter_spacing_mm: Some(900.0),
            ..Default::default()
        }));
    }

    let request = QuoteRequest {
        site: SiteSpec::for_region(region),
        assemblies,
    };

    println!();
    match assemble_quote(&request, &StockLengthCatalog::timber_default()) {
        Ok(quote) => {
            println!("═══════════════════════════════════════");
            println!("  MATERIALS LIST");
            println!("═══════════════════════════════════════");
            println!();
            for line in &quote.lines {
                println!("  {}", line.order_amount);
            }
            println!();
            println!("{}", quote.note);
            println!();

            println!("═══════════════════════════════════════");
            println!("  PRICE GUIDE (Bowens seed list)");
            println!("═══════════════════════════════════════");
            println!();
            let priced = PriceBook::builtin().annotate(&quote.lines, DEFAULT_MATCH_THRESHOLD);
            for line in &priced {
                match (&line.matched_name, line.price_per_unit, &line.price_unit) {
                    (Some(name), Some(price), Some(unit)) => {
                        println!(
                            "  {:<38} ${:.2}/{} as \"{}\"",
                            line.material_description, price, unit, name
                        );
                    }
                    _ => {
                        println!("  {:<38} no price match", line.material_description);
                    }
                }
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&quote) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
