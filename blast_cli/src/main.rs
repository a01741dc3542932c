//! # Smart Stem CLI Application
//!
//! Terminal front end for the blast design engine. Prompts for the input
//! record (empty answers keep the defaults), resolves once, and prints a
//! formatted report plus the result as JSON for API/LLM use.

use std::io::{self, BufRead, Write};

use blast_core::{resolve, DesignInput, PresetDiameter, Purpose};

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }
    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt).parse().unwrap_or(default)
}

fn prompt_opt_f64(prompt: &str) -> Option<f64> {
    let raw = read_line(prompt);
    if raw.is_empty() {
        None
    } else {
        raw.parse().ok()
    }
}

/// Diameter prompt: preset number, free-text meters (ANFO), or empty for
/// the class default.
fn prompt_diameter(input: &mut DesignInput) {
    let raw = read_line(
        "Explosive diameter - 1) 0.032  2) 0.050  3) 0.065  or meters for ANFO [auto]: ",
    );
    match raw.as_str() {
        "" => {}
        "1" => input.diameter_choice = Some(PresetDiameter::D32),
        "2" => input.diameter_choice = Some(PresetDiameter::D50),
        "3" => input.diameter_choice = Some(PresetDiameter::D65),
        other => input.diameter_entry = Some(other.to_string()),
    }
}

fn prompt_purpose() -> Purpose {
    println!("Purpose:");
    for (i, purpose) in Purpose::ALL.iter().enumerate() {
        println!("  {}) {}", i + 1, purpose.display_name());
    }
    match read_line("Select [1]: ").as_str() {
        "2" => Purpose::Fragmentation,
        "3" => Purpose::QuarryProduction,
        _ => Purpose::FlyrockControl,
    }
}

fn main() {
    println!("Smart Stem CLI - Blast-Hole Geometry Calculator");
    println!("===============================================");
    println!();
    println!("Empty answers keep the defaults shown in brackets.");
    println!();

    let mut input = DesignInput {
        charge_per_delay_kg: prompt_opt_f64("Charge per delay Q1 (kg) [from stand-off]: "),
        k_constant: Some(prompt_f64("Vibration constant K [200.0]: ", 200.0)),
        n_exponent: Some(prompt_f64("Decay exponent n [-1.60]: ", -1.60)),
        allowable_ppv_cms: Some(prompt_f64("Permissible PPV (cm/s) [0.30]: ", 0.30)),
        standoff_m: prompt_opt_f64("Stand-off distance D (m) [none]: "),
        ..DesignInput::default()
    };
    input.rock_coefficient = prompt_f64("Rock coefficient C [0.33]: ", 0.33);
    input.spacing_ratio = prompt_f64("Spacing ratio V [1.2]: ", 1.2);
    prompt_diameter(&mut input);
    input.purpose = prompt_purpose();

    println!();
    match resolve(&input) {
        Ok(design) => {
            if let Some(advisory) = &design.advisory {
                println!("Note: {}", advisory);
                println!();
            }
            println!("═══════════════════════════════════════");
            println!("  BLAST DESIGN RESULT");
            println!("═══════════════════════════════════════");
            println!();
            println!(
                "Method: {} - {} (class {})",
                design.method_label(),
                design.pattern_class.description(),
                design.pattern_class.index()
            );
            println!();
            println!("Geometry:");
            println!("  Burden B        = {:.2} m", design.burden_m);
            println!("  Spacing S       = {:.2} m", design.spacing_m);
            println!("  Stemming T      = {:.2} m", design.stemming_m);
            println!("  Charge length h = {:.2} m", design.charge_length_m);
            println!("  Hole depth H    = {:.2} m", design.hole_depth_m);
            println!("  Bench height K  = {:.2} m", design.bench_height_m);
            println!();
            println!("Charge:");
            println!("  Per hole Q      = {} kg", design.charge_per_hole_kg);
            println!("  Specific c1     = {} kg/m³", design.specific_charge_kg_m3);
            println!("  Diameter pd     = {} m", design.diameter_m);
            println!();
            println!(
                "Pattern sheet: {} (charge ratio {:.3})",
                design.pattern_sheet(),
                design.charge_ratio()
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&design) {
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
