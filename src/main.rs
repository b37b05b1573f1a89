use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;

use bankcheck::{load_csv, validate_all};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: bankcheck <accounts.csv>");
        process::exit(2);
    }

    let csv_path = Path::new(&args[1]);

    // 1. Load CSV
    println!("📂 Loading accounts from {}...", csv_path.display());
    let mut accounts = load_csv(csv_path)?;
    println!("✓ Loaded {} accounts", accounts.len());

    // 2. Validate every record
    let report = validate_all(&mut accounts);

    println!();
    for outcome in &report.outcomes {
        if outcome.valid {
            println!("✓ row {}: {} {}", outcome.row, outcome.holder, outcome.display_number);
        } else {
            println!("❌ row {}: {} {}", outcome.row, outcome.holder, outcome.display_number);
            for message in &outcome.messages {
                println!("   - {}", message);
            }
        }
    }

    // 3. Summary
    println!();
    println!("{}", report.summary());

    if !report.all_valid() {
        process::exit(1);
    }

    Ok(())
}
