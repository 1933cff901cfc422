//! `intake specialists` — list the specialists a run would use.

use super::{build_loader, truncate};

pub async fn list(specialist_dir: Option<&str>) -> Result<(), String> {
    let loader = build_loader(specialist_dir)?;

    println!("┌────────────────────┬──────────────────────────┬────────────────────────────┬──────────┐");
    println!("│ ID                 │ Name                     │ Fields                     │ Source   │");
    println!("├────────────────────┼──────────────────────────┼────────────────────────────┼──────────┤");
    for (def, source) in loader.entries() {
        println!(
            "│ {:<18} │ {:<24} │ {:<26} │ {:<8} │",
            truncate(&def.id, 18),
            truncate(&def.name, 24),
            truncate(&def.fields.join(", "), 26),
            source.label()
        );
    }
    println!("└────────────────────┴──────────────────────────┴────────────────────────────┴──────────┘");
    Ok(())
}
