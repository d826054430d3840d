use celestial_exoplanet::{ConstantsTable, DerivationEngine, Group, InputRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = DerivationEngine::new(ConstantsTable::standard());

    // --- Earth around the Sun ---

    let earth = InputRecord {
        radial_velocity: 0.09,
        planet_radius: 1.0,
        ..InputRecord::sample()
    };
    let result = engine.evaluate(&earth);
    println!("=== Earth ===");
    println!("{}", serde_json::to_string_pretty(&result)?);

    // --- A hot Jupiter with a broken stellar radius ---
    // Transit and Stefan-Boltzmann fail; everything else is still derived.

    let broken = InputRecord {
        planet_radius: 11.2,
        planet_mass: 318.0,
        orbital_period: 3.5,
        stellar_radius: -1.0,
        ..InputRecord::sample()
    };
    let derivation = engine.derive(&broken);
    println!("\n=== Hot Jupiter ===");
    for group in Group::ALL {
        match derivation.error(group) {
            Some(err) => println!("  {group}: {err}"),
            None => println!("  {group}: ok"),
        }
    }

    Ok(())
}
