use celestial_exoplanet::{ConstantsTable, Derivation, Group, InputRecord, ResultRecord, Scenario};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "exocalc")]
#[command(about = "Derive exoplanet and host-star parameters from a scenario file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every formula group for a scenario
    Evaluate {
        /// Scenario file (.toml, or .json)
        scenario: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Print a scenario template populated with sample values
    Template,
    /// Print the standard constants table
    Constants {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate { scenario, format } => {
            let scenario = Scenario::load(&scenario)?;
            let engine = scenario.engine();
            let derivation = engine.derive(&scenario.inputs);

            for (group, err) in derivation.failures() {
                tracing::info!(group = group.key(), "{err}");
            }

            match format {
                OutputFormat::Table => {
                    if let Some(name) = &scenario.name {
                        println!("Scenario: {name}\n");
                    }
                    print_table(&derivation, engine.constants());
                }
                OutputFormat::Json => {
                    let result = ResultRecord::from(&derivation);
                    println!("{}", serde_json::to_string_pretty(&result)?);
                }
            }
        }
        Commands::Template => {
            let template = Scenario::new(InputRecord::sample()).with_name("sample");
            print!("{}", template.to_toml_string()?);
        }
        Commands::Constants { format } => {
            let constants = ConstantsTable::standard();
            match format {
                OutputFormat::Table => {
                    for (name, value) in constants.entries() {
                        println!("{name:>8} = {value:e}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&constants)?),
            }
        }
    }

    Ok(())
}

fn print_table(d: &Derivation, constants: &ConstantsTable) {
    for group in Group::ALL {
        println!("{group}");
        match group_lines(d, group, constants) {
            Some(lines) => {
                for (label, value) in lines {
                    println!("  {label:<22} {value}");
                }
            }
            None => {
                let reason = d.error(group).map(|e| e.to_string()).unwrap_or_default();
                println!("  invalid input ({reason})");
            }
        }
        println!();
    }
}

fn group_lines(
    d: &Derivation,
    group: Group,
    k: &ConstantsTable,
) -> Option<Vec<(&'static str, String)>> {
    let lines = match group {
        Group::Doppler => {
            let o = d.doppler.as_ref().ok()?;
            vec![
                ("wavelength shift", format!("{:.4} nm", o.wavelength_shift_nm)),
                ("shift ratio", format!("{:.2} ppm", o.shift_ratio_ppm)),
            ]
        }
        Group::Transit => {
            let o = d.transit.as_ref().ok()?;
            vec![
                ("transit depth", format!("{:.0} ppm", o.transit_depth_ppm)),
                ("radius ratio", format!("{:.4}", o.radius_ratio)),
            ]
        }
        Group::Kepler => {
            let o = d.kepler.as_ref().ok()?;
            vec![
                ("orbital distance", format!("{:.3} AU", o.orbital_distance_au)),
                ("total mass", format!("{:.3} M_sun", o.total_mass_solar(k))),
            ]
        }
        Group::StefanBoltzmann => {
            let o = d.stefan_boltzmann.as_ref().ok()?;
            vec![
                ("luminosity", format!("{:.2} L_sun", o.luminosity_solar)),
                ("luminosity", format!("{:.2e} W", o.luminosity_watts)),
            ]
        }
        Group::FeedbackWeight => {
            let o = d.feedback_weight.as_ref().ok()?;
            vec![
                ("loss", format!("{:.4}", o.loss)),
                ("gradient", format!("{:.4}", o.gradient)),
                ("weight change", format!("{:.4}", o.weight_change)),
                ("new weight", format!("{:.3}", o.new_weight)),
            ]
        }
        Group::HabitableZone => {
            let o = d.habitable_zone.as_ref().ok()?;
            let status = if o.in_hz {
                "in habitable zone"
            } else if d.kepler.is_err() {
                "unknown (no orbit)"
            } else {
                "outside habitable zone"
            };
            vec![
                ("inner edge", format!("{:.3} AU", o.inner)),
                ("outer edge", format!("{:.3} AU", o.outer)),
                ("width", format!("{:.3} AU", o.width)),
                ("status", status.to_string()),
            ]
        }
        Group::EscapeVelocity => {
            let o = d.escape_velocity.as_ref().ok()?;
            vec![
                ("escape velocity", format!("{:.2} km/s", o.km_per_s)),
                ("relative to sound", format!("Mach {:.1}", o.mach)),
            ]
        }
        Group::SurfaceGravity => {
            let o = d.surface_gravity.as_ref().ok()?;
            vec![
                ("surface gravity", format!("{:.2} m/s^2", o.g_ms)),
                ("relative to Earth", format!("{:.2} g", o.relative_g_earth)),
            ]
        }
        Group::Atmosphere => {
            let o = d.atmosphere.as_ref().ok()?;
            vec![
                ("scale height", format!("{:.2} km", o.scale_height_km)),
                (
                    "pressure at 10 km",
                    format!("{:.1}% of surface", o.pressure_10km * 100.0),
                ),
            ]
        }
    };
    Some(lines)
}
