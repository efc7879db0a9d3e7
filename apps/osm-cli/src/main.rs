use clap::{Parser, Subcommand};
use osm_app::{
    Action, AppConfig, AppError, AppResult, FormState, Mode, RowIssue, Session, SoluteField,
    load_config, load_script, render,
};
use osm_engine::{AggregateReport, CalculationResult, Field, ReferenceSolution};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "osm-cli")]
#[command(about = "Osmoflow CLI - osmolarity and tonicity calculator", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Reference table file (YAML or JSON), overrides the config
    #[arg(long, global = true)]
    reference: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Osmolarity of a single solute
    #[command(allow_negative_numbers = true)]
    Single {
        /// Concentration, g/L unless a unit is given (e.g. "0.9%", "900 mg/dL")
        #[arg(short, long)]
        concentration: String,
        /// Molecular weight, g/mol unless a unit is given (e.g. "66.5 kDa")
        #[arg(short, long)]
        molecular_weight: String,
        /// Particles per formula unit
        #[arg(short = 'i', long, default_value = "1")]
        dissociation_factor: String,
    },
    /// Total osmolarity of several solutes
    Multi {
        /// C:MW, C:MW:I or NAME:C:MW:I; repeat once per solute
        #[arg(short, long = "solute", required = true, allow_hyphen_values = true)]
        solutes: Vec<String>,
    },
    /// Look up a reference solution
    Preset {
        /// Reference key, e.g. normal-saline
        key: String,
    },
    /// List reference solutions
    Presets {
        /// Case-insensitive filter on key or name
        query: Option<String>,
    },
    /// Replay a recorded action script (YAML or JSON)
    Replay {
        /// Path to the script
        script_path: PathBuf,
    },
    /// Show the formula and the tonicity band in use
    Info,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.reference)?;
    tracing::debug!(?config, "resolved config");
    let mut session = Session::from_config(&config)?;
    let out = Output {
        json: cli.json,
        precision: config.display_precision,
    };

    match cli.command {
        Commands::Single {
            concentration,
            molecular_weight,
            dissociation_factor,
        } => cmd_single(
            &mut session,
            &out,
            concentration,
            molecular_weight,
            dissociation_factor,
        ),
        Commands::Multi { solutes } => cmd_multi(&mut session, &out, &solutes),
        Commands::Preset { key } => cmd_preset(&mut session, &out, key),
        Commands::Presets { query } => cmd_presets(&session, &out, query.as_deref().unwrap_or("")),
        Commands::Replay { script_path } => cmd_replay(&mut session, &out, &script_path),
        Commands::Info => cmd_info(&session),
    }
}

fn resolve_config(path: Option<&Path>, reference: Option<PathBuf>) -> AppResult<AppConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if reference.is_some() {
        config.reference_table = reference;
    }
    Ok(config)
}

struct Output {
    json: bool,
    precision: usize,
}

#[derive(Serialize)]
struct CalculationOutput<'a> {
    result: Option<&'a CalculationResult>,
    issues: &'a [RowIssue],
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a AggregateReport>,
}

impl Output {
    fn calculation(&self, state: &FormState) -> AppResult<()> {
        let breakdown = state.breakdown.as_ref();
        if self.json {
            let payload = CalculationOutput {
                result: state.result.as_ref(),
                issues: &state.issues,
                breakdown,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
            return Ok(());
        }

        if let Some(report) = breakdown {
            println!("Solutes:");
            for row in &report.rows {
                let label = row
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("solute {}", row.index + 1));
                match row.osmolarity {
                    Some(osm) => println!("  {:<16} {:.*} mOsm/L", label, self.precision, osm),
                    None => println!("  {:<16} skipped", label),
                }
            }
            println!();
        }
        if let Some(result) = &state.result {
            print!("{}", render::render_result(result, self.precision));
        }
        if !state.issues.is_empty() {
            println!("Issues:");
            print!("{}", render::render_issues(&state.issues));
        }
        Ok(())
    }

    fn references(&self, entries: &[&ReferenceSolution]) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(entries)?);
        } else if entries.is_empty() {
            println!("No matching reference solutions");
        } else {
            println!("Reference solutions:");
            print!("{}", render::render_reference_list(entries));
        }
        Ok(())
    }
}

fn cmd_single(
    session: &mut Session,
    out: &Output,
    concentration: String,
    molecular_weight: String,
    dissociation_factor: String,
) -> AppResult<()> {
    let state = session.replay([
        Action::SelectMode { mode: Mode::Manual },
        Action::SetManualField {
            field: Field::Concentration,
            value: concentration,
        },
        Action::SetManualField {
            field: Field::MolecularWeight,
            value: molecular_weight,
        },
        Action::SetManualField {
            field: Field::DissociationFactor,
            value: dissociation_factor,
        },
        Action::Calculate,
    ]);

    out.calculation(state)?;
    if state.result.is_none() {
        return Err(AppError::InvalidInput(
            "no osmolarity calculated, see issues above".to_string(),
        ));
    }
    Ok(())
}

/// Split `C:MW`, `C:MW:I` or `NAME:C:MW:I`.
fn parse_solute_spec(spec: &str) -> AppResult<[String; 4]> {
    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    let [name, c, mw, i] = match parts.as_slice() {
        [c, mw] => ["", *c, *mw, "1"],
        [c, mw, i] => ["", *c, *mw, *i],
        [name, c, mw, i] => [*name, *c, *mw, *i],
        _ => {
            return Err(AppError::InvalidInput(format!(
                "solute '{}' must be C:MW, C:MW:I or NAME:C:MW:I",
                spec
            )));
        }
    };
    Ok([name, c, mw, i].map(str::to_string))
}

fn cmd_multi(session: &mut Session, out: &Output, specs: &[String]) -> AppResult<()> {
    let mut actions = vec![Action::SelectMode {
        mode: Mode::Multiple,
    }];

    for (index, spec) in specs.iter().enumerate() {
        let [name, c, mw, i] = parse_solute_spec(spec)?;
        if index > 0 {
            actions.push(Action::AddSolute);
        }
        for (field, value) in [
            (SoluteField::Name, name),
            (SoluteField::Concentration, c),
            (SoluteField::MolecularWeight, mw),
            (SoluteField::DissociationFactor, i),
        ] {
            actions.push(Action::UpdateSolute {
                index,
                field,
                value,
            });
        }
    }
    actions.push(Action::Calculate);

    out.calculation(session.replay(actions))
}

fn cmd_preset(session: &mut Session, out: &Output, key: String) -> AppResult<()> {
    let state = session.replay([
        Action::SelectMode { mode: Mode::Preset },
        Action::SelectPreset { key: key.clone() },
        Action::Calculate,
    ]);

    if state.result.is_none() {
        return Err(AppError::PresetNotFound(key));
    }
    if !out.json {
        if let Some(entry) = session.table().lookup(&key) {
            println!("{}", entry.name);
        }
    }
    out.calculation(session.state())
}

fn cmd_presets(session: &Session, out: &Output, query: &str) -> AppResult<()> {
    let entries = session.table().search(query);
    out.references(&entries)
}

fn cmd_replay(session: &mut Session, out: &Output, script_path: &Path) -> AppResult<()> {
    let script = load_script(script_path)?;
    let count = script.actions.len();
    let state = session.replay(script.actions);
    if !out.json {
        println!(
            "Replayed {} actions from {} (mode: {:?})",
            count,
            script_path.display(),
            state.mode
        );
    }
    out.calculation(state)
}

fn cmd_info(session: &Session) -> AppResult<()> {
    print!("{}", render::render_formula_info(session.band()));
    println!("Reference table: {} solutions", session.table().len());
    Ok(())
}
