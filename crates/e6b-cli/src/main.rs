// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{bail, Context, Result};
use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand};
use e6b_core::atmosphere::AtmosphericInput;
use e6b_core::checklist::{Checklist, ChecklistStore};
use e6b_core::checkpoint::Checkpoint;
use e6b_core::checkpoint::CheckpointStore;
use e6b_core::climb::{self, ClimbDescentInput};
use e6b_core::nav::{self, GroundSpeed, NavLegInput};
use e6b_core::performance::{self, RunwaySurface, TakeoffLandingInput, TakeoffLandingResult};
use e6b_core::units::STANDARD_ALTIMETER_INHG;
use e6b_core::weight_balance;
use e6b_core::wind::{self, WindLimit, WindSolution, WindTriangleInput};
use e6b_core::{AircraftProfile, AircraftStore, CalculatorInputs, CalculatorReport};
use serde::Serialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding aircraft.json and checkpoints.json
    #[arg(long, env = "E6B_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,

    /// Load the aircraft profile from this file instead of the config directory
    #[arg(long, global = true)]
    aircraft: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pressure and density altitude
    Density(AtmosphereArgs),
    /// Heading, ground speed and wind components for a true course
    Wind(WindArgs),
    /// Time, fuel and ETA for a leg
    Nav {
        /// Leg distance, NM
        #[arg(long)]
        distance: f64,
        /// Ground speed, kt (solved from the wind options when omitted)
        #[arg(long)]
        gs: Option<f64>,
        /// Fuel burn, gal/h (defaults to the aircraft profile)
        #[arg(long)]
        burn: Option<f64>,
        /// Departure time, HH:MM
        #[arg(long, value_parser = parse_time)]
        depart: Option<NaiveTime>,
        #[command(flatten)]
        wind: WindArgs,
    },
    /// Time, distance and fuel to change altitude
    Climb {
        #[arg(long, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, allow_negative_numbers = true)]
        to: f64,
        /// Vertical speed, ft/min
        #[arg(long, default_value_t = 500.0)]
        rate: f64,
        #[arg(long)]
        gs: Option<f64>,
        #[arg(long)]
        burn: Option<f64>,
        #[command(flatten)]
        wind: WindArgs,
    },
    /// Weight and balance for the configured aircraft
    Wb {
        /// Front seats, lb
        #[arg(long, default_value_t = 0.0)]
        front: f64,
        /// Rear seats, lb
        #[arg(long, default_value_t = 0.0)]
        rear: f64,
        #[arg(long, default_value_t = 0.0)]
        baggage: f64,
        /// Fuel on board, gal
        #[arg(long, default_value_t = 0.0)]
        fuel: f64,
    },
    /// Takeoff ground roll, total distance and Vr
    Takeoff(RunwayArgs),
    /// Landing ground roll, total distance and reference speed
    Landing(RunwayArgs),
    /// Run every calculation over a saved set of calculator inputs
    Report {
        /// JSON file with calculator inputs (dashboard defaults when omitted)
        #[arg(long)]
        inputs: Option<PathBuf>,
    },
    /// Show or edit the working checklist
    Checklist {
        /// Show the checklist stored in a checkpoint instead
        #[arg(long)]
        checkpoint: Option<u64>,
        #[command(subcommand)]
        action: Option<ChecklistAction>,
    },
    /// Manage saved checkpoints
    Checkpoint {
        #[command(subcommand)]
        action: CheckpointAction,
    },
    /// Show or initialise the aircraft profile
    Aircraft {
        #[command(subcommand)]
        action: AircraftAction,
    },
}

/// Groups and items are numbered from 1, as printed by `e6b checklist`.
#[derive(Subcommand, Debug, Clone, PartialEq)]
enum ChecklistAction {
    /// Tick or untick one item
    Toggle { group: usize, item: usize },
    /// Untick every item
    Reset,
    AddGroup { title: String },
    AddItem { group: usize, text: String },
    DeleteGroup { group: usize },
    DeleteItem { group: usize, item: usize },
}

#[derive(Subcommand)]
enum CheckpointAction {
    List,
    /// Save calculator inputs and the working checklist under a name
    Save {
        name: String,
        #[arg(long)]
        inputs: Option<PathBuf>,
        /// JSON checklist file (the working checklist when omitted)
        #[arg(long)]
        checklist: Option<PathBuf>,
    },
    /// Print a checkpoint's inputs and the results they produce
    Show { id: u64 },
    /// Put a checkpoint's checklist back as the working checklist
    Restore {
        id: u64,
        /// Also write the checkpoint's calculator inputs to this file
        #[arg(long)]
        inputs_out: Option<PathBuf>,
    },
    Delete { id: u64 },
}

#[derive(Subcommand)]
enum AircraftAction {
    Show,
    /// Write the built-in profile to the config directory if none exists
    Init,
}

#[derive(Args, Debug, Clone)]
struct AtmosphereArgs {
    /// Pressure altitude, ft (derived from elevation and altimeter when omitted)
    #[arg(long, allow_negative_numbers = true)]
    press_alt: Option<f64>,
    /// Field elevation, ft
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    elevation: f64,
    /// Altimeter setting, inHg
    #[arg(long, default_value_t = STANDARD_ALTIMETER_INHG)]
    altimeter: f64,
    /// Outside air temperature, °C
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    oat: f64,
}

impl AtmosphereArgs {
    fn input(&self) -> AtmosphericInput {
        AtmosphericInput {
            field_elevation_ft: self.elevation,
            altimeter_inhg: self.altimeter,
            pressure_altitude_ft: self.press_alt,
            outside_air_temp_c: self.oat,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct WindArgs {
    /// True airspeed, kt (defaults to the aircraft's cruise TAS)
    #[arg(long)]
    tas: Option<f64>,
    /// True course, degrees
    #[arg(long, default_value_t = 0.0)]
    course: f64,
    /// Wind direction (from), degrees true
    #[arg(long, default_value_t = 0.0)]
    wind_dir: f64,
    #[arg(long, default_value_t = 0.0)]
    wind_speed: f64,
    /// Magnetic variation, degrees, east positive
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    variation: f64,
}

impl WindArgs {
    fn input(&self, aircraft: &AircraftProfile) -> WindTriangleInput {
        WindTriangleInput {
            true_airspeed_kt: self.tas.unwrap_or(aircraft.cruise_tas_kt),
            wind_speed_kt: self.wind_speed,
            wind_direction_deg_t: self.wind_dir,
            true_course_deg_t: self.course,
            magnetic_variation_deg: self.variation,
        }
    }
}

#[derive(Args, Debug, Clone)]
struct RunwayArgs {
    #[command(flatten)]
    atmosphere: AtmosphereArgs,
    /// Aircraft weight, lb (defaults to max takeoff weight)
    #[arg(long)]
    weight: Option<f64>,
    /// Headwind component, kt; negative for tailwind
    #[arg(long, allow_negative_numbers = true, conflicts_with = "runway_heading")]
    headwind: Option<f64>,
    /// Runway heading, degrees; derives the headwind from --wind-dir/--wind-speed
    #[arg(long, requires = "wind_speed")]
    runway_heading: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    wind_dir: f64,
    #[arg(long, requires = "runway_heading")]
    wind_speed: Option<f64>,
    #[arg(long, default_value = "paved")]
    surface: RunwaySurface,
    /// Runway length available, ft
    #[arg(long)]
    runway: Option<f64>,
}

impl RunwayArgs {
    fn headwind(&self) -> f64 {
        match (self.headwind, self.runway_heading, self.wind_speed) {
            (Some(h), _, _) => h,
            (None, Some(heading), Some(speed)) => wind::wind_components(self.wind_dir, speed, heading).0,
            _ => 0.0,
        }
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H%M"))
        .map_err(|_| format!("expected HH:MM, got '{}'", s))
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn load_aircraft(cli: &Cli, config_root: &Path) -> Result<AircraftProfile> {
    let store = match &cli.aircraft {
        Some(path) => AircraftStore::at(path),
        None => AircraftStore::new(config_root),
    };
    store.load()
}

fn load_inputs(path: Option<&Path>) -> Result<CalculatorInputs> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read inputs from {}", path.display()))?;
            serde_json::from_str(&content).context("Failed to parse calculator inputs")
        }
        None => Ok(CalculatorInputs::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe_wind(solution: &WindSolution) -> String {
    match solution {
        WindSolution::Incomplete => "Incomplete input (true airspeed must be positive)".to_string(),
        WindSolution::NoSolution(WindLimit::CrosswindExceedsAirspeed) => {
            "No solution: crosswind exceeds true airspeed".to_string()
        }
        WindSolution::NoSolution(WindLimit::NoProgressAlongCourse) => {
            "No solution: headwind exceeds true airspeed".to_string()
        }
        WindSolution::Solved(r) => {
            let along = if r.headwind_component_kt >= 0.0 { "Headwind" } else { "Tailwind" };
            let side = if r.crosswind_component_kt >= 0.0 { "right" } else { "left" };
            format!(
                "Ground speed:     {} kt\n\
                 WCA:              {:+.1}°\n\
                 True heading:     {:03}°\n\
                 Magnetic heading: {:03}°\n\
                 {}:         {:.1} kt\n\
                 Crosswind:        {:.1} kt from the {}",
                r.ground_speed_kt,
                r.wind_correction_angle_deg,
                r.true_heading_deg_t as i64,
                r.magnetic_heading_deg as i64,
                along,
                r.headwind_component_kt.abs(),
                r.crosswind_component_kt.abs(),
                side
            )
        }
    }
}

fn render_runway(label: &str, result: &TakeoffLandingResult, runway: Option<f64>) -> String {
    let mut lines = vec![
        format!("{} ground roll:   {} ft", label, result.ground_roll_ft),
        format!("{} total (50 ft): {} ft", label, result.total_distance_ft),
        format!("Reference speed:      {} kt", result.reference_speed_kt),
    ];
    if let Some(len) = runway {
        if result.fits_runway(len) {
            lines.push(format!("Fits {} ft runway", len));
        } else {
            lines.push(format!("WARNING: exceeds {} ft runway", len));
        }
    }
    lines.join("\n")
}

fn render_report(inputs: &CalculatorInputs, report: &CalculatorReport) -> String {
    let wb = &report.weight_balance;
    let runway = inputs.runway.runway_length_ft;
    [
        "== Atmosphere".to_string(),
        format!("Density altitude: {} ft", report.atmosphere.density_altitude_ft),
        "== Wind".to_string(),
        describe_wind(&report.wind),
        "== Nav".to_string(),
        format!(
            "{} min, {:.1} gal",
            report.nav.time_enroute_minutes, report.nav.fuel_required_gal
        ),
        "== Climb/Descent".to_string(),
        format!(
            "{} min, {:.1} NM, {:.1} gal",
            report.climb.time_minutes, report.climb.distance_nm, report.climb.fuel_gal
        ),
        "== Weight & Balance".to_string(),
        format!(
            "{} lb, CG {:.2} in{}{}",
            wb.total_weight_lb,
            wb.center_of_gravity_in,
            if wb.is_over_max_weight { ", OVERWEIGHT" } else { "" },
            if wb.is_cg_within_envelope { "" } else { ", CG OUT OF LIMITS" },
        ),
        "== Takeoff".to_string(),
        render_runway("Takeoff", &report.takeoff, runway),
        "== Landing".to_string(),
        render_runway("Landing", &report.landing, runway),
    ]
    .join("\n")
}

fn render_checkpoint(cp: &Checkpoint, report: &CalculatorReport) -> String {
    let (done, total) = cp.checklist.progress();
    [
        format!("{} '{}' saved {}", cp.id, cp.name, cp.created_at.format("%Y-%m-%d %H:%M")),
        render_report(&cp.inputs, report),
        format!("Checklist: {}/{} complete", done, total),
    ]
    .join("\n")
}

fn render_checklist(checklist: &Checklist) -> String {
    let mut lines = Vec::new();
    for (g, group) in checklist.groups.iter().enumerate() {
        let (done, total) = group.progress();
        lines.push(format!("{}. {} ({}/{})", g + 1, group.title, done, total));
        for (i, item) in group.items.iter().enumerate() {
            let status = if item.completed { "[x]" } else { "[ ]" };
            lines.push(format!("  {:>2} {} {}", i + 1, status, item.text));
        }
    }
    let (done, total) = checklist.progress();
    lines.push(format!("Overall: {}/{}", done, total));
    lines.join("\n")
}

/// Converts a number as printed (from 1) to an index.
fn position(n: usize) -> Result<usize> {
    match n.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Checklist numbers start at 1"),
    }
}

/// Applies one edit and describes what changed.
fn apply_checklist_action(checklist: &mut Checklist, action: &ChecklistAction) -> Result<String> {
    let message = match action {
        ChecklistAction::Toggle { group, item } => {
            let done = checklist.toggle(position(*group)?, position(*item)?)?;
            format!("{}.{} {}", group, item, if done { "checked" } else { "unchecked" })
        }
        ChecklistAction::Reset => {
            checklist.reset_all();
            "All items unchecked".to_string()
        }
        ChecklistAction::AddGroup { title } => {
            let index = checklist.add_group(title)?;
            format!("Added group {}", index + 1)
        }
        ChecklistAction::AddItem { group, text } => {
            let g = position(*group)?;
            checklist.add_item(g, text)?;
            format!("Added item {}.{}", group, checklist.groups[g].items.len())
        }
        ChecklistAction::DeleteGroup { group } => {
            let removed = checklist.delete_group(position(*group)?)?;
            format!("Deleted group '{}'", removed.title)
        }
        ChecklistAction::DeleteItem { group, item } => {
            let removed = checklist.delete_item(position(*group)?, position(*item)?)?;
            format!("Deleted item '{}'", removed.text)
        }
    };
    Ok(message)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config_root = cli
        .config_dir
        .clone()
        .unwrap_or_else(e6b_core::get_config_root);
    let aircraft = load_aircraft(&cli, &config_root)?;
    log::debug!(
        "Using aircraft profile — name={} config_root={}",
        aircraft.name,
        config_root.display()
    );

    match &cli.command {
        Commands::Density(args) => {
            let result = args.input().resolve();
            if cli.json {
                return print_json(&result);
            }
            println!("Pressure altitude: {} ft", result.pressure_altitude_ft);
            println!("ISA temperature:   {:.1} °C ({:+.1})", result.isa_temp_c, result.isa_deviation_c);
            println!("Density altitude:  {} ft", result.density_altitude_ft);
        }
        Commands::Wind(args) => {
            let solution = wind::solve(&args.input(&aircraft));
            if cli.json {
                return print_json(&solution);
            }
            println!("{}", describe_wind(&solution));
        }
        Commands::Nav {
            distance,
            gs,
            burn,
            depart,
            wind,
        } => {
            let ground_speed = GroundSpeed::explicit_or_wind(*gs, wind.input(&aircraft));
            let result = nav::plan_leg(&NavLegInput {
                distance_nm: *distance,
                ground_speed_kt: ground_speed.resolve(),
                fuel_burn_rate_gph: burn.unwrap_or(aircraft.fuel_burn_gph),
                departure_time: *depart,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Time en route: {} min", result.time_enroute_minutes);
            println!("Fuel required: {:.1} gal", result.fuel_required_gal);
            match result.eta {
                Some(eta) => println!("ETA:           {}", eta.format("%H:%M")),
                None => println!("ETA:           unknown"),
            }
        }
        Commands::Climb {
            from,
            to,
            rate,
            gs,
            burn,
            wind,
        } => {
            let ground_speed = GroundSpeed::explicit_or_wind(*gs, wind.input(&aircraft));
            let result = climb::plan_transition(&ClimbDescentInput {
                start_altitude_ft: *from,
                target_altitude_ft: *to,
                vertical_speed_fpm: *rate,
                ground_speed_kt: ground_speed.resolve(),
                fuel_burn_rate_gph: burn.unwrap_or(aircraft.fuel_burn_gph),
            });
            if cli.json {
                return print_json(&result);
            }
            println!("{:?}", result.direction);
            println!("Time:     {} min", result.time_minutes);
            println!("Distance: {:.1} NM", result.distance_nm);
            println!("Fuel:     {:.1} gal", result.fuel_gal);
        }
        Commands::Wb {
            front,
            rear,
            baggage,
            fuel,
        } => {
            let stations = aircraft.stations(*front, *rear, *baggage);
            let result = weight_balance::resolve(
                &stations,
                aircraft.fuel(*fuel),
                aircraft.max_takeoff_weight_lb,
                &aircraft.cg_envelope,
            );
            if cli.json {
                return print_json(&result);
            }
            println!("Aircraft:     {}", aircraft.name);
            println!("Gross weight: {} lb (margin {} lb)", result.total_weight_lb, result.margin_lb);
            println!("Moment:       {} lb-in", result.total_moment_lb_in);
            println!("CG:           {:.2} in", result.center_of_gravity_in);
            if result.is_over_max_weight {
                println!("WARNING: exceeds max gross weight of {} lb", aircraft.max_takeoff_weight_lb);
            }
            if !result.is_cg_within_envelope {
                println!("WARNING: CG outside the envelope");
            }
        }
        Commands::Takeoff(args) | Commands::Landing(args) => {
            let atmosphere = args.atmosphere.input().resolve();
            let input = TakeoffLandingInput {
                density_altitude_ft: atmosphere.density_altitude_ft,
                weight_lb: args.weight.unwrap_or(aircraft.max_takeoff_weight_lb),
                headwind_component_kt: args.headwind(),
                surface: args.surface,
            };
            let (label, result) = if matches!(cli.command, Commands::Takeoff(_)) {
                ("Takeoff", performance::compute_takeoff(&input, &aircraft.takeoff))
            } else {
                ("Landing", performance::compute_landing(&input, &aircraft.landing))
            };
            if cli.json {
                return print_json(&result);
            }
            println!("Density altitude:     {} ft", atmosphere.density_altitude_ft);
            println!("{}", render_runway(label, &result, args.runway));
        }
        Commands::Report { inputs } => {
            let inputs = load_inputs(inputs.as_deref())?;
            let report = inputs.compute(&aircraft);
            if cli.json {
                return print_json(&report);
            }
            println!("{}", render_report(&inputs, &report));
        }
        Commands::Checklist { checkpoint, action } => {
            let working = ChecklistStore::new(&config_root);
            let checklist = match (checkpoint, action) {
                (Some(_), Some(_)) => bail!("Saved checkpoints are read-only; restore one to edit it"),
                (Some(id), None) => {
                    let mut store = CheckpointStore::in_config_root(&config_root);
                    store.load()?;
                    store.restore(*id)?.checklist
                }
                (None, Some(action)) => {
                    let mut checklist = working.load()?;
                    let message = apply_checklist_action(&mut checklist, action)?;
                    working.save(&checklist)?;
                    if !cli.json {
                        println!("{}", message);
                        let (done, total) = checklist.progress();
                        println!("Overall: {}/{}", done, total);
                        return Ok(());
                    }
                    checklist
                }
                (None, None) => working.load()?,
            };
            if cli.json {
                return print_json(&checklist);
            }
            println!("{}", render_checklist(&checklist));
        }
        Commands::Checkpoint { action } => {
            let mut store = CheckpointStore::in_config_root(&config_root);
            store.load()?;
            match action {
                CheckpointAction::List => {
                    if cli.json {
                        return print_json(&store.list());
                    }
                    if store.is_empty() {
                        println!("No checkpoints in {}", store.path().display());
                    }
                    for cp in store.list() {
                        println!(
                            "{:>4}  {}  {}",
                            cp.id,
                            cp.created_at.format("%Y-%m-%d %H:%M"),
                            cp.name
                        );
                    }
                }
                CheckpointAction::Save {
                    name,
                    inputs,
                    checklist,
                } => {
                    let inputs = load_inputs(inputs.as_deref())?;
                    let checklist = match checklist {
                        Some(path) => {
                            let content = fs::read_to_string(path).with_context(|| {
                                format!("Failed to read checklist from {}", path.display())
                            })?;
                            serde_json::from_str(&content).context("Failed to parse checklist")?
                        }
                        None => ChecklistStore::new(&config_root).load()?,
                    };
                    let cp = store.create(name, inputs, checklist);
                    store.save()?;
                    println!("Saved checkpoint {} '{}'", cp.id, cp.name);
                }
                CheckpointAction::Show { id } => {
                    let cp = store.restore(*id)?;
                    let report = cp.inputs.compute(&aircraft);
                    if cli.json {
                        return print_json(&serde_json::json!({
                            "checkpoint": cp,
                            "report": report,
                        }));
                    }
                    println!("{}", render_checkpoint(&cp, &report));
                }
                CheckpointAction::Restore { id, inputs_out } => {
                    let cp = store.restore(*id)?;
                    ChecklistStore::new(&config_root).save(&cp.checklist)?;
                    if let Some(path) = inputs_out {
                        fs::write(path, serde_json::to_string_pretty(&cp.inputs)?)
                            .with_context(|| format!("Failed to write inputs to {}", path.display()))?;
                    }
                    let (done, total) = cp.checklist.progress();
                    println!(
                        "Restored checkpoint {} '{}' (checklist {}/{})",
                        cp.id, cp.name, done, total
                    );
                }
                CheckpointAction::Delete { id } => {
                    let cp = store.delete(*id)?;
                    store.save()?;
                    println!("Deleted checkpoint {} '{}'", cp.id, cp.name);
                }
            }
        }
        Commands::Aircraft { action } => match action {
            AircraftAction::Show => {
                if cli.json {
                    return print_json(&aircraft);
                }
                println!("{}", serde_json::to_string_pretty(&aircraft)?);
            }
            AircraftAction::Init => {
                let store = AircraftStore::new(&config_root);
                if store.path().exists() {
                    println!("Aircraft profile already exists at {}", store.path().display());
                } else {
                    store.save(&AircraftProfile::default())?;
                    println!("Wrote default profile to {}", store.path().display());
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_wind_needs_heading() {
        let bare = Cli::try_parse_from(["e6b", "takeoff", "--wind-speed", "20", "--wind-dir", "90"]);
        assert!(bare.is_err());

        let cli = Cli::try_parse_from([
            "e6b",
            "takeoff",
            "--wind-speed",
            "20",
            "--wind-dir",
            "90",
            "--runway-heading",
            "90",
        ])
        .unwrap();
        match cli.command {
            Commands::Takeoff(args) => assert!((args.headwind() - 20.0).abs() < 1e-9),
            _ => panic!("expected takeoff"),
        }
    }

    #[test]
    fn test_checklist_subcommands_parse() {
        let cli = Cli::try_parse_from(["e6b", "checklist", "toggle", "1", "2"]).unwrap();
        match cli.command {
            Commands::Checklist { checkpoint, action } => {
                assert_eq!(checkpoint, None);
                assert_eq!(action, Some(ChecklistAction::Toggle { group: 1, item: 2 }));
            }
            _ => panic!("expected checklist"),
        }

        let cli = Cli::try_parse_from(["e6b", "checklist"]).unwrap();
        assert!(matches!(cli.command, Commands::Checklist { action: None, .. }));
    }

    #[test]
    fn test_checklist_actions_use_printed_numbers() {
        let mut checklist = Checklist::preflight();
        let first = checklist.groups[0].items[0].text.clone();

        apply_checklist_action(&mut checklist, &ChecklistAction::Toggle { group: 1, item: 1 }).unwrap();
        assert!(checklist.groups[0].items[0].completed);

        let zero = ChecklistAction::Toggle { group: 0, item: 1 };
        assert!(apply_checklist_action(&mut checklist, &zero).is_err());

        let message = apply_checklist_action(
            &mut checklist,
            &ChecklistAction::DeleteItem { group: 1, item: 1 },
        )
        .unwrap();
        assert!(message.contains(&first));

        apply_checklist_action(&mut checklist, &ChecklistAction::AddGroup { title: "Ferry".into() }).unwrap();
        let last = checklist.groups.len();
        let message = apply_checklist_action(
            &mut checklist,
            &ChecklistAction::AddItem { group: last, text: "Permit - On Board".into() },
        )
        .unwrap();
        assert_eq!(message, format!("Added item {}.1", last));

        apply_checklist_action(&mut checklist, &ChecklistAction::Reset).unwrap();
        assert_eq!(checklist.progress().0, 0);
    }

    #[test]
    fn test_checkpoint_text_includes_results() {
        let mut checklist = Checklist::preflight();
        checklist.toggle(0, 0).unwrap();
        checklist.toggle(0, 1).unwrap();
        let cp = Checkpoint {
            id: 1,
            name: "Run-up".to_string(),
            created_at: chrono::Utc::now(),
            inputs: CalculatorInputs::default(),
            checklist,
        };
        let report = cp.inputs.compute(&AircraftProfile::default());
        let text = render_checkpoint(&cp, &report);

        assert!(text.contains("Takeoff ground roll:   1045 ft"));
        assert!(text.contains("2270 lb"));
        assert!(text.contains("Checklist: 2/"));
    }
}
