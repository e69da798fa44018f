//! Asterism CLI - render ratings and replay interactions.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::doc_markdown
)]

mod script;

use asterism_core::{
    AccessibleNode, Constraints, Event, Point, Rect, RecordingCanvas, Widget, WidgetId,
};
use asterism_widgets::{HoverState, Rating, RatingChanged};
use asterism_yaml::RatingManifest;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

use script::{parse_script, Step};

#[derive(Parser)]
#[command(name = "asterism")]
#[command(about = "Fractional rating widget toolkit")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rating and print fractions and draw commands
    Render {
        #[command(flatten)]
        rating: RatingArgs,

        /// Preview this slot (0-based) as if hovered
        #[arg(long)]
        hover: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },

    /// Replay an interaction script against a caller-owned value
    Simulate {
        #[command(flatten)]
        rating: RatingArgs,

        /// Steps, e.g. "enter:1,leave,click:2,key:right"
        #[arg(short, long)]
        script: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },

    /// Check a rating manifest
    Check {
        /// Path to manifest file
        #[arg(default_value = "rating.yaml")]
        manifest: PathBuf,
    },
}

#[derive(Args)]
struct RatingArgs {
    /// Manifest file (YAML, or JSON by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the value
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// Override the slot count
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// Force read-only
    #[arg(long)]
    read_only: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Summary,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            rating,
            hover,
            format,
        } => render(&rating, hover, format),
        Commands::Simulate {
            rating,
            script,
            format,
        } => simulate(&rating, &script, format),
        Commands::Check { manifest } => check(&manifest),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_manifest(path: &Path) -> Result<RatingManifest, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let manifest = if is_json {
        RatingManifest::from_json(&text)?
    } else {
        RatingManifest::from_yaml(&text)?
    };
    tracing::info!(path = %path.display(), "loaded manifest");
    Ok(manifest)
}

fn load_manifest(args: &RatingArgs) -> Result<RatingManifest, Box<dyn Error>> {
    let mut manifest = match &args.config {
        Some(path) => read_manifest(path)?,
        None => RatingManifest::new(0.0),
    };
    if let Some(value) = args.value {
        manifest.value = value;
    }
    if let Some(count) = args.count {
        manifest.count = count;
    }
    if args.read_only {
        manifest.read_only = true;
    }
    Ok(manifest)
}

/// Build and lay out at the origin with the measured size.
fn build_rating(args: &RatingArgs) -> Result<Rating, Box<dyn Error>> {
    let mut rating = load_manifest(args)?.build()?;
    let size = rating.measure(Constraints::unbounded());
    rating.layout(Rect::from_origin_size(Point::ORIGIN, size));
    Ok(rating)
}

/// One glyph per slot: full, partial or empty.
fn bar(fractions: &[f64]) -> String {
    fractions
        .iter()
        .map(|f| match *f {
            f if f >= 100.0 => '★',
            f if f > 0.0 => '⯪',
            _ => '☆',
        })
        .collect()
}

fn format_fractions(fractions: &[f64]) -> String {
    let parts: Vec<String> = fractions.iter().map(|f| format!("{f:.0}")).collect();
    format!("[{}]", parts.join(", "))
}

#[derive(Serialize)]
struct RenderReport {
    value: f64,
    display_value: f64,
    count: usize,
    fractions: Vec<f64>,
    accessible: AccessibleReport,
    commands: Vec<asterism_core::DrawCommand>,
}

#[derive(Serialize)]
struct AccessibleReport {
    name: Option<String>,
    now: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    read_only: bool,
    tab_index: i32,
}

impl AccessibleReport {
    fn of(rating: &Rating) -> Self {
        let node = AccessibleNode::from_widget(WidgetId::new(0), rating);
        Self {
            name: node.name,
            now: node.value_now,
            min: node.value_min,
            max: node.value_max,
            read_only: node.read_only,
            tab_index: node.tab_index,
        }
    }
}

fn render(args: &RatingArgs, hover: Option<usize>, format: Format) -> Result<(), Box<dyn Error>> {
    let mut rating = build_rating(args)?;

    if let Some(slot) = hover {
        if slot >= rating.get_count() {
            tracing::warn!(slot, count = rating.get_count(), "hover slot out of range");
        }
        let position = rating.slot_bounds(slot).center();
        rating.event(&Event::MouseMove { position });
    }

    let mut canvas = RecordingCanvas::new();
    rating.paint(&mut canvas);

    let report = RenderReport {
        value: rating.get_value(),
        display_value: rating.display_value(),
        count: rating.get_count(),
        fractions: rating.fill_fractions(),
        accessible: AccessibleReport::of(&rating),
        commands: canvas.take_commands(),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Summary => {
            println!(
                "{}  {} / {}",
                bar(&report.fractions),
                report.value,
                report.count
            );
            if let HoverState::Previewing(slot) = rating.hover() {
                println!("preview: slot {} (shows {})", slot, report.display_value);
            }
            println!("fractions: {}", format_fractions(&report.fractions));
            println!(
                "a11y: slider now={} min=0 max={} read_only={}",
                report.value, report.count, report.accessible.read_only
            );
            println!("draw commands: {}", report.commands.len());
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct StepReport {
    step: Step,
    consumed: bool,
    commit: Option<f64>,
    value: f64,
    display_value: f64,
    fractions: Vec<f64>,
}

/// Dispatch a step's events, feeding each commit back as the new value.
fn run_step(rating: &mut Rating, step: Step) -> StepReport {
    let mut consumed = false;
    let mut commit = None;
    for event in step.events(rating) {
        let Some(message) = rating.event(&event) else {
            continue;
        };
        consumed = true;
        if let Ok(changed) = message.downcast::<RatingChanged>() {
            rating.set_value(changed.value);
            commit = Some(changed.value);
        }
    }
    StepReport {
        step,
        consumed,
        commit,
        value: rating.get_value(),
        display_value: rating.display_value(),
        fractions: rating.fill_fractions(),
    }
}

fn simulate(args: &RatingArgs, script: &str, format: Format) -> Result<(), Box<dyn Error>> {
    let steps = parse_script(script)?;
    let mut rating = build_rating(args)?
        .on_change(|value| tracing::info!(value, "rating committed"));

    let reports: Vec<StepReport> = steps
        .into_iter()
        .map(|step| run_step(&mut rating, step))
        .collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        Format::Summary => {
            for report in &reports {
                let outcome = match report.commit {
                    Some(value) => format!("commit {value}"),
                    None => "no commit".to_string(),
                };
                println!(
                    "{:<12} {}  {:<10} value={}",
                    report.step.to_string(),
                    bar(&report.fractions),
                    outcome,
                    report.value
                );
            }
        }
    }
    Ok(())
}

fn check(path: &Path) -> Result<(), Box<dyn Error>> {
    let manifest = read_manifest(path)?;
    manifest.validate()?;
    println!(
        "{}: ok ({} slots, value {})",
        path.display(),
        manifest.slot_count(),
        manifest.value
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(value: f64) -> RatingArgs {
        RatingArgs {
            config: None,
            value: Some(value),
            count: None,
            read_only: false,
        }
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(&[100.0, 100.0, 40.0, 0.0]), "★★⯪☆");
        assert_eq!(bar(&[]), "");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_fractions(&[100.0, 40.000_000_1, 0.0]), "[100, 40, 0]");
    }

    #[test]
    fn test_overrides_apply() {
        let mut a = args(3.5);
        a.count = Some(-1);
        a.read_only = true;
        let manifest = load_manifest(&a).unwrap();
        assert_eq!(manifest.value, 3.5);
        assert_eq!(manifest.slot_count(), 0);
        assert!(manifest.read_only);
    }

    #[test]
    fn test_huge_count_override_is_rejected() {
        let mut a = args(1.0);
        a.count = Some(10_000_000_000);
        let err = build_rating(&a).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for 'count': must not exceed 1000");
    }

    #[test]
    fn test_simulated_click_feeds_value_back() {
        let mut rating = build_rating(&args(1.0)).unwrap().on_change(|_| {});
        let report = run_step(&mut rating, Step::Click { slot: 3 });
        assert!(report.consumed);
        assert_eq!(report.commit, Some(4.0));
        assert_eq!(rating.get_value(), 4.0);

        let report = run_step(&mut rating, Step::Leave);
        assert_eq!(report.commit, None);
        assert_eq!(report.fractions, vec![100.0, 100.0, 100.0, 100.0, 0.0]);
    }

    #[test]
    fn test_simulated_key_at_max_not_consumed() {
        let mut rating = build_rating(&args(5.0)).unwrap().on_change(|_| {});
        let report = run_step(
            &mut rating,
            Step::Key {
                key: asterism_core::Key::ArrowRight,
            },
        );
        assert!(!report.consumed);
        assert_eq!(report.value, 5.0);
    }

    #[test]
    fn test_accessible_report() {
        let rating = build_rating(&args(2.5)).unwrap();
        let report = AccessibleReport::of(&rating);
        assert_eq!(report.now, Some(2.5));
        assert_eq!(report.max, Some(5.0));
        assert_eq!(report.tab_index, 0);
    }
}
