mod clock;
mod reports;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use advent_core::{CalendarDate, Clock};
use clock::SystemClock;
use reports::ScenarioResult;
use scenario::{ScenarioCtx, all_keys, get_scenario, list_scenarios};
use util::split_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "advent-tester", version = "0.1.0")]
#[command(about = "Automated QA scenarios for the advent calendar state model")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Date to test against as MM-DD (defaults to today's local date)
    #[arg(long)]
    date: Option<CalendarDate>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console {
        announce_banner();
    }

    let start_time = Instant::now();
    let today = args.date.unwrap_or_else(|| SystemClock.today());
    log::info!("testing against {today}");
    let ctx = ScenarioCtx {
        today,
        verbose: args.verbose,
    };
    let scenarios = expand_scenarios(&args.scenarios);
    let results = run_scenarios(&ctx, &scenarios);

    write_reports(&args, &today.label(), &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:15} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🎄 Advent Calendar Tester".bright_cyan().bold());
    println!("{}", "=========================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in all_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn run_scenarios(ctx: &ScenarioCtx, scenarios: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    for name in scenarios {
        let Some(scenario) = get_scenario(name) else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
            results.push(ScenarioResult {
                scenario_name: name.clone(),
                passed: false,
                checks: 0,
                failures: vec![format!("unknown scenario {name}")],
                duration: std::time::Duration::ZERO,
            });
            continue;
        };
        let started = Instant::now();
        let outcome = scenario.run(ctx);
        let duration = started.elapsed();
        let result = match outcome {
            Ok(checks) => {
                log::debug!("{name}: {checks} checks in {duration:?}");
                ScenarioResult {
                    scenario_name: name.clone(),
                    passed: true,
                    checks,
                    failures: Vec::new(),
                    duration,
                }
            }
            Err(err) => {
                log::warn!("{name} failed: {err:#}");
                ScenarioResult {
                    scenario_name: name.clone(),
                    passed: false,
                    checks: 0,
                    failures: vec![format!("{err:#}")],
                    duration,
                }
            }
        };
        results.push(result);
    }
    results
}

fn write_reports(
    args: &Args,
    date_label: &str,
    results: &[ScenarioResult],
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            reports::generate_json_report(&mut output_target, date_label, results)?;
        }
        ReportFormat::Markdown => {
            reports::generate_markdown_report(&mut output_target, date_label, results)?;
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    date_label,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(
                &mut output_target,
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
