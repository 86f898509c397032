use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use ecosim_core::concentration::concentration;
use ecosim_core::config::Config;
use ecosim_core::constants::{input_range, DEFAULT_RESOURCES, PROJECTION_DAYS, PROJECTION_LIMIT};
use ecosim_core::report::Report;
use ecosim_core::score::eco_score_with;
use ecosim_core::series::project_cumulative;
use ecosim_core::types::{Grade, Resource, ResourceConsumption, ScoringPolicy, Severity};
use ecosim_core::{evaluate, evaluate_diary_dir, EvaluateOptions};

#[derive(Parser, Debug)]
#[command(
    name = "ecosim",
    version,
    about = "Eco-impact scoring and projection simulator"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a day's consumption and write a full report.
    Evaluate {
        #[arg(long)]
        electricity: Option<f64>,

        #[arg(long)]
        water: Option<f64>,

        #[arg(long)]
        paper: Option<f64>,

        #[arg(long)]
        waste: Option<f64>,

        /// Directory of usage diary files; the most recent entry wins.
        #[arg(long)]
        diary: Option<PathBuf>,

        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        #[arg(long)]
        reduce_electricity: Option<f64>,

        #[arg(long)]
        reduce_water: Option<f64>,

        #[arg(long)]
        reduce_paper: Option<f64>,

        #[arg(long)]
        reduce_waste: Option<f64>,

        #[arg(long)]
        min_score: Option<i64>,

        #[arg(long)]
        strict: bool,

        #[arg(long, default_value = "ecosim-out")]
        out: PathBuf,

        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Quick weighted-sum impact check (electricity/water/waste only).
    Quick {
        #[arg(long, default_value_t = 0.0)]
        electricity: f64,

        #[arg(long, default_value_t = 0.0)]
        water: f64,

        #[arg(long, default_value_t = 0.0)]
        waste: f64,
    },
    /// Pollutant concentration in a named water body.
    Chemistry {
        /// Pollutant mass in grams.
        #[arg(long)]
        amount: f64,

        #[arg(long, default_value = "bucket")]
        water_body: String,

        #[arg(long, default_value = "detergent")]
        pollutant: String,
    },
    /// Cumulative buildup projection with limit-crossing detection.
    Limits {
        #[arg(long)]
        daily_increase: f64,

        #[arg(long, default_value_t = PROJECTION_DAYS)]
        days: u32,

        #[arg(long, default_value_t = PROJECTION_LIMIT)]
        limit: f64,
    },
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum PolicyArg {
    ThresholdPenalty,
    WeightedSum,
}

impl From<PolicyArg> for ScoringPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ThresholdPenalty => ScoringPolicy::ThresholdPenalty,
            PolicyArg::WeightedSum => ScoringPolicy::WeightedSum,
        }
    }
}

struct Style {
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    orange: &'static str,
    reset: &'static str,
}

const COLOR: Style = Style {
    bold: "\x1b[1m",
    dim: "\x1b[2m",
    red: "\x1b[31m",
    green: "\x1b[32m",
    yellow: "\x1b[33m",
    orange: "\x1b[38;5;208m",
    reset: "\x1b[0m",
};

const PLAIN: Style = Style {
    bold: "",
    dim: "",
    red: "",
    green: "",
    yellow: "",
    orange: "",
    reset: "",
};

fn style() -> &'static Style {
    if std::env::var_os("NO_COLOR").is_some() {
        &PLAIN
    } else {
        &COLOR
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let res = match cli.cmd {
        Commands::Evaluate {
            electricity,
            water,
            paper,
            waste,
            diary,
            policy,
            reduce_electricity,
            reduce_water,
            reduce_paper,
            reduce_waste,
            min_score,
            strict,
            out,
            config,
        } => {
            let cfg = load_config(config.as_deref());
            let policy = policy
                .map(ScoringPolicy::from)
                .or(cfg.policy)
                .unwrap_or_default();
            let strict = strict || cfg.strict.unwrap_or(false);
            let min_score = min_score.or(cfg.min_score);
            let reductions = resolve_reductions(
                reduce_electricity,
                reduce_water,
                reduce_paper,
                reduce_waste,
                cfg.reductions,
            );
            let flags = [electricity, water, paper, waste];
            let consumption = resolve_consumption(&flags, cfg.defaults);

            let opts = EvaluateOptions {
                policy,
                strict,
                reductions,
                min_score,
                ..EvaluateOptions::default()
            };
            run_evaluate(diary.as_deref(), consumption, &opts, &out)
        }
        Commands::Quick {
            electricity,
            water,
            waste,
        } => run_quick(electricity, water, waste),
        Commands::Chemistry {
            amount,
            water_body,
            pollutant,
        } => run_chemistry(amount, &water_body, &pollutant),
        Commands::Limits {
            daily_increase,
            days,
            limit,
        } => run_limits(daily_increase, days, limit),
    };

    match res {
        Ok(code) => code,
        Err(e) => {
            let s = style();
            eprintln!(
                "{}{red}error:{reset} {:#}",
                s.bold,
                e,
                red = s.red,
                reset = s.reset
            );
            std::process::ExitCode::from(1)
        }
    }
}

fn print_banner() {
    let s = style();
    eprintln!(
        "\n  {bold}eco{reset}{orange}|{reset}{dim}sim{reset}  {dim}eco-impact simulator{reset}\n",
        bold = s.bold,
        orange = s.orange,
        dim = s.dim,
        reset = s.reset,
    );
}

fn grade_color(grade: Grade) -> &'static str {
    let s = style();
    match grade {
        Grade::A | Grade::B => s.green,
        Grade::C | Grade::D => s.yellow,
        Grade::F => s.red,
    }
}

fn severity_color(severity: Severity) -> &'static str {
    let s = style();
    match severity {
        Severity::Safe => s.green,
        Severity::Moderate => s.yellow,
        Severity::Dangerous => s.orange,
        Severity::Critical => s.red,
    }
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| {
            eprintln!(
                "{}{}warning:{} failed to load config {}: {}",
                style().bold,
                style().yellow,
                style().reset,
                p.display(),
                e
            );
            Config::default()
        }),
        None => Config::discover().unwrap_or_default(),
    }
}

/// Per-field precedence: explicit flag, then config default, then the
/// built-in default record.
fn resolve_consumption(
    flags: &[Option<f64>; 4],
    defaults: Option<ResourceConsumption>,
) -> ResourceConsumption {
    let defaults = defaults.unwrap_or(DEFAULT_RESOURCES);
    let mut consumption = defaults;
    for (resource, flag) in Resource::ALL.iter().zip(flags) {
        if let Some(v) = flag {
            consumption.set(*resource, *v);
        }
    }
    consumption
}

/// Any explicit reduction flag switches the what-if on, with unset
/// resources left at 0%; otherwise config reductions apply as a whole.
fn resolve_reductions(
    electricity: Option<f64>,
    water: Option<f64>,
    paper: Option<f64>,
    waste: Option<f64>,
    from_config: Option<ResourceConsumption>,
) -> Option<ResourceConsumption> {
    if electricity.is_none() && water.is_none() && paper.is_none() && waste.is_none() {
        return from_config;
    }
    Some(ResourceConsumption {
        electricity: electricity.unwrap_or(0.0),
        water: water.unwrap_or(0.0),
        paper: paper.unwrap_or(0.0),
        waste: waste.unwrap_or(0.0),
    })
}

fn warn_out_of_range(consumption: &ResourceConsumption) {
    let s = style();
    for resource in Resource::ALL {
        let range = input_range(resource);
        let value = consumption.get(resource);
        if value < range.min || value > range.max {
            eprintln!(
                "{}{}warning:{} {} = {} is outside the typical range {}..{}",
                s.bold,
                s.yellow,
                s.reset,
                resource.key(),
                value,
                range.min,
                range.max
            );
        }
    }
}

fn print_report(report: &Report, out: &Path) {
    let s = style();
    let gc = grade_color(report.score.grade);

    eprintln!(
        "  {dim}score            {reset}{gc}{bold}{}{reset}",
        report.score.score,
        dim = s.dim,
        gc = gc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}grade            {reset}{gc}{bold}{:?}{reset} {dim}({}){reset}",
        report.score.grade,
        report.score.grade.label(),
        dim = s.dim,
        gc = gc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}carbon_footprint {reset}{bold}{:.2} kg CO2/day{reset}",
        report.score.carbon_footprint,
        dim = s.dim,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}monthly CO2      {reset}{bold}{:.2} kg{reset}",
        report.monthly.total_co2,
        dim = s.dim,
        bold = s.bold,
        reset = s.reset
    );

    if let Some(w) = &report.what_if {
        eprintln!(
            "  {dim}what-if savings  {reset}{bold}{:.2} kg/day ({}%){reset}",
            w.savings.co2_reduction,
            w.savings.percentage_improvement,
            dim = s.dim,
            bold = s.bold,
            reset = s.reset
        );
    }

    eprintln!();
    eprintln!(
        "  {dim}\u{2192} {}{reset}",
        out.join("report.json").display(),
        dim = s.dim,
        reset = s.reset
    );
    eprintln!(
        "  {dim}\u{2192} {}{reset}",
        out.join("report.md").display(),
        dim = s.dim,
        reset = s.reset
    );
    eprintln!();
}

fn run_evaluate(
    diary: Option<&Path>,
    consumption: ResourceConsumption,
    opts: &EvaluateOptions,
    out: &Path,
) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let report = match diary {
        Some(dir) => evaluate_diary_dir(dir, opts)?,
        None => {
            warn_out_of_range(&consumption);
            evaluate(&consumption, None, opts)
        }
    };

    std::fs::create_dir_all(out).with_context(|| format!("create out dir {}", out.display()))?;

    let json_path = out.join("report.json");
    let md_path = out.join("report.md");

    let json = serde_json::to_vec_pretty(&report).context("serialize report json")?;
    std::fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;

    let md = report.to_markdown();
    std::fs::write(&md_path, md).with_context(|| format!("write {}", md_path.display()))?;

    // Machine-parseable line on stdout
    println!(
        "score={} grade={:?} carbon_footprint={:.2}",
        report.score.score, report.score.grade, report.score.carbon_footprint
    );

    // Human-readable output on stderr
    print_report(&report, out);

    let exit = match &report.gate {
        Some(g) if !g.pass => {
            eprintln!(
                "  {red}{bold}GATE FAILED{reset}  {dim}({}){reset}",
                g.reason,
                red = s.red,
                bold = s.bold,
                dim = s.dim,
                reset = s.reset,
            );
            std::process::ExitCode::from(2)
        }
        _ => {
            eprintln!(
                "  {green}{bold}PASS{reset}",
                green = s.green,
                bold = s.bold,
                reset = s.reset
            );
            std::process::ExitCode::from(0)
        }
    };

    eprintln!();

    Ok(exit)
}

fn run_quick(electricity: f64, water: f64, waste: f64) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let input = ResourceConsumption {
        electricity,
        water,
        paper: 0.0,
        waste,
    };
    let score = eco_score_with(ScoringPolicy::WeightedSum, &input);
    let gc = grade_color(score.grade);

    println!("score={} grade={:?}", score.score, score.grade);

    eprintln!(
        "  {dim}impact score {reset}{gc}{bold}{}{reset} {dim}(lower is better){reset}",
        score.score,
        dim = s.dim,
        gc = gc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {dim}grade        {reset}{gc}{bold}{:?}{reset}",
        score.grade,
        dim = s.dim,
        gc = gc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!();

    Ok(std::process::ExitCode::from(0))
}

fn run_chemistry(
    amount: f64,
    water_body: &str,
    pollutant: &str,
) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let result = concentration(amount, water_body, pollutant);
    let sc = severity_color(result.severity);

    println!(
        "concentration={} severity={:?}",
        result.concentration, result.severity
    );

    eprintln!(
        "  {dim}concentration {reset}{bold}{:.4} g/L{reset}",
        result.concentration,
        dim = s.dim,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!(
        "  {sc}{bold}{:?}{reset}  {}",
        result.severity,
        result.warning,
        sc = sc,
        bold = s.bold,
        reset = s.reset
    );
    eprintln!();

    Ok(std::process::ExitCode::from(0))
}

fn run_limits(daily_increase: f64, days: u32, limit: f64) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let series = project_cumulative(daily_increase, days, limit);
    let last = series.data.last().copied().unwrap_or(0.0);

    match series.days_to_limit {
        Some(day) => println!("days_to_limit={day} final={last}"),
        None => println!("days_to_limit=never final={last}"),
    }

    match series.days_to_limit {
        Some(day) => eprintln!(
            "  {red}{bold}limit {} crossed on day {}{reset}",
            series.limit,
            day,
            red = s.red,
            bold = s.bold,
            reset = s.reset
        ),
        None => eprintln!(
            "  {green}{bold}limit {} never reached in {} days{reset}",
            series.limit,
            days,
            green = s.green,
            bold = s.bold,
            reset = s.reset
        ),
    }
    eprintln!(
        "  {dim}cumulative total after {} days: {}{reset}",
        days,
        last,
        dim = s.dim,
        reset = s.reset
    );
    eprintln!();

    Ok(std::process::ExitCode::from(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn grade_color_bands() {
        assert_eq!(grade_color(Grade::A), style().green);
        assert_eq!(grade_color(Grade::C), style().yellow);
        assert_eq!(grade_color(Grade::F), style().red);
    }

    #[test]
    fn severity_color_bands() {
        assert_eq!(severity_color(Severity::Safe), style().green);
        assert_eq!(severity_color(Severity::Critical), style().red);
    }

    #[test]
    #[serial]
    fn style_respects_no_color() {
        std::env::set_var("NO_COLOR", "1");
        assert_eq!(style().bold, "");
        std::env::remove_var("NO_COLOR");
        assert_ne!(style().bold, "");
    }

    #[test]
    fn resolve_consumption_prefers_flags_over_config() {
        let cfg_defaults = ResourceConsumption {
            electricity: 8.0,
            water: 120.0,
            paper: 30.0,
            waste: 0.8,
        };
        let flags = [Some(5.0), None, None, Some(2.0)];
        let c = resolve_consumption(&flags, Some(cfg_defaults));
        assert_eq!(c.electricity, 5.0);
        assert_eq!(c.water, 120.0);
        assert_eq!(c.paper, 30.0);
        assert_eq!(c.waste, 2.0);
    }

    #[test]
    fn resolve_consumption_falls_back_to_builtin_defaults() {
        let c = resolve_consumption(&[None, None, None, None], None);
        assert_eq!(c, DEFAULT_RESOURCES);
    }

    #[test]
    fn explicit_reduction_flags_override_config() {
        let from_config = Some(ResourceConsumption {
            electricity: 10.0,
            water: 10.0,
            paper: 10.0,
            waste: 10.0,
        });
        let r = resolve_reductions(Some(25.0), None, None, None, from_config).unwrap();
        assert_eq!(r.electricity, 25.0);
        assert_eq!(r.water, 0.0);

        let r = resolve_reductions(None, None, None, None, from_config).unwrap();
        assert_eq!(r.paper, 10.0);
    }
}
