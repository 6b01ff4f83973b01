use clap::{Parser, Subcommand, ValueEnum};
use engine::api::{self, Estimate, Report, ReportConfig, DEFAULT_ITERATIONS};
use engine::expected::Expectations;
use engine::{CombatStats, Dice, Strategy};
use tracing::Level;

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Standard,
    Sneak,
}

#[derive(Subcommand)]
enum Cmd {
    /// Full report: baseline estimates, then both strategies
    Report {
        /// Actions simulated per estimate
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,
        /// RNG base seed (random if omitted; printed either way)
        #[arg(long)]
        seed: Option<u64>,
        /// Run the estimates on a thread pool
        #[arg(long, default_value_t = false)]
        parallel: bool,
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Damage per action for a single strategy
    Evaluate {
        #[arg(long, value_enum)]
        strategy: StrategyArg,
        /// Actions to simulate
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Roll a die multiple times
    Roll {
        /// Faces on the die
        #[arg(long, default_value_t = 20)]
        sides: i32,
        /// Number of rolls
        #[arg(long, default_value_t = 5)]
        rolls: u32,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Closed-form expectations only, no simulation
    Expected,
}

#[derive(Parser)]
#[command(name = "sneakdps")]
#[command(about = "Standard attacks vs hide-and-sneak-attack, damage per action")]
struct Cli {
    /// Trace every round and attack roll to stderr
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_strategy(s: StrategyArg) -> Strategy {
    match s {
        StrategyArg::Standard => Strategy::Standard,
        StrategyArg::Sneak => Strategy::Sneak,
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Cmd::Report {
            iterations,
            seed,
            parallel,
            json,
        } => {
            let report = api::run_report(ReportConfig {
                iterations,
                seed,
                parallel,
            })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Cmd::Evaluate {
            strategy,
            iterations,
            seed,
        } => {
            let strategy = to_strategy(strategy);
            let eval = api::evaluate_strategy(strategy, iterations, seed)?;
            println!(
                "{} dmg/action: {:.4} ({} attacks, {} damage over {} actions)",
                strategy,
                eval.per_action(),
                eval.attacks,
                eval.total_damage,
                eval.iterations
            );
        }
        Cmd::Roll { sides, rolls, seed } => {
            if sides < 1 {
                anyhow::bail!("a die needs at least one side, got {}", sides);
            }
            let mut dice = Dice::from_seed(seed);
            for _ in 0..rolls {
                println!("{}", dice.roll(sides));
            }
        }
        Cmd::Expected => print_expected(&Expectations::for_stats(&CombatStats::CROSSBOW_ROGUE)),
    }
    Ok(())
}

fn line(label: &str, est: Estimate, precision: usize, suffix: &str) {
    println!(
        "{} {:.prec$} (exp {}{})",
        label,
        est.observed,
        trim_float(est.expected),
        suffix,
        prec = precision
    );
}

fn print_report(r: &Report) {
    println!("seed: {}  iterations: {}", r.seed, r.iterations);
    line("BOLT dmg/hit (Da):", r.bolt_per_hit, 2, "");
    line("SNEAK dmg/hit (Dsa):", r.sneak_per_hit, 2, "");
    line("Ph ~=", r.hit_probability, 4, "");
    line("D(LH) / Dsa ~=", r.sneak_round_ratio, 4, "");
    line("Standard dmg/action:", r.standard.per_action, 4, "/action");
    line("Sneak attack dmg/action:", r.sneak.per_action, 4, "/action");
}

fn print_expected(e: &Expectations) {
    println!("bolt dmg/hit:            {}", trim_float(e.bolt_mean));
    println!("sneak dmg/hit:           {}", trim_float(e.sneak_mean));
    println!("hit probability:         {}", trim_float(e.hit_probability));
    println!("crit probability:        {}", trim_float(e.crit_probability));
    println!("hide probability:        {}", trim_float(e.hide_probability));
    println!("D(LH) / Dsa:             {}", trim_float(e.sneak_round_ratio));
    println!("standard dmg/action:     {}", trim_float(e.standard_per_action));
    println!("sneak attack dmg/action: {}", trim_float(e.sneak_per_action));
}

/// 1.925 rather than 1.9250000000000003.
fn trim_float(v: f64) -> String {
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
