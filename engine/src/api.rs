use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::expected::Expectations;
use crate::sim::{attack_mean, hit_rate, mean_damage};
use crate::{CombatStats, DamageKind, Dice, Evaluation, SimError, Strategy};

pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

fn default_iterations() -> u64 {
    DEFAULT_ITERATIONS
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Base seed; estimate `i` uses `seed + i`. Drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, seed: None, parallel: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub observed: f64,
    pub expected: f64,
}

impl Estimate {
    /// |observed - expected| / expected.
    pub fn relative_error(&self) -> f64 {
        if self.expected == 0.0 {
            self.observed.abs()
        } else {
            ((self.observed - self.expected) / self.expected).abs()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    pub seed: u64,
    pub iterations: u64,
    pub stats: CombatStats,
    pub bolt_per_hit: Estimate,
    pub sneak_per_hit: Estimate,
    pub hit_probability: Estimate,
    pub sneak_round_ratio: Estimate,
    pub standard: StrategyResult,
    pub sneak: StrategyResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub evaluation: Evaluation,
    pub per_action: Estimate,
}

/// Run one strategy from a fixed seed.
pub fn evaluate_strategy(strategy: Strategy, iterations: u64, seed: u64) -> Result<Evaluation> {
    if iterations == 0 {
        bail!(SimError::ZeroIterations);
    }
    let mut dice = Dice::from_seed(seed);
    Ok(Evaluation::run(&mut dice, &CombatStats::CROSSBOW_ROGUE, &strategy, iterations))
}

/// Baseline estimates plus both strategy evaluations, each on its own seeded dice.
pub fn run_report(cfg: ReportConfig) -> Result<Report> {
    if cfg.iterations == 0 {
        bail!(SimError::ZeroIterations);
    }
    let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);
    let stats = CombatStats::CROSSBOW_ROGUE;
    let exp = Expectations::for_stats(&stats);
    let n = cfg.iterations;
    let dice_for = |offset: u64| Dice::from_seed(seed.wrapping_add(offset));

    info!(seed, iterations = n, parallel = cfg.parallel, "report start");

    let baselines = || {
        let da = mean_damage(&mut dice_for(0), &stats, DamageKind::Bolt, n);
        let dsa = mean_damage(&mut dice_for(1), &stats, DamageKind::Sneak, n);
        let ph = hit_rate(&mut dice_for(2), &stats, n);
        let d_lh = attack_mean(&mut dice_for(3), &stats, DamageKind::Sneak, n);
        (da, dsa, ph, d_lh)
    };
    let strategies = || {
        let run = |strategy: Strategy, offset: u64| {
            Evaluation::run(&mut dice_for(offset), &stats, &strategy, n)
        };
        if cfg.parallel {
            rayon::join(|| run(Strategy::Standard, 4), || run(Strategy::Sneak, 5))
        } else {
            (run(Strategy::Standard, 4), run(Strategy::Sneak, 5))
        }
    };

    let ((da, dsa, ph, d_lh), (standard, sneak)) = if cfg.parallel {
        rayon::join(baselines, strategies)
    } else {
        (baselines(), strategies())
    };
    info!(
        standard = standard.per_action(),
        sneak = sneak.per_action(),
        "report done"
    );

    let ratio = if dsa == 0.0 { 0.0 } else { d_lh / dsa };
    Ok(Report {
        seed,
        iterations: n,
        stats,
        bolt_per_hit: Estimate { observed: da, expected: exp.bolt_mean },
        sneak_per_hit: Estimate { observed: dsa, expected: exp.sneak_mean },
        hit_probability: Estimate { observed: ph, expected: exp.hit_probability },
        sneak_round_ratio: Estimate { observed: ratio, expected: exp.sneak_round_ratio },
        standard: StrategyResult {
            strategy: Strategy::Standard,
            evaluation: standard,
            per_action: Estimate {
                observed: standard.per_action(),
                expected: exp.standard_per_action,
            },
        },
        sneak: StrategyResult {
            strategy: Strategy::Sneak,
            evaluation: sneak,
            per_action: Estimate {
                observed: sneak.per_action(),
                expected: exp.sneak_per_action,
            },
        },
    })
}
