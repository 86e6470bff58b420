//! Evaluation CLI: score a JSON case file and report recall/precision/NDCG,
//! MAP, and MRR.

use clap::Parser;
use rankeval::{load_cases, EvalReport};
use std::path::PathBuf;

/// Evaluation harness: load cases and report metrics.
#[derive(Parser, Debug)]
#[command(name = "eval")]
struct Args {
    /// Path to eval cases JSON (default: eval_cases.json).
    #[arg(long, default_value = "eval_cases.json")]
    cases: PathBuf,

    /// Cutoffs for recall/precision/NDCG (repeatable).
    #[arg(long = "k", default_values_t = [5, 10])]
    k_values: Vec<usize>,

    /// Cutoff for MAP and MRR (default: largest --k).
    #[arg(long)]
    agg_k: Option<usize>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Fail (exit 1) if MRR falls below this threshold.
    #[arg(long)]
    min_mrr: Option<f32>,

    /// Fail (exit 1) if MAP falls below this threshold.
    #[arg(long)]
    min_map: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cases = load_cases(&args.cases)?;
    let agg_k = args
        .agg_k
        .or_else(|| args.k_values.iter().copied().max())
        .unwrap_or(10);

    // average_precision indexes the first agg_k entries, so every ranked
    // list must reach the aggregate cutoff
    if let Some(short) = cases.iter().find(|c| c.ranked.len() < agg_k) {
        anyhow::bail!(
            "case '{}' has {} ranked items, fewer than agg_k={}",
            short.name,
            short.ranked.len(),
            agg_k
        );
    }

    log::info!(
        "evaluating {} cases at k={:?}, agg_k={}",
        cases.len(),
        args.k_values,
        agg_k
    );

    let report = EvalReport::compute(&cases, &args.k_values, agg_k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for case in &cases {
            println!(
                "  {} (RR@{}: {:.2})",
                case.name,
                agg_k,
                rankeval::reciprocal_rank(&case.relevant, &case.ranked, agg_k)
            );
        }
        println!();
        print!("{}", report);
    }

    let mrr_ok = args.min_mrr.map_or(true, |t| report.mrr >= t);
    let map_ok = args.min_map.map_or(true, |t| report.map >= t);
    if !(mrr_ok && map_ok) {
        log::error!(
            "metrics below threshold (MAP {:.4}, MRR {:.4})",
            report.map,
            report.mrr
        );
        std::process::exit(1);
    }
    Ok(())
}
