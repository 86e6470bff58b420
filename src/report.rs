//! Aggregated evaluation report over a set of eval cases.

use crate::dataset::EvalCase;
use crate::error::Result;
use crate::metrics::{
    mean_average_precision, mean_reciprocal_rank, ndcg_at_k, precision_at_k, recall_at_k,
};
use serde::Serialize;

/// Mean metrics across all cases: recall/precision/NDCG at each requested
/// cutoff, plus MAP and MRR at a single aggregate cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    /// (cutoff, mean recall) per requested cutoff
    pub recall: Vec<(usize, f32)>,
    /// (cutoff, mean precision) per requested cutoff
    pub precision: Vec<(usize, f32)>,
    /// (cutoff, mean NDCG) per requested cutoff
    pub ndcg: Vec<(usize, f32)>,
    /// Mean Average Precision at `agg_k`
    pub map: f32,
    /// Mean Reciprocal Rank at `agg_k`
    pub mrr: f32,
    /// Cutoff used for MAP and MRR
    pub agg_k: usize,
    /// Number of cases evaluated
    pub num_queries: usize,
}

impl EvalReport {
    /// Compute the report. Per-cutoff metrics are averaged over all cases;
    /// MAP and MRR run the whole batch at `agg_k`. Degenerate cases (empty
    /// ground truth, no hits for AP) surface as NaN in the affected means,
    /// per the metric contracts.
    pub fn compute(cases: &[EvalCase], k_values: &[usize], agg_k: usize) -> Result<Self> {
        let n = cases.len() as f32;

        let mean_over = |f: &dyn Fn(&EvalCase) -> f32| -> f32 {
            cases.iter().map(f).sum::<f32>() / n
        };

        let recall = k_values
            .iter()
            .map(|&k| (k, mean_over(&|c| recall_at_k(&c.relevant, &c.ranked, k))))
            .collect();
        let precision = k_values
            .iter()
            .map(|&k| (k, mean_over(&|c| precision_at_k(&c.relevant, &c.ranked, k))))
            .collect();
        let ndcg = k_values
            .iter()
            .map(|&k| (k, mean_over(&|c| ndcg_at_k(&c.relevant, &c.ranked, k))))
            .collect();

        let actuals: Vec<Vec<u64>> = cases.iter().map(|c| c.relevant.clone()).collect();
        let predicteds: Vec<Vec<u64>> = cases.iter().map(|c| c.ranked.clone()).collect();
        let map = mean_average_precision(&actuals, &predicteds, agg_k)?;
        let mrr = mean_reciprocal_rank(&actuals, &predicteds, agg_k)?;

        Ok(Self {
            recall,
            precision,
            ndcg,
            map,
            mrr,
            agg_k,
            num_queries: cases.len(),
        })
    }
}

impl std::fmt::Display for EvalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Evaluation Results ({} queries) ===", self.num_queries)?;
        writeln!(f, "MAP@{}: {:.4}", self.agg_k, self.map)?;
        writeln!(f, "MRR@{}: {:.4}", self.agg_k, self.mrr)?;
        for (k, v) in &self.recall {
            writeln!(f, "Recall@{}:    {:.4}", k, v)?;
        }
        for (k, v) in &self.precision {
            writeln!(f, "Precision@{}: {:.4}", k, v)?;
        }
        for (k, v) in &self.ndcg {
            writeln!(f, "NDCG@{}:      {:.4}", k, v)?;
        }
        Ok(())
    }
}
