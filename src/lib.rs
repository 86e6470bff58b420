pub mod dataset;
pub mod error;
pub mod metrics;
pub mod report;

pub use dataset::{load_cases, EvalCase};
pub use error::{RankevalError, Result};
pub use metrics::{
    average_precision, mean_average_precision, mean_reciprocal_rank, ndcg_at_k, precision_at_k,
    recall_at_k, reciprocal_rank,
};
pub use report::EvalReport;
