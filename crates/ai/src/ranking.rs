use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use cropwise_core::round_dp;

use crate::result::AiError;

/// Decimal places kept on reported probabilities.
const PROBABILITY_DECIMALS: u32 = 4;

/// One ranked crop suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop: String,
    pub probability: f64,
}

/// Select the `k` most probable labels, highest first.
///
/// Model:
/// - `probabilities[i]` belongs to `labels[i]`; lengths must match.
/// - `k` larger than the label count is clamped.
/// - Exact ties keep ascending class index order.
/// - Reported probabilities are rounded to 4 decimals after ranking.
///
/// Uses partial selection so only the selected `k` entries are sorted.
pub fn rank_top_k<S: AsRef<str>>(
    probabilities: &[f64],
    labels: &[S],
    k: usize,
) -> Result<Vec<Recommendation>, AiError> {
    if probabilities.len() != labels.len() {
        return Err(AiError::InputShape {
            probabilities: probabilities.len(),
            labels: labels.len(),
        });
    }

    if k == 0 {
        return Err(AiError::InvalidInput("k must be >= 1".to_string()));
    }

    let n = probabilities.len();
    let k = k.min(n);
    if k == 0 {
        return Ok(Vec::new());
    }

    let by_rank = |a: &usize, b: &usize| -> Ordering {
        rank_key(probabilities[*b])
            .total_cmp(&rank_key(probabilities[*a]))
            .then(a.cmp(b))
    };

    let mut indices: Vec<usize> = (0..n).collect();
    if k < n {
        indices.select_nth_unstable_by(k - 1, by_rank);
        indices.truncate(k);
    }
    // Index tie-break makes the order total, so an unstable sort is still deterministic.
    indices.sort_unstable_by(by_rank);

    Ok(indices
        .into_iter()
        .map(|i| Recommendation {
            crop: labels[i].as_ref().to_string(),
            probability: round_dp(probabilities[i], PROBABILITY_DECIMALS),
        })
        .collect())
}

// NaN sorts below every real probability; -0.0 ranks as 0.0.
fn rank_key(p: f64) -> f64 {
    if p.is_nan() { f64::NEG_INFINITY } else { p + 0.0 }
}
