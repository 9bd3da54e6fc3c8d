//! Bernoulli naive Bayes over binary symptom features.
//!
//! Per class `c` and feature `j`, with `n_c` training rows of class `c` of
//! which `n_cj` have feature `j` set:
//!
//! ```text
//! P(x_j = 1 | c) = (n_cj + 1) / (n_c + 2)      (Laplace smoothing)
//! log P(c | x)  ∝ log P(c) + Σ_j log P(x_j | c)
//! ```
//!
//! Class probabilities are the log posteriors normalised with a
//! max-subtracted softmax.

use std::collections::BTreeMap;

use super::classification::ClassificationResult;
use super::feature_vector::FeatureVector;
use super::reference::LabelledRow;

/// Trained model. Immutable after [`NaiveBayesModel::fit`].
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    /// Class labels, alphabetical.
    classes: Vec<String>,
    log_prior: Vec<f64>,
    /// `log P(x_j = 1 | c)` per class, per feature.
    log_present: Vec<Vec<f64>>,
    /// `log P(x_j = 0 | c)` per class, per feature.
    log_absent: Vec<Vec<f64>>,
    feature_count: usize,
}

impl NaiveBayesModel {
    /// Trains on labelled rows. Returns `None` when there is nothing to learn
    /// from.
    pub fn fit(rows: &[LabelledRow], feature_count: usize) -> Option<Self> {
        let rows: Vec<&LabelledRow> = rows
            .iter()
            .filter(|row| row.features.len() == feature_count)
            .collect();
        if rows.is_empty() || feature_count == 0 {
            return None;
        }

        // class -> (row count, per-feature set counts)
        let mut counts: BTreeMap<&str, (usize, Vec<usize>)> = BTreeMap::new();
        for row in &rows {
            let entry = counts
                .entry(row.condition.as_str())
                .or_insert_with(|| (0, vec![0; feature_count]));
            entry.0 += 1;
            for (slot, set) in entry.1.iter_mut().enumerate() {
                if row.features.is_set(slot) {
                    *set += 1;
                }
            }
        }

        let total = rows.len() as f64;
        let mut classes = Vec::with_capacity(counts.len());
        let mut log_prior = Vec::with_capacity(counts.len());
        let mut log_present = Vec::with_capacity(counts.len());
        let mut log_absent = Vec::with_capacity(counts.len());

        for (class, (n_c, set_counts)) in counts {
            let denominator = n_c as f64 + 2.0;
            let p: Vec<f64> = set_counts
                .iter()
                .map(|n_cj| (*n_cj as f64 + 1.0) / denominator)
                .collect();

            classes.push(class.to_string());
            log_prior.push((n_c as f64 / total).ln());
            log_present.push(p.iter().map(|p| p.ln()).collect());
            log_absent.push(p.iter().map(|p| (1.0 - p).ln()).collect());
        }

        Some(Self {
            classes,
            log_prior,
            log_present,
            log_absent,
            feature_count,
        })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Class probabilities in class order.
    pub fn predict_proba(&self, features: &FeatureVector) -> Vec<f64> {
        let log_posterior: Vec<f64> = (0..self.classes.len())
            .map(|c| {
                let likelihood: f64 = (0..self.feature_count)
                    .map(|j| {
                        if features.is_set(j) {
                            self.log_present[c][j]
                        } else {
                            self.log_absent[c][j]
                        }
                    })
                    .sum();
                self.log_prior[c] + likelihood
            })
            .collect();

        let max = log_posterior
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = log_posterior.iter().map(|x| (x - max).exp()).collect();
        let sum: f64 = exp.iter().sum();
        exp.into_iter().map(|e| e / sum).collect()
    }

    /// Most probable class and its probability. Ties go to the class that
    /// sorts first.
    pub fn predict(&self, features: &FeatureVector) -> ClassificationResult {
        let proba = self.predict_proba(features);

        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }

        ClassificationResult::from_model(self.classes[best].clone(), proba[best])
    }
}
