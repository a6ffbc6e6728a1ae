use serde::{Deserialize, Serialize};

use super::{Outcome, PointClassifier};
use crate::dataset::LabeledPoint;
use crate::error::PartitionError;
use crate::geometry::{Boundary, BoundingSquare};
use crate::math::Point2;

/// Confusion-matrix tally. Serializes with `TP`/`TN`/`FP`/`FN` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    #[serde(rename = "TP")]
    pub true_pos: usize,
    #[serde(rename = "TN")]
    pub true_neg: usize,
    #[serde(rename = "FP")]
    pub false_pos: usize,
    #[serde(rename = "FN")]
    pub false_neg: usize,
}

impl ConfusionCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::TruePositive => self.true_pos += 1,
            Outcome::TrueNegative => self.true_neg += 1,
            Outcome::FalsePositive => self.false_pos += 1,
            Outcome::FalseNegative => self.false_neg += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    /// `(TP + TN) / total`, or `None` for an empty tally.
    #[must_use]
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        Some((self.true_pos + self.true_neg) as f64 / total as f64)
    }
}

impl FromIterator<Outcome> for ConfusionCounts {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut counts = Self::default();
        for outcome in iter {
            counts.record(outcome);
        }
        counts
    }
}

/// Folds a dataset through a classifier.
#[must_use]
pub fn tally(points: &[LabeledPoint], classifier: &PointClassifier) -> ConfusionCounts {
    points.iter().map(|p| classifier.classify(p)).collect()
}

/// Everything the tally depends on. The dataset itself is represented by a
/// caller-maintained version number.
#[derive(Debug, Clone, PartialEq)]
pub struct CountsKey {
    pub boundary: Boundary,
    pub reference: Point2,
    pub square: BoundingSquare,
    pub dataset_version: u64,
    pub reference_is_pass: Option<bool>,
}

/// Single-entry memo of the last tally.
#[derive(Debug, Clone, Default)]
pub struct CountsMemo {
    entry: Option<(CountsKey, Option<ConfusionCounts>)>,
}

impl CountsMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counts for `key`, recomputing only when the key changed.
    /// `Ok(None)` means no classification is possible yet.
    ///
    /// # Errors
    ///
    /// Propagates a [`PartitionError`] from building the classifier.
    pub fn counts(
        &mut self,
        key: CountsKey,
        dataset: &[LabeledPoint],
    ) -> Result<Option<ConfusionCounts>, PartitionError> {
        if let Some((cached, counts)) = &self.entry {
            if *cached == key {
                return Ok(*counts);
            }
        }
        let counts = PointClassifier::for_boundary(
            &key.boundary,
            &key.reference,
            &key.square,
            key.reference_is_pass,
        )?
        .map(|classifier| tally(dataset, &classifier));
        self.entry = Some((key, counts));
        Ok(counts)
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
