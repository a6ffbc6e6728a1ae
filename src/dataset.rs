use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geometry::GRAPH_SIZE;
use crate::math::Point2;

/// True class of a data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(alias = "a")]
    Pass,
    #[serde(alias = "b")]
    Fail,
}

impl Label {
    #[must_use]
    pub fn is_pass(self) -> bool {
        self == Label::Pass
    }

    #[must_use]
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Label::Pass
        } else {
            Label::Fail
        }
    }
}

/// A data point in graph space with its true label.
///
/// Deserializes from either `{x, y, label}` or the level-file field names
/// `{study_time, screen_time, type}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    #[serde(alias = "study_time")]
    pub x: f64,
    #[serde(alias = "screen_time")]
    pub y: f64,
    #[serde(alias = "type")]
    pub label: Label,
}

impl LabeledPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, label: Label) -> Self {
        Self { x, y, label }
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// Parameters of [`generate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetParams {
    pub samples: usize,
    pub mean_x: f64,
    pub std_x: f64,
    pub mean_y: f64,
    pub std_y: f64,
    /// Share of uniformly placed, randomly labeled points.
    pub outlier_ratio: f64,
    pub pass_threshold: f64,
    pub seed: u64,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            samples: 100,
            mean_x: 250.0,
            std_x: 80.0,
            mean_y: 250.0,
            std_y: 80.0,
            outlier_ratio: 0.05,
            pass_threshold: 300.0,
            seed: 42,
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Box-Muller sample from `N(mean, std)`.
fn normal(rng: &mut StdRng, mean: f64, std: f64) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std * z
}

/// Generates a reproducible dataset.
///
/// The first `floor(outlier_ratio * samples)` points are uniform over the
/// square with a fair-coin label. The rest are Gaussian, clamped to the
/// square, and pass with probability
/// `sigmoid((x - y - (pass_threshold - 250)) / 40)`.
#[must_use]
pub fn generate(params: &DatasetParams) -> Vec<LabeledPoint> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let outliers = (params.outlier_ratio.clamp(0.0, 1.0) * params.samples as f64) as usize;

    (0..params.samples)
        .map(|i| {
            if i < outliers {
                let x = rng.gen_range(0.0..=GRAPH_SIZE);
                let y = rng.gen_range(0.0..=GRAPH_SIZE);
                return LabeledPoint::new(x, y, Label::from_pass(rng.gen_bool(0.5)));
            }
            let x = normal(&mut rng, params.mean_x, params.std_x).clamp(0.0, GRAPH_SIZE);
            let y = normal(&mut rng, params.mean_y, params.std_y).clamp(0.0, GRAPH_SIZE);
            let p_pass = sigmoid((x - y - (params.pass_threshold - 250.0)) / 40.0);
            LabeledPoint::new(x, y, Label::from_pass(rng.gen::<f64>() < p_pass))
        })
        .collect()
}
