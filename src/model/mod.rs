//! Outcome classifier capability
//!
//! The rest of the pipeline treats the classifier as opaque: it exposes its
//! expected feature names, in order, and maps a feature row to a probability
//! per outcome class. The shipped implementation is a multinomial logistic
//! regression deserialized from a JSON artifact exported at training time.

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LoadError, PredictorError, Result};
use crate::types::MatchResult;

/// Trait for pre-trained outcome classifiers.
///
/// Implementations are pure: no mutable state, no I/O after load. The
/// returned distribution covers only the classes the artifact was trained
/// with; callers default absent classes to 0.
pub trait OutcomeModel: Send + Sync {
    /// Expected feature names, in the exact column order of a feature row.
    fn feature_names(&self) -> &[String];

    /// Class probabilities for one feature row.
    fn predict(&self, row: &[f64]) -> Result<Vec<(MatchResult, f64)>>;

    /// Model name for logging.
    fn name(&self) -> &str;
}

/// Multinomial logistic regression loaded from a JSON artifact:
/// feature names, class labels, one coefficient vector per class, and
/// per-class intercepts.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    feature_names: Vec<String>,
    classes: Vec<String>,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearModel {
    pub fn load<P: AsRef<Path>>(path: P) -> std::result::Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let model: LinearModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate()?;
        tracing::info!(
            path = %path.as_ref().display(),
            features = model.feature_names.len(),
            classes = ?model.classes,
            "loaded classifier artifact"
        );
        Ok(model)
    }

    /// Shape and label checks; a bad artifact must fail the load, never a
    /// later request.
    pub fn validate(&self) -> std::result::Result<(), LoadError> {
        if self.classes.len() != self.coefficients.len()
            || self.classes.len() != self.intercepts.len()
        {
            return Err(LoadError::InvalidModel(format!(
                "classes/coefficients/intercepts lengths disagree: {}/{}/{}",
                self.classes.len(),
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        for (class, coefs) in self.classes.iter().zip(&self.coefficients) {
            if coefs.len() != self.feature_names.len() {
                return Err(LoadError::InvalidModel(format!(
                    "class {:?} has {} coefficients for {} features",
                    class,
                    coefs.len(),
                    self.feature_names.len()
                )));
            }
            if MatchResult::from_class_label(class).is_none() {
                return Err(LoadError::InvalidModel(format!(
                    "unknown class label {:?}",
                    class
                )));
            }
        }
        Ok(())
    }
}

impl OutcomeModel for LinearModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict(&self, row: &[f64]) -> Result<Vec<(MatchResult, f64)>> {
        if row.len() != self.feature_names.len() {
            return Err(PredictorError::Model(format!(
                "feature row has {} values, model expects {}",
                row.len(),
                self.feature_names.len()
            )));
        }

        let scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(coefs, intercept)| {
                intercept + coefs.iter().zip(row).map(|(c, x)| c * x).sum::<f64>()
            })
            .collect();

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(PredictorError::Model(
                "non-finite class score".to_string(),
            ));
        }

        // Softmax over the classes present in the artifact.
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();

        Ok(self
            .classes
            .iter()
            .zip(exps)
            .map(|(class, e)| {
                // Labels were validated at load.
                let outcome = MatchResult::from_class_label(class)
                    .unwrap_or(MatchResult::Draw);
                (outcome, e / total)
            })
            .collect())
    }

    fn name(&self) -> &str {
        "linear"
    }
}
