//! Prediction orchestrator
//!
//! Owns the service lifecycle (`Uninitialized → Ready | Unavailable`) and
//! composes resolver, head-to-head analysis, feature assembly and the
//! classifier into one request/response cycle. All loaded state is built
//! once and immutable afterwards, so a `PredictorService` can be shared
//! read-only across any number of threads.


use serde::Serialize;

use crate::analysis;
use crate::config::Config;
use crate::data;
use crate::error::{LoadError, PredictorError, Result};
use crate::features;
use crate::history::HistoryTable;
use crate::model::{LinearModel, OutcomeModel};
use crate::resolver;
use crate::types::{
    MatchResult, OutcomeProbabilities, PredictionRequest, PredictionResponse, RawMatch,
};

/// Everything the request path reads: raw fixture rows, the normalized
/// history table and the classifier. Built once at startup, never mutated.
pub struct LoadedContext {
    pub raw_matches: Vec<RawMatch>,
    pub history: HistoryTable,
    pub model: Box<dyn OutcomeModel>,
}

enum State {
    Ready(LoadedContext),
    Unavailable { reason: String },
}

/// Service health as reported to operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Health {
    Ready,
    Unavailable { reason: String },
}

pub struct PredictorService {
    state: State,
    min_score: f64,
}

impl PredictorService {
    /// One-time startup load. Never panics and never returns an error:
    /// any failure leaves the service fully in `Unavailable`, where every
    /// request short-circuits with a service-unavailable error.
    pub fn load(config: &Config) -> Self {
        match Self::try_load(config) {
            Ok(context) => {
                tracing::info!(model = context.model.name(), "prediction service ready");
                Self {
                    state: State::Ready(context),
                    min_score: config.resolver.min_score,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "startup load failed, service unavailable");
                Self {
                    state: State::Unavailable {
                        reason: e.to_string(),
                    },
                    min_score: config.resolver.min_score,
                }
            }
        }
    }

    fn try_load(config: &Config) -> std::result::Result<LoadedContext, LoadError> {
        let raw_matches = data::load_matches(&config.data.matches_path)?;
        let model = LinearModel::load(&config.data.model_path)?;
        let history = HistoryTable::build(&raw_matches);
        Ok(LoadedContext {
            raw_matches,
            history,
            model: Box::new(model),
        })
    }

    /// Assemble a service from already-loaded parts.
    pub fn from_parts(raw_matches: Vec<RawMatch>, model: Box<dyn OutcomeModel>, min_score: f64) -> Self {
        let history = HistoryTable::build(&raw_matches);
        Self {
            state: State::Ready(LoadedContext {
                raw_matches,
                history,
                model,
            }),
            min_score,
        }
    }

    /// Canonical roster, for operator tooling.
    pub fn roster(&self) -> Result<&[String]> {
        match &self.state {
            State::Ready(context) => Ok(context.history.roster()),
            State::Unavailable { reason } => Err(PredictorError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }

    pub fn health(&self) -> Health {
        match &self.state {
            State::Ready(_) => Health::Ready,
            State::Unavailable { reason } => Health::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// Full request cycle: resolve both teams, derive head-to-head, look up
    /// each side's latest record, assemble the feature row, run inference
    /// and map class probabilities back to named outcomes.
    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let context = match &self.state {
            State::Ready(context) => context,
            State::Unavailable { reason } => {
                return Err(PredictorError::Unavailable {
                    reason: reason.clone(),
                })
            }
        };

        let roster = context.history.roster();
        let home = resolver::resolve(&request.home_team, roster, self.min_score)
            .ok_or_else(|| PredictorError::TeamNotFound {
                input: request.home_team.clone(),
            })?
            .to_string();
        let away = resolver::resolve(&request.away_team, roster, self.min_score)
            .ok_or_else(|| PredictorError::TeamNotFound {
                input: request.away_team.clone(),
            })?
            .to_string();

        let head_to_head = analysis::head_to_head(&home, &away, &context.raw_matches);

        let home_latest = context.history.latest(&home).ok_or_else(|| {
            PredictorError::InsufficientHistory { team: home.clone() }
        })?;
        let away_latest = context.history.latest(&away).ok_or_else(|| {
            PredictorError::InsufficientHistory { team: away.clone() }
        })?;

        let row = features::assemble(
            home_latest,
            away_latest,
            request.odds_home,
            request.odds_draw,
            request.odds_away,
            context.model.feature_names(),
        )?;
        let class_probs = context.model.predict(&row)?;

        // Classes the artifact does not emit default to 0; the triple is
        // deliberately not renormalized.
        let mut prediction = OutcomeProbabilities {
            home_team_win_prob: 0.0,
            draw_prob: 0.0,
            away_team_win_prob: 0.0,
        };
        for (outcome, prob) in class_probs {
            match outcome {
                MatchResult::Win => prediction.home_team_win_prob = prob,
                MatchResult::Draw => prediction.draw_prob = prob,
                MatchResult::Loss => prediction.away_team_win_prob = prob,
            }
        }

        tracing::debug!(
            home = %home,
            away = %away,
            home_win = prediction.home_team_win_prob,
            draw = prediction.draw_prob,
            away_win = prediction.away_team_win_prob,
            "prediction served"
        );

        Ok(PredictionResponse {
            found_home_team: home,
            found_away_team: away,
            prediction,
            head_to_head,
        })
    }
}
