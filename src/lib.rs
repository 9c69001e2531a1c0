//! Football Match Outcome Predictor
//!
//! A prediction service combining a pre-trained outcome classifier with
//! features derived from the historical fixture table.
//!
//! ## Architecture
//!
//! ```text
//! Fixture CSV ──▶ History Normalizer ──▶ LoadedContext (immutable, built once)
//!                                              │
//! Request ──▶ Resolver(home, away) ──▶ Head-to-Head ──▶ Feature Assembler ──▶ Model
//!                                              │
//!                                      PredictionResponse
//! ```

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod features;
pub mod history;
pub mod model;
pub mod resolver;
pub mod service;
pub mod types;

#[cfg(test)]
mod config_tests;
