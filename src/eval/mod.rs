//! Evaluation module for candidate placements
//!
//! This module provides pattern scoring for a single hypothetical stone.
//! The evaluation considers:
//! - Illegal targets (occupied, forbidden for Black)
//! - Immediate wins
//! - Run length and open ends on each axis
//! - Threat levels used to weight defense against attack

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{line_score, threat_level, weighted, weights_for_threat, PatternScore};
