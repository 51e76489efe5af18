//! Piste - Fencing tournament bookkeeping
//!
//! Immutable event snapshots (competitors, tournaments, combats), validated
//! operations that accumulate every broken rule, and a scoring engine that
//! folds a combat record into per-competitor standings.

pub mod core;
pub mod entity;
pub mod persistence;
pub mod scoring;
