//! Decision Compass - Weighted-Scoring Decision Analysis Engine
//!
//! This crate implements a multi-criteria decision analysis engine:
//! options are scored against weighted criteria, ranked on a common
//! 0-10 scale, checked for ambiguous results (ties, equal weights,
//! close competition), and explained through a structured report.
//!
//! The conversational front-end (message transport, command parsing,
//! chat formatting) is an external collaborator; it drives a
//! `DecisionSession` one user turn at a time and owns all I/O.

pub mod domain;
