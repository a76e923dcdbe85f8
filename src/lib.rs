//! A greedy transition-based dependency parser.
//!
//! Parsing runs the arc-standard transition system over a `Configuration`;
//! a `Guide` picks one transition per step, either the static oracle over a
//! gold tree or a linear model over hashed address features.

#[macro_use]
extern crate slog;

pub mod config;
pub mod dataset;
pub mod features;
pub mod io;
pub mod lang;
pub mod logging;
pub mod models;
pub mod preprocessing;
pub mod syntax;
pub mod training;
