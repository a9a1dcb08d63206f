//! Labor time accounting and payroll engine for a ship-repair contractor
//!
//! This crate converts raw daily work intervals into regular/overtime hour
//! splits, turns monthly hour totals into pay amounts, and assembles the
//! payroll CSV artifact, along with the report, project billing, and master
//! data derivations the surrounding dashboard is built from.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
