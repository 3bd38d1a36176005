//! Tax Regime Engine for Indian personal income tax
//!
//! This crate computes a salaried individual's income-tax liability for
//! FY 2024-25 under both the Old Tax Regime and the New Tax Regime
//! (Section 115BAC), itemizes each computation, and recommends the regime
//! with the lower liability. Results can be rendered as a text summary or a
//! paginated report, or served over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cmd;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
