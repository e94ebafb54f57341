// src/io.rs

//! CSV export of computed curves and tables for external plotting tools.

pub mod reporting;
