//! CSV export backend for enquete.
//!
//! Generates the spreadsheet a client downloads for a survey: one row per
//! response, fixed respondent columns followed by one column per question
//! in display order. Output is a plain `String`; the caller decides where
//! it goes.

mod generator;
pub use generator::{CsvOptions, export_filename, export_responses};
