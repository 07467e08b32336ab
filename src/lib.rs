//! # Condensa
//!
//! A CLI for summarising local documents (txt, PDF, DOCX) with Gemini.
//!
//! ## Pipeline
//!
//! - **Extraction**: turns one input file into a single plain-text string
//! - **Summarisation**: one request to the Gemini generateContent endpoint
//! - **Output**: prints the summary and optionally saves it with a provenance header

pub mod agent;
pub mod config;
pub mod extract;
pub mod output;

pub use config::Config;
pub use extract::DocumentKind;
