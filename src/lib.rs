//! SmartSave - terminal budgeting for students
//!
//! This library provides the core functionality for the SmartSave budgeting
//! application: a monthly budget split across seven fixed spending
//! categories, an expense log, savings goals, and a small keyword-driven
//! assistant that gives category-specific tips.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, goals, the ledger)
//! - `storage`: JSON file storage layer
//! - `services`: Write-through business logic on top of storage
//! - `assistant`: Canned per-category replies
//! - `export`: JSON, YAML and CSV export and import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use smartsave::config::{paths::SmartSavePaths, settings::Settings};
//! use smartsave::models::Money;
//! use smartsave::services::LedgerService;
//! use smartsave::storage::Storage;
//!
//! let paths = SmartSavePaths::new()?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! LedgerService::new(&storage).set_budget(Money::from_units(1000))?;
//! ```

pub mod assistant;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SmartSaveError, SmartSaveResult};
