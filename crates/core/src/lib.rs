//! Core types and rules for unionboard
//!
//! Issue records, the tab filter engine, version descriptors and the
//! startup configuration shared by every other crate.

pub mod config;
mod constants;
pub mod env_config;
mod error;
pub mod filter;
mod issue;
pub mod version;

pub use config::{AdminCredentials, ClientConfig, MarkerField, ServerConfig};
pub use constants::*;
pub use error::{ConfigError, ParseTabError, ValidationError};
pub use filter::{dedup_by_title, filter_by_tab, select, Tab, TabView};
pub use issue::{Issue, IssueFields, IssueInput, IssueRecord};
pub use version::{evaluate, UpdateStatus, VersionDescriptor, VersionEntry, VersionId};
