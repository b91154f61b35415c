//! Infrastructure layer for Heartline.
//!
//! Backends that stand in for a server, plus configuration file handling.

pub mod canned_suggestions;
pub mod config_service;
pub mod mock_data;
pub mod paths;

pub use canned_suggestions::{CANNED_SUGGESTIONS, CannedSuggestionSource};
pub use config_service::ConfigService;
pub use mock_data::MockDataService;
pub use paths::HeartlinePaths;
