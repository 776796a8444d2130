//! Configuration modules for the Classdesk dashboard layer.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible defaults.
//!
//! # Modules
//!
//! - [`api`]: backend API endpoint and request timeout
//!
//! # Example
//!
//! ```ignore
//! use classdesk::config::api::ApiConfig;
//!
//! let config = ApiConfig::from_env();
//! println!("talking to {}", config.base_url);
//! ```

pub mod api;

pub use api::ApiConfig;
