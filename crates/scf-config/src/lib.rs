//! SCF Config - industry templates and competitor profiles
//!
//! The configuration boundary of the switching-cost engine:
//! - `ConfigDocument`: ordered string-keyed documents with typed readers
//! - `ConfigProvider`: lookup trait with per-kind resolution policies
//! - `InMemoryProvider` / `DirectoryProvider`: concrete stores
//!
//! # Resolution
//!
//! ```text
//! get_industry_config(key)    -> Required    -> NotFound on unknown key
//! get_competitor_profile(key) -> UseDefault  -> default profile on unknown key
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use scf_config::{ConfigProvider, DirectoryProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = DirectoryProvider::load("./config").await?;
//! let industry = provider.get_industry_config("financial_services")?;
//! let competitor = provider.get_competitor_profile("incumbent_leader")?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod directory;
pub mod document;
pub mod error;
pub mod format;
pub mod provider;

pub use directory::DirectoryProvider;
pub use document::ConfigDocument;
pub use error::{ConfigError, ConfigResult};
pub use format::DocumentFormat;
pub use provider::{
    default_competitor_profile, ConfigProvider, DocumentKind, InMemoryProvider, ResolutionPolicy,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
