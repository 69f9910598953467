pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{HttpPriceApi, MemoryDropdown, MemoryResults};
pub use crate::config::AppConfig;
pub use crate::core::{
    context::UiContext,
    render::{slug, ImageUrls, ResultRenderer},
    selection::{SearchOutcome, SelectionController},
};
pub use crate::utils::error::{GiftFloorError, Result};
