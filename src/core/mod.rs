pub mod context;
pub mod generation;
pub mod loader;
pub mod render;
pub mod selection;
pub mod text;

pub use crate::domain::model::{FloorResponse, Listing, Marketplace, SearchQuery, SelectOption};
pub use crate::domain::ports::{Dropdown, PriceApi, ResultsRegion};
pub use crate::utils::error::Result;
