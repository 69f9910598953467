// Adapters layer: concrete implementations of the domain ports (http api, in-memory ui).

pub mod http;
pub mod ui;

pub use http::HttpPriceApi;
pub use ui::{MemoryDropdown, MemoryResults};
