use crate::adapters::ui::{MemoryDropdown, MemoryResults};
use crate::core::text;
use crate::domain::model::DependentInput;
use crate::domain::ports::{Dropdown, ResultsRegion};
use std::sync::Arc;

/// 頁面狀態：四個下拉選單與共用的結果區域，明確傳給控制器
#[derive(Clone)]
pub struct UiContext {
    pub collection: Arc<dyn Dropdown>,
    pub model: Arc<dyn Dropdown>,
    pub backdrop: Arc<dyn Dropdown>,
    pub symbol: Arc<dyn Dropdown>,
    pub results: Arc<dyn ResultsRegion>,
}

impl UiContext {
    pub fn in_memory() -> Self {
        Self {
            collection: Arc::new(MemoryDropdown::new("gift-select", text::LOADING_COLLECTIONS)),
            model: Arc::new(MemoryDropdown::new("model-select", text::SELECT_COLLECTION_FIRST)),
            backdrop: Arc::new(MemoryDropdown::new(
                "backdrop-select",
                text::SELECT_COLLECTION_FIRST,
            )),
            symbol: Arc::new(MemoryDropdown::new("symbol-select", text::SELECT_COLLECTION_FIRST)),
            results: Arc::new(MemoryResults::new()),
        }
    }

    pub fn dependent(&self, input: DependentInput) -> &Arc<dyn Dropdown> {
        match input {
            DependentInput::Model => &self.model,
            DependentInput::Backdrop => &self.backdrop,
            DependentInput::Symbol => &self.symbol,
        }
    }
}
