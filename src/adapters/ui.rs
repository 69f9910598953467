use crate::domain::model::SelectOption;
use crate::domain::ports::{Dropdown, ResultsRegion};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct SelectState {
    options: Vec<SelectOption>,
    value: String,
    placeholder: String,
    enabled: bool,
}

/// 記憶體中的下拉選單，供 CLI 與測試使用
#[derive(Debug)]
pub struct MemoryDropdown {
    id: String,
    state: Mutex<SelectState>,
}

impl MemoryDropdown {
    pub fn new(id: impl Into<String>, placeholder: &str) -> Self {
        Self {
            id: id.into(),
            state: Mutex::new(SelectState {
                placeholder: placeholder.to_string(),
                enabled: true,
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SelectState> {
        // 單一事件迴圈下不會 poison；若發生仍沿用內部狀態
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Dropdown for MemoryDropdown {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&self) {
        self.state().value.clear();
    }

    fn clear_options(&self) {
        let mut state = self.state();
        state.options.clear();
        state.value.clear();
    }

    fn add_option(&self, option: SelectOption) {
        let mut state = self.state();
        // 與 widget 行為一致：重複的 value 忽略
        if state.options.iter().any(|o| o.value == option.value) {
            return;
        }
        state.options.push(option);
    }

    fn set_value(&self, value: &str) -> bool {
        let mut state = self.state();
        if !state.options.iter().any(|o| o.value == value) {
            return false;
        }
        state.value = value.to_string();
        true
    }

    fn value(&self) -> String {
        self.state().value.clone()
    }

    fn options(&self) -> Vec<SelectOption> {
        self.state().options.clone()
    }

    fn set_placeholder(&self, text: &str) {
        self.state().placeholder = text.to_string();
    }

    fn placeholder(&self) -> String {
        self.state().placeholder.clone()
    }

    fn enable(&self) {
        self.state().enabled = true;
    }

    fn disable(&self) {
        self.state().enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.state().enabled
    }
}

#[derive(Debug, Default)]
pub struct MemoryResults {
    html: Mutex<String>,
}

impl MemoryResults {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultsRegion for MemoryResults {
    fn set_html(&self, html: String) {
        *self.html.lock().unwrap_or_else(|e| e.into_inner()) = html;
    }

    fn html(&self) -> String {
        self.html.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
