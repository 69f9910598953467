use crate::core::context::UiContext;
use crate::core::generation::{GenerationCounter, Ticket};
use crate::core::loader::DataLoader;
use crate::core::render::ResultRenderer;
use crate::core::text;
use crate::domain::model::{DependentInput, SearchQuery, SelectOption};
use crate::domain::ports::{Dropdown, PriceApi};
use crate::utils::error::{GiftFloorError, Result};
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 沒有選擇系列，只顯示提示，不發出任何請求
    MissingCollection,
    Rendered,
    /// 錯誤已由 DataLoader 顯示
    Failed,
    /// 回應抵達時已有更新的搜尋，結果被丟棄
    Stale,
}

fn default_option_text(input: DependentInput) -> &'static str {
    match input {
        DependentInput::Model => text::ANY_MODEL,
        DependentInput::Backdrop => text::ANY_BACKDROP,
        DependentInput::Symbol => text::ANY_SYMBOL,
    }
}

fn populate(dropdown: &dyn Dropdown, options: Vec<SelectOption>, default_text: &str) {
    dropdown.clear();
    dropdown.clear_options();
    dropdown.add_option(SelectOption {
        value: String::new(),
        text: default_text.to_string(),
        ..Default::default()
    });
    dropdown.add_options(options);
    dropdown.set_value("");
    dropdown.enable();
}

fn reset(dropdown: &dyn Dropdown, placeholder: &str) {
    dropdown.clear();
    dropdown.clear_options();
    dropdown.set_placeholder(placeholder);
    dropdown.disable();
}

/// 串聯式選單控制器：系列 → (模型, 背景, 符號) → 搜尋
pub struct SelectionController<A: PriceApi> {
    ui: UiContext,
    loader: DataLoader<A>,
    renderer: ResultRenderer,
    collections: GenerationCounter,
    searches: GenerationCounter,
}

impl<A: PriceApi> SelectionController<A> {
    pub fn new(api: A, ui: UiContext, renderer: ResultRenderer) -> Self {
        let loader = DataLoader::new(api, ui.results.clone());
        Self {
            ui,
            loader,
            renderer,
            collections: GenerationCounter::new(),
            searches: GenerationCounter::new(),
        }
    }

    pub fn ui(&self) -> &UiContext {
        &self.ui
    }

    pub fn loader(&self) -> &DataLoader<A> {
        &self.loader
    }

    /// 初始畫面：依賴選單停用、結果區域顯示操作提示
    pub fn init(&self) {
        self.ui.collection.set_placeholder(text::LOADING_COLLECTIONS);
        for input in DependentInput::ALL {
            let dropdown = self.ui.dependent(input);
            dropdown.set_placeholder(text::SELECT_COLLECTION_FIRST);
            dropdown.disable();
        }
        self.ui.results.set_html(text::WELCOME_HTML.to_string());
    }

    pub async fn load_collections(&self) -> Result<usize> {
        let dropdown = self.ui.collection.as_ref();

        match self.loader.gifts().await {
            Ok(gifts) => {
                let count = gifts.len();
                let images = self.renderer.images();
                let options = gifts
                    .into_iter()
                    .map(|name| SelectOption {
                        image_url: Some(images.collection_thumb(&name)),
                        ..SelectOption::plain(name)
                    })
                    .collect();

                populate(dropdown, options, text::CHOOSE_COLLECTION);
                dropdown.set_placeholder(text::CHOOSE_COLLECTION);
                tracing::info!("🎁 Loaded {} collections", count);
                Ok(count)
            }
            Err(e) => {
                reset(dropdown, text::ERROR_LOADING_COLLECTIONS);
                Err(e)
            }
        }
    }

    /// 以程式方式選擇系列（等同使用者在選單中選取）
    pub async fn select_collection(&self, value: &str) -> Result<()> {
        if value.is_empty() {
            self.ui.collection.clear();
        } else if !self.ui.collection.set_value(value) {
            return Err(GiftFloorError::SelectionError {
                message: format!("unknown collection '{}'", value),
            });
        }

        self.on_collection_change(value).await;
        Ok(())
    }

    /// 清空並停用三個依賴選單，回傳這次系列變更的 ticket
    pub fn reset_dependents(&self) -> Ticket {
        let ticket = self.collections.advance();

        for input in DependentInput::ALL {
            reset(self.ui.dependent(input).as_ref(), text::SELECT_COLLECTION_FIRST);
        }

        ticket
    }

    /// 重置在呼叫當下立即完成，回傳的 future 只負責並行載入選項。
    /// 任一端點失敗只影響自己的選單。
    pub fn on_collection_change<'a>(&'a self, value: &'a str) -> impl Future<Output = ()> + 'a {
        let ticket = self.reset_dependents();

        async move {
            if !value.is_empty() {
                self.load_dependents(value, &ticket).await;
            }
        }
    }

    async fn load_dependents(&self, gift_name: &str, ticket: &Ticket) {
        tracing::info!("🎁 Loading filters for collection '{}'", gift_name);

        tokio::join!(
            self.load_dependent(DependentInput::Model, gift_name, ticket),
            self.load_dependent(DependentInput::Backdrop, gift_name, ticket),
            self.load_dependent(DependentInput::Symbol, gift_name, ticket),
        );
    }

    async fn load_dependent(&self, input: DependentInput, gift_name: &str, ticket: &Ticket) {
        let dropdown = self.ui.dependent(input).as_ref();
        reset(dropdown, text::LOADING);

        let result = match input {
            DependentInput::Model => self
                .loader
                .models(gift_name, ticket)
                .await
                .map(|models| models.into_iter().map(SelectOption::from).collect::<Vec<_>>()),
            DependentInput::Backdrop => self
                .loader
                .backdrops(gift_name, ticket)
                .await
                .map(|names| names.into_iter().map(SelectOption::plain).collect()),
            DependentInput::Symbol => self
                .loader
                .symbols(gift_name, ticket)
                .await
                .map(|names| names.into_iter().map(SelectOption::plain).collect()),
        };

        if !ticket.is_current() {
            tracing::debug!(
                "🔕 Dropping {} options for '{}': collection changed",
                input.label(),
                gift_name
            );
            return;
        }

        match result {
            Ok(options) => {
                tracing::debug!("📋 {}: {} options for '{}'", dropdown.id(), options.len(), gift_name);
                populate(dropdown, options, default_option_text(input));
            }
            Err(_) => reset(dropdown, text::ERROR_LOADING),
        }
    }

    /// 設定篩選值；只接受目前系列已載入的選項
    pub fn set_filter(&self, input: DependentInput, value: &str) -> Result<()> {
        if self.ui.dependent(input).set_value(value) {
            Ok(())
        } else {
            Err(GiftFloorError::SelectionError {
                message: format!("unknown {} '{}'", input.label(), value),
            })
        }
    }

    /// 讀取目前四個輸入組成查詢；未選系列時為 None
    pub fn current_query(&self) -> Option<SearchQuery> {
        let collection = self.ui.collection.value();
        if collection.is_empty() {
            return None;
        }

        Some(SearchQuery::new(collection).with_filters(
            &self.ui.model.value(),
            &self.ui.backdrop.value(),
            &self.ui.symbol.value(),
        ))
    }

    pub async fn on_search(&self) -> SearchOutcome {
        let ticket = self.searches.advance();

        let Some(query) = self.current_query() else {
            self.ui
                .results
                .set_html(text::SELECT_COLLECTION_PROMPT_HTML.to_string());
            return SearchOutcome::MissingCollection;
        };

        tracing::info!("🔍 Searching floor for {:?}", query);
        self.ui.results.set_html(text::LOADER_HTML.to_string());

        let result = self.loader.floor(&query, &ticket).await;

        if !ticket.is_current() {
            tracing::debug!("🔕 Discarding stale search (generation {})", ticket.generation());
            return SearchOutcome::Stale;
        }

        match result {
            Ok(payload) => {
                let html = self.renderer.render(&payload, &query.collection);
                self.ui.results.set_html(html);
                SearchOutcome::Rendered
            }
            Err(_) => SearchOutcome::Failed,
        }
    }
}
