use crate::core::generation::Ticket;
use crate::core::render::render_error;
use crate::domain::model::{FloorResponse, ModelOption, SearchQuery};
use crate::domain::ports::{Endpoint, PriceApi, ResultsRegion};
use crate::utils::error::Result;
use std::sync::Arc;

/// 所有對外呼叫的唯一入口。
///
/// 失敗時先把錯誤訊息寫進結果區域，再把錯誤交回呼叫端；呼叫端不需要再顯示一次。
/// 若 ticket 已過期（使用者已經發起較新的操作），錯誤只記錄不顯示。
pub struct DataLoader<A: PriceApi> {
    api: A,
    results: Arc<dyn ResultsRegion>,
}

impl<A: PriceApi> DataLoader<A> {
    pub fn new(api: A, results: Arc<dyn ResultsRegion>) -> Self {
        Self { api, results }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn gifts(&self) -> Result<Vec<String>> {
        let result = self.api.gifts().await;
        self.surface(&Endpoint::Gifts, &Ticket::detached(), result)
    }

    pub async fn models(&self, gift_name: &str, ticket: &Ticket) -> Result<Vec<ModelOption>> {
        let result = self.api.models(gift_name).await;
        let endpoint = Endpoint::Models {
            gift_name: gift_name.to_string(),
        };
        self.surface(&endpoint, ticket, result)
    }

    pub async fn backdrops(&self, gift_name: &str, ticket: &Ticket) -> Result<Vec<String>> {
        let result = self.api.backdrops(gift_name).await;
        let endpoint = Endpoint::Backdrops {
            gift_name: gift_name.to_string(),
        };
        self.surface(&endpoint, ticket, result)
    }

    pub async fn symbols(&self, gift_name: &str, ticket: &Ticket) -> Result<Vec<String>> {
        let result = self.api.symbols(gift_name).await;
        let endpoint = Endpoint::Symbols {
            gift_name: gift_name.to_string(),
        };
        self.surface(&endpoint, ticket, result)
    }

    pub async fn floor(&self, query: &SearchQuery, ticket: &Ticket) -> Result<FloorResponse> {
        let result = self.api.floor(query).await;
        self.surface(&Endpoint::Floor(query.clone()), ticket, result)
    }

    fn surface<T>(&self, endpoint: &Endpoint, ticket: &Ticket, result: Result<T>) -> Result<T> {
        result.map_err(|e| {
            tracing::error!("❌ Fetch error for {}: {}", endpoint, e);
            if ticket.is_current() {
                self.results.set_html(render_error(&e.user_friendly_message()));
            } else {
                tracing::debug!(
                    "🔕 Suppressed error display for stale request (generation {})",
                    ticket.generation()
                );
            }
            e
        })
    }
}
