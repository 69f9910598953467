use crate::domain::model::{FloorResponse, ModelOption, SearchQuery, SelectOption};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;

/// 價格 API 的端點與其查詢參數
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Gifts,
    Models { gift_name: String },
    Backdrops { gift_name: String },
    Symbols { gift_name: String },
    Floor(SearchQuery),
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Gifts => "/gifts",
            Endpoint::Models { .. } => "/models",
            Endpoint::Backdrops { .. } => "/backdrops",
            Endpoint::Symbols { .. } => "/symbols",
            Endpoint::Floor(_) => "/floor",
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::Gifts => Vec::new(),
            Endpoint::Models { gift_name }
            | Endpoint::Backdrops { gift_name }
            | Endpoint::Symbols { gift_name } => vec![("gift_name", gift_name.as_str())],
            Endpoint::Floor(query) => {
                let mut pairs = vec![("gift_name", query.collection.as_str())];
                if let Some(model) = &query.model {
                    pairs.push(("model", model.as_str()));
                }
                if let Some(backdrop) = &query.backdrop {
                    pairs.push(("backdrop", backdrop.as_str()));
                }
                if let Some(symbol) = &query.symbol {
                    pairs.push(("symbol", symbol.as_str()));
                }
                pairs
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return f.write_str(self.path());
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        write!(f, "{}?{}", self.path(), query)
    }
}

/// 外部價格 API。每次呼叫只嘗試一次，不重試、不快取
#[async_trait]
pub trait PriceApi: Send + Sync {
    async fn gifts(&self) -> Result<Vec<String>>;
    async fn models(&self, gift_name: &str) -> Result<Vec<ModelOption>>;
    async fn backdrops(&self, gift_name: &str) -> Result<Vec<String>>;
    async fn symbols(&self, gift_name: &str) -> Result<Vec<String>>;
    async fn floor(&self, query: &SearchQuery) -> Result<FloorResponse>;
}

/// 下拉選單能力。具體元件（瀏覽器 widget、終端機、記憶體）由呼叫端注入
pub trait Dropdown: Send + Sync {
    fn id(&self) -> &str;
    fn clear(&self);
    fn clear_options(&self);
    fn add_option(&self, option: SelectOption);

    fn add_options(&self, options: Vec<SelectOption>) {
        for option in options {
            self.add_option(option);
        }
    }

    /// 只接受已存在的選項值；回傳是否成功
    fn set_value(&self, value: &str) -> bool;
    fn value(&self) -> String;
    fn options(&self) -> Vec<SelectOption>;
    fn set_placeholder(&self, text: &str);
    fn placeholder(&self) -> String;
    fn enable(&self);
    fn disable(&self);
    fn is_enabled(&self) -> bool;
}

/// 共用的結果顯示區域；每次寫入都整個取代先前內容
pub trait ResultsRegion: Send + Sync {
    fn set_html(&self, html: String);
    fn html(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_display_encodes_query() {
        let endpoint = Endpoint::Models {
            gift_name: "Plush Pepe".to_string(),
        };
        assert_eq!(endpoint.to_string(), "/models?gift_name=Plush+Pepe");
        assert_eq!(Endpoint::Gifts.to_string(), "/gifts");
    }

    #[test]
    fn test_floor_endpoint_omits_unset_filters() {
        let query = SearchQuery::new("Jelly Bunny").with_filters("", "", "Star");
        let endpoint = Endpoint::Floor(query);

        assert_eq!(
            endpoint.query_pairs(),
            vec![("gift_name", "Jelly Bunny"), ("symbol", "Star")]
        );
    }
}
