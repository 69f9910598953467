use serde::{Deserialize, Serialize};
use std::fmt;

/// `/models` 回傳的單一模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelOption {
    pub name: String,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    /// 模型預覽圖
    #[serde(default)]
    pub url: Option<String>,
}

/// API 有時回傳千分比數值，有時回傳文字標籤；其他形狀原樣保留
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rarity {
    Permille(f64),
    Label(String),
    Other(serde_json::Value),
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Permille(value) => write!(f, "{}‰", value),
            Rarity::Label(label) => f.write_str(label),
            Rarity::Other(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Number(id) => write!(f, "{}", id),
            ListingId::Text(id) => f.write_str(id),
        }
    }
}

/// 單一市集上找到的最低價掛單，價格單位固定為 TON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub price: f64,
    pub link: String,
    pub tg_id: ListingId,
}

/// `/floor` 回應。缺少的 key 或 null 都代表該市集沒有結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorResponse {
    #[serde(default)]
    pub tonnel: Option<Listing>,
    #[serde(default)]
    pub portals: Option<Listing>,
    #[serde(default)]
    pub mrkt: Option<Listing>,
}

impl FloorResponse {
    pub fn get(&self, marketplace: Marketplace) -> Option<&Listing> {
        match marketplace {
            Marketplace::Tonnel => self.tonnel.as_ref(),
            Marketplace::Portals => self.portals.as_ref(),
            Marketplace::Mrkt => self.mrkt.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Marketplace::ALL.iter().all(|m| self.get(*m).is_none())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marketplace {
    Tonnel,
    Portals,
    Mrkt,
}

impl Marketplace {
    /// 固定的顯示順序，不依價格排序
    pub const ALL: [Marketplace; 3] = [Marketplace::Tonnel, Marketplace::Portals, Marketplace::Mrkt];

    pub fn display_name(&self) -> &'static str {
        match self {
            Marketplace::Tonnel => "Tonnel",
            Marketplace::Portals => "Portals",
            Marketplace::Mrkt => "MRKT",
        }
    }
}

/// 搜尋當下組出的查詢；空字串的篩選值視為未指定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub collection: String,
    pub model: Option<String>,
    pub backdrop: Option<String>,
    pub symbol: Option<String>,
}

impl SearchQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            model: None,
            backdrop: None,
            symbol: None,
        }
    }

    pub fn with_filters(mut self, model: &str, backdrop: &str, symbol: &str) -> Self {
        self.model = non_empty(model);
        self.backdrop = non_empty(backdrop);
        self.symbol = non_empty(symbol);
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 下拉選單中的一個選項
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
    pub image_url: Option<String>,
    pub rarity: Option<String>,
}

impl SelectOption {
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            text: name,
            ..Default::default()
        }
    }
}

impl From<ModelOption> for SelectOption {
    fn from(model: ModelOption) -> Self {
        Self {
            value: model.name.clone(),
            text: model.name,
            image_url: model.url,
            rarity: model.rarity.map(|r| r.to_string()),
        }
    }
}

/// 依賴於所選系列的三個篩選輸入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependentInput {
    Model,
    Backdrop,
    Symbol,
}

impl DependentInput {
    pub const ALL: [DependentInput; 3] =
        [DependentInput::Model, DependentInput::Backdrop, DependentInput::Symbol];

    pub fn label(&self) -> &'static str {
        match self {
            DependentInput::Model => "model",
            DependentInput::Backdrop => "backdrop",
            DependentInput::Symbol => "symbol",
        }
    }
}
