use crate::config::toml_config::ApiConfig;
use crate::domain::model::{FloorResponse, ModelOption, SearchQuery};
use crate::domain::ports::{Endpoint, PriceApi};
use crate::utils::error::{GiftFloorError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

/// 錯誤回應的 body，只取 `detail` 字串
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub struct HttpPriceApi {
    base_url: String,
    accept_json: bool,
    client: Client,
}

impl HttpPriceApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &ApiConfig, client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            accept_json: config.accept_json,
            client,
        }
    }

    pub fn endpoint_url(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))?;
        let pairs = endpoint.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("📡 GET {}", url);

        let mut request = self.client.get(url);
        if self.accept_json {
            request = request.header(ACCEPT, "application/json");
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 {} responded with {}", endpoint, status);

        if !status.is_success() {
            // 錯誤 body 讀不到時仍以狀態碼回報
            let body = response.bytes().await.unwrap_or_default();
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .and_then(|d| d.as_str().map(str::to_string));
            return Err(GiftFloorError::http_status(status.as_u16(), detail));
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|source| GiftFloorError::DecodeError {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PriceApi for HttpPriceApi {
    async fn gifts(&self) -> Result<Vec<String>> {
        self.get_json(&Endpoint::Gifts).await
    }

    async fn models(&self, gift_name: &str) -> Result<Vec<ModelOption>> {
        self.get_json(&Endpoint::Models {
            gift_name: gift_name.to_string(),
        })
        .await
    }

    async fn backdrops(&self, gift_name: &str) -> Result<Vec<String>> {
        self.get_json(&Endpoint::Backdrops {
            gift_name: gift_name.to_string(),
        })
        .await
    }

    async fn symbols(&self, gift_name: &str) -> Result<Vec<String>> {
        self.get_json(&Endpoint::Symbols {
            gift_name: gift_name.to_string(),
        })
        .await
    }

    async fn floor(&self, query: &SearchQuery) -> Result<FloorResponse> {
        self.get_json(&Endpoint::Floor(query.clone())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn api_for(base_url: String) -> HttpPriceApi {
        HttpPriceApi::new(&ApiConfig {
            base_url,
            accept_json: true,
        })
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let api = api_for("https://glad-social-tapir.ngrok-free.app/".to_string());
        let url = api
            .endpoint_url(&Endpoint::Symbols {
                gift_name: "Lol Pop".to_string(),
            })
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://glad-social-tapir.ngrok-free.app/symbols?gift_name=Lol+Pop"
        );
    }

    #[tokio::test]
    async fn test_gifts_successful_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/gifts")
                .header("accept", "application/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(["Plush Pepe", "Jelly Bunny"]));
        });

        let api = api_for(server.base_url());
        let gifts = api.gifts().await.unwrap();

        api_mock.assert();
        assert_eq!(gifts, vec!["Plush Pepe", "Jelly Bunny"]);
    }

    #[tokio::test]
    async fn test_floor_sends_only_present_filters() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/floor")
                .query_param("gift_name", "Plush Pepe")
                .query_param("backdrop", "Onyx Black");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "mrkt": {"price": 1450, "link": "https://t.me/mrkt/1", "tg_id": 12}
                }));
        });

        let api = api_for(server.base_url());
        let query = SearchQuery::new("Plush Pepe").with_filters("", "Onyx Black", "");
        let floor = api.floor(&query).await.unwrap();

        api_mock.assert();
        assert!(floor.tonnel.is_none());
        assert_eq!(floor.mrkt.unwrap().price, 1450.0);
    }

    #[tokio::test]
    async fn test_error_detail_is_used_as_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/models");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": "Gift 'Nope' not found"}));
        });

        let api = api_for(server.base_url());
        let err = api.models("Nope").await.unwrap_err();

        assert_eq!(err.to_string(), "Gift 'Nope' not found");
    }

    #[tokio::test]
    async fn test_error_without_detail_falls_back_to_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/backdrops");
            then.status(500).body("Internal Server Error");
        });

        let api = api_for(server.base_url());
        let err = api.backdrops("Plush Pepe").await.unwrap_err();

        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_truncated_error_body_falls_back_to_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        // 宣告的長度比實際送出的多，連線隨即關閉
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Type: application/json\r\nContent-Length: 200\r\n\r\n{\"detail\": \"trunc")
                .await
                .unwrap();
        });

        let api = api_for(format!("http://{}", addr));
        let err = api.gifts().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, GiftFloorError::HttpStatusError { status: 500, .. }));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_non_string_detail_falls_back_to_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/floor");
            then.status(422)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"detail": [{"loc": ["query", "gift_name"]}]}));
        });

        let api = api_for(server.base_url());
        let err = api.floor(&SearchQuery::new("")).await.unwrap_err();

        assert_eq!(err.to_string(), "HTTP error! status: 422");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/symbols");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"symbols": ["Star"]}));
        });

        let api = api_for(server.base_url());
        let err = api.symbols("Plush Pepe").await.unwrap_err();

        assert!(matches!(err, GiftFloorError::DecodeError { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // 保留的 port，不會有人在聽
        let api = api_for("http://127.0.0.1:9".to_string());
        let err = api.gifts().await.unwrap_err();

        assert!(matches!(err, GiftFloorError::TransportError(_)));
    }
}
