//! Food Endpoints
//!
//! `reqwest` client for the `/foods` REST resource.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, FoodApi};
use crate::config::AppConfig;
use crate::models::{AvailabilityPatch, FoodPlate, NewFood};

const FOODS_PATH: &str = "foods";

/// HTTP implementation of [`FoodApi`]
#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    config: AppConfig,
}

impl HttpFoodApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn collection_url(&self) -> String {
        self.config.endpoint(FOODS_PATH)
    }

    fn item_url(&self, id: u32) -> String {
        self.config.endpoint(&format!("{}/{}", FOODS_PATH, id))
    }

    /// Turn non-success statuses into errors
    async fn check_status(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(body)),
            _ => Err(ApiError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<FoodPlate>> {
        let response = self.client.get(self.collection_url()).send().await?;
        Self::read_json(response).await
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<FoodPlate> {
        let response = self
            .client
            .post(self.collection_url())
            .json(food)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn update_food(&self, food: &FoodPlate) -> ApiResult<FoodPlate> {
        let response = self
            .client
            .put(self.item_url(food.id))
            .json(food)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn update_availability(&self, id: u32, available: bool) -> ApiResult<()> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(&AvailabilityPatch { available })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;

    #[test]
    fn test_urls() {
        let api = HttpFoodApi::new(&AppConfig::new("http://localhost:3333/", LevelFilter::Info));
        assert_eq!(api.collection_url(), "http://localhost:3333/foods");
        assert_eq!(api.item_url(12), "http://localhost:3333/foods/12");
    }

    /// Client for a local test server, bypassing any proxy set in the environment
    fn local_api(url: String) -> HttpFoodApi {
        HttpFoodApi {
            client: Client::builder().no_proxy().build().unwrap(),
            config: AppConfig::new(url, LevelFilter::Info),
        }
    }

    /// Serve one canned HTTP/1.1 response and return the server's base URL
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let url = serve_once("500 Internal Server Error", "db down").await;
        let api = local_api(url);

        let err = api.list_foods().await.unwrap_err();
        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "db down");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_food_maps_to_not_found() {
        let url = serve_once("404 Not Found", "no food 7").await;
        let api = local_api(url);

        let err = api.delete_food(7).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref body) if body == "no food 7"));
    }
}
