use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::{config::RazorpayConfig, data_objects::NewRazorpayOrderBody, RazorpayApiError, RazorpayOrder};

#[derive(Clone)]
pub struct RazorpayApi {
    config: RazorpayConfig,
    client: Arc<Client>,
}

impl RazorpayApi {
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayApiError> {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| RazorpayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &RazorpayConfig {
        &self.config
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, RazorpayApiError> {
        let url = self.url(path);
        trace!("💳️ Sending REST query: {url}");
        let mut req =
            self.client.request(method, url).basic_auth(&self.config.key_id, Some(self.config.key_secret.reveal()));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("💳️ REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| RazorpayApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
            Err(RazorpayApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/v1{path}", self.config.api_base)
    }

    pub async fn create_order(&self, order: NewRazorpayOrderBody) -> Result<RazorpayOrder, RazorpayApiError> {
        debug!("💳️ Creating gateway order for {}", order.amount);
        let result = self.rest_query::<RazorpayOrder, NewRazorpayOrderBody>(Method::POST, "/orders", Some(order)).await?;
        info!("💳️ Created gateway order {} ({})", result.id, result.status);
        Ok(result)
    }

    pub async fn fetch_order(&self, order_id: &str) -> Result<RazorpayOrder, RazorpayApiError> {
        let path = format!("/orders/{order_id}");
        debug!("💳️ Fetching gateway order {order_id}");
        let result = self.rest_query::<RazorpayOrder, ()>(Method::GET, &path, None).await?;
        info!("💳️ Fetched gateway order {order_id}. Status is {}", result.status);
        Ok(result)
    }
}
