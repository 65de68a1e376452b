//! WooCommerce REST client.
//!
//! Thin wrapper over `reqwest` implementing [`ProductApi`]. One instance is
//! built at startup and shared; the underlying connection pool is reference
//! counted, so cloning is cheap.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::{clamp_per_page, ProductApi, ProductFilter};
use crate::config::StoreConfig;
use crate::error::ApiError;
use crate::model::{CategoryRecord, ProductPatch, ProductRecord};

#[derive(Clone)]
pub struct WooClient {
    inner: Arc<WooClientInner>,
}

struct WooClientInner {
    http: reqwest::Client,
    config: StoreConfig,
}

impl std::fmt::Debug for WooClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WooClient")
            .field("store_url", &self.inner.config.store_url.as_str())
            .field("api_version", &self.inner.config.api_version)
            .finish()
    }
}

impl WooClient {
    /// Build a client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("woo-seo/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            inner: Arc::new(WooClientInner { http, config }),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Endpoint URL with the query pairs (and credentials when configured
    /// for query-string auth) applied.
    pub fn request_url(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<Url, ApiError> {
        let config = &self.inner.config;
        let mut url = config
            .endpoint_url(endpoint)
            .map_err(|source| ApiError::Url {
                endpoint: endpoint.to_string(),
                source,
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
            if config.query_string_auth {
                pairs.append_pair("consumer_key", &config.consumer_key);
                pairs.append_pair("consumer_secret", config.consumer_secret.expose_secret());
            }
        }
        // `query_pairs_mut` leaves a dangling `?` when nothing was appended.
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let config = &self.inner.config;
        if config.query_string_auth {
            req
        } else {
            req.basic_auth(
                &config.consumer_key,
                Some(config.consumer_secret.expose_secret()),
            )
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.request_url(endpoint, query)?;
        let req = self.authorize(self.inner.http.get(url));
        self.send(endpoint, req).await
    }

    async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.request_url(endpoint, &[])?;
        let req = self.authorize(self.inner.http.put(url)).json(body);
        self.send(endpoint, req).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!(
                endpoint,
                status = status.as_u16(),
                "store API request failed"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(endpoint, bytes = body.len(), "store API response");
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

impl ProductApi for WooClient {
    #[instrument(skip(self), fields(per_page = filter.per_page))]
    async fn fetch_products(&self, filter: &ProductFilter) -> Result<Vec<ProductRecord>, ApiError> {
        self.get("products", &filter.query_pairs()).await
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, id: i64) -> Result<ProductRecord, ApiError> {
        self.get(&format!("products/{id}"), &[]).await
    }

    #[instrument(skip(self, patch))]
    async fn update_product(
        &self,
        id: i64,
        patch: &ProductPatch,
    ) -> Result<ProductRecord, ApiError> {
        self.put(&format!("products/{id}"), patch).await
    }

    #[instrument(skip(self))]
    async fn fetch_categories(&self, per_page: u32) -> Result<Vec<CategoryRecord>, ApiError> {
        let query = [("per_page", clamp_per_page(per_page).to_string())];
        self.get("products/categories", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(query_string_auth: bool) -> WooClient {
        let mut config = StoreConfig::from_json(
            r#"{"store_url": "https://shop.test", "consumer_key": "ck_1",
                "consumer_secret": "cs_2", "api_version": "wc/v3"}"#,
        )
        .expect("config");
        config.query_string_auth = query_string_auth;
        WooClient::new(config).expect("client")
    }

    #[test]
    fn product_list_url_carries_filter() {
        let filter = ProductFilter::new(20).with_status(Some("publish".to_string()));
        let url = client(false)
            .request_url("products", &filter.query_pairs())
            .expect("url");
        assert_eq!(
            url.as_str(),
            "https://shop.test/wp-json/wc/v3/products?per_page=20&status=publish"
        );
    }

    #[test]
    fn bare_endpoint_has_no_query() {
        let url = client(false).request_url("products/9", &[]).expect("url");
        assert_eq!(url.as_str(), "https://shop.test/wp-json/wc/v3/products/9");
    }

    #[test]
    fn query_string_auth_appends_credentials() {
        let url = client(true).request_url("products/9", &[]).expect("url");
        assert_eq!(
            url.as_str(),
            "https://shop.test/wp-json/wc/v3/products/9?consumer_key=ck_1&consumer_secret=cs_2"
        );
    }

    #[test]
    fn debug_hides_credentials() {
        let dbg = format!("{:?}", client(false));
        assert!(dbg.contains("shop.test"));
        assert!(!dbg.contains("cs_2"));
    }
}
