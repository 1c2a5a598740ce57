use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Proxy, StatusCode};
use thiserror::Error;

// we use separate error types for construction and request

#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("ProxyError: {0} from scheme: {1}.")]
    ProxyError(reqwest::Error, String),
    #[error("BuildError: {0}.")]
    BuildError(#[from] reqwest::Error),
}

// urls may carry secrets (api key, webhook token), so errors never hold one.
// callers attach whatever part of the url is safe to show.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(reqwest::Error),
    #[error("Unexpected response: {0}")]
    OtherResponse(StatusCode),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::ConnectionError(err.without_url())
    }
}

/// The only two HTTP verbs the notifier needs. Payloads are raw bytes,
/// decoding is up to the caller.
#[async_trait]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<(), TransportError>;
}

pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new(proxy: Option<&str>) -> Result<Self, ConstructionError> {
        let builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(60));
        let builder = match proxy {
            Some(proxy) => {
                let proxy = Proxy::all(proxy)
                    .map_err(|err| ConstructionError::ProxyError(err, proxy.to_string()))?;
                builder.proxy(proxy)
            }
            None => builder,
        };
        let client = builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for Client {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let resp = self.client.get(url).send().await?;
        match resp.status() {
            status if status.is_success() => {
                let content = resp.bytes().await?;
                Ok(content.to_vec())
            }
            other => Err(TransportError::OtherResponse(other)),
        }
    }

    async fn post(
        &self,
        url: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<(), TransportError> {
        let resp = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        // the response is dropped here on both branches, which hands the connection back
        match resp.status() {
            status if status.is_success() => Ok(()),
            other => Err(TransportError::OtherResponse(other)),
        }
    }
}

#[cfg(test)]
pub mod fake {
    use std::{collections::HashMap, sync::Mutex};

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::{Transport, TransportError};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Post {
        pub url: String,
        pub content_type: String,
        pub body: Vec<u8>,
    }

    /// In-memory transport: canned GET bodies by URL, records every call.
    #[derive(Default)]
    pub struct FakeTransport {
        pub responses: Mutex<HashMap<String, Vec<u8>>>,
        pub gets: Mutex<Vec<String>>,
        pub posts: Mutex<Vec<Post>>,
        pub fail_posts: bool,
    }

    impl FakeTransport {
        pub fn with(mut self, url: &str, body: &str) -> Self {
            self.responses
                .get_mut()
                .unwrap()
                .insert(url.to_string(), body.as_bytes().to_vec());
            self
        }

        pub fn set(&self, url: &str, body: &str) {
            self.responses
                .lock()
                .unwrap()
                .insert(url.to_string(), body.as_bytes().to_vec());
        }

        pub fn remove(&self, url: &str) {
            self.responses.lock().unwrap().remove(url);
        }

        pub fn posts(&self) -> Vec<Post> {
            self.posts.lock().unwrap().clone()
        }

        pub fn gets(&self) -> Vec<String> {
            self.gets.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
            self.gets.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .get(url)
                .cloned()
                .ok_or(TransportError::OtherResponse(StatusCode::NOT_FOUND))
        }

        async fn post(
            &self,
            url: &str,
            content_type: &str,
            body: Vec<u8>,
        ) -> Result<(), TransportError> {
            self.posts.lock().unwrap().push(Post {
                url: url.to_string(),
                content_type: content_type.to_string(),
                body,
            });
            if self.fail_posts {
                Err(TransportError::OtherResponse(StatusCode::BAD_GATEWAY))
            } else {
                Ok(())
            }
        }
    }
}
