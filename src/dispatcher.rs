use thiserror::Error;

use crate::{
    client::{Transport, TransportError},
    notification::Webhook,
};

const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Failed to encode webhook: {0}")]
    EncodeError(#[from] serde_json::Error),
    #[error("Failed to send webhook: {0}")]
    SendError(#[from] TransportError),
}

pub struct Dispatcher<'t, T> {
    transport: &'t T,
    url: String,
}

impl<'t, T: Transport> Dispatcher<'t, T> {
    pub fn new(transport: &'t T, url: &str) -> Self {
        let url = url.to_string();
        Self { transport, url }
    }

    /// Posts the webhook once. The response body is not looked at.
    pub async fn send(&self, webhook: &Webhook) -> Result<(), DeliveryError> {
        let body = serde_json::to_vec(webhook)?;
        self.transport
            .post(&self.url, CONTENT_TYPE_JSON, body)
            .await?;
        Ok(())
    }
}
