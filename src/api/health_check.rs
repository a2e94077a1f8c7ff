use serde_json::Value;

use crate::error::Result;
use crate::Client;

/// API handler for the service health check endpoint
#[derive(Debug)]
pub struct HealthCheckApi<'a> {
    pub(crate) client: &'a Client,
}

impl HealthCheckApi<'_> {
    /// Retrieve the service status and version information.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<Value> {
        self.client.get("/Healthcheck", &[]).await
    }
}
