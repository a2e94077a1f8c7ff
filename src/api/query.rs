use serde_json::{json, Value};

use crate::error::Result;
use crate::Client;

/// API handler for the ad-hoc query endpoint
#[derive(Debug)]
pub struct QueryApi<'a> {
    pub(crate) client: &'a Client,
}

impl QueryApi<'_> {
    /// Execute a query against the resource tree and return its projected
    /// result document.
    #[instrument(skip(self, query))]
    pub async fn run(&self, query: &Value) -> Result<Value> {
        self.client.post("/Query", &json!({ "Query": query })).await
    }
}
