use serde_json::Value;

use crate::error::Result;
use crate::Client;

/// API handler for DPS message endpoints.
///
/// Messages are pulled from HMRC by the DPS sync job; this group reads and
/// deletes the retrieved notices.
#[derive(Debug)]
pub struct DpsApi<'a> {
    pub(crate) client: &'a Client,
}

impl DpsApi<'_> {
    /// Retrieve a DPS message.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, message_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/DpsMessage/{message_id}"),
                &[],
            )
            .await
    }

    /// Retrieve links to an employer's DPS messages. Both filters are
    /// optional and omitted from the querystring when unset.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        employer_id: &str,
        message_type: Option<&str>,
        status: Option<&str>,
    ) -> Result<Value> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(message_type) = message_type {
            query.push(("MessageType", message_type.to_string()));
        }
        if let Some(status) = status {
            query.push(("Status", status.to_string()));
        }
        self.client
            .get(&format!("/Employer/{employer_id}/DpsMessages"), &query)
            .await
    }

    /// Delete a DPS message.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, message_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/DpsMessage/{message_id}"))
            .await
    }
}
