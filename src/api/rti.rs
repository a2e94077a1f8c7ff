use serde_json::Value;

use crate::error::Result;
use crate::Client;

/// API handler for RTI transaction endpoints.
///
/// RTI transactions (FPS/EPS/NVR submissions) are generated by the service;
/// this group reads and deletes them.
#[derive(Debug)]
pub struct RtiApi<'a> {
    pub(crate) client: &'a Client,
}

impl RtiApi<'_> {
    /// Retrieve an RTI transaction.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, transaction_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/RtiTransaction/{transaction_id}"),
                &[],
            )
            .await
    }

    /// Retrieve links to an employer's RTI transactions, optionally filtered
    /// by transaction type, e.g. `FPS`.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str, transaction_type: Option<&str>) -> Result<Value> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(transaction_type) = transaction_type {
            query.push(("TransactionType", transaction_type.to_string()));
        }
        self.client
            .get(&format!("/Employer/{employer_id}/RtiTransactions"), &query)
            .await
    }

    /// Delete an RTI transaction.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, transaction_id: &str) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/RtiTransaction/{transaction_id}"
            ))
            .await
    }
}
