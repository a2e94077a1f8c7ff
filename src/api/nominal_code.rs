use serde_json::{json, Value};

use crate::error::Result;
use crate::Client;

/// API handler for NominalCode endpoints
#[derive(Debug)]
pub struct NominalCodeApi<'a> {
    pub(crate) client: &'a Client,
}

impl NominalCodeApi<'_> {
    /// Create a nominal code under an employer.
    #[instrument(skip(self, nominal_code))]
    pub async fn create(&self, employer_id: &str, nominal_code: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/NominalCodes"),
                &json!({ "NominalCode": nominal_code }),
            )
            .await
    }

    /// Retrieve a nominal code.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, nominal_code_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/NominalCode/{nominal_code_id}"),
                &[],
            )
            .await
    }

    /// Update a nominal code.
    #[instrument(skip(self, nominal_code))]
    pub async fn update(
        &self,
        employer_id: &str,
        nominal_code_id: &str,
        nominal_code: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/NominalCode/{nominal_code_id}"),
                &json!({ "NominalCode": nominal_code }),
            )
            .await
    }

    /// Delete a nominal code.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, nominal_code_id: &str) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/NominalCode/{nominal_code_id}"
            ))
            .await
    }

    /// Retrieve links to all nominal codes of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/NominalCodes"), &[])
            .await
    }
}
