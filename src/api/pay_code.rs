use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for PayCode endpoints
#[derive(Debug)]
pub struct PayCodeApi<'a> {
    pub(crate) client: &'a Client,
}

impl PayCodeApi<'_> {
    /// Create a new pay code under an employer.
    #[instrument(skip(self, pay_code))]
    pub async fn create(&self, employer_id: &str, pay_code: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/PayCodes"),
                &json!({ "PayCode": pay_code }),
            )
            .await
    }

    /// Retrieve the current revision of a pay code.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, code: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PayCode/{code}"), &[])
            .await
    }

    /// Retrieve the pay code revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_at(&self, employer_id: &str, code: &str, effective_date: Date) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(&format!("/Employer/{employer_id}/PayCode/{code}/{date}"), &[])
            .await
    }

    /// Retrieve a numbered pay code revision.
    #[instrument(skip(self))]
    pub async fn get_revision(&self, employer_id: &str, code: &str, revision: u32) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/PayCode/{code}/Revision/{revision}"),
                &[],
            )
            .await
    }

    /// Retrieve all revisions of a pay code.
    #[instrument(skip(self))]
    pub async fn list_revisions(&self, employer_id: &str, code: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PayCode/{code}/Revisions"), &[])
            .await
    }

    /// Update a pay code, inserting a new revision.
    #[instrument(skip(self, pay_code))]
    pub async fn update(&self, employer_id: &str, code: &str, pay_code: &Value) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/PayCode/{code}"),
                &json!({ "PayCode": pay_code }),
            )
            .await
    }

    /// Patch a pay code, updating only the supplied fields.
    #[instrument(skip(self, pay_code))]
    pub async fn patch(&self, employer_id: &str, code: &str, pay_code: &Value) -> Result<Value> {
        self.client
            .patch(
                &format!("/Employer/{employer_id}/PayCode/{code}"),
                &json!({ "PayCode": pay_code }),
            )
            .await
    }

    /// Delete a pay code.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, code: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/PayCode/{code}"))
            .await
    }

    /// Retrieve links to all pay codes of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PayCodes"), &[])
            .await
    }
}
