use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for Pension endpoints
#[derive(Debug)]
pub struct PensionApi<'a> {
    pub(crate) client: &'a Client,
}

impl PensionApi<'_> {
    /// Create a new pension scheme under an employer.
    #[instrument(skip(self, pension))]
    pub async fn create(&self, employer_id: &str, pension: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/Pensions"),
                &json!({ "Pension": pension }),
            )
            .await
    }

    /// Retrieve the current revision of a pension scheme.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, pension_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Pension/{pension_id}"), &[])
            .await
    }

    /// Retrieve the pension revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_at(
        &self,
        employer_id: &str,
        pension_id: &str,
        effective_date: Date,
    ) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/{date}"),
                &[],
            )
            .await
    }

    /// Retrieve a numbered pension revision.
    #[instrument(skip(self))]
    pub async fn get_revision(
        &self,
        employer_id: &str,
        pension_id: &str,
        revision: u32,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/Revision/{revision}"),
                &[],
            )
            .await
    }

    /// Retrieve all revisions of a pension scheme.
    #[instrument(skip(self))]
    pub async fn list_revisions(&self, employer_id: &str, pension_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/Revisions"),
                &[],
            )
            .await
    }

    /// Update a pension scheme, inserting a new revision.
    #[instrument(skip(self, pension))]
    pub async fn update(
        &self,
        employer_id: &str,
        pension_id: &str,
        pension: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/Pension/{pension_id}"),
                &json!({ "Pension": pension }),
            )
            .await
    }

    /// Patch a pension scheme, updating only the supplied fields.
    #[instrument(skip(self, pension))]
    pub async fn patch(
        &self,
        employer_id: &str,
        pension_id: &str,
        pension: &Value,
    ) -> Result<Value> {
        self.client
            .patch(
                &format!("/Employer/{employer_id}/Pension/{pension_id}"),
                &json!({ "Pension": pension }),
            )
            .await
    }

    /// Delete a pension scheme.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, pension_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/Pension/{pension_id}"))
            .await
    }

    /// Retrieve links to all pension schemes of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Pensions"), &[])
            .await
    }
}
