use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for Employer endpoints
#[derive(Debug)]
pub struct EmployerApi<'a> {
    pub(crate) client: &'a Client,
}

impl EmployerApi<'_> {
    /// Create a new employer.
    #[instrument(skip(self, employer))]
    pub async fn create(&self, employer: &Value) -> Result<Value> {
        self.client
            .post("/Employers", &json!({ "Employer": employer }))
            .await
    }

    /// Retrieve the current revision of an employer.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}"), &[])
            .await
    }

    /// Retrieve the employer revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_at(&self, employer_id: &str, effective_date: Date) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(&format!("/Employer/{employer_id}/{date}"), &[])
            .await
    }

    /// Retrieve a numbered employer revision.
    #[instrument(skip(self))]
    pub async fn get_revision(&self, employer_id: &str, revision: u32) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Revision/{revision}"), &[])
            .await
    }

    /// Retrieve all revisions of an employer.
    #[instrument(skip(self))]
    pub async fn list_revisions(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Revisions"), &[])
            .await
    }

    /// Update an employer, inserting a new revision.
    #[instrument(skip(self, employer))]
    pub async fn update(&self, employer_id: &str, employer: &Value) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}"),
                &json!({ "Employer": employer }),
            )
            .await
    }

    /// Patch an employer, updating only the supplied fields.
    #[instrument(skip(self, employer))]
    pub async fn patch(&self, employer_id: &str, employer: &Value) -> Result<Value> {
        self.client
            .patch(
                &format!("/Employer/{employer_id}"),
                &json!({ "Employer": employer }),
            )
            .await
    }

    /// Delete an employer and all of its child resources.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str) -> Result<Value> {
        self.client.delete(&format!("/Employer/{employer_id}")).await
    }

    /// Delete a single employer revision.
    #[instrument(skip(self))]
    pub async fn delete_revision(&self, employer_id: &str, revision: u32) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/Revision/{revision}"))
            .await
    }

    /// Retrieve links to all employers.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Value> {
        self.client.get("/Employers", &[]).await
    }
}
