use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for HolidayScheme endpoints
#[derive(Debug)]
pub struct HolidaySchemeApi<'a> {
    pub(crate) client: &'a Client,
}

impl HolidaySchemeApi<'_> {
    /// Create a new holiday scheme under an employer.
    #[instrument(skip(self, scheme))]
    pub async fn create(&self, employer_id: &str, scheme: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/HolidaySchemes"),
                &json!({ "HolidayScheme": scheme }),
            )
            .await
    }

    /// Retrieve the current revision of a holiday scheme.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, scheme_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}"),
                &[],
            )
            .await
    }

    /// Retrieve the holiday scheme revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_at(
        &self,
        employer_id: &str,
        scheme_id: &str,
        effective_date: Date,
    ) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/{date}"),
                &[],
            )
            .await
    }

    /// Retrieve a numbered holiday scheme revision.
    #[instrument(skip(self))]
    pub async fn get_revision(
        &self,
        employer_id: &str,
        scheme_id: &str,
        revision: u32,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/Revision/{revision}"),
                &[],
            )
            .await
    }

    /// Retrieve all revisions of a holiday scheme.
    #[instrument(skip(self))]
    pub async fn list_revisions(&self, employer_id: &str, scheme_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/Revisions"),
                &[],
            )
            .await
    }

    /// Update a holiday scheme, inserting a new revision.
    #[instrument(skip(self, scheme))]
    pub async fn update(&self, employer_id: &str, scheme_id: &str, scheme: &Value) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}"),
                &json!({ "HolidayScheme": scheme }),
            )
            .await
    }

    /// Delete a holiday scheme.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, scheme_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}"))
            .await
    }

    /// Retrieve links to all holiday schemes of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/HolidaySchemes"), &[])
            .await
    }
}
