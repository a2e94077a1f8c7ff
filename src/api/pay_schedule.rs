use serde_json::{json, Value};

use crate::error::Result;
use crate::Client;

/// API handler for PaySchedule endpoints
#[derive(Debug)]
pub struct PayScheduleApi<'a> {
    pub(crate) client: &'a Client,
}

impl PayScheduleApi<'_> {
    /// Create a new pay schedule under an employer.
    #[instrument(skip(self, pay_schedule))]
    pub async fn create(&self, employer_id: &str, pay_schedule: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/PaySchedules"),
                &json!({ "PaySchedule": pay_schedule }),
            )
            .await
    }

    /// Retrieve a pay schedule.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, pay_schedule_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/PaySchedule/{pay_schedule_id}"),
                &[],
            )
            .await
    }

    /// Update a pay schedule.
    #[instrument(skip(self, pay_schedule))]
    pub async fn update(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        pay_schedule: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/PaySchedule/{pay_schedule_id}"),
                &json!({ "PaySchedule": pay_schedule }),
            )
            .await
    }

    /// Delete a pay schedule.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, pay_schedule_id: &str) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/PaySchedule/{pay_schedule_id}"
            ))
            .await
    }

    /// Retrieve links to all pay schedules of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PaySchedules"), &[])
            .await
    }

    /// Retrieve links to the pay runs calculated under a pay schedule.
    #[instrument(skip(self))]
    pub async fn list_pay_runs(&self, employer_id: &str, pay_schedule_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/PaySchedule/{pay_schedule_id}/PayRuns"),
                &[],
            )
            .await
    }
}
