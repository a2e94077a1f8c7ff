use serde_json::Value;

use crate::error::Result;
use crate::Client;

/// API handler for PayRun endpoints.
///
/// Pay runs are created through the batch jobs API, never directly; this
/// group only reads and deletes calculated runs.
#[derive(Debug)]
pub struct PayRunApi<'a> {
    pub(crate) client: &'a Client,
}

impl PayRunApi<'_> {
    /// Retrieve a pay run.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        pay_run_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/PaySchedule/{pay_schedule_id}/PayRun/{pay_run_id}"
                ),
                &[],
            )
            .await
    }

    /// Delete a pay run and its calculated results.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        pay_run_id: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/PaySchedule/{pay_schedule_id}/PayRun/{pay_run_id}"
            ))
            .await
    }

    /// Retrieve links to the pay slips produced by a pay run.
    #[instrument(skip(self))]
    pub async fn list_pay_slips(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        pay_run_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/PaySchedule/{pay_schedule_id}/PayRun/{pay_run_id}/PaySlips"
                ),
                &[],
            )
            .await
    }

    /// Retrieve a single pay slip.
    #[instrument(skip(self))]
    pub async fn get_pay_slip(&self, employer_id: &str, pay_slip_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PaySlip/{pay_slip_id}"), &[])
            .await
    }

    /// Retrieve links to the employees paid in a pay run.
    #[instrument(skip(self))]
    pub async fn list_employees(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        pay_run_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/PaySchedule/{pay_schedule_id}/PayRun/{pay_run_id}/Employees"
                ),
                &[],
            )
            .await
    }

    /// Retrieve links to the pay runs an employee was included in.
    #[instrument(skip(self))]
    pub async fn list_for_employee(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/PayRuns"),
                &[],
            )
            .await
    }
}
