use serde_json::{json, Value};

use crate::error::Result;
use crate::Client;

/// API handler for batch job endpoints.
///
/// Long-running operations (pay run calculation, CIS submissions, DPS
/// synchronisation, employer deletion) are queued as jobs and polled for
/// completion. `job_kind` in the generic methods is the queue segment:
/// `PayRuns`, `Cis`, `Dps` or `Employers`.
#[derive(Debug)]
pub struct JobsApi<'a> {
    pub(crate) client: &'a Client,
}

impl JobsApi<'_> {
    /// Queue a pay run calculation job.
    #[instrument(skip(self, instruction))]
    pub async fn create_pay_run_job(&self, instruction: &Value) -> Result<Value> {
        self.client
            .post(
                "/Jobs/PayRuns",
                &json!({ "PayRunJobInstruction": instruction }),
            )
            .await
    }

    /// Queue a CIS subcontractor verification request job.
    #[instrument(skip(self, instruction))]
    pub async fn create_cis_request_job(&self, instruction: &Value) -> Result<Value> {
        self.client
            .post(
                "/Jobs/Cis",
                &json!({ "CisRequestJobInstruction": instruction }),
            )
            .await
    }

    /// Queue a CIS300 monthly return job.
    #[instrument(skip(self, instruction))]
    pub async fn create_cis_return_job(&self, instruction: &Value) -> Result<Value> {
        self.client
            .post(
                "/Jobs/Cis",
                &json!({ "CisReturnJobInstruction": instruction }),
            )
            .await
    }

    /// Queue a DPS notice synchronisation job.
    #[instrument(skip(self, instruction))]
    pub async fn create_dps_job(&self, instruction: &Value) -> Result<Value> {
        self.client
            .post("/Jobs/Dps", &json!({ "DpsJobInstruction": instruction }))
            .await
    }

    /// Queue an employer deletion job.
    #[instrument(skip(self, instruction))]
    pub async fn create_employer_deletion_job(&self, instruction: &Value) -> Result<Value> {
        self.client
            .post(
                "/Jobs/Employers",
                &json!({ "EmployerDeletionJobInstruction": instruction }),
            )
            .await
    }

    /// Retrieve a job.
    #[instrument(skip(self))]
    pub async fn get(&self, job_kind: &str, job_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Jobs/{job_kind}/{job_id}"), &[])
            .await
    }

    /// Retrieve a job's execution status.
    #[instrument(skip(self))]
    pub async fn get_status(&self, job_kind: &str, job_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Jobs/{job_kind}/{job_id}/Status"), &[])
            .await
    }

    /// Retrieve a job's progress detail.
    #[instrument(skip(self))]
    pub async fn get_progress(&self, job_kind: &str, job_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Jobs/{job_kind}/{job_id}/Progress"), &[])
            .await
    }

    /// Retrieve links to all queued jobs of a kind.
    #[instrument(skip(self))]
    pub async fn list(&self, job_kind: &str) -> Result<Value> {
        self.client.get(&format!("/Jobs/{job_kind}"), &[]).await
    }

    /// Delete a job from the queue.
    #[instrument(skip(self))]
    pub async fn delete(&self, job_kind: &str, job_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Jobs/{job_kind}/{job_id}"))
            .await
    }
}
