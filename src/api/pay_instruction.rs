use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for PayInstruction and PayLine endpoints
#[derive(Debug)]
pub struct PayInstructionApi<'a> {
    pub(crate) client: &'a Client,
}

impl PayInstructionApi<'_> {
    /// Create a pay instruction for an employee. The wrapper key must match
    /// the instruction type, so the caller passes it explicitly, e.g.
    /// `create("ER001", "EE001", "SalaryInstruction", &body)`.
    #[instrument(skip(self, instruction))]
    pub async fn create(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_type: &str,
        instruction: &Value,
    ) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/PayInstructions"),
                &json!({ instruction_type: instruction }),
            )
            .await
    }

    /// Retrieve a pay instruction.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}"
                ),
                &[],
            )
            .await
    }

    /// Update a pay instruction.
    #[instrument(skip(self, instruction))]
    pub async fn update(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
        instruction_type: &str,
        instruction: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}"
                ),
                &json!({ instruction_type: instruction }),
            )
            .await
    }

    /// Delete a pay instruction.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}"
            ))
            .await
    }

    /// Retrieve links to an employee's pay instructions, optionally only
    /// those active on a given date.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        employer_id: &str,
        employee_id: &str,
        active_on: Option<Date>,
    ) -> Result<Value> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(active_on) = active_on {
            query.push(("ActiveOn", wire::date_segment(active_on)?));
        }
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/PayInstructions"),
                &query,
            )
            .await
    }

    /// Retrieve links to an employee's calculated pay lines.
    #[instrument(skip(self))]
    pub async fn list_pay_lines(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/PayLines"),
                &[],
            )
            .await
    }

    /// Retrieve a single calculated pay line.
    #[instrument(skip(self))]
    pub async fn get_pay_line(
        &self,
        employer_id: &str,
        employee_id: &str,
        pay_line_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/PayLine/{pay_line_id}"),
                &[],
            )
            .await
    }
}
