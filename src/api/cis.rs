use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for Construction Industry Scheme endpoints: subcontractors,
/// CIS instructions, calculated CIS lines and line types.
#[derive(Debug)]
pub struct CisApi<'a> {
    pub(crate) client: &'a Client,
}

impl CisApi<'_> {
    /// Create a subcontractor under an employer (contractor).
    #[instrument(skip(self, sub_contractor))]
    pub async fn create_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor: &Value,
    ) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/SubContractors"),
                &json!({ "SubContractor": sub_contractor }),
            )
            .await
    }

    /// Retrieve the current revision of a subcontractor.
    #[instrument(skip(self))]
    pub async fn get_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}"),
                &[],
            )
            .await
    }

    /// Retrieve the subcontractor revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_sub_contractor_at(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        effective_date: Date,
    ) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/{date}"),
                &[],
            )
            .await
    }

    /// Retrieve a numbered subcontractor revision.
    #[instrument(skip(self))]
    pub async fn get_sub_contractor_revision(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        revision: u32,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Revision/{revision}"
                ),
                &[],
            )
            .await
    }

    /// Retrieve all revisions of a subcontractor.
    #[instrument(skip(self))]
    pub async fn list_sub_contractor_revisions(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Revisions"),
                &[],
            )
            .await
    }

    /// Update a subcontractor, inserting a new revision.
    #[instrument(skip(self, sub_contractor))]
    pub async fn update_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        sub_contractor: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}"),
                &json!({ "SubContractor": sub_contractor }),
            )
            .await
    }

    /// Delete a subcontractor.
    #[instrument(skip(self))]
    pub async fn delete_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/SubContractor/{sub_contractor_id}"
            ))
            .await
    }

    /// Retrieve links to all subcontractors of an employer.
    #[instrument(skip(self))]
    pub async fn list_sub_contractors(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/SubContractors"), &[])
            .await
    }

    /// Create a CIS instruction against a subcontractor.
    #[instrument(skip(self, instruction))]
    pub async fn create_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction: &Value,
    ) -> Result<Value> {
        self.client
            .post(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstructions"
                ),
                &json!({ "CisInstruction": instruction }),
            )
            .await
    }

    /// Retrieve a CIS instruction.
    #[instrument(skip(self))]
    pub async fn get_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}"
                ),
                &[],
            )
            .await
    }

    /// Update a CIS instruction.
    #[instrument(skip(self, instruction))]
    pub async fn update_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
        instruction: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}"
                ),
                &json!({ "CisInstruction": instruction }),
            )
            .await
    }

    /// Delete a CIS instruction.
    #[instrument(skip(self))]
    pub async fn delete_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}"
            ))
            .await
    }

    /// Retrieve links to a subcontractor's CIS instructions.
    #[instrument(skip(self))]
    pub async fn list_instructions(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstructions"
                ),
                &[],
            )
            .await
    }

    /// Retrieve a calculated CIS line.
    #[instrument(skip(self))]
    pub async fn get_line(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        line_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisLine/{line_id}"
                ),
                &[],
            )
            .await
    }

    /// Retrieve links to a subcontractor's calculated CIS lines.
    #[instrument(skip(self))]
    pub async fn list_lines(&self, employer_id: &str, sub_contractor_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisLines"),
                &[],
            )
            .await
    }

    /// Retrieve a CIS transaction (verification request or CIS300 return).
    #[instrument(skip(self))]
    pub async fn get_transaction(&self, employer_id: &str, transaction_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/CisTransaction/{transaction_id}"),
                &[],
            )
            .await
    }

    /// Retrieve links to all CIS transactions of an employer.
    #[instrument(skip(self))]
    pub async fn list_transactions(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/CisTransactions"), &[])
            .await
    }

    /// Create a CIS line type under an employer.
    #[instrument(skip(self, line_type))]
    pub async fn create_line_type(&self, employer_id: &str, line_type: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/CisLineTypes"),
                &json!({ "CisLineType": line_type }),
            )
            .await
    }

    /// Retrieve a CIS line type.
    #[instrument(skip(self))]
    pub async fn get_line_type(&self, employer_id: &str, line_type_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/CisLineType/{line_type_id}"),
                &[],
            )
            .await
    }

    /// Update a CIS line type.
    #[instrument(skip(self, line_type))]
    pub async fn update_line_type(
        &self,
        employer_id: &str,
        line_type_id: &str,
        line_type: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/CisLineType/{line_type_id}"),
                &json!({ "CisLineType": line_type }),
            )
            .await
    }

    /// Delete a CIS line type.
    #[instrument(skip(self))]
    pub async fn delete_line_type(&self, employer_id: &str, line_type_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/CisLineType/{line_type_id}"))
            .await
    }

    /// Retrieve links to all CIS line types of an employer.
    #[instrument(skip(self))]
    pub async fn list_line_types(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/CisLineTypes"), &[])
            .await
    }
}
