use serde_json::Value;

use crate::error::Result;
use crate::Client;

/// API handler for tag endpoints.
///
/// Most resources are taggable with free-form labels. Tags are pure path
/// resources: putting `/Tag/{tag}` attaches, deleting it detaches, and
/// `/Tags` lists what is attached.
#[derive(Debug)]
pub struct TaggingApi<'a> {
    pub(crate) client: &'a Client,
}

impl TaggingApi<'_> {
    /// Attach a tag to an employer.
    #[instrument(skip(self))]
    pub async fn tag_employer(&self, employer_id: &str, tag: &str) -> Result<Value> {
        self.client
            .put(&format!("/Employer/{employer_id}/Tag/{tag}"), &Value::Null)
            .await
    }

    /// Retrieve an employer tag.
    #[instrument(skip(self))]
    pub async fn get_employer_tag(&self, employer_id: &str, tag: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Tag/{tag}"), &[])
            .await
    }

    /// Retrieve all tags attached to an employer.
    #[instrument(skip(self))]
    pub async fn list_employer_tags(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Tags"), &[])
            .await
    }

    /// Detach a tag from an employer.
    #[instrument(skip(self))]
    pub async fn untag_employer(&self, employer_id: &str, tag: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/Tag/{tag}"))
            .await
    }

    /// Retrieve links to all employers carrying a tag.
    #[instrument(skip(self))]
    pub async fn list_employers_with_tag(&self, tag: &str) -> Result<Value> {
        self.client.get(&format!("/Employers/Tag/{tag}"), &[]).await
    }

    /// Attach a tag to an employee.
    #[instrument(skip(self))]
    pub async fn tag_employee(
        &self,
        employer_id: &str,
        employee_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/Tag/{tag}"),
                &Value::Null,
            )
            .await
    }

    /// Retrieve an employee tag.
    #[instrument(skip(self))]
    pub async fn get_employee_tag(
        &self,
        employer_id: &str,
        employee_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/Tag/{tag}"),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to an employee.
    #[instrument(skip(self))]
    pub async fn list_employee_tags(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/Tags"),
                &[],
            )
            .await
    }

    /// Detach a tag from an employee.
    #[instrument(skip(self))]
    pub async fn untag_employee(
        &self,
        employer_id: &str,
        employee_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Employee/{employee_id}/Tag/{tag}"
            ))
            .await
    }

    /// Retrieve links to all employees of an employer carrying a tag.
    #[instrument(skip(self))]
    pub async fn list_employees_with_tag(&self, employer_id: &str, tag: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Employees/Tag/{tag}"), &[])
            .await
    }

    /// Attach a tag to a pay code.
    #[instrument(skip(self))]
    pub async fn tag_pay_code(&self, employer_id: &str, code: &str, tag: &str) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/PayCode/{code}/Tag/{tag}"),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a pay code tag.
    #[instrument(skip(self))]
    pub async fn get_pay_code_tag(&self, employer_id: &str, code: &str, tag: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PayCode/{code}/Tag/{tag}"), &[])
            .await
    }

    /// Retrieve all tags attached to a pay code.
    #[instrument(skip(self))]
    pub async fn list_pay_code_tags(&self, employer_id: &str, code: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/PayCode/{code}/Tags"), &[])
            .await
    }

    /// Detach a tag from a pay code.
    #[instrument(skip(self))]
    pub async fn untag_pay_code(&self, employer_id: &str, code: &str, tag: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/PayCode/{code}/Tag/{tag}"))
            .await
    }

    /// Attach a tag to a pay instruction.
    #[instrument(skip(self))]
    pub async fn tag_pay_instruction(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .put(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}/Tag/{tag}"
                ),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a pay instruction tag.
    #[instrument(skip(self))]
    pub async fn get_pay_instruction_tag(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}/Tag/{tag}"
                ),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to a pay instruction.
    #[instrument(skip(self))]
    pub async fn list_pay_instruction_tags(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}/Tags"
                ),
                &[],
            )
            .await
    }

    /// Detach a tag from a pay instruction.
    #[instrument(skip(self))]
    pub async fn untag_pay_instruction(
        &self,
        employer_id: &str,
        employee_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Employee/{employee_id}/PayInstruction/{instruction_id}/Tag/{tag}"
            ))
            .await
    }

    /// Attach a tag to a pension scheme.
    #[instrument(skip(self))]
    pub async fn tag_pension(&self, employer_id: &str, pension_id: &str, tag: &str) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/Tag/{tag}"),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a pension scheme tag.
    #[instrument(skip(self))]
    pub async fn get_pension_tag(
        &self,
        employer_id: &str,
        pension_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/Tag/{tag}"),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to a pension scheme.
    #[instrument(skip(self))]
    pub async fn list_pension_tags(&self, employer_id: &str, pension_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Pension/{pension_id}/Tags"),
                &[],
            )
            .await
    }

    /// Detach a tag from a pension scheme.
    #[instrument(skip(self))]
    pub async fn untag_pension(
        &self,
        employer_id: &str,
        pension_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Pension/{pension_id}/Tag/{tag}"
            ))
            .await
    }

    /// Attach a tag to a holiday scheme.
    #[instrument(skip(self))]
    pub async fn tag_holiday_scheme(
        &self,
        employer_id: &str,
        scheme_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/Tag/{tag}"),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a holiday scheme tag.
    #[instrument(skip(self))]
    pub async fn get_holiday_scheme_tag(
        &self,
        employer_id: &str,
        scheme_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/Tag/{tag}"),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to a holiday scheme.
    #[instrument(skip(self))]
    pub async fn list_holiday_scheme_tags(
        &self,
        employer_id: &str,
        scheme_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/HolidayScheme/{scheme_id}/Tags"),
                &[],
            )
            .await
    }

    /// Detach a tag from a holiday scheme.
    #[instrument(skip(self))]
    pub async fn untag_holiday_scheme(
        &self,
        employer_id: &str,
        scheme_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/HolidayScheme/{scheme_id}/Tag/{tag}"
            ))
            .await
    }

    /// Attach a tag to a subcontractor.
    #[instrument(skip(self))]
    pub async fn tag_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Tag/{tag}"),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a subcontractor tag.
    #[instrument(skip(self))]
    pub async fn get_sub_contractor_tag(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Tag/{tag}"),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to a subcontractor.
    #[instrument(skip(self))]
    pub async fn list_sub_contractor_tags(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Tags"),
                &[],
            )
            .await
    }

    /// Detach a tag from a subcontractor.
    #[instrument(skip(self))]
    pub async fn untag_sub_contractor(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/Tag/{tag}"
            ))
            .await
    }

    /// Attach a tag to a CIS instruction.
    #[instrument(skip(self))]
    pub async fn tag_cis_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .put(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}/Tag/{tag}"
                ),
                &Value::Null,
            )
            .await
    }

    /// Retrieve a CIS instruction tag.
    #[instrument(skip(self))]
    pub async fn get_cis_instruction_tag(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}/Tag/{tag}"
                ),
                &[],
            )
            .await
    }

    /// Retrieve all tags attached to a CIS instruction.
    #[instrument(skip(self))]
    pub async fn list_cis_instruction_tags(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
    ) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}/Tags"
                ),
                &[],
            )
            .await
    }

    /// Detach a tag from a CIS instruction.
    #[instrument(skip(self))]
    pub async fn untag_cis_instruction(
        &self,
        employer_id: &str,
        sub_contractor_id: &str,
        instruction_id: &str,
        tag: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/SubContractor/{sub_contractor_id}/CisInstruction/{instruction_id}/Tag/{tag}"
            ))
            .await
    }
}
