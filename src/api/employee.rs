use serde_json::{json, Value};
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for Employee endpoints
#[derive(Debug)]
pub struct EmployeeApi<'a> {
    pub(crate) client: &'a Client,
}

impl EmployeeApi<'_> {
    /// Create a new employee under an employer.
    #[instrument(skip(self, employee))]
    pub async fn create(&self, employer_id: &str, employee: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/Employees"),
                &json!({ "Employee": employee }),
            )
            .await
    }

    /// Retrieve the current revision of an employee.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}"),
                &[],
            )
            .await
    }

    /// Retrieve the employee revision effective on the given date.
    #[instrument(skip(self))]
    pub async fn get_at(
        &self,
        employer_id: &str,
        employee_id: &str,
        effective_date: Date,
    ) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/{date}"),
                &[],
            )
            .await
    }

    /// Retrieve a numbered employee revision.
    #[instrument(skip(self))]
    pub async fn get_revision(
        &self,
        employer_id: &str,
        employee_id: &str,
        revision: u32,
    ) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/Revision/{revision}"),
                &[],
            )
            .await
    }

    /// Retrieve all revisions of an employee.
    #[instrument(skip(self))]
    pub async fn list_revisions(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/Revisions"),
                &[],
            )
            .await
    }

    /// Update an employee, inserting a new revision.
    #[instrument(skip(self, employee))]
    pub async fn update(
        &self,
        employer_id: &str,
        employee_id: &str,
        employee: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!("/Employer/{employer_id}/Employee/{employee_id}"),
                &json!({ "Employee": employee }),
            )
            .await
    }

    /// Patch an employee, updating only the supplied fields.
    #[instrument(skip(self, employee))]
    pub async fn patch(
        &self,
        employer_id: &str,
        employee_id: &str,
        employee: &Value,
    ) -> Result<Value> {
        self.client
            .patch(
                &format!("/Employer/{employer_id}/Employee/{employee_id}"),
                &json!({ "Employee": employee }),
            )
            .await
    }

    /// Delete an employee and all of its child resources.
    #[instrument(skip(self))]
    pub async fn delete(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/Employer/{employer_id}/Employee/{employee_id}"))
            .await
    }

    /// Delete a single employee revision.
    #[instrument(skip(self))]
    pub async fn delete_revision(
        &self,
        employer_id: &str,
        employee_id: &str,
        revision: u32,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Employee/{employee_id}/Revision/{revision}"
            ))
            .await
    }

    /// Retrieve links to all employees of an employer.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str) -> Result<Value> {
        self.client
            .get(&format!("/Employer/{employer_id}/Employees"), &[])
            .await
    }

    /// Retrieve links to the employees employed on the given date.
    #[instrument(skip(self))]
    pub async fn list_at(&self, employer_id: &str, effective_date: Date) -> Result<Value> {
        let date = wire::date_segment(effective_date)?;
        self.client
            .get(&format!("/Employer/{employer_id}/Employees/{date}"), &[])
            .await
    }
}
