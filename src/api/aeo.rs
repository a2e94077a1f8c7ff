use serde_json::{json, Value};

use crate::error::Result;
use crate::Client;

/// API handler for attachment of earnings order endpoints
#[derive(Debug)]
pub struct AttachmentOrderApi<'a> {
    pub(crate) client: &'a Client,
}

impl AttachmentOrderApi<'_> {
    /// Create an attachment order against an employee.
    #[instrument(skip(self, order))]
    pub async fn create(&self, employer_id: &str, employee_id: &str, order: &Value) -> Result<Value> {
        self.client
            .post(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/AttachmentOrders"),
                &json!({ "AttachmentOrder": order }),
            )
            .await
    }

    /// Retrieve an attachment order.
    #[instrument(skip(self))]
    pub async fn get(&self, employer_id: &str, employee_id: &str, order_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/AttachmentOrder/{order_id}"
                ),
                &[],
            )
            .await
    }

    /// Update an attachment order.
    #[instrument(skip(self, order))]
    pub async fn update(
        &self,
        employer_id: &str,
        employee_id: &str,
        order_id: &str,
        order: &Value,
    ) -> Result<Value> {
        self.client
            .put(
                &format!(
                    "/Employer/{employer_id}/Employee/{employee_id}/AttachmentOrder/{order_id}"
                ),
                &json!({ "AttachmentOrder": order }),
            )
            .await
    }

    /// Delete an attachment order.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        employer_id: &str,
        employee_id: &str,
        order_id: &str,
    ) -> Result<Value> {
        self.client
            .delete(&format!(
                "/Employer/{employer_id}/Employee/{employee_id}/AttachmentOrder/{order_id}"
            ))
            .await
    }

    /// Retrieve links to all attachment orders against an employee.
    #[instrument(skip(self))]
    pub async fn list(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        self.client
            .get(
                &format!("/Employer/{employer_id}/Employee/{employee_id}/AttachmentOrders"),
                &[],
            )
            .await
    }
}
