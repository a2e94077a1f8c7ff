use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::to_wire;
use crate::error::Result;
use crate::utils::wire;

/// An HMRC Data Provisioning Service notice (P6/P9 tax code changes,
/// student loan start/stop orders). Normally created by the DPS sync job;
/// the write shape exists for manual injection in sandbox testing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DpsMessage {
    /// `P6`, `P9`, `SL1`, `SL2`, `AR`, `NOT` or `RTI`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub issue_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,
}

impl DpsMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_message_type(mut self, value: impl Into<String>) -> Self {
        self.message_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ni_number(mut self, value: impl Into<String>) -> Self {
        self.ni_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_tax_code(mut self, value: impl Into<String>) -> Self {
        self.tax_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_issue_date(mut self, value: Date) -> Self {
        self.issue_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "DpsMessage")
    }
}
