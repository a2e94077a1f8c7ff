use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{common::Link, to_wire};
use crate::error::{Error, Result};
use crate::utils::wire;

/// Instruction submitted to the batch processor to calculate a pay run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayRunJobInstruction {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub payment_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub start_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub end_date: Option<Date>,

    /// Supplementary runs re-pay a period outside the normal cycle.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub is_supplementary: Option<bool>,

    /// Link to the pay schedule being calculated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_schedule: Option<Link>,
}

impl PayRunJobInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_payment_date(mut self, value: Date) -> Self {
        self.payment_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, value: Date) -> Self {
        self.start_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, value: Date) -> Self {
        self.end_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_is_supplementary(mut self, value: bool) -> Self {
        self.is_supplementary = Some(value);
        self
    }

    #[must_use]
    pub fn with_pay_schedule(mut self, value: Link) -> Self {
        self.pay_schedule = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        if self.pay_schedule.is_none() {
            return Err(Error::ModelIncomplete {
                model: "PayRunJobInstruction",
            });
        }
        to_wire(self, "PayRunJobInstruction")
    }
}

/// Instruction to request subcontractor verification from HMRC.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CisRequestJobInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_month: Option<i32>,

    /// Link to the employer (contractor) the request is made for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<Link>,
}

impl CisRequestJobInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tax_year(mut self, value: i32) -> Self {
        self.tax_year = Some(value);
        self
    }

    #[must_use]
    pub fn with_tax_month(mut self, value: i32) -> Self {
        self.tax_month = Some(value);
        self
    }

    #[must_use]
    pub fn with_employer(mut self, value: Link) -> Self {
        self.employer = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        if self.employer.is_none() {
            return Err(Error::ModelIncomplete {
                model: "CisRequestJobInstruction",
            });
        }
        to_wire(self, "CisRequestJobInstruction")
    }
}

/// Instruction to file the monthly CIS300 return with HMRC.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CisReturnJobInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_month: Option<i32>,

    /// CIS300 declaration: employment status of all subcontractors reviewed.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub employment_status_declaration: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub verification_declaration: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub information_correct_declaration: Option<bool>,

    /// Marks the return as reporting no payments this month.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub inactivity_declaration: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<Link>,
}

impl CisReturnJobInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tax_year(mut self, value: i32) -> Self {
        self.tax_year = Some(value);
        self
    }

    #[must_use]
    pub fn with_tax_month(mut self, value: i32) -> Self {
        self.tax_month = Some(value);
        self
    }

    #[must_use]
    pub fn with_employment_status_declaration(mut self, value: bool) -> Self {
        self.employment_status_declaration = Some(value);
        self
    }

    #[must_use]
    pub fn with_verification_declaration(mut self, value: bool) -> Self {
        self.verification_declaration = Some(value);
        self
    }

    #[must_use]
    pub fn with_information_correct_declaration(mut self, value: bool) -> Self {
        self.information_correct_declaration = Some(value);
        self
    }

    #[must_use]
    pub fn with_inactivity_declaration(mut self, value: bool) -> Self {
        self.inactivity_declaration = Some(value);
        self
    }

    #[must_use]
    pub fn with_employer(mut self, value: Link) -> Self {
        self.employer = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        if self.employer.is_none() {
            return Err(Error::ModelIncomplete {
                model: "CisReturnJobInstruction",
            });
        }
        to_wire(self, "CisReturnJobInstruction")
    }
}

/// Instruction to synchronise DPS notices from HMRC for an employer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DpsJobInstruction {
    /// Retrieve notices issued on or after this date.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub since_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<Link>,
}

impl DpsJobInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_since_date(mut self, value: Date) -> Self {
        self.since_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_employer(mut self, value: Link) -> Self {
        self.employer = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        if self.employer.is_none() {
            return Err(Error::ModelIncomplete {
                model: "DpsJobInstruction",
            });
        }
        to_wire(self, "DpsJobInstruction")
    }
}

/// Instruction to delete an employer and its entire resource tree.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployerDeletionJobInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<Link>,
}

impl EmployerDeletionJobInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_employer(mut self, value: Link) -> Self {
        self.employer = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        if self.employer.is_none() {
            return Err(Error::ModelIncomplete {
                model: "EmployerDeletionJobInstruction",
            });
        }
        to_wire(self, "EmployerDeletionJobInstruction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn pay_run_job_requires_pay_schedule_link() {
        let job = PayRunJobInstruction::new().with_payment_date(date!(2024 - 04 - 30));
        match job.format() {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, "PayRunJobInstruction"),
            other => panic!("expected ModelIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn cis_return_declarations_render_as_strings() {
        let job = CisReturnJobInstruction::new()
            .with_tax_year(2024)
            .with_tax_month(1)
            .with_employment_status_declaration(true)
            .with_inactivity_declaration(false)
            .with_employer(Link::to("/Employer/ER001"));
        let value = job.format().unwrap();
        assert_eq!(value["EmploymentStatusDeclaration"], "true");
        assert_eq!(value["InactivityDeclaration"], "false");
        assert_eq!(value["TaxYear"], 2024);
    }
}
