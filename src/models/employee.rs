use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{
    common::{Address, BankAccount, Link, MetaData},
    to_wire,
};
use crate::error::{Error, Result};
use crate::utils::wire;

/// An employee of an employer. Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_number: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub date_of_birth: Option<Date>,

    /// `Male` or `Female`; drives HMRC gender-specific NI categories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// NI contribution liability class, e.g. `HasOtherJob`, `IsFullTime`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_liability: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub start_date: Option<Date>,

    /// RTI starter declaration: `A`, `B` or `C`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starter_declaration: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub leaving_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaver_reason: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub directorship_appointment_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_exclusions: Option<String>,

    /// Pattern of working days, e.g. `MonFri`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_week: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub seconded: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub is_agency_worker: Option<bool>,

    /// Overrides the automatic auto-enrolment assessment outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ae_assessment_override: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub ae_postponement_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ae_exclusion_reason_code: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    /// Link to the pay schedule the employee is paid under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_schedule: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner: Option<EmployeePartner>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl Employee {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_middle_name(mut self, value: impl Into<String>) -> Self {
        self.middle_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_initials(mut self, value: impl Into<String>) -> Self {
        self.initials = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ni_number(mut self, value: impl Into<String>) -> Self {
        self.ni_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_date_of_birth(mut self, value: Date) -> Self {
        self.date_of_birth = Some(value);
        self
    }

    #[must_use]
    pub fn with_gender(mut self, value: impl Into<String>) -> Self {
        self.gender = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_nic_liability(mut self, value: impl Into<String>) -> Self {
        self.nic_liability = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_territory(mut self, value: impl Into<String>) -> Self {
        self.territory = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_start_date(mut self, value: Date) -> Self {
        self.start_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_starter_declaration(mut self, value: impl Into<String>) -> Self {
        self.starter_declaration = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_leaving_date(mut self, value: Date) -> Self {
        self.leaving_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_leaver_reason(mut self, value: impl Into<String>) -> Self {
        self.leaver_reason = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_directorship_appointment_date(mut self, value: Date) -> Self {
        self.directorship_appointment_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_rule_exclusions(mut self, value: impl Into<String>) -> Self {
        self.rule_exclusions = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_working_week(mut self, value: impl Into<String>) -> Self {
        self.working_week = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_hours_per_week(mut self, value: Decimal) -> Self {
        self.hours_per_week = Some(value);
        self
    }

    #[must_use]
    pub fn with_passport_number(mut self, value: impl Into<String>) -> Self {
        self.passport_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_seconded(mut self, value: bool) -> Self {
        self.seconded = Some(value);
        self
    }

    #[must_use]
    pub fn with_is_agency_worker(mut self, value: bool) -> Self {
        self.is_agency_worker = Some(value);
        self
    }

    #[must_use]
    pub fn with_ae_assessment_override(mut self, value: impl Into<String>) -> Self {
        self.ae_assessment_override = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ae_postponement_date(mut self, value: Date) -> Self {
        self.ae_postponement_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_ae_exclusion_reason_code(mut self, value: impl Into<String>) -> Self {
        self.ae_exclusion_reason_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_pay_schedule(mut self, value: Link) -> Self {
        self.pay_schedule = Some(value);
        self
    }

    #[must_use]
    pub fn with_address(mut self, value: Address) -> Self {
        self.address = Some(value);
        self
    }

    #[must_use]
    pub fn with_bank_account(mut self, value: BankAccount) -> Self {
        self.bank_account = Some(value);
        self
    }

    #[must_use]
    pub fn with_partner(mut self, value: EmployeePartner) -> Self {
        self.partner = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    /// Produces the wire map. The address and the pay schedule link are
    /// nested unconditionally in the wire shape, so both must be populated.
    pub fn format(&self) -> Result<Value> {
        if self.address.is_none() || self.pay_schedule.is_none() {
            return Err(Error::ModelIncomplete { model: "Employee" });
        }
        to_wire(self, "Employee")
    }
}

/// Partner details, needed for statutory shared parental pay claims.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeePartner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_number: Option<String>,
}

impl EmployeePartner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_middle_name(mut self, value: impl Into<String>) -> Self {
        self.middle_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_initials(mut self, value: impl Into<String>) -> Self {
        self.initials = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ni_number(mut self, value: impl Into<String>) -> Self {
        self.ni_number = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "EmployeePartner")
    }
}

/// A court-issued attachment of earnings order against an employee.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttachmentOrder {
    /// Order type, e.g. `CouncilTax`, `ChildMaintenance`, `DirectEarnings`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_authority: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub issue_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub received_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub cease_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_debt: Option<Decimal>,

    /// Minimum net pay the employee must retain each period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_earnings: Option<Decimal>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub always_deduct_in_full: Option<bool>,
}

impl AttachmentOrder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sub_type(mut self, value: impl Into<String>) -> Self {
        self.sub_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_reference(mut self, value: impl Into<String>) -> Self {
        self.reference = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_issuing_authority(mut self, value: impl Into<String>) -> Self {
        self.issuing_authority = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_issue_date(mut self, value: Date) -> Self {
        self.issue_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_received_date(mut self, value: Date) -> Self {
        self.received_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_cease_date(mut self, value: Date) -> Self {
        self.cease_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_initial_debt(mut self, value: Decimal) -> Self {
        self.initial_debt = Some(value);
        self
    }

    #[must_use]
    pub fn with_protected_earnings(mut self, value: Decimal) -> Self {
        self.protected_earnings = Some(value);
        self
    }

    #[must_use]
    pub fn with_always_deduct_in_full(mut self, value: bool) -> Self {
        self.always_deduct_in_full = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "AttachmentOrder")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn format_requires_address_and_pay_schedule() {
        let employee = Employee::new()
            .with_first_name("Terri")
            .with_address(Address::new().with_address1("1 High Street"));
        match employee.format() {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, "Employee"),
            other => panic!("expected ModelIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn format_nests_models_recursively() {
        let employee = Employee::new()
            .with_first_name("Terri")
            .with_last_name("Tester")
            .with_start_date(date!(2024 - 01 - 01))
            .with_seconded(false)
            .with_address(Address::new().with_address1("1 High Street"))
            .with_pay_schedule(Link::to("/Employer/ER001/PaySchedule/SCH001"));

        let value = employee.format().unwrap();
        assert_eq!(value["StartDate"], "2024-01-01");
        assert_eq!(value["Seconded"], "false");
        assert_eq!(
            value["PaySchedule"]["@href"],
            "/Employer/ER001/PaySchedule/SCH001"
        );
        assert_eq!(value["Address"]["Address1"], "1 High Street");
    }

    #[test]
    fn setters_keep_explicit_falsy_values() {
        // An explicitly supplied `false` must survive into the wire map.
        let order = AttachmentOrder::new().with_always_deduct_in_full(false);
        let value = order.format().unwrap();
        assert_eq!(value["AlwaysDeductInFull"], "false");
    }
}
