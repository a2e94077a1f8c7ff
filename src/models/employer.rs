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

/// An employer, the root of the resource hierarchy. Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employer {
    /// Legal name of the employer (max 100 chars).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tax regime region, e.g. `England`, `Scotland`, `Wales`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Tax calculation territory, e.g. `UnitedKingdom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs_service_user_number: Option<BacsServiceUserNumber>,

    /// Comma separated calculation rules to exclude for this employer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_exclusions: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub claim_employment_allowance: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub claim_small_employer_relief: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apprenticeship_levy_allowance: Option<Decimal>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmrc_settings: Option<HmrcSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_enrolment: Option<EmployerAutoEnrolment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl Employer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
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
    pub fn with_bacs_service_user_number(mut self, value: BacsServiceUserNumber) -> Self {
        self.bacs_service_user_number = Some(value);
        self
    }

    #[must_use]
    pub fn with_rule_exclusions(mut self, value: impl Into<String>) -> Self {
        self.rule_exclusions = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_claim_employment_allowance(mut self, value: bool) -> Self {
        self.claim_employment_allowance = Some(value);
        self
    }

    #[must_use]
    pub fn with_claim_small_employer_relief(mut self, value: bool) -> Self {
        self.claim_small_employer_relief = Some(value);
        self
    }

    #[must_use]
    pub fn with_apprenticeship_levy_allowance(mut self, value: Decimal) -> Self {
        self.apprenticeship_levy_allowance = Some(value);
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_hmrc_settings(mut self, value: HmrcSettings) -> Self {
        self.hmrc_settings = Some(value);
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
    pub fn with_auto_enrolment(mut self, value: EmployerAutoEnrolment) -> Self {
        self.auto_enrolment = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    /// Produces the wire map. The address and bank account are nested
    /// unconditionally in the wire shape, so both must be populated.
    pub fn format(&self) -> Result<Value> {
        if self.address.is_none() || self.bank_account.is_none() {
            return Err(Error::ModelIncomplete { model: "Employer" });
        }
        to_wire(self, "Employer")
    }
}

/// BACS submission identity for an employer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BacsServiceUserNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_user_number: Option<String>,
}

impl BacsServiceUserNumber {
    #[must_use]
    pub fn new(service_user_number: impl Into<String>) -> Self {
        Self {
            service_user_number: Some(service_user_number.into()),
        }
    }
}

/// HMRC gateway credentials and tax office references.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HmrcSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_office_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_office_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accounting_office_reference: Option<String>,
    /// Sender classification for RTI submissions, e.g. `Employer`, `Bureau`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(rename = "SenderId", skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_telephone: Option<String>,
}

impl HmrcSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tax_office_number(mut self, value: impl Into<String>) -> Self {
        self.tax_office_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_tax_office_reference(mut self, value: impl Into<String>) -> Self {
        self.tax_office_reference = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_accounting_office_reference(mut self, value: impl Into<String>) -> Self {
        self.accounting_office_reference = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_sender(mut self, value: impl Into<String>) -> Self {
        self.sender = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_sender_id(mut self, value: impl Into<String>) -> Self {
        self.sender_id = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_password(mut self, value: impl Into<String>) -> Self {
        self.password = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_contact_first_name(mut self, value: impl Into<String>) -> Self {
        self.contact_first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_contact_last_name(mut self, value: impl Into<String>) -> Self {
        self.contact_last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_contact_email(mut self, value: impl Into<String>) -> Self {
        self.contact_email = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_contact_telephone(mut self, value: impl Into<String>) -> Self {
        self.contact_telephone = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "HmrcSettings")
    }
}

/// Workplace pension auto-enrolment configuration for an employer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployerAutoEnrolment {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub staging_date: Option<Date>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub postponement_date: Option<Date>,

    /// Day-of-month offset applied when calculating cyclical re-enrolment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_enrolment_day_offset: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub re_enrolment_month_offset: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_telephone: Option<String>,

    /// Link to the pension scheme used for auto-enrolled employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pension: Option<Link>,
}

impl EmployerAutoEnrolment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_staging_date(mut self, value: Date) -> Self {
        self.staging_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_postponement_date(mut self, value: Date) -> Self {
        self.postponement_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_re_enrolment_day_offset(mut self, value: i32) -> Self {
        self.re_enrolment_day_offset = Some(value);
        self
    }

    #[must_use]
    pub fn with_re_enrolment_month_offset(mut self, value: i32) -> Self {
        self.re_enrolment_month_offset = Some(value);
        self
    }

    #[must_use]
    pub fn with_primary_first_name(mut self, value: impl Into<String>) -> Self {
        self.primary_first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_primary_last_name(mut self, value: impl Into<String>) -> Self {
        self.primary_last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_primary_email(mut self, value: impl Into<String>) -> Self {
        self.primary_email = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_primary_telephone(mut self, value: impl Into<String>) -> Self {
        self.primary_telephone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_secondary_first_name(mut self, value: impl Into<String>) -> Self {
        self.secondary_first_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_secondary_last_name(mut self, value: impl Into<String>) -> Self {
        self.secondary_last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_secondary_email(mut self, value: impl Into<String>) -> Self {
        self.secondary_email = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_secondary_telephone(mut self, value: impl Into<String>) -> Self {
        self.secondary_telephone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pension(mut self, value: Link) -> Self {
        self.pension = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "EmployerAutoEnrolment")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn format_requires_address_and_bank_account() {
        let employer = Employer::new().with_name("Acme Ltd");
        match employer.format() {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, "Employer"),
            other => panic!("expected ModelIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn format_renders_wire_conventions() {
        let employer = Employer::new()
            .with_name("Acme Ltd")
            .with_region("England")
            .with_claim_employment_allowance(true)
            .with_effective_date(date!(2024 - 04 - 06))
            .with_address(Address::new().with_address1("1 High Street"))
            .with_bank_account(
                BankAccount::new()
                    .with_account_name("Acme Ltd")
                    .with_account_number("12345678")
                    .with_sort_code("401010"),
            );

        let value = employer.format().unwrap();
        assert_eq!(value["Name"], "Acme Ltd");
        assert_eq!(value["ClaimEmploymentAllowance"], "true");
        assert_eq!(value["EffectiveDate"], "2024-04-06");
        assert_eq!(value["Address"]["Address1"], "1 High Street");
        assert_eq!(value["BankAccount"]["SortCode"], "401010");
    }
}
