use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{
    common::{BankAccount, MetaData, PayCodeList},
    to_wire,
};
use crate::error::{Error, Result};
use crate::utils::wire;

/// A workplace pension scheme belonging to an employer. Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_employer_ref: Option<String>,

    /// `NetPayArrangement` or `ReliefAtSource`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxation_method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_contribution_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_contribution_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_contribution_cash: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_contribution_cash: Option<Decimal>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub salary_sacrifice: Option<bool>,

    /// Auto-enrolment qualifying scheme flag.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub qualifying_scheme: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    /// Codes whose values count towards pensionable pay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pensionable_pay_codes: Option<PayCodeList>,

    /// Account contributions are collected from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl Pension {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_scheme_name(mut self, value: impl Into<String>) -> Self {
        self.scheme_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_provider_name(mut self, value: impl Into<String>) -> Self {
        self.provider_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_provider_employer_ref(mut self, value: impl Into<String>) -> Self {
        self.provider_employer_ref = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_taxation_method(mut self, value: impl Into<String>) -> Self {
        self.taxation_method = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, value: impl Into<String>) -> Self {
        self.group = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_sub_group(mut self, value: impl Into<String>) -> Self {
        self.sub_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_employee_contribution_percent(mut self, value: Decimal) -> Self {
        self.employee_contribution_percent = Some(value);
        self
    }

    #[must_use]
    pub fn with_employer_contribution_percent(mut self, value: Decimal) -> Self {
        self.employer_contribution_percent = Some(value);
        self
    }

    #[must_use]
    pub fn with_employee_contribution_cash(mut self, value: Decimal) -> Self {
        self.employee_contribution_cash = Some(value);
        self
    }

    #[must_use]
    pub fn with_employer_contribution_cash(mut self, value: Decimal) -> Self {
        self.employer_contribution_cash = Some(value);
        self
    }

    #[must_use]
    pub fn with_salary_sacrifice(mut self, value: bool) -> Self {
        self.salary_sacrifice = Some(value);
        self
    }

    #[must_use]
    pub fn with_qualifying_scheme(mut self, value: bool) -> Self {
        self.qualifying_scheme = Some(value);
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_pensionable_pay_codes(mut self, value: PayCodeList) -> Self {
        self.pensionable_pay_codes = Some(value);
        self
    }

    #[must_use]
    pub fn with_bank_account(mut self, value: BankAccount) -> Self {
        self.bank_account = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    /// Produces the wire map. The provider bank account is nested
    /// unconditionally in the wire shape, so it must be populated.
    pub fn format(&self) -> Result<Value> {
        if self.bank_account.is_none() {
            return Err(Error::ModelIncomplete { model: "Pension" });
        }
        to_wire(self, "Pension")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_requires_bank_account() {
        let pension = Pension::new().with_scheme_name("Group Scheme");
        match pension.format() {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, "Pension"),
            other => panic!("expected ModelIncomplete, got {other:?}"),
        }
    }

    #[test]
    fn pensionable_pay_codes_wrap_under_singular_key() {
        let pension = Pension::new()
            .with_scheme_name("Group Scheme")
            .with_pensionable_pay_codes(PayCodeList::new(["BASIC", "OT1"]))
            .with_bank_account(BankAccount::new().with_account_number("12345678"));
        let value = pension.format().unwrap();
        assert_eq!(
            value["PensionablePayCodes"],
            serde_json::json!({"PayCode": ["BASIC", "OT1"]})
        );
    }
}
