use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{
    common::{MetaData, PayCodeList},
    to_wire,
};
use crate::error::Result;
use crate::utils::wire;

/// A holiday entitlement scheme employees can be enrolled in. Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct HolidayScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Annual entitlement expressed in weeks, e.g. `5.6`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_entitlement_weeks: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_carry_over_days: Option<Decimal>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub allow_negative_balance: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    /// Codes whose values accrue holiday pay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accrual_pay_codes: Option<PayCodeList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl HolidayScheme {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_code(mut self, value: impl Into<String>) -> Self {
        self.code = Some(value.into());
        self
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
    pub fn with_annual_entitlement_weeks(mut self, value: Decimal) -> Self {
        self.annual_entitlement_weeks = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_carry_over_days(mut self, value: Decimal) -> Self {
        self.max_carry_over_days = Some(value);
        self
    }

    #[must_use]
    pub fn with_allow_negative_balance(mut self, value: bool) -> Self {
        self.allow_negative_balance = Some(value);
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_accrual_pay_codes(mut self, value: PayCodeList) -> Self {
        self.accrual_pay_codes = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "HolidayScheme")
    }
}
