use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{
    common::{Address, MetaData},
    to_wire,
};
use crate::error::{Error, Result};
use crate::utils::wire;

/// A CIS subcontractor engaged by an employer (contractor). Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubContractor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_name: Option<String>,

    /// `SoleTrader`, `Partnership`, `Company` or `Trust`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(rename = "Utr", skip_serializing_if = "Option::is_none")]
    pub utr: Option<String>,

    #[serde(rename = "Crn", skip_serializing_if = "Option::is_none")]
    pub company_registration_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ni_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub partnership_name: Option<String>,

    #[serde(rename = "PartnershipUtr", skip_serializing_if = "Option::is_none")]
    pub partnership_utr: Option<String>,

    /// Assigned by HMRC during verification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_number: Option<String>,

    /// `Gross`, `NetOfStandardDeduction` or `NetOfHigherDeduction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxation_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl SubContractor {
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
    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_trading_name(mut self, value: impl Into<String>) -> Self {
        self.trading_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_business_type(mut self, value: impl Into<String>) -> Self {
        self.business_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_utr(mut self, value: impl Into<String>) -> Self {
        self.utr = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_company_registration_number(mut self, value: impl Into<String>) -> Self {
        self.company_registration_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_ni_number(mut self, value: impl Into<String>) -> Self {
        self.ni_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_partnership_name(mut self, value: impl Into<String>) -> Self {
        self.partnership_name = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_partnership_utr(mut self, value: impl Into<String>) -> Self {
        self.partnership_utr = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_verification_number(mut self, value: impl Into<String>) -> Self {
        self.verification_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_taxation_status(mut self, value: impl Into<String>) -> Self {
        self.taxation_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_telephone(mut self, value: impl Into<String>) -> Self {
        self.telephone = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_email_address(mut self, value: impl Into<String>) -> Self {
        self.email_address = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_address(mut self, value: Address) -> Self {
        self.address = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    /// Produces the wire map. The address is nested unconditionally in the
    /// wire shape, so it must be populated.
    pub fn format(&self) -> Result<Value> {
        if self.address.is_none() {
            return Err(Error::ModelIncomplete {
                model: "SubContractor",
            });
        }
        to_wire(self, "SubContractor")
    }
}

/// Instructs a payment to a subcontractor for a period of work.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CisInstruction {
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Code of the CIS line type the payment is classified under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cis_line_type_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    /// Cost of materials, excluded from the CIS deduction base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials_cost: Option<Decimal>,
}

impl CisInstruction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_cis_line_type_code(mut self, value: impl Into<String>) -> Self {
        self.cis_line_type_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_materials_cost(mut self, value: Decimal) -> Self {
        self.materials_cost = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "CisInstruction")
    }
}

/// A single calculated CIS payment line.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CisLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_deducted: Option<Decimal>,
}

impl CisLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_materials_cost(mut self, value: Decimal) -> Self {
        self.materials_cost = Some(value);
        self
    }

    #[must_use]
    pub fn with_tax_deducted(mut self, value: Decimal) -> Self {
        self.tax_deducted = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "CisLine")
    }
}

/// Classifies CIS lines, e.g. labour at the standard deduction rate.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CisLineType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Labour` or `Materials`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
}

impl CisLineType {
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
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_payment_type(mut self, value: impl Into<String>) -> Self {
        self.payment_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_tax_rate(mut self, value: Decimal) -> Self {
        self.tax_rate = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "CisLineType")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_contractor_requires_address() {
        let sub = SubContractor::new().with_trading_name("Brick & Co");
        match sub.format() {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, "SubContractor"),
            other => panic!("expected ModelIncomplete, got {other:?}"),
        }
    }
}
