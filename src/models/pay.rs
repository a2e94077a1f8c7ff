use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::Date;

use super::{
    common::{Link, MetaData},
    to_wire,
};
use crate::error::Result;
use crate::utils::wire;

/// A pay code classifying a payment or deduction line. Revisible.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayCode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `Payment` or `Deduction`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub code_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub taxable: Option<bool>,

    #[serde(
        rename = "NIable",
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub niable: Option<bool>,

    /// Benefit-in-kind codes pay tax without paying the value itself.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub benefit: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub notional: Option<bool>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub effective_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nominal_code: Option<Link>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl PayCode {
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
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_code_type(mut self, value: impl Into<String>) -> Self {
        self.code_type = Some(value.into());
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
    pub fn with_taxable(mut self, value: bool) -> Self {
        self.taxable = Some(value);
        self
    }

    #[must_use]
    pub fn with_niable(mut self, value: bool) -> Self {
        self.niable = Some(value);
        self
    }

    #[must_use]
    pub fn with_benefit(mut self, value: bool) -> Self {
        self.benefit = Some(value);
        self
    }

    #[must_use]
    pub fn with_notional(mut self, value: bool) -> Self {
        self.notional = Some(value);
        self
    }

    #[must_use]
    pub fn with_effective_date(mut self, value: Date) -> Self {
        self.effective_date = Some(value);
        self
    }

    #[must_use]
    pub fn with_nominal_code(mut self, value: Link) -> Self {
        self.nominal_code = Some(value);
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "PayCode")
    }
}

/// A pay schedule grouping employees paid on the same frequency.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `Weekly`, `TwoWeekly`, `FourWeekly`, `Monthly` or `Yearly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_frequency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<MetaData>,
}

impl PaySchedule {
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
    pub fn with_pay_frequency(mut self, value: impl Into<String>) -> Self {
        self.pay_frequency = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_meta_data(mut self, value: MetaData) -> Self {
        self.meta_data = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "PaySchedule")
    }
}

/// A generic pay instruction attaching a value to a pay code for a period.
///
/// The more specific instruction types below carry their own calculation
/// inputs; this one injects a flat value against an arbitrary code.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayInstruction {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub start_date: Option<Date>,

    /// Open-ended when omitted.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::date_string"
    )]
    pub end_date: Option<Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

impl PayInstruction {
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
    pub fn with_pay_code(mut self, value: impl Into<String>) -> Self {
        self.pay_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "PayInstruction")
    }
}

/// Instructs an annual salary paid pro rata per period.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalaryInstruction {
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
    pub annual_salary: Option<Decimal>,
    /// Override for the pro-rata calculation, e.g. `DaysPerCalendarMonth`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_rata_method: Option<String>,
}

impl SalaryInstruction {
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
    pub fn with_annual_salary(mut self, value: Decimal) -> Self {
        self.annual_salary = Some(value);
        self
    }

    #[must_use]
    pub fn with_pro_rata_method(mut self, value: impl Into<String>) -> Self {
        self.pro_rata_method = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "SalaryInstruction")
    }
}

/// Instructs a rate-times-units payment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateInstruction {
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
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Decimal>,
    /// `Hourly`, `Daily` or `Weekly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_code: Option<String>,
}

impl RateInstruction {
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
    pub fn with_rate(mut self, value: Decimal) -> Self {
        self.rate = Some(value);
        self
    }

    #[must_use]
    pub fn with_units(mut self, value: Decimal) -> Self {
        self.units = Some(value);
        self
    }

    #[must_use]
    pub fn with_rate_unit(mut self, value: impl Into<String>) -> Self {
        self.rate_unit = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_pay_code(mut self, value: impl Into<String>) -> Self {
        self.pay_code = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "RateInstruction")
    }
}

/// Sets the employee's tax code and basis.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaxInstruction {
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
    pub tax_code: Option<String>,
    /// Non-cumulative (week 1 / month 1) basis when true.
    #[serde(
        rename = "Week1Month1",
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub week1_month1: Option<bool>,
}

impl TaxInstruction {
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
    pub fn with_tax_code(mut self, value: impl Into<String>) -> Self {
        self.tax_code = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_week1_month1(mut self, value: bool) -> Self {
        self.week1_month1 = Some(value);
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "TaxInstruction")
    }
}

/// Sets the employee's NI category and calculation basis.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NiInstruction {
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
    pub ni_category: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "wire::bool_string"
    )]
    pub director: Option<bool>,
    /// Directors may use the `Standard` annual or `Alternative` method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculation_method: Option<String>,
}

impl NiInstruction {
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
    pub fn with_ni_category(mut self, value: impl Into<String>) -> Self {
        self.ni_category = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_director(mut self, value: bool) -> Self {
        self.director = Some(value);
        self
    }

    #[must_use]
    pub fn with_calculation_method(mut self, value: impl Into<String>) -> Self {
        self.calculation_method = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "NiInstruction")
    }
}

/// Enrols the employee into a pension scheme with contribution levels.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PensionInstruction {
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
    /// Link to the employer's pension scheme resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pension: Option<Link>,
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
}

impl PensionInstruction {
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
    pub fn with_pension(mut self, value: Link) -> Self {
        self.pension = Some(value);
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

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "PensionInstruction")
    }
}

/// Starts student loan deductions for the employee.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentLoanInstruction {
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
    /// Repayment plan: `PlanOne`, `PlanTwo`, `PlanFour` or `PostGraduate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
}

impl StudentLoanInstruction {
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
    pub fn with_plan_type(mut self, value: impl Into<String>) -> Self {
        self.plan_type = Some(value.into());
        self
    }

    pub fn format(&self) -> Result<Value> {
        to_wire(self, "StudentLoanInstruction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use time::macros::date;

    #[test]
    fn salary_instruction_formats_dates_and_decimals() {
        let instruction = SalaryInstruction::new()
            .with_start_date(date!(2024 - 04 - 06))
            .with_annual_salary(dec!(32000));
        let value = instruction.format().unwrap();
        assert_eq!(value["StartDate"], "2024-04-06");
        assert_eq!(value["AnnualSalary"], "32000");
        assert!(value.get("EndDate").is_none());
    }

    #[test]
    fn tax_instruction_renders_week1_month1_flag() {
        let instruction = TaxInstruction::new()
            .with_tax_code("1257L")
            .with_week1_month1(true);
        let value = instruction.format().unwrap();
        assert_eq!(value["TaxCode"], "1257L");
        assert_eq!(value["Week1Month1"], "true");
    }

    #[test]
    fn pay_code_renders_boolean_strings() {
        let code = PayCode::new()
            .with_code("BASIC")
            .with_code_type("Payment")
            .with_taxable(true)
            .with_niable(false);
        let value = code.format().unwrap();
        assert_eq!(value["Type"], "Payment");
        assert_eq!(value["Taxable"], "true");
        assert_eq!(value["NIable"], "false");
    }
}
