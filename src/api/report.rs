use serde_json::Value;
use time::Date;

use crate::error::Result;
use crate::utils::wire;
use crate::Client;

/// API handler for report endpoints.
///
/// Reports run server side against a report definition key; inputs travel
/// as query parameters and unset parameters never reach the querystring.
#[derive(Debug)]
pub struct ReportApi<'a> {
    pub(crate) client: &'a Client,
}

impl ReportApi<'_> {
    /// Run an arbitrary report definition with raw query parameters.
    #[instrument(skip(self, parameters))]
    pub async fn run(&self, report_key: &str, parameters: &[(&str, String)]) -> Result<Value> {
        self.client
            .get(&format!("/Report/{report_key}/run"), parameters)
            .await
    }

    /// Run the pay slip report for a pay schedule's tax period.
    #[instrument(skip(self))]
    pub async fn pay_slips(
        &self,
        employer_id: &str,
        pay_schedule_id: &str,
        tax_year: Option<i32>,
        tax_period: Option<i32>,
    ) -> Result<Value> {
        let mut query = vec![
            ("EmployerKey", employer_id.to_string()),
            ("PayScheduleKey", pay_schedule_id.to_string()),
        ];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        if let Some(tax_period) = tax_period {
            query.push(("TaxPeriod", tax_period.to_string()));
        }
        self.run("PAYSLIP3", &query).await
    }

    /// Run the P32 employment payment record report.
    #[instrument(skip(self))]
    pub async fn p32(&self, employer_id: &str, tax_year: Option<i32>) -> Result<Value> {
        let mut query = vec![("EmployerKey", employer_id.to_string())];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        self.run("P32", &query).await
    }

    /// Run the P45 report for a leaver.
    #[instrument(skip(self))]
    pub async fn p45(&self, employer_id: &str, employee_id: &str) -> Result<Value> {
        let query = vec![
            ("EmployerKey", employer_id.to_string()),
            ("EmployeeKey", employee_id.to_string()),
        ];
        self.run("P45", &query).await
    }

    /// Run the P60 end of year certificate report.
    #[instrument(skip(self))]
    pub async fn p60(
        &self,
        employer_id: &str,
        employee_id: &str,
        tax_year: Option<i32>,
    ) -> Result<Value> {
        let mut query = vec![
            ("EmployerKey", employer_id.to_string()),
            ("EmployeeKey", employee_id.to_string()),
        ];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        self.run("P60", &query).await
    }

    /// Run the PAPDIS pension data interface standard report.
    #[instrument(skip(self))]
    pub async fn papdis(
        &self,
        employer_id: &str,
        pension_id: &str,
        tax_year: Option<i32>,
        tax_period: Option<i32>,
    ) -> Result<Value> {
        let mut query = vec![
            ("EmployerKey", employer_id.to_string()),
            ("PensionKey", pension_id.to_string()),
        ];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        if let Some(tax_period) = tax_period {
            query.push(("TaxPeriod", tax_period.to_string()));
        }
        self.run("PAPDIS", &query).await
    }

    /// Run the pension liability report.
    #[instrument(skip(self))]
    pub async fn pension_liability(
        &self,
        employer_id: &str,
        tax_year: Option<i32>,
    ) -> Result<Value> {
        let mut query = vec![("EmployerKey", employer_id.to_string())];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        self.run("PENLIABILITY", &query).await
    }

    /// Run the attachment order liability report.
    #[instrument(skip(self))]
    pub async fn aeo_liability(&self, employer_id: &str, tax_year: Option<i32>) -> Result<Value> {
        let mut query = vec![("EmployerKey", employer_id.to_string())];
        if let Some(tax_year) = tax_year {
            query.push(("TaxYear", tax_year.to_string()));
        }
        self.run("AEOLIABILITY", &query).await
    }

    /// Run the holiday balance report.
    #[instrument(skip(self))]
    pub async fn holiday_balance(&self, employer_id: &str) -> Result<Value> {
        let query = vec![("EmployerKey", employer_id.to_string())];
        self.run("HOLBAL", &query).await
    }

    /// Run the active employees report, optionally as of a given date.
    #[instrument(skip(self))]
    pub async fn active_employees(
        &self,
        employer_id: &str,
        on_date: Option<Date>,
    ) -> Result<Value> {
        let mut query = vec![("EmployerKey", employer_id.to_string())];
        if let Some(on_date) = on_date {
            query.push(("OnDate", wire::date_segment(on_date)?));
        }
        self.run("ACTEMPLOYEES", &query).await
    }
}
