//! Endpoint groups, one module per API resource family.
//!
//! Every method maps 1:1 onto a REST route: it substitutes resource keys
//! into the route's path template, attaches a wrapped JSON body or optional
//! query parameters, and returns the decoded response as a generic
//! [`serde_json::Value`]. Responses are deliberately not mapped into typed
//! models.

pub mod aeo;
pub mod cis;
pub mod dps;
pub mod employee;
pub mod employer;
pub mod health_check;
pub mod holiday_scheme;
pub mod jobs;
pub mod nominal_code;
pub mod pay_code;
pub mod pay_instruction;
pub mod pay_run;
pub mod pay_schedule;
pub mod pension;
pub mod query;
pub mod report;
pub mod rti;
pub mod tagging;

pub use aeo::AttachmentOrderApi;
pub use cis::CisApi;
pub use dps::DpsApi;
pub use employee::EmployeeApi;
pub use employer::EmployerApi;
pub use health_check::HealthCheckApi;
pub use holiday_scheme::HolidaySchemeApi;
pub use jobs::JobsApi;
pub use nominal_code::NominalCodeApi;
pub use pay_code::PayCodeApi;
pub use pay_instruction::PayInstructionApi;
pub use pay_run::PayRunApi;
pub use pay_schedule::PayScheduleApi;
pub use pension::PensionApi;
pub use query::QueryApi;
pub use report::ReportApi;
pub use rti::RtiApi;
pub use tagging::TaggingApi;
