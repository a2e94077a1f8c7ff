//! Wire models for PayRun.io request bodies.
//!
//! Every field is optional at construction and populated through fluent
//! `with_*` setters. A model's [`format`](common::Link::format) produces the
//! exact nested map the API expects: PascalCase keys, dates as `YYYY-MM-DD`
//! strings, booleans as the literal strings `"true"`/`"false"`, and scalar
//! code lists wrapped under a singular key. Responses are never decoded into
//! these types; the read side of the API stays untyped.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

pub mod cis;
pub mod common;
pub mod dps;
pub mod employee;
pub mod employer;
pub mod holiday;
pub mod jobs;
pub mod nominal;
pub mod pay;
pub mod pension;
pub mod query;

pub use cis::{CisInstruction, CisLine, CisLineType, SubContractor};
pub use common::{Address, BankAccount, Link, MetaData, MetaDataItem, PayCodeList};
pub use dps::DpsMessage;
pub use employee::{AttachmentOrder, Employee, EmployeePartner};
pub use employer::{BacsServiceUserNumber, Employer, EmployerAutoEnrolment, HmrcSettings};
pub use holiday::HolidayScheme;
pub use jobs::{
    CisRequestJobInstruction, CisReturnJobInstruction, DpsJobInstruction,
    EmployerDeletionJobInstruction, PayRunJobInstruction,
};
pub use nominal::NominalCode;
pub use pay::{
    NiInstruction, PayCode, PayInstruction, PaySchedule, PensionInstruction, RateInstruction,
    SalaryInstruction, StudentLoanInstruction, TaxInstruction,
};
pub use pension::Pension;
pub use query::{EntityGroup, NameValuePair, Query, QueryFilter, QueryOutput};

/// Serializes a model into its wire map, collapsing any failure into the
/// uniform "model not fully populated" error naming the model type.
pub(crate) fn to_wire<T: Serialize>(model: &T, name: &'static str) -> Result<Value> {
    serde_json::to_value(model).map_err(|_| Error::ModelIncomplete { model: name })
}
