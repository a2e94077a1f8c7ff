use rust_decimal_macros::dec;
use serde_json::json;
use time::macros::date;

use payrun_rs::models::{
    Address, BankAccount, Employee, Employer, EmployerAutoEnrolment, HolidayScheme, Link,
    MetaData, MetaDataItem, PayCodeList, Pension, SalaryInstruction, SubContractor,
};
use payrun_rs::Error;

mod test_utils;
use test_utils::do_setup;

#[test]
fn fully_populated_models_render_wire_booleans_and_dates() {
    do_setup();

    let employer = Employer::new()
        .with_name("Acme Ltd")
        .with_region("England")
        .with_territory("UnitedKingdom")
        .with_claim_employment_allowance(true)
        .with_claim_small_employer_relief(false)
        .with_effective_date(date!(2024 - 04 - 06))
        .with_auto_enrolment(
            EmployerAutoEnrolment::new()
                .with_staging_date(date!(2017 - 01 - 01))
                .with_pension(Link::to("/Employer/ER001/Pension/PEN001")),
        )
        .with_address(
            Address::new()
                .with_address1("1 High Street")
                .with_postcode("TE1 1ST"),
        )
        .with_bank_account(
            BankAccount::new()
                .with_account_name("Acme Ltd")
                .with_account_number("12345678")
                .with_sort_code("401010"),
        )
        .with_meta_data(MetaData::new().with_item(
            MetaDataItem::new().with_name("CostCentre").with_value("OPS"),
        ));

    let value = employer.format().unwrap();
    assert_eq!(value["ClaimEmploymentAllowance"], "true");
    assert_eq!(value["ClaimSmallEmployerRelief"], "false");
    assert_eq!(value["EffectiveDate"], "2024-04-06");
    assert_eq!(value["AutoEnrolment"]["StagingDate"], "2017-01-01");
    assert_eq!(
        value["AutoEnrolment"]["Pension"]["@href"],
        "/Employer/ER001/Pension/PEN001"
    );
    assert_eq!(value["MetaData"]["Item"][0]["@name"], "CostCentre");
}

#[test]
fn employee_dates_match_wire_format() {
    do_setup();

    let employee = Employee::new()
        .with_first_name("Terri")
        .with_last_name("Tester")
        .with_date_of_birth(date!(1990 - 12 - 31))
        .with_start_date(date!(2024 - 01 - 15))
        .with_hours_per_week(dec!(37.5))
        .with_address(Address::new().with_address1("1 High Street"))
        .with_pay_schedule(Link::to("/Employer/ER001/PaySchedule/SCH001"));

    let value = employee.format().unwrap();
    assert_eq!(value["DateOfBirth"], "1990-12-31");
    assert_eq!(value["StartDate"], "2024-01-15");
    assert_eq!(value["HoursPerWeek"], "37.5");
}

#[test]
fn incomplete_models_fail_with_the_uniform_error_naming_the_type() {
    do_setup();

    let unset_employer = Employer::new().with_name("No Address Ltd");
    let unset_employee = Employee::new().with_first_name("No Schedule");
    let unset_pension = Pension::new().with_scheme_name("No Bank Account");
    let unset_sub_contractor = SubContractor::new().with_trading_name("No Address & Co");

    for (result, expected) in [
        (unset_employer.format(), "Employer"),
        (unset_employee.format(), "Employee"),
        (unset_pension.format(), "Pension"),
        (unset_sub_contractor.format(), "SubContractor"),
    ] {
        match result {
            Err(Error::ModelIncomplete { model }) => assert_eq!(model, expected),
            other => panic!("expected ModelIncomplete for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn scalar_code_lists_nest_under_their_singular_key() {
    do_setup();

    let scheme = HolidayScheme::new()
        .with_code("HOL1")
        .with_annual_entitlement_weeks(dec!(5.6))
        .with_accrual_pay_codes(PayCodeList::new(["BASIC", "OT1"]));

    let value = scheme.format().unwrap();
    assert_eq!(
        value["AccrualPayCodes"],
        json!({"PayCode": ["BASIC", "OT1"]})
    );

    let pension = Pension::new()
        .with_scheme_name("Group Scheme")
        .with_pensionable_pay_codes(PayCodeList::new(["BASIC"]))
        .with_bank_account(BankAccount::new().with_account_number("12345678"));
    let value = pension.format().unwrap();
    assert_eq!(value["PensionablePayCodes"], json!({"PayCode": ["BASIC"]}));
}

#[test]
fn salary_instruction_keeps_open_ended_periods_unset() {
    do_setup();

    let instruction = SalaryInstruction::new()
        .with_start_date(date!(2024 - 04 - 06))
        .with_annual_salary(dec!(32000));
    let value = instruction.format().unwrap();
    assert_eq!(value["StartDate"], "2024-04-06");
    assert!(value.get("EndDate").is_none());
}
