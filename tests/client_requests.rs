use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use warp::Filter;

use payrun_rs::{Client, Credentials, Error};

mod test_utils;
use test_utils::{do_setup, local_client};

#[test]
fn test_mode_selects_the_sandbox_base_url() {
    do_setup();
    let sandbox = Client::new(Credentials::new("KEY", "SECRET"), true).unwrap();
    assert_eq!(sandbox.base_url().as_str(), "https://api.test.payrun.io/");

    let production = Client::new(Credentials::new("KEY", "SECRET"), false).unwrap();
    assert_eq!(production.base_url().as_str(), "https://api.payrun.io/");
}

#[tokio::test]
async fn get_sends_accept_and_oauth_headers_and_returns_body_unchanged() {
    do_setup();

    let captured: Arc<Mutex<Option<(String, String)>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);

    let route = warp::path!("Employer" / String)
        .and(warp::get())
        .and(warp::header::<String>("accept"))
        .and(warp::header::<String>("authorization"))
        .map(move |_id: String, accept: String, authorization: String| {
            *capture.lock().unwrap() = Some((accept, authorization));
            warp::reply::json(&json!({"Employer": {"Name": "Acme Ltd", "Region": "England"}}))
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    let response = client.employers().get("123").await.unwrap();

    assert_eq!(
        response,
        json!({"Employer": {"Name": "Acme Ltd", "Region": "England"}})
    );

    let (accept, authorization) = captured.lock().unwrap().take().expect("request captured");
    assert_eq!(accept, "application/json");
    assert!(authorization.starts_with("OAuth "), "got: {authorization}");
    for parameter in [
        "oauth_consumer_key=\"KEY\"",
        "oauth_nonce=\"",
        "oauth_signature_method=\"HMAC-SHA1\"",
        "oauth_timestamp=\"",
        "oauth_version=\"1.0\"",
        "oauth_signature=\"",
    ] {
        assert!(
            authorization.contains(parameter),
            "missing {parameter} in {authorization}"
        );
    }
}

#[tokio::test]
async fn create_wraps_the_body_under_the_resource_root_key() {
    do_setup();

    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);

    let route = warp::path!("Employers")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |body: Value| {
            *capture.lock().unwrap() = Some(body);
            warp::reply::json(&json!({"Link": {"@href": "/Employer/ER001"}}))
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    let response = client
        .employers()
        .create(&json!({"Name": "Acme"}))
        .await
        .unwrap();

    assert_eq!(response["Link"]["@href"], "/Employer/ER001");
    let body = captured.lock().unwrap().take().expect("body captured");
    assert_eq!(body, json!({"Employer": {"Name": "Acme"}}));
}

#[tokio::test]
async fn unset_report_parameters_are_omitted_from_the_querystring() {
    do_setup();

    let captured: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
    let capture = Arc::clone(&captured);

    let route = warp::path!("Report" / String / "run")
        .and(warp::get())
        .and(warp::query::raw())
        .map(move |_key: String, query: String| {
            *capture.lock().unwrap() = Some(query);
            warp::reply::json(&json!({"Report": []}))
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    client
        .reports()
        .pay_slips("ER001", "SCH001", Some(2024), None)
        .await
        .unwrap();

    let query = captured.lock().unwrap().take().expect("query captured");
    assert!(query.contains("EmployerKey=ER001"), "got: {query}");
    assert!(query.contains("PayScheduleKey=SCH001"), "got: {query}");
    assert!(query.contains("TaxYear=2024"), "got: {query}");
    assert!(!query.contains("TaxPeriod"), "got: {query}");
}

#[tokio::test]
async fn delete_with_an_empty_body_returns_null() {
    do_setup();

    let route = warp::path!("Employer" / String).and(warp::delete()).map(|_id: String| {
        warp::reply::with_status(warp::reply(), warp::http::StatusCode::OK)
    });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    let response = client.employers().delete("ER001").await.unwrap();
    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn non_success_statuses_surface_as_api_errors_with_the_raw_body() {
    do_setup();

    let route = warp::path!("Employer" / String).and(warp::get()).map(|_id: String| {
        warp::reply::with_status(
            "employer not found",
            warp::http::StatusCode::NOT_FOUND,
        )
    });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    match client.employers().get("MISSING").await {
        Err(Error::Api { status, body, .. }) => {
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert_eq!(body, "employer not found");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_bodies_surface_as_decode_errors() {
    do_setup();

    let route = warp::path!("Healthcheck")
        .and(warp::get())
        .map(|| warp::reply::with_status("<html>gateway</html>", warp::http::StatusCode::OK));

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    match client.health_check().get().await {
        Err(Error::Decode(_, Some(body))) => assert_eq!(body, "<html>gateway</html>"),
        other => panic!("expected Error::Decode, got {other:?}"),
    }
}

#[tokio::test]
async fn decoded_bodies_round_trip_semantically() {
    do_setup();

    // Key order and number formatting are serializer details; the decoded
    // document only has to be semantically identical to what was served.
    let served = json!({
        "Employer": {
            "Name": "Acme Ltd",
            "ClaimEmploymentAllowance": "true",
            "Revision": 3,
            "Tags": ["payroll", "2024"]
        }
    });
    let body = served.clone();

    let route = warp::path!("Employer" / String)
        .and(warp::get())
        .map(move |_id: String| warp::reply::json(&body));

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);
    let decoded = client.employers().get("ER001").await.unwrap();
    let reencoded: Value = serde_json::from_str(&serde_json::to_string(&decoded).unwrap()).unwrap();
    assert_eq!(reencoded, served);
}
