use std::sync::{Arc, Mutex};

use serde_json::json;
use time::macros::date;
use warp::Filter;

mod test_utils;
use test_utils::{do_setup, local_client};

/// Catch-all mock that records every request path, so route templates can be
/// checked for fully substituted placeholders.
fn path_recorder() -> (
    Arc<Mutex<Vec<String>>>,
    impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone,
) {
    let paths: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let record = Arc::clone(&paths);
    let route = warp::any()
        .and(warp::path::full())
        .map(move |path: warp::path::FullPath| {
            record.lock().unwrap().push(path.as_str().to_string());
            warp::reply::json(&json!({}))
        });
    (paths, route)
}

#[tokio::test]
async fn route_templates_substitute_every_placeholder() {
    do_setup();

    let (paths, route) = path_recorder();
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = local_client(addr);

    client.employers().get("ER001").await.unwrap();
    client
        .employers()
        .get_at("ER001", date!(2024 - 04 - 06))
        .await
        .unwrap();
    client.employees().get("ER001", "EE005").await.unwrap();
    client
        .employees()
        .get_revision("ER001", "EE005", 2)
        .await
        .unwrap();
    client
        .pay_runs()
        .get("ER001", "SCH001", "PR001")
        .await
        .unwrap();
    client
        .pay_instructions()
        .get("ER001", "EE005", "PI001")
        .await
        .unwrap();
    client
        .cis()
        .get_instruction("ER001", "SUB001", "CIS001")
        .await
        .unwrap();
    client
        .tagging()
        .get_employee_tag("ER001", "EE005", "starter")
        .await
        .unwrap();
    client.jobs().get_status("PayRuns", "JOB01").await.unwrap();

    let expected = [
        "/Employer/ER001",
        "/Employer/ER001/2024-04-06",
        "/Employer/ER001/Employee/EE005",
        "/Employer/ER001/Employee/EE005/Revision/2",
        "/Employer/ER001/PaySchedule/SCH001/PayRun/PR001",
        "/Employer/ER001/Employee/EE005/PayInstruction/PI001",
        "/Employer/ER001/SubContractor/SUB001/CisInstruction/CIS001",
        "/Employer/ER001/Employee/EE005/Tag/starter",
        "/Jobs/PayRuns/JOB01/Status",
    ];

    let seen = paths.lock().unwrap();
    assert_eq!(seen.as_slice(), expected.as_slice());
    for path in seen.iter() {
        assert!(
            !path.contains('{') && !path.contains('}'),
            "unsubstituted placeholder in {path}"
        );
    }
}
