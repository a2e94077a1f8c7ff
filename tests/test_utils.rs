use std::net::SocketAddr;
use std::sync::Once;

use tracing::info;
use url::Url;

use payrun_rs::{Client, Credentials};

static LOGGING_CONFIGURED: Once = Once::new();

/// Setup before test runs
pub fn do_setup() {
    LOGGING_CONFIGURED.call_once(|| tracing_subscriber::fmt().with_test_writer().init());
    info!("Setting up test environment");
}

/// Creates a client pointed at a local mock server address.
#[allow(dead_code)]
pub fn local_client(addr: SocketAddr) -> Client {
    let base_url = Url::parse(&format!("http://{addr}")).expect("mock server address parses");
    Client::with_base_url(Credentials::new("KEY", "SECRET"), base_url)
}
