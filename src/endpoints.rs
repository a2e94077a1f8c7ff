use url::Url;

use crate::error::{Error, Result};

/// Base URL for the production PayRun.io API.
pub const PRODUCTION_URL: &str = "https://api.payrun.io";

/// Base URL for the sandbox PayRun.io API, used when the client is built in
/// test mode.
pub const SANDBOX_URL: &str = "https://api.test.payrun.io";

/// Selects the base URL for the given mode.
pub(crate) fn base_url(test_mode: bool) -> Result<Url> {
    let raw = if test_mode { SANDBOX_URL } else { PRODUCTION_URL };
    Url::parse(raw).map_err(|_| Error::InvalidEndpoint)
}

/// Joins an absolute API path (e.g. `/Employer/ER001/Employees`) onto the
/// client's base URL.
pub(crate) fn join(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|_| Error::InvalidEndpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_the_sandbox() {
        assert_eq!(base_url(true).unwrap().as_str(), "https://api.test.payrun.io/");
        assert_eq!(base_url(false).unwrap().as_str(), "https://api.payrun.io/");
    }

    #[test]
    fn paths_join_onto_the_base() {
        let base = base_url(true).unwrap();
        let url = join(&base, "/Employer/ER001/Employee/EE005").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test.payrun.io/Employer/ER001/Employee/EE005"
        );
    }
}
