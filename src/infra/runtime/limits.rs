use std::time::Duration;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// Build a reqwest client with sane defaults (timeouts, no redirects).
pub fn make_http_client() -> reqwest::Result<reqwest::Client> {
    make_http_client_with(REQUEST_TIMEOUT)
}

pub fn make_http_client_with(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
