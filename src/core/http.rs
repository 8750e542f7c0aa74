use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        ACCEPT,
    },
    Client,
};

use crate::core::KardiaError;

const USER_AGENT: &str = concat!("kardia/", env!("CARGO_PKG_VERSION"), " (+reqwest)");

/// Builds the shared async client used for every prediction request.
///
/// `timeout` bounds the whole request; `None` leaves it unbounded.
pub fn http_client(timeout: Option<Duration>) -> Result<Client, KardiaError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder().user_agent(USER_AGENT).default_headers(headers);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}
