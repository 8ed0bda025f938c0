use reqwest::StatusCode;
use serde::de;

use crate::error::{Error, Result};

/// Statuses the IONOS API uses for successful calls.
///
/// Writes are usually answered with `202 Accepted` since records are provisioned asynchronously.
const ACCEPTED_STATUSES: [StatusCode; 2] = [StatusCode::OK, StatusCode::ACCEPTED];

/// Checks the status of an API response and deserializes its body.
///
/// Every call to the API goes through here. An empty body is read as JSON `null`, so callers that
/// don't care about the body can ask for [`de::IgnoredAny`].
pub(crate) async fn handle_response<T>(res: reqwest::Response) -> Result<T>
where
    T: de::DeserializeOwned,
{
    let status = res.status();

    if !ACCEPTED_STATUSES.contains(&status) {
        log::debug!("{} rejected with {status}", res.url().path());
        return Err(Error::ApiStatus { status });
    }

    let body = req_safe_read_body(res).await;
    log::trace!("{body}");

    let json = if body.trim().is_empty() {
        "null"
    } else {
        body.as_str()
    };

    serde_json::from_str(json).map_err(|err| {
        log::debug!("unable to parse API response: {err}");
        Error::ApiResponseFormat { body }
    })
}

pub(crate) async fn req_safe_read_body(res: reqwest::Response) -> String {
    // a body that fails halfway through is reported as whatever was read (usually nothing)
    res.text().await.unwrap_or_default()
}
