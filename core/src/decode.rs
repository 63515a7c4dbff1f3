//! Response decoding.
//!
//! Every operation expects exactly one success status: 200 with a JSON body
//! or 204 with none. Anything else is `ApiError::UnexpectedStatus`; a 200
//! whose body does not decode is `ApiError::Deserialization`. Both decoders
//! take the response by value, so the body is dropped once decoding ends.

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::http::HttpResponse;

pub const STATUS_OK: u16 = 200;
pub const STATUS_NO_CONTENT: u16 = 204;

/// Map a status other than `expected` to `ApiError::UnexpectedStatus`.
pub fn check_status(response: &HttpResponse, expected: u16) -> Result<()> {
    if response.status == expected {
        return Ok(());
    }
    warn!(
        "expected status {expected}, server returned {}",
        response.status
    );
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Decode a 200 response body into `T`.
pub fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    check_status(&response, STATUS_OK)?;
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Accept a 204 response. The body, if any, is ignored.
pub fn parse_no_content(response: HttpResponse) -> Result<bool> {
    check_status(&response, STATUS_NO_CONTENT)?;
    Ok(true)
}
