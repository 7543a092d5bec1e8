//! The top-level geocoding response.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::types::StatusCode;

/// A decoded geocoding response.
///
/// A provider-reported failure such as `ZERO_RESULTS` or `REQUEST_DENIED` is
/// still a successfully decoded `Response`; only a transport or decoding
/// failure is reported through [`Response::unknown_error`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Response {
    /// The geocoding results, if the API returned any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Address>>,
    /// The status the API reported for the request.
    #[serde(rename = "status")]
    pub status_code: StatusCode,
    /// Provider-supplied detail accompanying a non-`OK` status.
    #[serde(rename = "error_message", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Response {
    /// Decodes a response from raw JSON text.
    ///
    /// Returns `None` if the text is not valid JSON, a required field is
    /// missing or mistyped, or an enumeration string falls outside its
    /// closed vocabulary. There are no partially decoded responses.
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }

    /// The placeholder returned when a request could not be performed or its
    /// response could not be decoded.
    pub fn unknown_error() -> Self {
        Response {
            results: None,
            status_code: StatusCode::UnknownError,
            error_message: None,
        }
    }
}
