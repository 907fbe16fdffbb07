use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use reqwest::header::{HeaderMap, InvalidHeaderValue};
use reqwest::{Error as ReqwestError, Response, StatusCode, Url};
use url::ParseError as UrlError;

/// The snapshot of an unsuccessful response, taken before the response is
/// dropped so errors stay printable after the fact.
#[derive(Clone, Debug)]
pub struct ErrorResponse {
    pub status_code: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl ErrorResponse {
    // We need a freestanding from-function since we cannot implement an
    // async From-trait.
    pub async fn from_response(r: Response) -> Self {
        ErrorResponse {
            status_code: r.status(),
            url: r.url().clone(),
            headers: r.headers().clone(),
            body: r.text().await.unwrap_or_else(|_| "[no body available]".to_string()),
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// When a non-successful status code was received for a request.
    UnsuccessfulRequest(ErrorResponse),
    /// When parsing an URL failed due to invalid input.
    Url(UrlError),
    /// Header value contains invalid input.
    InvalidHeader(InvalidHeaderValue),
    /// Reqwest's Error contains information on why sending a request failed.
    Request(ReqwestError),
}

impl Error {
    /// Returns true when the error is caused by an unsuccessful request.
    #[must_use]
    pub fn is_unsuccessful_request(&self) -> bool {
        matches!(self, Self::UnsuccessfulRequest(_))
    }

    /// Returns the status code if the error is an unsuccessful request.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::UnsuccessfulRequest(res) => Some(res.status_code),
            _ => None,
        }
    }
}

impl From<ErrorResponse> for Error {
    fn from(error: ErrorResponse) -> Error {
        Error::UnsuccessfulRequest(error)
    }
}

impl From<ReqwestError> for Error {
    fn from(error: ReqwestError) -> Error {
        Error::Request(error)
    }
}

impl From<UrlError> for Error {
    fn from(error: UrlError) -> Error {
        Error::Url(error)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(error: InvalidHeaderValue) -> Error {
        Error::InvalidHeader(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsuccessfulRequest(e) => {
                f.write_str("Request ")?;
                Display::fmt(&e.url, f)?;
                f.write_str(" failed with status ")?;
                Display::fmt(&e.status_code, f)?;
                f.write_str(": ")?;
                f.write_str(&e.body)
            },
            Error::Url(_) => f.write_str("Provided URL is incorrect."),
            Error::InvalidHeader(_) => f.write_str("Provided value is an invalid header value."),
            Error::Request(_) => f.write_str("Error while sending HTTP request."),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Url(inner) => Some(inner),
            Error::Request(inner) => Some(inner),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    use super::{Error, ErrorResponse};

    #[test]
    fn unsuccessful_requests_keep_their_status() {
        let error = Error::UnsuccessfulRequest(ErrorResponse {
            status_code: StatusCode::NOT_FOUND,
            url: "https://discord.com/api/v9/webhooks/1/tok/messages/@original"
                .parse()
                .unwrap(),
            headers: HeaderMap::new(),
            body: "{\"message\": \"Unknown Message\", \"code\": 10008}".to_string(),
        });

        assert!(error.is_unsuccessful_request());
        assert_eq!(error.status_code(), Some(StatusCode::NOT_FOUND));
        assert!(error.to_string().contains("Unknown Message"));
    }
}
