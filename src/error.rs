use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::io::Error as IoError;

use serde_json::{Error as JsonError, Value};

use crate::client::ClientError;
use crate::http::HttpError;
use crate::model::ModelError;

/// The common result type between most library functions.
///
/// The library exposes functions which, for a result type, exposes only one
/// type, rather than the usual 2 (`Result<T, Error>`). This is because all
/// functions that return a result return the library's [`Error`], so this is
/// implied, and a "simpler" result is used.
pub type Result<T> = std::result::Result<T, Error>;

/// A common error enum returned by most of the library's functionality within
/// a custom [`Result`].
///
/// The most common error types, the [`ClientError`] and [`ModelError`] enums,
/// are both wrapped around this in the form of the [`Self::Client`] and
/// [`Self::Model`] variants.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An error while decoding a payload.
    Decode(&'static str, Value),
    /// An `std::io` error.
    Io(IoError),
    /// An error from the `serde_json` crate.
    Json(JsonError),
    /// An error from the [`model`] module.
    ///
    /// [`model`]: crate::model
    Model(ModelError),
    /// An error raised while constructing or configuring a [`Client`].
    ///
    /// [`Client`]: crate::client::Client
    Client(ClientError),
    /// An error from the [`http`] module.
    ///
    /// [`http`]: crate::http
    Http(Box<HttpError>),
    /// Some other error. This is only used for "Expected value <TYPE>" errors,
    /// when a more detailed error can not be easily provided via the
    /// [`Self::Decode`] variant.
    Other(&'static str),
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Error {
        Error::Io(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Error {
        Error::Json(e)
    }
}

impl From<ModelError> for Error {
    fn from(e: ModelError) -> Error {
        Error::Model(e)
    }
}

impl From<ClientError> for Error {
    fn from(e: ClientError) -> Error {
        Error::Client(e)
    }
}

impl From<HttpError> for Error {
    fn from(e: HttpError) -> Error {
        Error::Http(Box::new(e))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(msg, _) | Error::Other(msg) => f.write_str(msg),
            Error::Io(inner) => Display::fmt(&inner, f),
            Error::Json(inner) => Display::fmt(&inner, f),
            Error::Model(inner) => Display::fmt(&inner, f),
            Error::Client(inner) => Display::fmt(&inner, f),
            Error::Http(inner) => Display::fmt(&inner, f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(inner) => Some(inner),
            Error::Json(inner) => Some(inner),
            Error::Model(inner) => Some(inner),
            Error::Client(inner) => Some(inner),
            Error::Http(inner) => Some(inner),
            _ => None,
        }
    }
}
