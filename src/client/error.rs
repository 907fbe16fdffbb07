use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// An error raised while constructing or configuring a [`Client`].
///
/// All of these surface from [`ClientBuilder::build`]; once a client is
/// built, its configuration is known-good.
///
/// [`Client`]: super::Client
/// [`ClientBuilder::build`]: super::ClientBuilder::build
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The token provided does not have the shape of a bot token.
    InvalidToken,
    /// No application Id was configured. The interaction webhook endpoints
    /// are keyed by it, so a client cannot respond without one.
    ApplicationIdMissing,
    /// The configured API version predates interactions or is not carried by
    /// this library.
    UnsupportedApiVersion(u8),
    /// No event handler was registered, leaving nowhere to dispatch
    /// interactions to.
    EventHandlerMissing,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidToken => f.write_str("The provided token was invalid"),
            Error::ApplicationIdMissing => f.write_str("No application Id was configured"),
            Error::UnsupportedApiVersion(version) => {
                write!(f, "API v{} does not carry the interaction endpoints", version)
            },
            Error::EventHandlerMissing => f.write_str("No event handler was registered"),
        }
    }
}

impl StdError for Error {}
