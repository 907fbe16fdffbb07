//! Error enum definition wrapping potential model implementation errors.

use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// An error returned from the [`model`] module.
///
/// This is always wrapped within the library's [`Error::Model`] variant.
///
/// # Examples
///
/// Matching an [`Error`] with this variant would look something like the
/// following for the [`delete_reply`] method, which in this example is used
/// on an interaction that was answered ephemerally:
///
/// ```rust,no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// # let http = kingfisher::http::Http::new("token", 9, Default::default());
/// # let mut interaction: kingfisher::model::interactions::application_command::ApplicationCommandInteraction = todo!();
/// use kingfisher::model::interactions::Respondable;
/// use kingfisher::model::ModelError;
/// use kingfisher::Error;
///
/// match interaction.delete_reply(&http).await {
///     Ok(()) => {
///         // The original response is gone.
///     },
///     Err(Error::Model(ModelError::EphemeralNotDeletable)) => {
///         println!("ephemeral responses outlive us all");
///     },
///     Err(why) => {
///         println!("Unexpected error: {:?}", why);
///     },
/// }
/// #     Ok(())
/// # }
/// ```
///
/// [`Error`]: crate::Error
/// [`Error::Model`]: crate::Error::Model
/// [`delete_reply`]: crate::model::interactions::Respondable::delete_reply
/// [`model`]: crate::model
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// When attempting to open an interaction's response lifecycle (reply,
    /// update, or either deferral) after it has already been opened.
    ///
    /// The platform accepts exactly one callback per interaction.
    AlreadyAcknowledged,
    /// When attempting to operate on an interaction's response (editing it,
    /// following it up) before the lifecycle has been opened.
    NotYetAcknowledged,
    /// When attempting to delete the original response of an interaction that
    /// was answered ephemerally. Ephemeral responses cannot be deleted.
    EphemeralNotDeletable,
    /// Indicates that a message's content was too long and will not
    /// successfully send, as the length is over 2000 unicode code points.
    ///
    /// The number of code points larger than the limit is provided.
    MessageTooLong(u64),
    /// Indicates that the textual content of an embed exceeds the maximum
    /// length.
    EmbedTooLarge(u64),
    /// When attempting to perform a token-authenticated request on a
    /// [`Webhook`] that was acquired without a token.
    ///
    /// [`Webhook`]: super::webhook::Webhook
    NoTokenSet,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::AlreadyAcknowledged => f.write_str("Interaction is already acknowledged."),
            Error::NotYetAcknowledged => f.write_str("Interaction is not acknowledged yet."),
            Error::EphemeralNotDeletable => f.write_str("Ephemeral responses cannot be deleted."),
            Error::MessageTooLong(_) => f.write_str("Message too large."),
            Error::EmbedTooLarge(_) => f.write_str("Embed too large."),
            Error::NoTokenSet => f.write_str("Token is not set."),
        }
    }
}

impl StdError for Error {}
