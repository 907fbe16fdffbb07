//! The HTTP module which provides functions for performing requests to
//! endpoints in Discord's API.
//!
//! The only endpoints carried here are the ones interactions and their
//! webhooks need. Requests are issued exactly once; there is no rate limit
//! bookkeeping and no retrying, and an unsuccessful status code surfaces as an
//! [`HttpError`] for the caller to handle.

mod client;
mod error;
mod multipart;
pub mod request;
pub mod routing;

pub use self::client::Http;
pub use self::error::Error as HttpError;
pub use self::error::ErrorResponse;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use reqwest::Method;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::internal::prelude::*;

/// A light wrapper around the HTTP methods the routes use.
///
/// This is needed because [`reqwest`]'s [`Method`] enum does not derive Copy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LightMethod {
    /// Indicates that a route is for the `DELETE` method only.
    Delete,
    /// Indicates that a route is for the `GET` method only.
    Get,
    /// Indicates that a route is for the `PATCH` method only.
    Patch,
    /// Indicates that a route is for the `POST` method only.
    Post,
    /// Indicates that a route is for the `PUT` method only.
    Put,
}

impl LightMethod {
    #[must_use]
    pub fn reqwest_method(self) -> Method {
        match self {
            LightMethod::Delete => Method::DELETE,
            LightMethod::Get => Method::GET,
            LightMethod::Patch => Method::PATCH,
            LightMethod::Post => Method::POST,
            LightMethod::Put => Method::PUT,
        }
    }
}

/// Enum that allows a user to pass a [`Path`] or a [`File`] type to
/// [`add_file`].
///
/// [`add_file`]: crate::builder::CreateInteractionResponseData::add_file
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum AttachmentType<'a> {
    /// Indicates that the [`AttachmentType`] is raw bytes with a filename.
    Bytes {
        data: Cow<'a, [u8]>,
        filename: String,
    },
    /// Indicates that the [`AttachmentType`] is an opened file with a
    /// filename.
    File {
        file: &'a File,
        filename: String,
    },
    /// Indicates that the [`AttachmentType`] is a path to a file.
    Path(&'a Path),
}

impl<'a> AttachmentType<'a> {
    pub(crate) async fn data(&self) -> Result<Vec<u8>> {
        match self {
            AttachmentType::Bytes {
                data, ..
            } => Ok(data.clone().into_owned()),
            AttachmentType::File {
                file, ..
            } => {
                let mut buf = Vec::new();
                file.try_clone().await?.read_to_end(&mut buf).await?;

                Ok(buf)
            },
            AttachmentType::Path(path) => Ok(tokio::fs::read(path).await?),
        }
    }

    pub(crate) fn filename(&self) -> Option<String> {
        match self {
            AttachmentType::Bytes {
                filename, ..
            }
            | AttachmentType::File {
                filename, ..
            } => Some(filename.clone()),
            AttachmentType::Path(path) => {
                path.file_name().map(|name| name.to_string_lossy().into_owned())
            },
        }
    }
}

impl<'a> From<(&'a [u8], &str)> for AttachmentType<'a> {
    fn from(params: (&'a [u8], &str)) -> Self {
        AttachmentType::Bytes {
            data: Cow::Borrowed(params.0),
            filename: params.1.to_string(),
        }
    }
}

impl<'a> From<(Vec<u8>, &str)> for AttachmentType<'a> {
    fn from(params: (Vec<u8>, &str)) -> Self {
        AttachmentType::Bytes {
            data: Cow::Owned(params.0),
            filename: params.1.to_string(),
        }
    }
}

impl<'a> From<&'a Path> for AttachmentType<'a> {
    fn from(path: &'a Path) -> Self {
        AttachmentType::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for AttachmentType<'a> {
    fn from(path: &'a PathBuf) -> Self {
        AttachmentType::Path(path.as_path())
    }
}

impl<'a> From<(&'a File, &str)> for AttachmentType<'a> {
    fn from(params: (&'a File, &str)) -> Self {
        AttachmentType::File {
            file: params.0,
            filename: params.1.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::AttachmentType;

    #[test]
    fn conversion_of_attachment_types() {
        assert!(matches!(
            AttachmentType::from(Path::new("./dogs/corgis/kona.png")),
            AttachmentType::Path(_)
        ));
        assert!(matches!(
            AttachmentType::from((&[1u8, 2][..], "image.png")),
            AttachmentType::Bytes { .. }
        ));
    }

    #[test]
    fn filenames_come_from_the_path_tail() {
        let attachment = AttachmentType::from(Path::new("./dogs/corgis/kona.png"));
        assert_eq!(attachment.filename().as_deref(), Some("kona.png"));
    }
}
