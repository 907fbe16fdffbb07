use std::sync::Arc;

use tokio::sync::RwLock;
use typemap_rev::TypeMap;

use crate::cache::Cache;
use crate::http::Http;

/// The context is a general utility struct provided on event dispatches.
///
/// A context will only live for the event it was dispatched for. After the
/// event handler finished, it is destroyed and will not be re-used.
#[derive(Clone)]
#[non_exhaustive]
pub struct Context {
    /// A clone of [`Client::data`]. Refer to its documentation for more
    /// information.
    ///
    /// [`Client::data`]: super::Client::data
    pub data: Arc<RwLock<TypeMap>>,
    /// The http client, through which interaction responses are issued.
    pub http: Arc<Http>,
    /// The cache of guild state the owning application has shared.
    pub cache: Arc<Cache>,
}

impl Context {
    pub(crate) fn new(
        data: Arc<RwLock<TypeMap>>,
        http: Arc<Http>,
        cache: Arc<Cache>,
    ) -> Context {
        Context {
            data,
            http,
            cache,
        }
    }
}

impl AsRef<Http> for Context {
    fn as_ref(&self) -> &Http {
        &self.http
    }
}

impl AsRef<Cache> for Context {
    fn as_ref(&self) -> &Cache {
        &self.cache
    }
}
