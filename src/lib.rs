mod error;
mod var_source;
mod utils;
mod provider;
mod api_client;
mod resource;
mod client;

use log::trace;
pub use error::Error;
pub use var_source::{VarSource, new_var_source, load_var_source, default_var_source};
pub use provider::{ProviderConfig, DEFAULT_HOST};
pub use api_client::api_models::*;
pub use api_client::{AnamlApiClient, ApiResource, Named, Transport};
pub use resource::*;
pub use client::AnamlClient;

/// Log if `Result` is an error
pub(crate) trait Logged {
    fn log(self) -> Self;
}

impl<T, E> Logged for std::result::Result<T, E>
where
    E: std::fmt::Debug,
{
    fn log(self) -> Self {
        if let Err(e) = &self {
            trace!("---TraceError--- {:#?}", e)
        }
        self
    }
}
