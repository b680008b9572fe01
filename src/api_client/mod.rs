use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

pub mod api_models;
mod anaml_api_client;
mod transport;

pub use anaml_api_client::AnamlApiClient;
pub use transport::Transport;

use api_models::Identifier;

/**
 * A kind of record stored by the Anaml server under `/<PATH>[/<id>]`.
 * The identity is `None` until the server assigned one on creation.
 */
pub trait ApiResource: Serialize + DeserializeOwned + Clone + Debug + Send + Sync {
    const PATH: &'static str;

    fn id(&self) -> Option<Identifier>;

    fn set_id(&mut self, id: Option<Identifier>);
}

/// Records that can be looked up by name
pub trait Named {
    fn name(&self) -> &str;

    fn description(&self) -> &str;
}
