mod catalog;
mod entity;
mod feature;
mod feature_store;
mod schedule;
mod table;

pub use catalog::*;
pub use entity::*;
pub use feature::*;
pub use feature_store::*;
pub use schedule::*;
pub use table::*;

use serde::{Deserialize, Serialize};

use super::{ApiResource, Named};

/// Server-assigned numeric key of a stored entity
pub type Identifier = u64;

/// `POST /login` body
#[derive(Clone, Serialize, Deserialize)]
pub(crate) struct AuthRequest {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
}

macro_rules! api_resource {
    ($t:ty, $path:literal) => {
        impl ApiResource for $t {
            const PATH: &'static str = $path;

            fn id(&self) -> Option<Identifier> {
                self.id
            }

            fn set_id(&mut self, id: Option<Identifier>) {
                self.id = id;
            }
        }
    };
}

macro_rules! named {
    ($t:ty) => {
        impl Named for $t {
            fn name(&self) -> &str {
                &self.name
            }

            fn description(&self) -> &str {
                &self.description
            }
        }
    };
}

api_resource!(Feature, "feature");
api_resource!(FeatureStore, "feature_store");
api_resource!(FeatureSet, "feature_set");
api_resource!(FeatureTemplate, "feature_template");
api_resource!(Destination, "destination");
api_resource!(Cluster, "cluster");
api_resource!(Source, "source");
api_resource!(Entity, "entity");
api_resource!(EntityMapping, "entity_mapping");
api_resource!(Table, "table");

named!(Feature);
named!(Destination);
named!(Cluster);
named!(Source);
