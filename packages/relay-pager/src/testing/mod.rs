pub mod fixture;
pub mod schema;

pub(self) mod self_prelude {
    pub use crate::prelude::*;
    pub use async_graphql::dynamic::Schema;
    pub use extension_trait::extension_trait;
    pub use serde::Deserialize;
}

pub use fixture::*;
pub use schema::*;
