pub mod builder;
pub mod connection;
pub mod context;
pub mod page_info;
pub mod resolver;

pub(self) mod self_prelude {
    pub use async_graphql::dynamic::*;
    pub use extension_trait::extension_trait;
}

pub use builder::*;
pub use connection::*;
pub use context::*;
pub use page_info::*;
pub use resolver::*;
