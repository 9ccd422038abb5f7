//! Relay cursor connections for `async_graphql::dynamic` schemas.
//!
//! A resolver returning an ordered list is declared as a [`PaginatedField`]; building
//! the schema wraps it in a generated `Connection` type with `first`, `last`, `after`
//! and `before` arguments, opaque cursors and page info.

pub mod arguments;
pub mod binder;
pub mod cli;
pub mod commands;
pub mod connection;
pub mod cursor;
pub mod error;
pub mod object;
pub mod pages;
pub mod paging;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod signature;
pub mod testing;
pub mod window;

pub use arguments::{
    parse_arguments, ArgumentError, ArgumentMap, ArgumentResult, FieldArguments,
    InputField,
};
pub use binder::{BindingMode, PaginatedField};
pub use connection::{Connection, ConnectionAssembler, Edge, PageInfo};
pub use cursor::{decode_cursor, encode_cursor, Cursor};
pub use error::{BuildError, BuildResult, PaginationError, PaginationResult};
pub use object::{ObjectValue, TypeDescriptor};
pub use paging::{PaginationArgs, PaginationInfo};
pub use resolver::{DynResolver, ResolveCall};
pub use schema::SchemaBuilder;

pub mod prelude {
    pub use super::{
        parse_arguments, ArgumentMap, ArgumentResult, FieldArguments, InputField,
        PaginatedField, PaginationArgs, PaginationInfo, ResolveCall, SchemaBuilder,
    };
    pub use async_graphql::dynamic::TypeRef;
    pub use futures::future::FutureExt;
}
