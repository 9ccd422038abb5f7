//! `async_graphql::dynamic` extensions for connection and edge objects.
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use super::page_info::*;
use super::self_prelude::*;

#[extension_trait]
pub impl ConnectionObject for Object {
    fn new_connection<Resolver: ConnectionResolver>(
        name: impl Into<String>,
        edge_name: &str,
        page_info_name: &str,
    ) -> Self {
        Self::new(name)
            .field(Field::new(
                "totalCount",
                TypeRef::named_nn(TypeRef::INT),
                Resolver::resolve_total_count,
            ))
            .field(Field::new(
                "edges",
                TypeRef::named_nn_list_nn(edge_name),
                Resolver::resolve_edges,
            ))
            .field(Field::new(
                "pageInfo",
                TypeRef::named_nn(page_info_name),
                Resolver::resolve_page_info,
            ))
    }

    fn new_edge<Resolver: EdgeResolver>(name: impl Into<String>, node_name: &str) -> Self {
        Self::new(name)
            .field(Field::new(
                "node",
                TypeRef::named_nn(node_name),
                Resolver::resolve_node,
            ))
            .field(Field::new(
                "cursor",
                TypeRef::named_nn(TypeRef::CURSOR),
                Resolver::resolve_cursor,
            ))
    }
}

pub trait ConnectionResolver: Send + Sync + 'static {
    fn resolve_total_count(ctx: ResolverContext) -> FieldFuture;
    fn resolve_edges(ctx: ResolverContext) -> FieldFuture;
    fn resolve_page_info(ctx: ResolverContext) -> FieldFuture;
}

pub trait EdgeResolver: Send + Sync + 'static {
    fn resolve_node(ctx: ResolverContext) -> FieldFuture;
    fn resolve_cursor(ctx: ResolverContext) -> FieldFuture;
}
