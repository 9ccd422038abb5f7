//! `async_graphql::dynamic` extensions for page info objects.
//! See: https://relay.dev/graphql/connections.htm#sec-undefined.PageInfo

use super::self_prelude::*;

#[extension_trait]
pub impl PagingTypeRef for TypeRef {
    const CURSOR: &'static str = "String";
}

#[extension_trait]
pub impl PageInfoObject for Object {
    /// Page markers are only exposed when the connection is windowed in memory.
    fn new_page_info<Resolver: PageInfoResolver>(
        name: impl Into<String>,
        with_pages: bool,
    ) -> Self {
        let object = Self::new(name)
            .field(Field::new(
                "hasNextPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                Resolver::resolve_has_next_page,
            ))
            .field(Field::new(
                "hasPrevPage",
                TypeRef::named_nn(TypeRef::BOOLEAN),
                Resolver::resolve_has_prev_page,
            ))
            .field(Field::new(
                "startCursor",
                TypeRef::named(TypeRef::CURSOR),
                Resolver::resolve_start_cursor,
            ))
            .field(Field::new(
                "endCursor",
                TypeRef::named(TypeRef::CURSOR),
                Resolver::resolve_end_cursor,
            ));
        if with_pages {
            object.field(Field::new(
                "pages",
                TypeRef::named_nn_list_nn(TypeRef::CURSOR),
                Resolver::resolve_pages,
            ))
        } else {
            object
        }
    }
}

pub trait PageInfoResolver: Send + Sync + 'static {
    fn resolve_has_next_page(ctx: ResolverContext) -> FieldFuture;
    fn resolve_has_prev_page(ctx: ResolverContext) -> FieldFuture;
    fn resolve_start_cursor(ctx: ResolverContext) -> FieldFuture;
    fn resolve_end_cursor(ctx: ResolverContext) -> FieldFuture;
    fn resolve_pages(ctx: ResolverContext) -> FieldFuture;
}
