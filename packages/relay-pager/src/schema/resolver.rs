use super::connection::*;
use super::context::*;
use super::page_info::*;
use super::self_prelude::*;
use crate::connection::{Connection, Edge, PageInfo};

/// Resolves the generated connection, edge and page info objects from an
/// assembled [`Connection`].
pub struct ConnectionFieldResolver;

impl ConnectionResolver for ConnectionFieldResolver {
    fn resolve_total_count(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let connection = ctx.parent::<Connection>()?;
            Ok(Some(FieldValue::value(connection.total_count)))
        })
    }

    fn resolve_edges(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let connection = ctx.parent::<Connection>()?;
            let edges = connection
                .edges
                .iter()
                .map(|edge| FieldValue::borrowed_any(edge));
            Ok(Some(FieldValue::list(edges)))
        })
    }

    fn resolve_page_info(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let connection = ctx.parent::<Connection>()?;
            Ok(Some(FieldValue::borrowed_any(&connection.page_info)))
        })
    }
}

impl EdgeResolver for ConnectionFieldResolver {
    fn resolve_node(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let edge = ctx.parent::<Edge>()?;
            Ok(Some(FieldValue::borrowed_any(&edge.node)))
        })
    }

    fn resolve_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let edge = ctx.parent::<Edge>()?;
            Ok(Some(FieldValue::value(edge.cursor.clone())))
        })
    }
}

impl PageInfoResolver for ConnectionFieldResolver {
    fn resolve_has_next_page(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let page_info = ctx.parent::<PageInfo>()?;
            Ok(Some(FieldValue::value(page_info.has_next_page)))
        })
    }

    fn resolve_has_prev_page(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let page_info = ctx.parent::<PageInfo>()?;
            Ok(Some(FieldValue::value(page_info.has_prev_page)))
        })
    }

    fn resolve_start_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let page_info = ctx.parent::<PageInfo>()?;
            Ok(page_info
                .start_cursor
                .clone()
                .map(|cursor| FieldValue::value(cursor)))
        })
    }

    fn resolve_end_cursor(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let page_info = ctx.parent::<PageInfo>()?;
            Ok(page_info
                .end_cursor
                .clone()
                .map(|cursor| FieldValue::value(cursor)))
        })
    }

    fn resolve_pages(ctx: ResolverContext) -> FieldFuture {
        FieldFuture::new(async move {
            let page_info = ctx.parent::<PageInfo>()?;
            let pages = page_info
                .pages
                .iter()
                .map(|cursor| FieldValue::value(cursor.clone()));
            Ok(Some(FieldValue::list(pages)))
        })
    }
}
