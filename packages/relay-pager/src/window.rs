//! Applying `after`/`before`/`first`/`last` to an ordered edge sequence.
//! See: https://relay.dev/graphql/connections.htm#sec-Pagination-algorithm

use crate::{
    connection::{Connection, Edge},
    error::PaginationResult,
    paging::PaginationArgs,
};

fn cursor_index(edges: &[Edge], cursor: &str) -> Option<usize> {
    edges.iter().position(|edge| edge.cursor == cursor)
}

/// Cut the edges at the `after` and `before` cursors.
///
/// Returns the remaining edges and whether elements were cut after and before the
/// window. A cursor that matches no edge cuts nothing. The `before` match is compared
/// against the last index of the edge set as it was *before* the `after` cut.
pub fn apply_cursors_to_edges(
    mut edges: Vec<Edge>,
    before: Option<&str>,
    after: Option<&str>,
) -> (Vec<Edge>, bool, bool) {
    let edge_count = edges.len();
    let mut elems_after = false;
    let mut elems_before = false;

    if let Some(after) = after {
        if let Some(i) = cursor_index(&edges, after) {
            edges.drain(..=i);
            if i != 0 {
                elems_before = true;
            }
        }
    }

    if let Some(before) = before {
        if let Some(i) = cursor_index(&edges, before) {
            edges.truncate(i);
            if i + 1 != edge_count {
                elems_after = true;
            }
        }
    }

    (edges, elems_after, elems_before)
}

impl Connection {
    /// Window the edges in memory and set the next/previous page flags.
    pub fn paginate_manually(&mut self, args: &PaginationArgs) -> PaginationResult<()> {
        let edges = std::mem::take(&mut self.edges);
        let (edges, elems_after, elems_before) = apply_cursors_to_edges(
            edges,
            args.before.as_deref(),
            args.after.as_deref(),
        );
        self.edges = edges;

        self.page_info.has_next_page = args.before.is_some() && elems_after;
        self.page_info.has_prev_page = args.after.is_some() && elems_before;

        args.validate()?;

        if let Some(first) = args.first.map(|n| n as usize) {
            if self.edges.len() > first {
                self.edges.truncate(first);
                self.page_info.has_next_page = true;
            }
        }

        if let Some(last) = args.last.map(|n| n as usize) {
            if self.edges.len() > last {
                self.edges.drain(..self.edges.len() - last);
                self.page_info.has_prev_page = true;
            }
        }

        Ok(())
    }
}
