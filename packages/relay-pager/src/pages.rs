//! Page-boundary cursors for page-number style navigation.
//!
//! Markers are computed over the full, un-windowed edge set, so they move as items
//! are inserted or removed between requests. They line up with `after:` navigation
//! and do not for `before:`.

use crate::{connection::Edge, cursor::Cursor};

/// The first marker is always `""` (page 1). With a non-zero `limit`, each edge whose
/// successor starts a new page contributes its cursor; the last edge never does.
pub fn page_markers(edges: &[Edge], limit: usize) -> Vec<Cursor> {
    if edges.is_empty() {
        return Vec::new();
    }

    let mut pages = vec![Cursor::new()];
    if limit == 0 {
        return pages;
    }

    let last = edges.len() - 1;
    pages.extend(
        edges
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != last && (i + 1) % limit == 0)
            .map(|(_, edge)| edge.cursor.clone()),
    );
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor::encode_cursor, object::ObjectValue};
    use pretty_assertions::assert_eq;

    fn edges(n: i64) -> Vec<Edge> {
        (1..=n)
            .map(|i| Edge {
                node: ObjectValue::new(i),
                cursor: encode_cursor(&i.to_string()),
            })
            .collect()
    }

    #[test]
    fn test_markers_split_on_page_size() {
        assert_eq!(page_markers(&edges(5), 2), vec!["", "Mg==", "NA=="]);
    }

    #[test]
    fn test_last_edge_never_starts_a_page() {
        assert_eq!(page_markers(&edges(4), 2), vec!["", "Mg=="]);
        assert_eq!(page_markers(&edges(3), 1), vec!["", "MQ==", "Mg=="]);
    }

    #[test]
    fn test_unbounded_limit_is_a_single_page() {
        assert_eq!(page_markers(&edges(5), 0), vec![""]);
    }

    #[test]
    fn test_no_edges_no_markers() {
        assert!(page_markers(&[], 2).is_empty());
    }
}
