//! The Relay connection model and its per-request assembly.
//! See: https://relay.dev/graphql/connections.htm#sec-Connection-Types

use crate::{
    binder::BindingMode,
    cursor::Cursor,
    error::{PaginationError, PaginationResult},
    object::ObjectValue,
    pages::page_markers,
    paging::{PaginationArgs, PaginationInfo},
    registry::KeyField,
};
use tracing::trace;

/// A node paired with the cursor derived from its key field.
#[derive(Clone, Debug)]
pub struct Edge {
    pub node: ObjectValue,
    pub cursor: Cursor,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub start_cursor: Option<Cursor>,
    pub end_cursor: Option<Cursor>,
    /// Start cursor of each page; entry `i` opens page `i + 1`.
    pub pages: Vec<Cursor>,
}

#[derive(Clone, Debug, Default)]
pub struct Connection {
    pub total_count: i64,
    pub edges: Vec<Edge>,
    pub page_info: PageInfo,
}

impl Connection {
    /// Set the start and end cursors from the current edges.
    pub fn set_cursors(&mut self) {
        if let (Some(first), Some(last)) = (self.edges.first(), self.edges.last()) {
            self.page_info.start_cursor = Some(first.cursor.clone());
            self.page_info.end_cursor = Some(last.cursor.clone());
        }
    }

    /// Take count and next/previous flags from a resolver that paginates itself.
    pub fn externally_set_page_info(&mut self, info: &PaginationInfo) {
        self.page_info.has_next_page = info.has_next_page;
        self.page_info.has_prev_page = info.has_prev_page;
        self.total_count = info.total_count();
    }
}

/// Turns a resolver's nodes into a [`Connection`] for one request.
pub struct ConnectionAssembler<'a> {
    key: &'a KeyField,
    mode: BindingMode,
}

impl<'a> ConnectionAssembler<'a> {
    pub fn new(key: &'a KeyField, mode: BindingMode) -> Self {
        Self { key, mode }
    }

    pub fn assemble(
        &self,
        nodes: Vec<ObjectValue>,
        args: &PaginationArgs,
        info: Option<&PaginationInfo>,
    ) -> PaginationResult<Connection> {
        if nodes.is_empty() {
            return Ok(Connection::default());
        }

        let total_count = nodes.len() as i64;
        let edges = self.key.edges(nodes)?;

        let mut connection = match self.mode {
            BindingMode::FrameworkManaged => {
                let pages = page_markers(&edges, args.limit());
                let mut connection = Connection {
                    total_count,
                    edges,
                    page_info: PageInfo {
                        pages,
                        ..Default::default()
                    },
                };
                connection.paginate_manually(args)?;
                connection
            }
            BindingMode::ExternallyManaged => {
                // The resolver already sliced; the directives are only checked.
                args.validate()?;
                Connection {
                    total_count,
                    edges,
                    page_info: PageInfo::default(),
                }
            }
        };

        connection.set_cursors();

        if self.mode == BindingMode::ExternallyManaged {
            let info = info.ok_or(PaginationError::OutputMismatch)?;
            connection.externally_set_page_info(info);
        }

        trace!(
            "Assembled {} connection with {} of {} edges.",
            self.mode,
            connection.edges.len(),
            connection.total_count
        );

        Ok(connection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_graphql::Value;
    use pretty_assertions::assert_eq;

    struct Item {
        id: i64,
    }

    fn key() -> KeyField {
        KeyField::new("id", |item: &Item| item.id)
    }

    fn nodes(n: i64) -> Vec<ObjectValue> {
        (1..=n).map(|id| ObjectValue::new(Item { id })).collect()
    }

    fn ids(connection: &Connection) -> Vec<i64> {
        connection
            .edges
            .iter()
            .filter_map(|edge| edge.node.downcast_ref::<Item>().map(|item| item.id))
            .collect()
    }

    #[test]
    fn test_no_args_yields_everything_on_one_page() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::FrameworkManaged);
        let connection = assembler
            .assemble(nodes(5), &PaginationArgs::default(), None)
            .unwrap();

        assert_eq!(ids(&connection), vec![1, 2, 3, 4, 5]);
        assert_eq!(connection.total_count, 5);
        assert_eq!(
            connection.page_info,
            PageInfo {
                has_next_page: false,
                has_prev_page: false,
                start_cursor: Some("MQ==".to_string()),
                end_cursor: Some("NQ==".to_string()),
                pages: vec![String::new()],
            }
        );
    }

    #[test]
    fn test_windowed_count_does_not_change_total_count() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::FrameworkManaged);
        let args = PaginationArgs {
            last: Some(2),
            before: Some(String::new()),
            ..Default::default()
        };
        let connection = assembler.assemble(nodes(5), &args, None).unwrap();

        assert_eq!(ids(&connection), vec![4, 5]);
        assert_eq!(connection.total_count, 5);
        assert_eq!(
            connection.page_info,
            PageInfo {
                has_next_page: false,
                has_prev_page: true,
                start_cursor: Some("NA==".to_string()),
                end_cursor: Some("NQ==".to_string()),
                pages: vec![String::new(), "Mg==".to_string(), "NA==".to_string()],
            }
        );
    }

    #[test]
    fn test_empty_nodes_short_circuit() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::FrameworkManaged);
        let args = PaginationArgs {
            first: Some(-1),
            ..Default::default()
        };
        let connection = assembler.assemble(Vec::new(), &args, None).unwrap();

        assert!(connection.edges.is_empty());
        assert_eq!(connection.total_count, 0);
        assert_eq!(connection.page_info, PageInfo::default());
    }

    #[test]
    fn test_externally_managed_trusts_the_resolver() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::ExternallyManaged);
        let args = PaginationArgs {
            first: Some(2),
            ..Default::default()
        };
        let info = PaginationInfo::new(true, false).with_total_count(|| 42);
        let connection = assembler.assemble(nodes(5), &args, Some(&info)).unwrap();

        assert_eq!(ids(&connection), vec![1, 2, 3, 4, 5]);
        assert_eq!(connection.total_count, 42);
        assert!(connection.page_info.has_next_page);
        assert!(!connection.page_info.has_prev_page);
        assert!(connection.page_info.pages.is_empty());
        assert_eq!(connection.page_info.start_cursor.as_deref(), Some("MQ=="));
        assert_eq!(connection.page_info.end_cursor.as_deref(), Some("NQ=="));
    }

    #[test]
    fn test_externally_managed_still_rejects_bad_directives() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::ExternallyManaged);
        let args = PaginationArgs {
            first: Some(1),
            last: Some(1),
            ..Default::default()
        };
        let info = PaginationInfo::default();
        assert_matches!(
            assembler.assemble(nodes(5), &args, Some(&info)),
            Err(PaginationError::FirstAndLast)
        );
        assert_matches!(
            assembler.assemble(nodes(5), &PaginationArgs::default(), None),
            Err(PaginationError::OutputMismatch)
        );
    }

    #[test]
    fn test_nodes_of_another_type_are_rejected() {
        let key = key();
        let assembler = ConnectionAssembler::new(&key, BindingMode::FrameworkManaged);
        let nodes = vec![ObjectValue::new(Value::from(1))];
        assert_matches!(
            assembler.assemble(nodes, &PaginationArgs::default(), None),
            Err(PaginationError::NodeType { .. })
        );
    }
}
