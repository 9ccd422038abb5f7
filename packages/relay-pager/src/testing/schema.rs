use super::self_prelude::*;
use graphql_parser::{parse_schema, Style};

#[extension_trait]
pub impl TestSchema for Schema {
    /// The SDL reformatted by `graphql_parser`, or the raw SDL if it does not parse.
    fn pretty_sdl(&self) -> String {
        let sdl = self.sdl();
        parse_schema::<&str>(&sdl)
            .map(|doc| doc.format(&Style::default()))
            .unwrap_or_else(|_| sdl.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture::*;
    use pretty_assertions::assert_eq;
    use relay_pager_lib::config::NamingConfig;

    fn type_block<'a>(sdl: &'a str, header: &str) -> &'a str {
        let start = sdl.find(header).expect("type is defined");
        let end = sdl[start..].find('}').expect("type is closed");
        &sdl[start..start + end]
    }

    #[tokio::test]
    async fn test_generated_connection_types() {
        let sdl = schema().pretty_sdl();

        let connection = type_block(&sdl, "type ItemConnection {");
        assert!(connection.contains("totalCount: Int!"));
        assert!(connection.contains("edges: [ItemEdge!]!"));
        assert!(connection.contains("pageInfo: PageInfo!"));

        let edge = type_block(&sdl, "type ItemEdge {");
        assert!(edge.contains("node: Item!"));
        assert!(edge.contains("cursor: String!"));

        let page_info = type_block(&sdl, "type PageInfo {");
        assert!(page_info.contains("hasNextPage: Boolean!"));
        assert!(page_info.contains("hasPrevPage: Boolean!"));
        assert!(page_info.contains("startCursor: String"));
        assert!(page_info.contains("endCursor: String"));
        assert!(page_info.contains("pages: [String!]!"));
    }

    #[tokio::test]
    async fn test_managed_page_info_has_no_pages() {
        let sdl = schema().pretty_sdl();

        let connection = type_block(&sdl, "type ItemManagedConnection {");
        assert!(connection.contains("pageInfo: ManagedPageInfo!"));

        let page_info = type_block(&sdl, "type ManagedPageInfo {");
        assert!(page_info.contains("hasNextPage: Boolean!"));
        assert!(!page_info.contains("pages"));
    }

    #[tokio::test]
    async fn test_naming_follows_config() {
        let naming = NamingConfig {
            connection_suffix: "Page".to_string(),
            page_info: "PageDetails".to_string(),
            ..NamingConfig::default()
        };
        let sdl = schema_builder(naming).must_build().pretty_sdl();

        let connection = type_block(&sdl, "type ItemPage {");
        assert!(connection.contains("pageInfo: PageDetails!"));
        assert!(sdl.contains("type ItemManagedConnection {"));
        assert!(!sdl.contains("type ItemConnection {"));
    }

    #[test]
    fn test_items_are_keyed_in_order() {
        assert_eq!(
            items().iter().map(|item| item.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }
}
