use crate::defaults;
use serde::Deserialize;

/// Names given to the types generated for paginated fields.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct NamingConfig {
    /// Name of the root query object.
    #[serde(default = "default_query_root")]
    pub query_root: String,

    /// Suffix appended to a node type name for framework-managed connections.
    #[serde(default = "default_connection_suffix")]
    pub connection_suffix: String,

    /// Suffix appended to a node type name for externally-managed connections.
    #[serde(default = "default_managed_connection_suffix")]
    pub managed_connection_suffix: String,

    /// Suffix appended to a node type name for edges.
    #[serde(default = "default_edge_suffix")]
    pub edge_suffix: String,

    /// Page info type carrying page markers.
    #[serde(default = "default_page_info")]
    pub page_info: String,

    /// Page info type without page markers.
    #[serde(default = "default_managed_page_info")]
    pub managed_page_info: String,
}

fn default_query_root() -> String {
    defaults::QUERY_ROOT.to_string()
}

fn default_connection_suffix() -> String {
    defaults::CONNECTION_SUFFIX.to_string()
}

fn default_managed_connection_suffix() -> String {
    defaults::MANAGED_CONNECTION_SUFFIX.to_string()
}

fn default_edge_suffix() -> String {
    defaults::EDGE_SUFFIX.to_string()
}

fn default_page_info() -> String {
    defaults::PAGE_INFO.to_string()
}

fn default_managed_page_info() -> String {
    defaults::MANAGED_PAGE_INFO.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            query_root: default_query_root(),
            connection_suffix: default_connection_suffix(),
            managed_connection_suffix: default_managed_connection_suffix(),
            edge_suffix: default_edge_suffix(),
            page_info: default_page_info(),
            managed_page_info: default_managed_page_info(),
        }
    }
}

impl NamingConfig {
    pub fn connection(&self, node_name: &str) -> String {
        format!("{node_name}{}", self.connection_suffix)
    }

    pub fn managed_connection(&self, node_name: &str) -> String {
        format!("{node_name}{}", self.managed_connection_suffix)
    }

    pub fn edge(&self, node_name: &str) -> String {
        format!("{node_name}{}", self.edge_suffix)
    }
}
