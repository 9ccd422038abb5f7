pub const LOG_LEVEL: &str = "info";

pub const VERBOSE_LOGGING: bool = false;

pub const QUERY_ROOT: &str = "Query";

pub const CONNECTION_SUFFIX: &str = "Connection";
pub const MANAGED_CONNECTION_SUFFIX: &str = "ManagedConnection";
pub const EDGE_SUFFIX: &str = "Edge";

pub const PAGE_INFO: &str = "PageInfo";
pub const MANAGED_PAGE_INFO: &str = "ManagedPageInfo";
