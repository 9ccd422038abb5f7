use crate::{cli::QueryArgs, testing::schema_builder};
use async_graphql::Request;
use relay_pager_lib::{config::PagerConfig, utils::init_logging};
use tracing::{debug, warn};

pub async fn exec(args: QueryArgs) -> anyhow::Result<()> {
    let QueryArgs { query, pager } = args;
    let config = PagerConfig::from_opts(pager)?;
    init_logging(&config)?;

    let schema = schema_builder(config.naming).build()?;
    debug!("Executing query: {query}");

    let response = schema.execute(Request::new(query)).await;
    if response.is_err() {
        warn!("Query returned {} error(s).", response.errors.len());
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
