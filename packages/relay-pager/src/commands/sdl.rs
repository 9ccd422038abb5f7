use crate::testing::{schema_builder, TestSchema};
use relay_pager_lib::{
    config::{PagerArgs, PagerConfig},
    utils::init_logging,
};
use tracing::info;

pub async fn exec(args: PagerArgs) -> anyhow::Result<()> {
    let config = PagerConfig::from_opts(args)?;
    init_logging(&config)?;

    let schema = schema_builder(config.naming).build()?;
    info!("Printing SDL for the example schema.");

    println!("{}", schema.pretty_sdl());
    Ok(())
}
