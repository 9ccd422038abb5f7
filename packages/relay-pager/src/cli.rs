pub(crate) use crate::commands::{query, sdl};
use clap::{Args, Parser, Subcommand};
use relay_pager_lib::config::PagerArgs;

#[derive(Parser, Debug)]
#[clap(
    name = "relay-pager",
    about = "Relay cursor connections over a dynamic GraphQL schema",
    version,
    rename_all = "kebab-case"
)]
pub struct Opt {
    #[clap(subcommand)]
    command: Pager,
}

#[derive(Debug, Subcommand)]
pub enum Pager {
    /// Print the SDL of the example schema.
    Sdl(PagerArgs),
    /// Execute a GraphQL document against the example schema.
    Query(QueryArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// GraphQL document to execute.
    pub query: String,

    #[clap(flatten)]
    pub pager: PagerArgs,
}

pub async fn run_cli() -> anyhow::Result<()> {
    let opt = Opt::try_parse();

    match opt {
        Ok(opt) => match opt.command {
            Pager::Sdl(args) => sdl::exec(args).await,
            Pager::Query(args) => query::exec(args).await,
        },
        Err(e) => {
            // Prints the error and exits.
            e.exit()
        }
    }
}
