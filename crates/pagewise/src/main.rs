use crate::prelude::*;
use clap::Parser;

mod chapters;
mod error;
mod nav;
mod prelude;
mod range;
mod render;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Compute and explore pagination trigger ranges"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Number of page triggers to show (odd, at least 3)
    #[clap(
        long,
        env = "PAGEWISE_VISIBLE",
        global = true,
        default_value_t = pagewise_core::DEFAULT_VISIBLE_COUNT
    )]
    visible: usize,

    /// Whether to display additional information.
    #[clap(long, env = "PAGEWISE_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print the page triggers for a current page and page count
    Range(crate::range::App),

    /// Step a paginator through next/prev/first/last/<page> moves
    Nav(crate::nav::App),

    /// List markdown chapters one page at a time
    Chapters(crate::chapters::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    log::debug!("visible count: {}", app.global.visible);

    match app.command {
        SubCommands::Range(sub_app) => crate::range::run(sub_app, app.global).await,
        SubCommands::Nav(sub_app) => crate::nav::run(sub_app, app.global).await,
        SubCommands::Chapters(sub_app) => crate::chapters::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
