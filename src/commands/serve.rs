use crate::{
    api::OpenAi,
    libs::config::Config,
    server::{self, AppState},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on; overrides the configuration and `PORT`
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let config = Config::read()?;

    let mut settings = config.server_settings();
    if let Some(port) = args.port {
        settings.port = port;
    }
    let openai = OpenAi::from_env(config.openai_settings()).ok();

    server::run(AppState::new(openai, settings, config.report_settings())).await
}
