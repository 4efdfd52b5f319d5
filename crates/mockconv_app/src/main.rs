mod platform;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    platform::run_app(platform::cli::Cli::parse()).await
}
