use clipshelf_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    clipshelf_api::setup::init_tracing();

    let config = Config::from_env()?;

    let (_state, router) = clipshelf_api::setup::initialize_app(config.clone()).await?;

    clipshelf_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
