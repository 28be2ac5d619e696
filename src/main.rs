use std::path::PathBuf;

use img2url::global_constants::{self, LOG_TAG_HOST};
use img2url::{ConsoleChatHost, PluginConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"));

    log::info!("{} Starting Img2Url console host", LOG_TAG_HOST);

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = PluginConfig::load(config_path.as_deref());

    println!("{}", global_constants::STARTUP_BANNER);

    let mut host = ConsoleChatHost::build(&config);
    let stdin = std::io::stdin();
    host.run(stdin.lock(), std::io::stdout())?;

    log::info!("{} Exiting Img2Url console host", LOG_TAG_HOST);
    Ok(())
}
