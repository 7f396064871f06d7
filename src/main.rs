use clap::Parser;
use tracing::debug;

use shortkeep::cli::{Cli, Commands};
use shortkeep::config::AppConfig;
use shortkeep::runtime::modes;
use shortkeep::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref(), &cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            // guard 必须存活到进程退出，否则文件日志会丢
            let _log_guard = match init_logging(&config.logging) {
                Ok(guard) => guard,
                Err(e) => {
                    eprintln!("{}", e.format_colored());
                    std::process::exit(1);
                }
            };
            debug!("Effective configuration: {:?}", config);

            modes::run_server(&config).await?;
        }
        cmd => {
            if let Err(e) = modes::run_cli(cmd, &config) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
