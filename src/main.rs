use anyhow::Context;
use clap::Parser;
use nexora::{
    api::routes::build_app,
    cli::{output::Output, Cli, Commands},
    AppState, Config, ResearchEngine,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "nexora=debug,tower_http=debug"
    } else {
        "nexora=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let mut config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?;

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Research { topic, json } => {
            let engine = ResearchEngine::from_config(&config)?;
            match engine.perform_research(&topic).await {
                Ok(report) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        output.report(&report);
                    }
                }
                Err(e) => {
                    output.error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let engine = Arc::new(ResearchEngine::from_config(&config)?);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let state = AppState {
                config: Arc::new(config),
                engine,
            };

            output.banner();
            output.info(&format!("listening on http://{addr}"));
            tracing::info!(%addr, "starting server");

            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;
            axum::serve(listener, build_app(state))
                .await
                .context("server error")?;
        }
    }

    Ok(())
}
