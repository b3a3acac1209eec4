mod cli;
mod config;
mod error;
mod input;
mod render;

use error::WrapErr;

use clap::Parser;
use live_search::{DisplayState, SearchPhase, spawn_adapter};
use search_core::{SearchBackend, SearchService};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::{StreamExt, wrappers::WatchStream};
use tracing::info;
use tracing_subscriber::EnvFilter;

use input::Line;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load().context("Load configuration error")?;

    let backend: Arc<dyn SearchBackend> = if command_line.local {
        let catalog = search_core::load_catalog(&cfg.search).wrap_err("Load catalog error")?;
        Arc::new(SearchService::new(Arc::new(catalog)).with_latency(cfg.search.simulated_latency()))
    } else {
        let socket = cfg.socket_path();
        let backend = rpc::RpcBackend::connect(&socket)
            .await
            .wrap_err_with(|| format!("Connect to {} error (is `server serve` running?)", socket.display()))?;
        info!("connected to {:?}", socket);
        Arc::new(backend)
    };

    let surface = command_line.surface;
    let handle = spawn_adapter(backend, surface, surface.options(&cfg.search));
    let preview_limit = handle.preview_limit();

    let mut updates = WatchStream::new(handle.subscribe());
    let printer = tokio::spawn(async move {
        let mut last = DisplayState::Hidden;
        while let Some(state) = updates.next().await {
            let display = DisplayState::from_state(&state, preview_limit);
            if display != last {
                if let Some(text) = render::render(&display) {
                    println!("{text}");
                }
                last = display;
            }
        }
    });

    let mut expected = String::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match input::parse(&line) {
            Line::Text(text) => {
                expected.clone_from(&text);
                handle.input(text);
            }
            Line::Clear => {
                expected.clear();
                handle.clear();
            }
            Line::Open(open) => handle.set_open(open),
            Line::Go(id) => {
                let found = handle.select(id, &|path: &str| println!("-> {path}"));
                if !found {
                    println!("no result with id {id}");
                }
            }
            Line::Quit => break,
            Line::Unknown(raw) => println!("unknown command: {raw}"),
        }
    }

    // Piped input ends before the debounce fires; let the last query settle.
    let mut settled = handle.subscribe();
    settled
        .wait_for(|s| {
            s.raw_query == expected && matches!(s.phase, SearchPhase::Idle | SearchPhase::Resolved)
        })
        .await
        .ok();

    handle.shutdown().await;
    printer.await.ok();
    Ok(())
}

/// `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
