use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbox_config::LightboxConfig;
use lightbox_review::{
    FileStore, KeyValueStore, MemoryStore, ReviewError, SelectionStore,
};
use lightboxctl::{Replayer, Step, load_manifest, load_script};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "lightboxctl",
    about = "Replay lightbox carousel sessions and manage review marks"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a scripted session against a simulated page
    Replay {
        /// JSON array of clips: {id, media_source, poster?}
        #[arg(long)]
        manifest: PathBuf,
        /// JSON array of steps, e.g. {"op": "swipe", "dx": -200}
        #[arg(long)]
        script: PathBuf,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 390.0)]
        width: f32,
        /// Persist review marks to this file instead of memory
        #[arg(long)]
        store: Option<PathBuf>,
        /// Config file (TOML or JSON); defaults to the environment lookup
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the pending review patch as JSON
    Export {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print how many clips are marked for addition and removal
    Summary {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Drop every pending review mark
    Clear {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so exported JSON stays clean on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lightbox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Replay {
            manifest,
            script,
            width,
            store,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let sequence = load_manifest(&manifest)?;
            let steps = load_script(&script)?;
            info!(clips = sequence.len(), steps = steps.len(), "replaying");
            match store {
                Some(path) => {
                    let kv = FileStore::open(&path).with_context(|| {
                        format!("failed to open review store {}", path.display())
                    })?;
                    replay(sequence, &config, width, kv, &steps)
                }
                None => replay(sequence, &config, width, MemoryStore::new(), &steps),
            }
        }
        Command::Export { store, config } => {
            let store = open_store(&store, config.as_deref())?;
            match store.export() {
                Ok(json) => println!("{json}"),
                Err(ReviewError::NothingToExport) => println!("no changes"),
                Err(err) => return Err(err.into()),
            }
            Ok(())
        }
        Command::Summary { store, config } => {
            let store = open_store(&store, config.as_deref())?;
            println!("{}", store.summary()?);
            Ok(())
        }
        Command::Clear { store, config } => {
            let mut store = open_store(&store, config.as_deref())?;
            store.clear_all()?;
            println!("cleared");
            Ok(())
        }
    }
}

fn replay<K: KeyValueStore + 'static>(
    sequence: lightbox_model::Sequence,
    config: &LightboxConfig,
    width: f32,
    kv: K,
    steps: &[Step],
) -> Result<()> {
    let mut replayer = Replayer::new(sequence, config, width, kv);
    for step in steps {
        let report = replayer
            .apply(step)
            .with_context(|| format!("step '{step}' failed"))?;
        println!("{report}");
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<LightboxConfig> {
    match path {
        Some(path) => {
            let config = LightboxConfig::load_from_file(path)?;
            config
                .validate()
                .with_context(|| format!("invalid config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(LightboxConfig::load_from_env()?.0),
    }
}

fn open_store(
    path: &Path,
    config: Option<&Path>,
) -> Result<SelectionStore<FileStore>> {
    let config = load_config(config)?;
    let kv = FileStore::open(path).with_context(|| {
        format!("failed to open review store {}", path.display())
    })?;
    Ok(SelectionStore::new(kv, config.review))
}
