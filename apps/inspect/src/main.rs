use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use parley_config::{load as load_config, MediaConfig, NodeConfiguration};
use parley_media::{Attachment, SizeOptions};
use parley_runtime::{decode_str, telemetry, PayloadKind};
use tracing::info;

#[derive(Parser)]
#[command(name = "parley-inspect")]
#[command(about = "Decode Parley payloads against the data model")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a JSON file as the given entity kind and print its canonical form
    Decode {
        /// Entity kind (run `kinds` for the list)
        kind: PayloadKind,
        /// JSON file to read, or `-` for stdin
        file: PathBuf,
        /// Fail when the payload carries fields the schema does not know
        #[arg(long)]
        strict: bool,
    },
    /// Print the download URL of an attachment
    Url {
        /// Attachment JSON file, or `-` for stdin
        file: PathBuf,
        /// Node configuration JSON used when no media URL is configured
        #[arg(long)]
        node: Option<PathBuf>,
        /// Longest side of the image preview
        #[arg(long)]
        max_side: Option<u32>,
    },
    /// List the entity kinds understood by `decode`
    Kinds,
    /// Print the effective client configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config().context("failed to load configuration")?;
    telemetry::init_tracing(&config.logging).context("failed to initialise tracing")?;

    match cli.command {
        Commands::Decode { kind, file, strict } => {
            let output = run_decode(kind, &file, strict)?;
            println!("{output}");
        }
        Commands::Url {
            file,
            node,
            max_side,
        } => {
            println!("{}", run_url(&config.media, &file, node.as_deref(), max_side)?);
        }
        Commands::Kinds => {
            for kind in PayloadKind::ALL {
                println!("{kind}");
            }
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    let mut input = String::new();
    if path == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
    } else {
        input = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(input)
}

fn run_decode(kind: PayloadKind, path: &Path, strict: bool) -> anyhow::Result<String> {
    let input = read_input(path)?;
    let decoded = decode_str(kind, &input)
        .with_context(|| format!("failed to decode {} as {kind}", path.display()))?;

    if strict && !decoded.lossless {
        bail!("{} carries fields outside the {kind} schema", path.display());
    }

    info!(%kind, summary = %decoded.summary, "payload decoded");
    Ok(serde_json::to_string_pretty(&decoded.canonical)?)
}

fn run_url(
    media: &MediaConfig,
    path: &Path,
    node: Option<&Path>,
    max_side: Option<u32>,
) -> anyhow::Result<String> {
    let attachment: Attachment = serde_json::from_str(&read_input(path)?)
        .with_context(|| format!("failed to decode {} as attachment", path.display()))?;

    let node = node
        .map(|node| -> anyhow::Result<NodeConfiguration> {
            serde_json::from_str(&read_input(node)?)
                .with_context(|| format!("failed to decode {} as node", node.display()))
        })
        .transpose()?;

    let base = match &node {
        Some(node) => media.resolve_url(node),
        None => media.autumn_url.as_deref(),
    }
    .context("no media service: set media.autumn_url or pass --node")?;

    let options = match media.preview_side(max_side) {
        Some(side) if attachment.is_image() => SizeOptions::max_side(side),
        _ => SizeOptions::default(),
    };

    info!(file = %attachment.id, base, "building attachment url");
    Ok(attachment.url(base, &options))
}
