//! Binary entry point for the caption track exporter.
//! This is the host application around the core library: it supplies the
//! persistence (a JSON draft file in, a `.vtt` file out) and the rendering
//! (log lines in place of toasts) that the core deliberately leaves out.

use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vidcap_core::session::CaptionSession;
use vidcap_core::store::CaptionDraft;
use vidcap_core::vtt;

/// Command line options for the binary.
#[derive(Parser)]
struct Cli {
    /// URL of the video the captions belong to.
    #[arg(long)]
    source: Option<String>,

    /// Enable verbose debug and trace logs.
    #[arg(long)]
    debug: bool,

    /// Where to write the WebVTT track; defaults to the input with a
    /// `.vtt` extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a JSON array of caption drafts (text/start/end strings).
    input: PathBuf,
}

/// Application entry point which parses CLI args and performs actions.
/// This function should initialize logging and delegate to the core library.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = if cli.debug {
        EnvFilter::default()
            .add_directive("vidcap=trace".parse().unwrap())
            .add_directive("vidcap_core=trace".parse().unwrap())
            .add_directive("info".parse().unwrap())
    } else {
        EnvFilter::default()
            .add_directive("vidcap=info".parse().unwrap())
            .add_directive("vidcap_core=info".parse().unwrap())
            .add_directive("warn".parse().unwrap())
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    export_track(&cli.input, cli.output.as_deref(), cli.source.as_deref())?;
    Ok(())
}

/// Read drafts from `input`, commit the valid ones and write a WebVTT track.
/// Rejected drafts are logged with the same message a toast would show and
/// skipped, matching how the interactive editor behaves, so one bad entry
/// never blocks the export.
fn export_track(input: &Path, output: Option<&Path>, source: Option<&str>) -> Result<PathBuf> {
    let mut session = CaptionSession::new();
    if let Some(url) = source {
        session.set_source(url);
        info!("captioning {url}");
    }
    let text = fs::read_to_string(input)?;
    let drafts: Vec<CaptionDraft> = serde_json::from_str(&text)?;
    info!("loaded {} drafts from {}", drafts.len(), input.display());
    let store = session.store_mut();
    for (i, draft) in drafts.iter().enumerate() {
        match store.validate_draft(draft, None) {
            Ok(caption) => {
                store.commit(caption);
                info!("Caption added successfully!");
            }
            Err(err) => warn!("draft {}: {err}", i + 1),
        }
    }
    info!("kept {} of {} drafts", store.len(), drafts.len());
    let out = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.with_extension("vtt"));
    fs::write(&out, vtt::encode(session.store().snapshot()))?;
    info!("wrote {}", out.display());
    Ok(out)
}
