//! Drive a page from JSON-lines UI events on stdin.
//!
//! Usage:
//!   landing-core [layout.json] < events.jsonl
//!
//! Each input line is one `UiEvent`, e.g.
//!   {"type":"submit","form":0,"fields":{"name":"Jo","email":"jo@ex.com","phone":"1234567"}}
//!   {"type":"lang_select","locale":"de"}
//!
//! Each presentation change is printed to stdout as one JSON line. Logs go to
//! stderr. The process exits once stdin closes and pending timers have fired.
//!
//! Environment variables: see `SiteConfig::from_env`.

use anyhow::{Context, Result};
use landing_core::config::SiteConfig;
use landing_core::page::{CounterSpec, Page, PageLayout};
use landing_core::runtime;
use landing_core::ui::{Effect, EffectSink, UiEvent};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Prints every effect as a JSON line on stdout.
struct ConsoleSink {
    out: std::io::Stdout,
}

impl EffectSink for ConsoleSink {
    fn emit(&mut self, effect: Effect) {
        match serde_json::to_string(&effect) {
            Ok(line) => {
                if let Err(e) = writeln!(self.out, "{}", line) {
                    warn!("Failed to write effect: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode effect: {}", e),
        }
    }
}

fn default_layout() -> PageLayout {
    PageLayout {
        forms: 1,
        lang_menus: 1,
        faq_groups: vec![4],
        drawer: true,
        modal: true,
        counters: vec![
            CounterSpec {
                target: 1200,
                suffix: "+".to_string(),
            },
            CounterSpec {
                target: 98,
                suffix: "%".to_string(),
            },
        ],
        reveals: 6,
        bars: vec![92, 78, 64],
    }
}

fn load_layout() -> Result<PageLayout> {
    match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read layout file {}", path))?;
            serde_json::from_str(&raw).with_context(|| format!("Invalid layout in {}", path))
        }
        None => Ok(default_layout()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr; stdout carries effects
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("landing_core=info".parse()?),
        )
        .init();

    let config = SiteConfig::from_env()?;
    let layout = load_layout()?;
    info!(
        locales = config.locales.list().len(),
        default = %config.locales.default_locale().code,
        "Loaded site configuration"
    );

    let (tx, rx) = mpsc::channel::<UiEvent>(64);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => match serde_json::from_str::<UiEvent>(&line) {
                    Ok(event) => {
                        if tx.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("Skipping invalid event line: {}", e),
                },
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    let mut sink = ConsoleSink {
        out: std::io::stdout(),
    };
    let page = runtime::run(Page::new(config, &layout), &mut sink, rx).await;

    let report = page.metrics().report();
    info!(
        "Metrics: {}",
        serde_json::to_string(&report).context("Failed to encode metrics")?
    );

    Ok(())
}
