mod app;
mod entities;
mod strip;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::entities::DataSource;
use crate::strip::StripConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long)]
    entities: Option<PathBuf>,
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = strip::RELAX_TICKS)]
    relax_ticks: usize,
    #[arg(long, default_value_t = 900)]
    transition_ms: u64,
    #[arg(long, default_value_t = 100)]
    resize_quiet_ms: u64,
    #[arg(long, default_value_t = strip::SURFACE_HEIGHT)]
    height: f32,
    #[arg(long, default_value = "info")]
    log: String,
}

impl Args {
    fn source(&self) -> DataSource {
        match &self.entities {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Sample { seed: self.seed },
        }
    }

    fn strip_config(&self) -> StripConfig {
        StripConfig {
            relax_ticks: self.relax_ticks,
            transition_secs: self.transition_ms as f64 / 1000.0,
            resize_quiet_secs: self.resize_quiet_ms as f64 / 1000.0,
            height: self.height.max(strip::ACTIVE_RADIUS * 2.0),
            ..StripConfig::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .init();

    let source = args.source();
    let config = args.strip_config();
    tracing::info!(source = %source.describe(), ?config, "starting score-strip");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "score-strip",
        options,
        Box::new(move |cc| Ok(Box::new(app::ScoreStripApp::new(cc, source, config)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_strip_constants() {
        let args = Args::parse_from(["score-strip"]);
        assert_eq!(args.strip_config(), StripConfig::default());
        assert!(matches!(args.source(), DataSource::Sample { seed: 1 }));
    }

    #[test]
    fn overrides_reach_the_config_and_source() {
        let args = Args::parse_from([
            "score-strip",
            "--entities",
            "people.json",
            "--relax-ticks",
            "300",
            "--transition-ms",
            "450",
            "--height",
            "10",
        ]);
        let config = args.strip_config();

        assert_eq!(config.relax_ticks, 300);
        assert_eq!(config.transition_secs, 0.45);
        assert_eq!(config.height, strip::ACTIVE_RADIUS * 2.0);
        assert!(matches!(args.source(), DataSource::File(path) if path == PathBuf::from("people.json")));
    }
}
