use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use sigpad::config::Config;
use sigpad::export::{self, SaveTarget};
use sigpad::input::Event;
use sigpad::pad::{PadError, SignaturePad};
use sigpad::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "sigpad")]
#[command(version, about = "Signature capture pad with smoothed freehand strokes and PNG export")]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SIGPAD_GIT_HASH"), ")"))]
struct Cli {
    /// Event trace to replay (JSON array of pointer/touch/control events)
    #[arg(long, short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file path (overrides the configured export directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Initial viewport width in pixels (selects the surface width bucket)
    #[arg(long, default_value_t = 800, value_name = "PX")]
    viewport: u32,

    /// Initial theme (light or dark), overriding the configured default
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Initial stroke thickness in pixels, overriding the configured default
    #[arg(long, value_name = "PX")]
    thickness: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let mut pad = SignaturePad::new(&config, cli.viewport)?;

    if let Some(name) = &cli.theme {
        let theme = Theme::from_name(name)
            .with_context(|| format!("Unknown theme '{name}' (expected light or dark)"))?;
        if theme != pad.theme() {
            pad.toggle_theme();
        }
    }

    if let Some(thickness) = cli.thickness {
        pad.set_thickness(thickness);
    }

    match &cli.input {
        Some(path) => {
            let trace = fs::read_to_string(path)
                .with_context(|| format!("Failed to read trace from {}", path.display()))?;
            let events: Vec<Event> = serde_json::from_str(&trace)
                .with_context(|| format!("Failed to parse trace from {}", path.display()))?;

            log::info!("Replaying {} events from {}", events.len(), path.display());
            for event in &events {
                pad.handle_event(event)?;
            }
        }
        None => {
            log::info!("No input trace given, drawing the sample signature");
            draw_sample(&mut pad)?;
        }
    }

    let image = pad.export_png()?;

    let saved = match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(path, &image)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path.clone()
        }
        None => {
            let target = SaveTarget::from_config(&config.export);
            export::save_signature(&image, &target)?
        }
    };

    log::info!(
        "Signature exported: {} ({}x{}, theme {:?})",
        saved.display(),
        pad.width(),
        pad.height(),
        pad.theme()
    );
    println!("{}", saved.display());

    Ok(())
}

/// Draws a damped sine sweep so a run without a trace still produces a
/// visible export.
fn draw_sample(pad: &mut SignaturePad) -> Result<(), PadError> {
    let w = f64::from(pad.width());
    let h = f64::from(pad.height());

    pad.begin_stroke(w * 0.1, h * 0.5);
    let steps = 60;
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        let x = w * (0.1 + 0.8 * t);
        let y = h * 0.5 + (t * std::f64::consts::PI * 4.0).sin() * h * 0.25 * (1.0 - t);
        pad.continue_stroke(x, y)?;
    }
    pad.end_stroke();

    Ok(())
}
