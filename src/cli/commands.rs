//! Handlers for image conversion and config actions.

use std::io::Write;
use std::path::Path;

use super::args::{Args, ConfigAction};
use super::enums::OutputFormat;
use super::error::CliError;
use crate::braille::{rows_for_aspect, DEFAULT_CHAR_ASPECT_RATIO};
use crate::config::{self, default_path as get_config_path, Config};
use crate::pipeline::{Conversion, OutputStats, Pipeline};
use crate::raster::ImageSource;
use crate::settings::SettingsUpdate;

/// Convert the image named in `args` and write the result.
pub fn run_convert(args: &Args, config: &Config) -> Result<(), CliError> {
    let path = args.image.as_deref().ok_or(CliError::MissingImage)?;
    let limits = config.limits()?;

    let mut source = ImageSource::open(path)?;
    let mut settings = config.settings().apply(args.settings_update(), &limits);

    if args.fit && args.rows.is_none() {
        let (img_w, img_h) = source.dimensions();
        let rows = rows_for_aspect(img_w, img_h, settings.cols, DEFAULT_CHAR_ASPECT_RATIO);
        log::debug!("Fitted {} rows for {}x{} source", rows, img_w, img_h);
        settings = settings.apply(
            SettingsUpdate {
                rows: Some(rows),
                ..Default::default()
            },
            &limits,
        );
    }

    let conversion = Pipeline::new(limits).convert(&mut source, &settings)?;
    let rendered = render_output(&conversion, args.format)?;

    match &args.output {
        Some(out_path) => {
            std::fs::write(out_path, format!("{}\n", rendered)).map_err(|e| CliError::Output {
                path: out_path.clone(),
                source: e,
            })?;
            log::info!("Wrote output to {}", out_path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", rendered).map_err(CliError::Stdout)?;
        }
    }

    if !args.quiet {
        eprintln!("{}", format_stats(&conversion.stats));
    }
    Ok(())
}

/// Render a conversion as plain text or JSON.
pub fn render_output(conversion: &Conversion, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(conversion.text.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversion)?),
    }
}

/// One-line summary of output size.
pub fn format_stats(stats: &OutputStats) -> String {
    format!(
        "Characters: {} (max {})  Rows: {}  Columns: {}",
        stats.char_count, stats.safe_char_count, stats.rows, stats.cols
    )
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let path = config_path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(path.as_path()))?;
            let limits = config.limits()?;
            let settings = config.settings().clamped(&limits);

            println!("Current configuration:");
            println!("  Rows: {} ({}-{})", settings.rows, limits.min_rows, limits.max_rows);
            println!("  Columns: {} ({}-{})", settings.cols, limits.min_cols, limits.max_cols);
            println!("  Brightness: {}", settings.brightness);
            println!("  Contrast: {}", settings.contrast);
            println!("  Dithering: {}", if settings.dithering { "yes" } else { "no" });
            println!(
                "  Max characters: {}",
                OutputStats::empty(settings.rows, settings.cols).safe_char_count
            );
            println!();

            if path.exists() {
                println!("Config file: {} (exists)", path.display());
            } else {
                println!("Config file: {} (not found)", path.display());
            }
        }
        ConfigAction::Init => {
            config::write_default(&path)?;
            println!("Created config file: {}", path.display());
        }
    }
    Ok(())
}
