mod bootstrap;

use anyhow::{Context, Result};
use catalog_core::settings::Settings;
use catalog_data::charts::build_dashboard;
use catalog_data::reader;
use catalog_ui::app::App;
use catalog_ui::report;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    let app_dir = bootstrap::ensure_directories()?;
    let log_file = bootstrap::resolve_log_file(&settings, &app_dir);
    bootstrap::setup_logging(&settings.log_level, log_file.as_deref())?;

    tracing::info!("catalog-dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Data: {}, View: {}, Type: {}, Theme: {}",
        settings.data.display(),
        settings.view,
        settings.content_type,
        settings.theme
    );

    let table = reader::load(&settings.data)
        .with_context(|| format!("Could not load dataset {}", settings.data.display()))?;
    let dataset = bootstrap::dataset_name(&settings.data);
    let selection = settings.type_selection();

    match settings.view.as_str() {
        "report" => {
            let charts = build_dashboard(&table, selection)?;
            let stdout = std::io::stdout();
            report::write_report(
                &mut stdout.lock(),
                &charts,
                &dataset,
                selection.label(),
                settings.json,
            )?;
        }
        "dashboard" => {
            if settings.json {
                tracing::warn!("--json only applies to the report view; ignoring");
            }
            App::new(&table, dataset, &settings.theme, selection)?.run()?;
        }
        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    tracing::info!("catalog-dash finished");
    Ok(())
}
