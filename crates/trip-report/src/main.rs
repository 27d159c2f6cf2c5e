mod bootstrap;

use anyhow::Result;
use trip_core::formatting::{render_slot_table, render_zone_table};
use trip_core::models::TripReport;
use trip_core::settings::Settings;
use trip_data::aggregator::TripAggregator;
use trip_data::reader::ingest_path;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("trip-report v{} starting", env!("CARGO_PKG_VERSION"));

    let Some(input) = settings.input.as_ref() else {
        if settings.clear {
            // `--clear` with no input only wipes the saved parameters.
            return Ok(());
        }
        anyhow::bail!("no input file or directory given; see --help");
    };

    let layout = settings.timestamp_layout()?;
    tracing::info!(
        "Ingesting {} (layout: {}, top zones: {}, top slots: {})",
        input.display(),
        settings.layout,
        settings.top_zones,
        settings.top_slots
    );

    let mut aggregator = TripAggregator::new();
    ingest_path(input, layout, &mut aggregator);

    if aggregator.is_empty() {
        tracing::warn!("No trip records ingested from {}", input.display());
    }

    let report = TripReport {
        top_zones: aggregator.top_zones(settings.top_zones),
        top_slots: aggregator.top_busy_slots(settings.top_slots),
    };

    match settings.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => {
            println!("Top pickup zones");
            print!("{}", render_zone_table(&report.top_zones));
            println!();
            println!("Top busy slots");
            print!("{}", render_slot_table(&report.top_slots));
        }
    }

    tracing::info!(
        "Reported {} zones and {} slots from {} trips",
        report.top_zones.len(),
        report.top_slots.len(),
        aggregator.total_trips()
    );

    Ok(())
}
