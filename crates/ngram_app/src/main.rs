mod logging;
mod run;
mod settings;

use std::path::PathBuf;

use ngram_logging::ngram_info;

use settings::{SettingsOrigin, DEFAULT_SETTINGS_FILE};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let (settings, origin) = settings::load(&path)?;

    logging::initialize(settings.log.destination, settings.log.verbose);
    match origin {
        SettingsOrigin::File => ngram_info!("Loaded settings from {}", path.display()),
        SettingsOrigin::Defaults => {
            ngram_info!("No settings at {}, using defaults", path.display())
        }
    }
    ngram_info!(
        "Initializing {}-gram language model (k = {})",
        settings.model.max_order,
        settings.model.smoothing
    );

    let report = run::run(&settings)?;
    print!("{}", report.render());
    Ok(())
}
