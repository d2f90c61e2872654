use adw::Application;
use contact_directory::logging::init_logging;
use contact_directory::{ContactStore, DirectoryState, Settings};
use log::{info, warn};

/// Loads settings and starts logging. Never fails: a broken settings file
/// falls back to the defaults and is reported once logging is up.
pub fn startup() -> Settings {
    let (settings, load_err) = match Settings::load_or_init() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    if let Err(err) = init_logging(&settings.log_level) {
        eprintln!("Failed to start logging at `{}`: {err}", settings.log_level);
        if let Err(err) = init_logging("info") {
            eprintln!("Failed to start logging: {err}");
        }
    }
    if let Some(err) = load_err {
        warn!("event=settings_fallback reason=\"{err}\"");
    }
    settings
}

pub fn build_ui(app: &Application, settings: &Settings) {
    let mut generator = settings.generator();
    let store = ContactStore::initialize(&mut generator, settings.generated_contacts);
    info!(
        "event=directory_ready contacts={} seeded={}",
        store.len(),
        settings.seed.is_some()
    );
    crate::ui::main_window::show_main_window(app, settings, DirectoryState::new(store));
}
