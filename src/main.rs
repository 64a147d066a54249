use plugwatch::app::AppState;
use plugwatch::settings::{apply_global, load_from_cli};
use plugwatch::storage;
use plugwatch::ui::run_ui;

fn main() -> std::io::Result<()> {
    let settings = load_from_cli()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let persisted = storage::load();

    let mut global = persisted.global_config;
    apply_global(&settings, &mut global);

    let app = AppState::new(global);
    run_ui(app)?;
    Ok(())
}
