use iced::{window, Size};

use firstwords::{gui, logging, Config};

fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}; using defaults", e);
            Config::default()
        }
    };
    logging::init_logging(&config.log_level);
    tracing::info!(data_file = %config.data_file.display(), "starting");

    iced::application(
        "First Words Tracker",
        gui::FirstWordsApp::update,
        gui::FirstWordsApp::view,
    )
    .window(window::Settings {
        size: Size::new(1200.0, 760.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(move || gui::FirstWordsApp::new(config))
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}
