use dusk_reader::app::App;
use dusk_reader::ui::TuiManager;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; redirect it to a file when debugging, the
    // alternate screen owns stdout.
    env_logger::init();

    let mut app = App::new();
    let mut tui = TuiManager::new()?;

    tui.run_event_loop(&mut app)?;

    Ok(())
}
