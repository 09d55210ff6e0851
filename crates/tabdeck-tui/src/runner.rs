//! Main TUI runner - entry point and event loop

use tabdeck_app::config::Settings;
use tabdeck_app::{Backend, Engine, HttpBackend};
use tabdeck_core::prelude::*;
use tabdeck_core::NativeLocation;

use super::{event, render, terminal};

/// Run the dashboard against the HTTP backend in `settings`, starting at
/// `initial`.
///
/// Must be called inside a multi-threaded tokio runtime: effects run on
/// worker tasks while this loop blocks on terminal input.
pub async fn run(settings: Settings, initial: NativeLocation) -> Result<()> {
    terminal::install_panic_hook();

    let backend = HttpBackend::new(&settings.backend)?;
    info!("Using backend at {}", settings.backend.base_url);

    let mut term = ratatui::init();

    let mut engine = Engine::new(settings, initial, backend);
    engine.spawn_signal_handler();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: Backend + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results, history changes and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving event loop at revision {}", engine.revision());
    Ok(())
}
