use tinywm_core::Manager;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() {
    tinywm::utils::log::setup_logging();
    tracing::info!("tinywm booting...");

    match run() {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => {
            tracing::error!("{}", err);
            std::process::exit(1);
        }
    }
}

fn run() -> tinywm_core::Result<()> {
    let display_server = XlibDisplayServer::new()?;
    let manager = Manager::<XlibWindowHandle, tinywm::Config, XlibDisplayServer>::new(
        tinywm::Config::default(),
        display_server,
    );
    manager.start_event_loop()
}
