use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use mdview::cli::CliArgs;
use mdview::commands::DialogLevel;
use mdview::config::ViewerConfig;
use mdview::markdown::HtmlTemplate;
use mdview::window_state::WindowGeometry;

mod runtime;

use runtime::{App, UserEvent};

fn main() -> Result<()> {
    mdview::tracing::init();

    let startup = match CliArgs::parse().into_config() {
        Ok(startup) => startup,
        Err(e) => {
            tracing::info!("Exiting: {}", e);
            runtime::dialog::show(DialogLevel::Info, e.title(), e.user_message());
            return Ok(());
        }
    };

    let config = ViewerConfig::load();
    let template = HtmlTemplate::load(&config);
    tracing::debug!("Template source: {:?}", template.source());

    let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
    let mut app = App::new(
        startup,
        template,
        WindowGeometry::load(),
        event_loop.create_proxy(),
    );

    event_loop.run_app(&mut app)?;

    let code = app.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
