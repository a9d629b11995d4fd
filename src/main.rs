use silicon_info::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Could not load config: {:#}. Using defaults.", e);
        AppConfig::default()
    });

    run(config);
}

#[cfg(target_os = "macos")]
fn run(config: AppConfig) {
    use anyhow::Context;
    use silicon_info::app;
    use silicon_info::platform::macos;
    use tao::{
        event::{Event, StartCause},
        event_loop::{ControlFlow, EventLoop},
        platform::macos::{ActivationPolicy, EventLoopExtMacOS},
    };

    // Menu bar only: no Dock icon, no app menu.
    let mut event_loop = EventLoop::new();
    event_loop.set_activation_policy(ActivationPolicy::Accessory);

    let mut _session = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        if let Event::NewEvents(StartCause::Init) = event {
            tracing::info!("Application initialized.");
            match macos::start(&config).context("Failed to install the status item") {
                Ok(started) => _session = Some(started),
                Err(e) => std::process::exit(app::report_startup_failure(&e)),
            }
        }
    });
}

#[cfg(not(target_os = "macos"))]
fn run(_config: AppConfig) {
    tracing::error!("Silicon Info reads NSRunningApplication and only runs on macOS.");
    std::process::exit(1);
}
