//! normalizes EV infrastructure readiness metrics and writes the map, ranking
//! and detail data shown by the dashboard.
use clap::Parser;
use eiri::app::EiriApp;

fn main() {
    env_logger::init();
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    let args = EiriApp::parse();
    if let Err(e) = args.run() {
        log::error!("eiri failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
