//! TrackMap CLI - scripted console demonstration of the map screen
//! coordinator.
//!
//! Wires the `trackmap` library to console-printing collaborators, feeds
//! it a scripted location session (permission outcome plus a short walk of
//! fixes), then replays the user actions: cycling trackers, zooming,
//! recentering and tapping a marker.

mod console;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trackmap::{GeoPoint, LocationEvent, MapScreen, TrackerRegistry};

use crate::console::{ConsolePresenter, ConsoleSurface};

#[derive(Debug, Parser)]
#[command(name = "trackmap", version, about = "Tracker map coordination demo")]
struct Cli {
    /// Number of simulated device fixes to deliver.
    #[arg(long, default_value_t = 3)]
    fixes: u32,

    /// Deny the location permission instead of granting it.
    #[arg(long)]
    deny_location: bool,

    /// Log filter, e.g. "debug" or "trackmap=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .init();

    let mut screen = MapScreen::new(TrackerRegistry::bundled(), ConsolePresenter);
    screen.start(ConsoleSurface::default());

    // Scripted location session: one-shot permission outcome, then a short
    // southward walk near the start center. The channel closes when the
    // script ends, which terminates the event pump.
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(LocationEvent::PermissionResolved(!cli.deny_location))
        .expect("event channel open");
    for step in 0..cli.fixes {
        let fix = GeoPoint {
            latitude: 55.7558 - 0.0005 * f64::from(step),
            longitude: 37.6177 + 0.0003 * f64::from(step),
        };
        tx.send(LocationEvent::Fix(fix)).expect("event channel open");
    }
    drop(tx);
    screen.run_location_events(rx).await;

    info!(state = ?screen.permission_state(), "location session replayed");

    // Cycle once around the bundled trackers and wrap back to the first.
    for _ in 0..=screen.registry().len() {
        screen.next_tracker();
    }

    screen.zoom_in();
    screen.zoom_out();

    // No-op when the permission was denied.
    screen.recenter();

    // Tap the second marker to open its detail popup.
    screen.select_tracker(1);
}
