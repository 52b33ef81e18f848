//! Event loop driving a [`Page`] from a channel of UI events.
//!
//! One task, one page: events and timers are handled strictly one at a time,
//! so components never see concurrent access.

use crate::page::Page;
use crate::ui::{Surface, UiEvent};
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

/// Run `page` until `events` closes and no timer is pending.
///
/// Returns the page so callers can inspect its final state and metrics.
pub async fn run<S: Surface>(
    mut page: Page,
    surface: &mut S,
    mut events: mpsc::Receiver<UiEvent>,
) -> Page {
    page.init(surface);
    let mut open = true;

    loop {
        let deadline = page.next_deadline();
        if !open && deadline.is_none() {
            break;
        }

        tokio::select! {
            event = events.recv(), if open => match event {
                Some(event) => {
                    debug!(?event, "Dispatching event");
                    page.dispatch(event, Instant::now(), surface);
                }
                None => {
                    debug!("Event source closed");
                    open = false;
                }
            },
            _ = wait_for(deadline) => {
                page.advance(Instant::now(), surface);
            }
        }
    }

    info!("Event loop finished");
    page
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
