//! Background check for a newer release.
//!
//! The check starts when the program starts and runs on its own thread.
//! Only the version command waits for it, and only for [`CHECK_TIMEOUT`];
//! every other command exits without looking at the result.

pub mod version;

pub use version::{
    fetch_latest_version, is_newer_version, releases_url, UpdateInfo, NAME, RELEASES_URL,
    RELEASES_URL_ENV, VERSION,
};

use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// How long the version command waits for the check.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Handle to an update check running in the background.
pub struct UpdateCheck {
    rx: Receiver<Option<UpdateInfo>>,
}

impl UpdateCheck {
    /// Wait up to `timeout` for the outcome.
    ///
    /// `None` when the check timed out, failed, or found nothing newer.
    pub fn wait(&self, timeout: Duration) -> Option<UpdateInfo> {
        match self.rx.recv_timeout(timeout) {
            Ok(info) => info,
            Err(e) => {
                debug!("Update check not available: {}", e);
                None
            }
        }
    }
}

/// Start checking `url` for a newer release.
pub fn spawn_check(url: String) -> UpdateCheck {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let outcome = match fetch_latest_version(&url) {
            Ok(info) => info,
            Err(e) => {
                debug!("Update check failed: {}", e);
                None
            }
        };
        // Nobody may be listening any more
        let _ = tx.send(outcome);
    });

    UpdateCheck { rx }
}
