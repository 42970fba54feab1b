//! Debounced re-validation scheduling.
//!
//! Each document change schedules a delayed validation pass. A new
//! change within the debounce window cancels and replaces the pending
//! one, so at most one validation is pending per URI at any instant.
//! That discipline is a correctness invariant, not an optimization: it
//! keeps diagnostics from a superseded text snapshot from being
//! published after a newer snapshot's diagnostics.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::ide::{Diagnostic, validate};

/// Callback receiving `(uri, diagnostics)` on every publication. The
/// diagnostic set fully replaces the previous one for that URI.
pub type DiagnosticsSink = Arc<dyn Fn(&str, Vec<Diagnostic>) + Send + Sync>;

/// Schedules debounced validation passes, one pending per URI.
pub struct ValidationScheduler {
    pending: Arc<Mutex<FxHashMap<Arc<str>, CancellationToken>>>,
    debounce: Duration,
    sink: DiagnosticsSink,
}

impl ValidationScheduler {
    pub fn new(debounce: Duration, sink: DiagnosticsSink) -> Self {
        Self {
            pending: Arc::new(Mutex::new(FxHashMap::default())),
            debounce,
            sink,
        }
    }

    /// Schedule validation of `text`, cancelling any pending pass for
    /// the same URI.
    pub fn schedule(&self, uri: Arc<str>, text: Arc<str>) {
        let token = CancellationToken::new();
        {
            let mut pending = self.pending.lock();
            if let Some(superseded) = pending.insert(uri.clone(), token.clone()) {
                superseded.cancel();
                trace!(uri = uri.as_ref(), "superseded pending validation");
            }
        }

        let pending = Arc::clone(&self.pending);
        let sink = Arc::clone(&self.sink);
        let debounce = self.debounce;
        thread::spawn(move || {
            thread::sleep(debounce);

            // Check and publish under the map lock. A newer edit always
            // cancels the stored token before replacing it, so a
            // superseded snapshot can never publish after its successor.
            let mut pending = pending.lock();
            if token.is_cancelled() {
                trace!(uri = uri.as_ref(), "skipping cancelled validation");
                return;
            }
            pending.remove(uri.as_ref());

            let diagnostics = validate(&text);
            debug!(
                uri = uri.as_ref(),
                count = diagnostics.len(),
                "publishing diagnostics"
            );
            (sink)(&uri, diagnostics);
        });
    }

    /// Cancel any pending validation for `uri`. A no-op when nothing
    /// is pending.
    pub fn cancel(&self, uri: &str) {
        if let Some(token) = self.pending.lock().remove(uri) {
            token.cancel();
            trace!(uri, "cancelled pending validation");
        }
    }

    /// Whether a validation is currently pending for `uri`.
    pub fn has_pending(&self, uri: &str) -> bool {
        self.pending.lock().contains_key(uri)
    }
}
