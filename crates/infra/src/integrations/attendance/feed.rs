//! Push-based [`AttendanceSource`]
//!
//! Whatever syncs the attendance store (a listener, a poller, a test)
//! publishes full per-Stufe snapshots here. Each observer first sees the
//! latest snapshot, then every replacement, until the Stufe is closed.

use std::collections::HashMap;

use futures::stream::{self, BoxStream, StreamExt};
use parking_lot::Mutex;
use seesturm_core::{AttendanceSource, AttendanceUpdate};
use seesturm_domain::{AttendanceDocument, Stufe};
use tokio::sync::watch;
use tracing::debug;

type Slot = watch::Sender<Option<AttendanceUpdate>>;

#[derive(Default)]
pub struct AttendanceFeed {
    channels: Mutex<HashMap<Stufe, Slot>>,
}

impl AttendanceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot (or error) for `stufe`.
    pub fn publish(&self, stufe: Stufe, update: AttendanceUpdate) {
        let mut channels = self.channels.lock();
        let slot = channels.entry(stufe).or_insert_with(|| watch::channel(None).0);
        debug!(
            stufe = %stufe,
            documents = update.as_ref().map_or(0, Vec::len),
            failed = update.is_err(),
            "publishing attendance"
        );
        slot.send_replace(Some(update));
    }

    /// Split a mixed batch by Stufe and publish one snapshot per Stufe.
    ///
    /// Every Stufe receives a snapshot, empty if the batch has no documents
    /// for it.
    pub fn publish_documents(&self, documents: Vec<AttendanceDocument>) {
        let mut by_stufe: HashMap<Stufe, Vec<AttendanceDocument>> = HashMap::new();
        for document in documents {
            by_stufe.entry(document.stufe).or_default().push(document);
        }
        for stufe in Stufe::ALL {
            self.publish(stufe, Ok(by_stufe.remove(&stufe).unwrap_or_default()));
        }
    }

    /// End all open streams for `stufe`. A later publish starts a fresh
    /// channel.
    pub fn close(&self, stufe: Stufe) {
        if self.channels.lock().remove(&stufe).is_some() {
            debug!(stufe = %stufe, "closed attendance channel");
        }
    }

    pub fn observer_count(&self, stufe: Stufe) -> usize {
        self.channels.lock().get(&stufe).map_or(0, watch::Sender::receiver_count)
    }
}

impl AttendanceSource for AttendanceFeed {
    fn observe_attendance(&self, stufe: Stufe) -> BoxStream<'static, AttendanceUpdate> {
        let receiver = self
            .channels
            .lock()
            .entry(stufe)
            .or_insert_with(|| watch::channel(None).0)
            .subscribe();

        stream::unfold((receiver, true), |(mut receiver, first)| async move {
            if !first {
                receiver.changed().await.ok()?;
            }
            loop {
                let current = receiver.borrow_and_update().clone();
                if let Some(update) = current {
                    return Some((update, (receiver, false)));
                }
                receiver.changed().await.ok()?;
            }
        })
        .boxed()
    }
}
