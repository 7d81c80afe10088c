use std::collections::HashMap;
use std::sync::Arc;

use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::stream::{BoxStream, StreamExt};
use parking_lot::Mutex;
use seesturm_core::{AttendanceSource, AttendanceUpdate};
use seesturm_domain::Stufe;

/// In-memory mock for `AttendanceSource`.
///
/// Every subscriber gets its own channel; [`Self::emit`] pushes a full
/// snapshot to all open subscribers of a Stufe.
#[derive(Default, Clone)]
pub struct MockAttendanceSource {
    subscribers: Arc<Mutex<HashMap<Stufe, Vec<UnboundedSender<AttendanceUpdate>>>>>,
}

impl MockAttendanceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, stufe: Stufe, update: AttendanceUpdate) {
        if let Some(senders) = self.subscribers.lock().get(&stufe) {
            for sender in senders {
                let _ = sender.unbounded_send(update.clone());
            }
        }
    }

    /// Subscribers whose stream has not been dropped yet.
    pub fn open_subscribers(&self, stufe: Stufe) -> usize {
        self.subscribers
            .lock()
            .get(&stufe)
            .map_or(0, |senders| senders.iter().filter(|s| !s.is_closed()).count())
    }

    /// End every stream of `stufe`.
    pub fn close(&self, stufe: Stufe) {
        self.subscribers.lock().remove(&stufe);
    }
}

impl AttendanceSource for MockAttendanceSource {
    fn observe_attendance(&self, stufe: Stufe) -> BoxStream<'static, AttendanceUpdate> {
        let (sender, receiver) = unbounded();
        self.subscribers.lock().entry(stufe).or_default().push(sender);
        receiver.boxed()
    }
}
