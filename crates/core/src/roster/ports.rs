//! Attendance data source port

use futures::stream::BoxStream;
use seesturm_domain::{AttendanceDocument, Result, Stufe};

/// One emission of an attendance subscription: the complete current list,
/// or an error that leaves earlier lists valid.
pub type AttendanceUpdate = Result<Vec<AttendanceDocument>>;

/// Trait for live attendance subscriptions
pub trait AttendanceSource: Send + Sync {
    /// Subscribe to the An-/Abmeldungen of one Stufe.
    ///
    /// The stream ends when the source closes the subscription; dropping it
    /// unsubscribes.
    fn observe_attendance(&self, stufe: Stufe) -> BoxStream<'static, AttendanceUpdate>;
}
