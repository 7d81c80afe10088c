//! Roster service - keeps a live roster per Stufe
//!
//! Each observed Stufe gets one task that owns a [`RosterComposer`]. The
//! task reacts to attendance emissions, commands from its [`RosterHandle`]
//! and the in-flight event fetch, and publishes a fresh snapshot through a
//! watch channel after every change. Readers always see the latest
//! snapshot; intermediate ones are simply overwritten.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::{BoxFuture, OptionFuture};
use futures::StreamExt;
use seesturm_common::Clock;
use seesturm_domain::{NormalizedEvent, Result, RosterSnapshot, SeesturmError, Stufe};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::composer::RosterComposer;
use super::ports::AttendanceSource;
use crate::events::CalendarService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterCommand {
    Refresh,
    SelectDate(DateTime<Utc>),
    CancelFetch,
}

/// Spawns and owns roster tasks
pub struct RosterService {
    calendar: Arc<CalendarService>,
    attendance: Arc<dyn AttendanceSource>,
    clock: Arc<dyn Clock>,
    shutdown: CancellationToken,
}

impl RosterService {
    pub fn new(
        calendar: Arc<CalendarService>,
        attendance: Arc<dyn AttendanceSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { calendar, attendance, clock, shutdown: CancellationToken::new() }
    }

    /// Start observing the roster of `stufe`, whose events live in
    /// `calendar_id`. An initial fetch from `selected_date` starts at once.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(self, calendar_id))]
    pub fn observe(
        &self,
        stufe: Stufe,
        calendar_id: impl Into<String>,
        selected_date: DateTime<Utc>,
    ) -> RosterHandle {
        let composer = RosterComposer::new(self.calendar.display_tz(), selected_date);
        let (snapshot_tx, snapshot_rx) = watch::channel(composer.snapshot(self.clock.now()));
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let cancel = self.shutdown.child_token();

        let task = RosterTask {
            stufe,
            calendar_id: calendar_id.into(),
            calendar: Arc::clone(&self.calendar),
            attendance: Arc::clone(&self.attendance),
            clock: Arc::clone(&self.clock),
            composer,
            snapshots: snapshot_tx,
        };
        let handle = tokio::spawn(task.run(command_rx, cancel.clone()));
        info!(stufe = %stufe, "roster observation started");

        RosterHandle { stufe, snapshots: snapshot_rx, commands: command_tx, cancel, task: Some(handle) }
    }

    /// Cancel every roster task spawned by this service.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

/// Handle to one live roster.
///
/// Dropping the handle stops the roster task.
pub struct RosterHandle {
    stufe: Stufe,
    snapshots: watch::Receiver<RosterSnapshot>,
    commands: mpsc::UnboundedSender<RosterCommand>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RosterHandle {
    pub fn stufe(&self) -> Stufe {
        self.stufe
    }

    /// Latest published snapshot.
    pub fn current(&self) -> RosterSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Independent receiver of future snapshots.
    pub fn subscribe(&self) -> watch::Receiver<RosterSnapshot> {
        self.snapshots.clone()
    }

    /// Wait for the next snapshot.
    ///
    /// # Errors
    /// Returns `Cancelled` once the roster task has stopped.
    pub async fn changed(&mut self) -> Result<RosterSnapshot> {
        self.snapshots.changed().await.map_err(|_| SeesturmError::Cancelled)?;
        Ok(self.snapshots.borrow_and_update().clone())
    }

    /// Refetch events, superseding any fetch still in flight.
    ///
    /// # Errors
    /// Returns `Cancelled` once the roster task has stopped.
    pub fn refresh(&self) -> Result<()> {
        self.send(RosterCommand::Refresh)
    }

    /// Change the date filter.
    ///
    /// # Errors
    /// Returns `Cancelled` once the roster task has stopped.
    pub fn select_date(&self, selected_date: DateTime<Utc>) -> Result<()> {
        self.send(RosterCommand::SelectDate(selected_date))
    }

    /// Abandon the in-flight event fetch, keeping the current events.
    ///
    /// # Errors
    /// Returns `Cancelled` once the roster task has stopped.
    pub fn cancel_fetch(&self) -> Result<()> {
        self.send(RosterCommand::CancelFetch)
    }

    /// Stop the roster task and wait for it to finish.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            if let Err(error) = task.await {
                debug!(error = %error, "roster task ended abnormally");
            }
        }
    }

    fn send(&self, command: RosterCommand) -> Result<()> {
        self.commands.send(command).map_err(|_| SeesturmError::Cancelled)
    }
}

impl Drop for RosterHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

type EventsFetch = BoxFuture<'static, Result<Vec<NormalizedEvent>>>;

struct RosterTask {
    stufe: Stufe,
    calendar_id: String,
    calendar: Arc<CalendarService>,
    attendance: Arc<dyn AttendanceSource>,
    clock: Arc<dyn Clock>,
    composer: RosterComposer,
    snapshots: watch::Sender<RosterSnapshot>,
}

impl RosterTask {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<RosterCommand>,
        cancel: CancellationToken,
    ) {
        let mut attendance = self.attendance.observe_attendance(self.stufe);
        let mut attendance_open = true;
        let mut fetched_from = self.composer.selected_date();
        let mut fetch: Option<EventsFetch> = Some(self.fetch(fetched_from));

        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                update = attendance.next(), if attendance_open => match update {
                    Some(update) => self.composer.apply_attendance(update),
                    None => {
                        debug!(stufe = %self.stufe, "attendance subscription closed");
                        attendance_open = false;
                        continue;
                    }
                },
                command = commands.recv() => match command {
                    None => break,
                    Some(RosterCommand::Refresh) => {
                        fetched_from = self.composer.selected_date();
                        fetch = Some(self.fetch(fetched_from));
                        continue;
                    }
                    Some(RosterCommand::SelectDate(selected_date)) => {
                        self.composer.select_date(selected_date);
                        if selected_date < fetched_from {
                            fetched_from = selected_date;
                            fetch = Some(self.fetch(fetched_from));
                        }
                    }
                    Some(RosterCommand::CancelFetch) => {
                        if fetch.take().is_some() {
                            debug!(stufe = %self.stufe, "event fetch cancelled");
                        }
                        continue;
                    }
                },
                Some(result) = OptionFuture::from(fetch.as_mut()), if fetch.is_some() => {
                    fetch = None;
                    if !self.composer.apply_events(result) {
                        continue;
                    }
                }
            }

            self.snapshots.send_replace(self.composer.snapshot(self.clock.now()));
        }

        info!(stufe = %self.stufe, "roster observation stopped");
    }

    fn fetch(&self, time_min: DateTime<Utc>) -> EventsFetch {
        let calendar = Arc::clone(&self.calendar);
        let calendar_id = self.calendar_id.clone();
        Box::pin(async move { calendar.fetch_all(&calendar_id, time_min).await })
    }
}
