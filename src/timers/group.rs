use super::script::PhaseScript;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// A phase delivered by a timer group, tagged with the group's epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSignal<P> {
    pub epoch: u64,
    pub cue: usize,
    pub phase: P,
}

/// All pending timers of one mounted screen.
///
/// Each scheduled script runs on its own task, so cues of one script fire
/// in script order. Cancelling (or dropping) the group aborts every task;
/// anything already sent still carries the old epoch and must be filtered
/// by the receiver.
#[derive(Debug)]
pub struct TimerGroup<P> {
    epoch: u64,
    signals: UnboundedSender<TimerSignal<P>>,
    handles: Vec<JoinHandle<()>>,
}

impl<P> TimerGroup<P>
where
    P: Send + 'static,
{
    pub fn new(epoch: u64, signals: UnboundedSender<TimerSignal<P>>) -> Self {
        Self {
            epoch,
            signals,
            handles: Vec::new(),
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn schedule(&mut self, script: PhaseScript<P>) {
        if script.is_empty() {
            return;
        }
        let epoch = self.epoch;
        let signals = self.signals.clone();
        tracing::debug!(
            epoch,
            cue_count = script.len(),
            total_ms = script.total().as_millis() as u64,
            "Scheduling phase script"
        );

        self.handles.retain(|handle| !handle.is_finished());
        self.handles.push(tokio::spawn(async move {
            let origin = Instant::now();
            for (cue, scheduled) in script.into_iter().enumerate() {
                sleep_until(origin + scheduled.at).await;
                let signal = TimerSignal {
                    epoch,
                    cue,
                    phase: scheduled.phase,
                };
                if signals.send(signal).is_err() {
                    // Receiver is gone, nobody left to drive
                    break;
                }
            }
        }));
    }

    /// Scripts that still have cues outstanding
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Abort every pending script. Returns how many still had work outstanding.
    pub fn cancel(&mut self) -> usize {
        let mut aborted = 0;
        for handle in self.handles.drain(..) {
            if !handle.is_finished() {
                aborted += 1;
            }
            handle.abort();
        }
        if aborted > 0 {
            tracing::debug!(epoch = self.epoch, aborted, "Cancelled pending timers");
        }
        aborted
    }
}

impl<P> Drop for TimerGroup<P> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}
