//! Composition root of a play session.
//!
//! [`Walkthrough`] exclusively owns the navigation state, the mounted
//! screen and that screen's timer group. Screens answer inputs and timer
//! phases with a [`ScreenAction`]; only this module turns those into
//! navigation changes. Every remount bumps the epoch, so signals from a
//! replaced screen are recognised and dropped.

use crate::config::PlaybackConfig;
use crate::errors::WalkthroughResult;
use crate::input::Input;
use crate::navigation::{Navigation, NavigationSnapshot};
use crate::observability::{WalkthroughMetrics, WalkthroughStats};
use crate::render::write_frame;
use crate::router::route;
use crate::screens::{Phase, Screen, ScreenAction};
use crate::steps::{step_at, step_count, Step};
use crate::timers::{PhaseScript, TimerGroup, TimerSignal};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

/// Playback knobs resolved from config and CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughSettings {
    pub time_scale: f64,
    pub autoplay: bool,
    pub autoplay_dwell_ms: u64,
    pub show_guide: bool,
}

impl Default for WalkthroughSettings {
    fn default() -> Self {
        Self::from(&PlaybackConfig::default())
    }
}

impl From<&PlaybackConfig> for WalkthroughSettings {
    fn from(config: &PlaybackConfig) -> Self {
        Self {
            time_scale: config.time_scale,
            autoplay: config.autoplay,
            autoplay_dwell_ms: config.autoplay_dwell_ms,
            show_guide: config.show_guide,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Quit,
    EndOfInput,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub reason: EndReason,
    pub snapshot: NavigationSnapshot,
    pub stats: WalkthroughStats,
}

pub struct Walkthrough<W: Write> {
    nav: Navigation,
    screen: Screen,
    timers: TimerGroup<Phase>,
    epoch: u64,
    signals_tx: UnboundedSender<TimerSignal<Phase>>,
    signals_rx: UnboundedReceiver<TimerSignal<Phase>>,
    settings: WalkthroughSettings,
    show_guide: bool,
    notice: Option<&'static str>,
    metrics: WalkthroughMetrics,
    out: W,
}

impl<W: Write> Walkthrough<W> {
    pub fn new(settings: WalkthroughSettings, out: W) -> Self {
        let (signals_tx, signals_rx) = mpsc::unbounded_channel();
        Self {
            nav: Navigation::new(step_count()),
            screen: Screen::landing(),
            timers: TimerGroup::new(0, signals_tx.clone()),
            epoch: 0,
            signals_tx,
            signals_rx,
            show_guide: settings.show_guide,
            settings,
            notice: None,
            metrics: WalkthroughMetrics::new(),
            out,
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.nav.snapshot()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn metrics(&self) -> &WalkthroughMetrics {
        &self.metrics
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn guide_visible(&self) -> bool {
        self.show_guide
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    fn current_step(&self) -> Option<&'static Step> {
        let snapshot = self.nav.snapshot();
        if snapshot.started {
            step_at(snapshot.current_step_index)
        } else {
            None
        }
    }

    /// Mount the landing screen and draw the first frame.
    pub fn begin(&mut self) -> WalkthroughResult<()> {
        info!(
            steps = self.nav.step_count(),
            autoplay = self.settings.autoplay,
            time_scale = self.settings.time_scale,
            "Walkthrough session started"
        );
        self.mount_current();
        self.render()
    }

    /// Replace the mounted screen with the one routed for the current state.
    fn mount_current(&mut self) {
        let screen = if self.nav.snapshot().started {
            let step = self.current_step();
            Screen::mount(route(step), step)
        } else {
            Screen::landing()
        };
        self.install(screen);
    }

    fn install(&mut self, screen: Screen) {
        if self.timers.cancel() > 0 {
            self.metrics.record_group_cancelled();
        }
        self.epoch += 1;
        self.timers = TimerGroup::new(self.epoch, self.signals_tx.clone());
        self.notice = None;
        self.screen = screen;

        let step_id = self.current_step().map(|step| step.id);
        info!(
            epoch = self.epoch,
            step.id = step_id,
            screen = %self.screen.model().title(),
            "Mounted screen"
        );

        let mut scheduled = false;
        if let Some(script) = self.screen.model().mount_script() {
            self.timers.schedule(script.scaled(self.settings.time_scale));
            scheduled = true;
        }
        if self.settings.autoplay {
            let script = self
                .screen
                .model()
                .autoplay_inputs()
                .into_iter()
                .fold(PhaseScript::new(), |script, input| {
                    script.then_after(self.settings.autoplay_dwell_ms, Phase::Autoplay(input))
                });
            if !script.is_empty() {
                self.timers.schedule(script.scaled(self.settings.time_scale));
                scheduled = true;
            }
        }
        if scheduled {
            self.metrics.record_group_scheduled();
        }
    }

    fn render(&mut self) -> WalkthroughResult<()> {
        let notice = self.notice.take();
        write_frame(&mut self.out, self.nav.snapshot(), &self.screen, notice, self.show_guide)
    }

    pub fn handle_input(&mut self, input: Input) -> WalkthroughResult<Flow> {
        self.metrics.record_input();
        debug!(epoch = self.epoch, input = %input, "Input received");
        match input {
            Input::Quit => Ok(Flow::Quit),
            Input::Restart => self.restart(),
            Input::ToggleGuide => {
                self.show_guide = !self.show_guide;
                self.render()?;
                Ok(Flow::Continue)
            }
            input => {
                let action = self.screen.model_mut().handle_input(input);
                self.apply(action)
            }
        }
    }

    pub fn handle_signal(&mut self, signal: TimerSignal<Phase>) -> WalkthroughResult<Flow> {
        if signal.epoch != self.epoch {
            self.metrics.record_stale_signal();
            debug!(
                epoch = signal.epoch,
                current_epoch = self.epoch,
                phase = ?signal.phase,
                "Dropped stale timer signal"
            );
            return Ok(Flow::Continue);
        }
        match signal.phase {
            Phase::Advance => self.advance(),
            Phase::Autoplay(input) => self.handle_input(input),
            phase => {
                let action = self.screen.model_mut().handle_phase(phase);
                self.apply(action)
            }
        }
    }

    /// Wait for the next timer signal and handle it.
    pub async fn drive_next_signal(&mut self) -> WalkthroughResult<Flow> {
        match self.signals_rx.recv().await {
            Some(signal) => self.handle_signal(signal),
            None => Ok(Flow::Continue),
        }
    }

    fn apply(&mut self, action: ScreenAction) -> WalkthroughResult<Flow> {
        match action {
            ScreenAction::Ignored => {}
            ScreenAction::Redraw => self.render()?,
            ScreenAction::Notice(notice) => {
                self.notice = Some(notice);
                self.render()?;
            }
            ScreenAction::Schedule(script) => {
                self.timers.schedule(script.scaled(self.settings.time_scale));
                self.render()?;
            }
            ScreenAction::Advance => return self.advance(),
            ScreenAction::Start => {
                self.nav.start();
                self.mount_current();
                self.render()?;
            }
            ScreenAction::Restart => return self.restart(),
        }
        Ok(Flow::Continue)
    }

    fn advance(&mut self) -> WalkthroughResult<Flow> {
        let before = self.nav.snapshot();
        let after = self.nav.advance();
        if after != before {
            self.metrics.record_advance();
            debug!(
                from = before.current_step_index,
                to = after.current_step_index,
                finished = self.nav.is_finished(),
                "Advanced"
            );
            self.mount_current();
            self.render()?;
        }
        Ok(Flow::Continue)
    }

    fn restart(&mut self) -> WalkthroughResult<Flow> {
        let before = self.nav.snapshot();
        if self.nav.restart() != before {
            self.metrics.record_restart();
            debug!(epoch = self.epoch, "Remounting after restart");
            self.mount_current();
        }
        self.render()?;
        Ok(Flow::Continue)
    }

    /// Drive the session until quit, end of input or `shutdown` resolves.
    ///
    /// In autoplay mode end of input only stops reading; the session then
    /// runs on its own until the summary ends it. Timers are cancelled and
    /// stats logged on every exit, including errors.
    pub async fn run<R, S>(&mut self, reader: R, shutdown: S) -> WalkthroughResult<SessionOutcome>
    where
        R: AsyncBufRead + Unpin,
        S: Future<Output = ()>,
    {
        let ended = self.event_loop(reader, shutdown).await;

        if self.timers.cancel() > 0 {
            self.metrics.record_group_cancelled();
        }
        self.metrics.log_stats();
        let reason = ended?;
        let outcome = SessionOutcome {
            reason,
            snapshot: self.nav.snapshot(),
            stats: self.metrics.get_stats(),
        };
        info!(reason = ?outcome.reason, index = outcome.snapshot.current_step_index, "Walkthrough session ended");
        Ok(outcome)
    }

    async fn event_loop<R, S>(&mut self, mut reader: R, shutdown: S) -> WalkthroughResult<EndReason>
    where
        R: AsyncBufRead + Unpin,
        S: Future<Output = ()>,
    {
        self.begin()?;
        // Bytes survive a cancelled read, so a partial line is never lost
        let mut line = Vec::new();
        let mut reading = true;
        tokio::pin!(shutdown);

        loop {
            let flow = tokio::select! {
                biased;
                _ = &mut shutdown => return Ok(EndReason::Interrupted),
                Some(signal) = self.signals_rx.recv() => self.handle_signal(signal)?,
                read = reader.read_until(b'\n', &mut line), if reading => {
                    if read? == 0 && line.is_empty() {
                        if !self.settings.autoplay {
                            return Ok(EndReason::EndOfInput);
                        }
                        debug!("Input closed, autoplay continues");
                        reading = false;
                        Flow::Continue
                    } else {
                        let text = String::from_utf8_lossy(&line).into_owned();
                        line.clear();
                        self.handle_line(&text)?
                    }
                },
                else => return Ok(EndReason::EndOfInput),
            };
            if flow == Flow::Quit {
                return Ok(EndReason::Quit);
            }
        }
    }

    /// Bytes that are not UTF-8 arrive as replacement characters and are
    /// reported like any other unrecognised line.
    fn handle_line(&mut self, line: &str) -> WalkthroughResult<Flow> {
        match Input::parse(line) {
            Some(input) => self.handle_input(input),
            None => {
                debug!(line = %line.trim_end(), "Unrecognised input");
                self.notice = Some("Unrecognised input");
                self.render()?;
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::ScreenKind;
    use std::time::Duration;
    use tokio::io::BufReader;
    use tokio::time::Instant;

    fn manual() -> Walkthrough<Vec<u8>> {
        Walkthrough::new(
            WalkthroughSettings {
                time_scale: 1.0,
                autoplay: false,
                autoplay_dwell_ms: 1500,
                show_guide: true,
            },
            Vec::new(),
        )
    }

    fn text(walkthrough: &Walkthrough<Vec<u8>>) -> String {
        String::from_utf8_lossy(walkthrough.output()).into_owned()
    }

    /// Click and wait through the workflow until `index` is current.
    async fn walk_to(walkthrough: &mut Walkthrough<Vec<u8>>, index: usize) {
        walkthrough.begin().unwrap();
        walkthrough.handle_input(Input::Action).unwrap();
        while walkthrough.snapshot().current_step_index < index {
            match walkthrough.screen().kind() {
                Some(ScreenKind::Nomination) => {
                    walkthrough.handle_input(Input::Action).unwrap();
                }
                Some(ScreenKind::PmDashboard) => {
                    walkthrough.handle_input(Input::PickOrg(2)).unwrap();
                    walkthrough.handle_input(Input::Action).unwrap();
                    let current = walkthrough.snapshot().current_step_index;
                    while walkthrough.snapshot().current_step_index == current {
                        walkthrough.drive_next_signal().await.unwrap();
                    }
                }
                _ => {
                    walkthrough.drive_next_signal().await.unwrap();
                }
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_po_release_advances_exactly_once_after_its_script() {
        let mut walkthrough = manual();
        walk_to(&mut walkthrough, 4).await;
        assert_eq!(walkthrough.screen().kind(), Some(ScreenKind::Negotiation));
        let advances = walkthrough.metrics().get_stats().advances;

        let mounted_at = Instant::now();
        while walkthrough.snapshot().current_step_index == 4 {
            walkthrough.drive_next_signal().await.unwrap();
        }
        assert_eq!(mounted_at.elapsed(), Duration::from_millis(3900));
        assert_eq!(walkthrough.snapshot().current_step_index, 5);
        assert_eq!(walkthrough.metrics().get_stats().advances, advances + 1);
        assert_eq!(walkthrough.screen().kind(), Some(ScreenKind::Payment));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replaced_screen_timers_never_fire() {
        let mut walkthrough = manual();
        walk_to(&mut walkthrough, 4).await;
        let stale_epoch = walkthrough.epoch();

        // First phase only, then the screen is replaced
        walkthrough.drive_next_signal().await.unwrap();
        walkthrough.handle_input(Input::Restart).unwrap();
        assert_ne!(walkthrough.epoch(), stale_epoch);

        tokio::time::sleep(Duration::from_secs(10)).await;
        while let Ok(signal) = walkthrough.signals_rx.try_recv() {
            walkthrough.handle_signal(signal).unwrap();
        }
        assert_eq!(walkthrough.snapshot(), NavigationSnapshot::INITIAL);
        assert_eq!(walkthrough.screen().kind(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_epoch_is_counted_and_ignored() {
        let mut walkthrough = manual();
        walkthrough.begin().unwrap();
        walkthrough.handle_input(Input::Action).unwrap();

        let stale = TimerSignal {
            epoch: walkthrough.epoch() - 1,
            cue: 0,
            phase: Phase::Advance,
        };
        walkthrough.handle_signal(stale).unwrap();
        assert_eq!(walkthrough.snapshot().current_step_index, 0);
        assert_eq!(walkthrough.metrics().get_stats().stale_signals_dropped, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_without_org_shows_notice_and_stays() {
        let mut walkthrough = manual();
        walk_to(&mut walkthrough, 3).await;
        walkthrough.handle_input(Input::Action).unwrap();
        assert_eq!(walkthrough.snapshot().current_step_index, 3);
        assert!(text(&walkthrough).contains("⚠ Select POrg 2000 before releasing the PR"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_on_landing_is_not_counted() {
        let mut walkthrough = manual();
        walkthrough.begin().unwrap();
        let epoch = walkthrough.epoch();

        walkthrough.handle_input(Input::Restart).unwrap();
        assert_eq!(walkthrough.metrics().get_stats().restarts, 0);
        assert_eq!(walkthrough.epoch(), epoch);

        walkthrough.handle_input(Input::Action).unwrap();
        walkthrough.handle_input(Input::Restart).unwrap();
        assert_eq!(walkthrough.metrics().get_stats().restarts, 1);
        assert_eq!(walkthrough.snapshot(), NavigationSnapshot::INITIAL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_guide_toggle_is_not_navigation() {
        let mut walkthrough = manual();
        walkthrough.begin().unwrap();
        let before = walkthrough.snapshot();
        walkthrough.handle_input(Input::ToggleGuide).unwrap();
        assert!(!walkthrough.guide_visible());
        assert_eq!(walkthrough.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_session_reaches_summary_and_quits() {
        let mut walkthrough = Walkthrough::new(
            WalkthroughSettings {
                time_scale: 0.0,
                autoplay: true,
                autoplay_dwell_ms: 1500,
                show_guide: false,
            },
            Vec::new(),
        );
        let reader = BufReader::new(tokio_test::io::Builder::new().build());

        let outcome = walkthrough.run(reader, std::future::pending()).await.unwrap();
        assert_eq!(outcome.reason, EndReason::Quit);
        assert!(outcome.snapshot.started);
        assert_eq!(outcome.snapshot.current_step_index, step_count());
        assert_eq!(outcome.stats.advances, step_count() as u64);
        assert_eq!(outcome.stats.restarts, 0);
        assert!(text(&walkthrough).contains("Project MnM Complete!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scripted_stdin_session() {
        let mut walkthrough = manual();
        let stdin = tokio_test::io::Builder::new()
            .read(b"\n\n\n\n")
            .read(b"1\nd\nzzz\nq\n")
            .build();

        let outcome = walkthrough
            .run(BufReader::new(stdin), std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome.reason, EndReason::Quit);
        assert_eq!(outcome.snapshot.current_step_index, 3);

        let output = text(&walkthrough);
        assert!(output.contains("POrg not allowed for this plant"));
        assert!(output.contains("Payment Terms"));
        assert!(output.contains("⚠ Unrecognised input"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_utf8_line_is_reported_not_fatal() {
        let mut walkthrough = manual();
        let stdin = tokio_test::io::Builder::new().read(b"\n\xff\xfe\nq\n").build();

        let outcome = walkthrough
            .run(BufReader::new(stdin), std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome.reason, EndReason::Quit);
        assert_eq!(
            outcome.snapshot,
            NavigationSnapshot { started: true, current_step_index: 0 }
        );
        assert_eq!(outcome.stats.inputs, 2);
        assert!(text(&walkthrough).contains("⚠ Unrecognised input"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_line_without_newline_is_handled() {
        let mut walkthrough = manual();
        let stdin = tokio_test::io::Builder::new().read(b"\nq").build();

        let outcome = walkthrough
            .run(BufReader::new(stdin), std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome.reason, EndReason::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_of_input_ends_interactive_session() {
        let mut walkthrough = manual();
        let stdin = tokio_test::io::Builder::new().read(b"\n").build();

        let outcome = walkthrough
            .run(BufReader::new(stdin), std::future::pending())
            .await
            .unwrap();
        assert_eq!(outcome.reason, EndReason::EndOfInput);
        assert_eq!(
            outcome.snapshot,
            NavigationSnapshot { started: true, current_step_index: 0 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_interrupts_session() {
        let mut walkthrough = manual();
        let stdin = tokio_test::io::Builder::new().build();

        let outcome = walkthrough
            .run(BufReader::new(stdin), std::future::ready(()))
            .await
            .unwrap();
        assert_eq!(outcome.reason, EndReason::Interrupted);
        assert_eq!(outcome.snapshot, NavigationSnapshot::INITIAL);
    }
}
