//! Frame-driven progress timer
//!
//! A [`ProgressTimer`] turns continuous pointer presence into a normalized
//! progress value in `[0, 1]`. Every frame it recomputes
//! `elapsed / duration` from the session's start time, and when the value
//! reaches 1 it reports completion exactly once for that session.

use crate::{FrameHandle, Scheduler};
use std::time::Duration;

/// Result of servicing one frame for the running session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Progress advanced but the session is still running
    Progress(f32),
    /// Progress reached 1 and the session ended
    Complete {
        /// Nominal end of the session (`start + duration`)
        deadline: Duration,
    },
}

/// Transient per-element timing state, alive between start and completion/cancel
#[derive(Debug, Clone, Copy, PartialEq)]
struct HoverSession {
    start: Duration,
    duration: Duration,
    frame: FrameHandle,
}

/// Normalized progress for `elapsed` out of `duration`
///
/// A zero duration is always complete.
pub fn progress_fraction(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let fraction = elapsed.as_nanos() as f64 / duration.as_nanos() as f64;
    fraction.clamp(0.0, 1.0) as f32
}

/// Drives a single hover progress value from 0 to 1
///
/// At most one session is live at a time: [`start`](Self::start) always
/// cancels the previous one first, and frames belonging to a cancelled
/// session are ignored.
#[derive(Debug, Default)]
pub struct ProgressTimer {
    session: Option<HoverSession>,
    progress: f32,
}

impl ProgressTimer {
    /// Create an idle timer with zero progress
    pub fn new() -> Self {
        Self::default()
    }

    /// Current observable progress in `[0, 1]`
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether a session is currently running
    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Start a new session now, cancelling any running one
    pub fn start(&mut self, scheduler: &mut dyn Scheduler, duration: Duration) {
        let now = scheduler.now();
        self.start_at(scheduler, now, duration);
    }

    /// Start a new session anchored at `start`, cancelling any running one
    ///
    /// `start` may lie in the past; the next frame then reports the progress
    /// already accumulated. Used by repeat mode to chain sessions back to back.
    pub fn start_at(&mut self, scheduler: &mut dyn Scheduler, start: Duration, duration: Duration) {
        if let Some(session) = self.session.take() {
            scheduler.cancel_frame(session.frame);
        }
        let frame = scheduler.request_frame();
        log::trace!(
            "progress session started at {:?} for {:?}",
            start,
            duration
        );
        self.session = Some(HoverSession {
            start,
            duration,
            frame,
        });
    }

    /// Stop the running session (if any) and reset progress to 0
    ///
    /// Idempotent: safe to call when nothing is running.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(session) = self.session.take() {
            scheduler.cancel_frame(session.frame);
            log::trace!("progress session cancelled at {:?}", scheduler.now());
        }
        self.progress = 0.0;
    }

    /// Service a fired frame
    ///
    /// Returns `None` when `handle` does not belong to the running session.
    pub fn on_frame(&mut self, scheduler: &mut dyn Scheduler, handle: FrameHandle) -> Option<Tick> {
        let session = self.session.filter(|s| s.frame == handle)?;

        let elapsed = scheduler.now().saturating_sub(session.start);

        // Completion is decided on durations; the f32 value may round up to
        // 1.0 a few nanoseconds early.
        if elapsed < session.duration {
            self.progress = progress_fraction(elapsed, session.duration);
            self.session = Some(HoverSession {
                frame: scheduler.request_frame(),
                ..session
            });
            Some(Tick::Progress(self.progress))
        } else {
            self.progress = 1.0;
            self.session = None;
            Some(Tick::Complete {
                deadline: session.start + session.duration,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FrameScheduler, Wakeup};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn run(scheduler: &mut FrameScheduler, timer: &mut ProgressTimer, by: Duration) -> Vec<Tick> {
        let mut ticks = Vec::new();
        scheduler.advance(by, |s, wakeup| {
            if let Wakeup::Frame(handle) = wakeup {
                if let Some(tick) = timer.on_frame(s, handle) {
                    ticks.push(tick);
                }
            }
        });
        ticks
    }

    #[test]
    fn test_progress_fraction() {
        assert_eq!(progress_fraction(ms(0), ms(100)), 0.0);
        assert_eq!(progress_fraction(ms(50), ms(100)), 0.5);
        assert_eq!(progress_fraction(ms(250), ms(100)), 1.0);
        assert_eq!(progress_fraction(ms(0), Duration::ZERO), 1.0);
    }

    #[test]
    fn test_completes_once_at_duration() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        timer.start(&mut scheduler, ms(100));

        let ticks = run(&mut scheduler, &mut timer, ms(100));
        let completions = ticks
            .iter()
            .filter(|t| matches!(t, Tick::Complete { .. }))
            .count();

        assert_eq!(completions, 1);
        assert_eq!(timer.progress(), 1.0);
        assert!(!timer.is_running());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_progress_is_monotonic_while_running() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        timer.start(&mut scheduler, ms(200));

        let ticks = run(&mut scheduler, &mut timer, ms(150));
        let values: Vec<f32> = ticks
            .iter()
            .filter_map(|t| match t {
                Tick::Progress(p) => Some(*p),
                Tick::Complete { .. } => None,
            })
            .collect();

        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(timer.progress(), 0.75);
    }

    #[test]
    fn test_zero_duration_completes_on_next_frame() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        timer.start(&mut scheduler, Duration::ZERO);

        let ticks = run(&mut scheduler, &mut timer, Duration::ZERO);
        assert_eq!(ticks, vec![Tick::Complete { deadline: ms(0) }]);
    }

    #[test]
    fn test_cancel_resets_and_is_idempotent() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        timer.cancel(&mut scheduler);

        timer.start(&mut scheduler, ms(100));
        run(&mut scheduler, &mut timer, ms(48));
        assert!(timer.progress() > 0.0);

        timer.cancel(&mut scheduler);
        timer.cancel(&mut scheduler);
        assert_eq!(timer.progress(), 0.0);
        assert!(scheduler.is_idle());

        let ticks = run(&mut scheduler, &mut timer, ms(200));
        assert!(ticks.is_empty());
    }

    #[test]
    fn test_completion_waits_for_full_duration() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        let full = Duration::from_millis(1500);
        timer.start(&mut scheduler, full);

        let mut ticks = Vec::new();
        let mut frame = |scheduler: &mut FrameScheduler, at: Duration| {
            scheduler.begin_frame(at, |s, wakeup| {
                if let Wakeup::Frame(handle) = wakeup {
                    ticks.extend(timer.on_frame(s, handle));
                }
            });
        };
        frame(&mut scheduler, full - Duration::from_nanos(50));
        frame(&mut scheduler, full);

        assert!(matches!(ticks[0], Tick::Progress(_)));
        assert_eq!(ticks[1], Tick::Complete { deadline: full });
        assert_eq!(ticks.len(), 2);
    }

    #[test]
    fn test_restart_never_leaks_frames() {
        let mut scheduler = FrameScheduler::new();
        let mut timer = ProgressTimer::new();
        for _ in 0..10 {
            timer.start(&mut scheduler, ms(100));
        }
        assert_eq!(scheduler.pending_frames(), 1);
    }
}
