//! Frame and timer scheduling for the hover engine
//!
//! The core never talks to a real event loop. Everything that needs to wait
//! (progress animation, delayed open/close, debounce) goes through the
//! [`Scheduler`] capability and is woken up later with a [`Wakeup`] carrying
//! the handle it was given. Components compare the handle against the one
//! they hold, so a host can broadcast every wakeup to every component.
//!
//! [`FrameScheduler`] is the provided implementation. It runs on virtual time
//! (tests, deterministic replays) and can also be stepped from a real frame
//! loop with [`FrameScheduler::begin_frame`].

use std::collections::VecDeque;
use std::time::Duration;

/// Default spacing between virtual frames (~60 Hz)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Smallest frame interval accepted by [`FrameScheduler`]
const MIN_FRAME_INTERVAL: Duration = Duration::from_micros(1);

/// Handle to a pending per-frame callback request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Handle to a pending deferred timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// A fired frame request or timer, delivered back to its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wakeup {
    /// An animation frame requested with [`Scheduler::request_frame`]
    Frame(FrameHandle),
    /// A timer set with [`Scheduler::set_timer`] reached its deadline
    Timer(TimerHandle),
}

/// Minimal scheduling capability provided by the host
///
/// Time is measured as a [`Duration`] since the scheduler's origin.
/// Cancellation is synchronous: once `cancel_*` returns, the handle is never
/// delivered.
pub trait Scheduler {
    /// Current time since the scheduler's origin
    fn now(&self) -> Duration;

    /// Request a callback on the next frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a frame request (no-op for unknown or already fired handles)
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Schedule a timer to fire after `delay`
    fn set_timer(&mut self, delay: Duration) -> TimerHandle;

    /// Cancel a timer (no-op for unknown or already fired handles)
    fn cancel_timer(&mut self, handle: TimerHandle);
}

/// Something that owns scheduler handles and reacts when they fire
///
/// Implementations must return `None` for wakeups carrying handles they do
/// not currently own.
pub trait Wakeable {
    /// What the component reports when a wakeup changed something
    type Output;

    /// React to a fired frame request or timer
    fn on_wakeup(&mut self, scheduler: &mut dyn Scheduler, wakeup: Wakeup) -> Option<Self::Output>;
}

/// Frame-stepped scheduler running on virtual (or host-supplied) time
///
/// Each step fires due timers in deadline order, then every frame request
/// issued before the step. Frame requests made while a step is being
/// dispatched are serviced on the following step, so self-restarting
/// animations are driven by this loop rather than by nested callbacks.
///
/// # Example
///
/// ```
/// use dnc::{FrameScheduler, Scheduler, Wakeup};
/// use std::time::Duration;
///
/// let mut scheduler = FrameScheduler::new();
/// let timer = scheduler.set_timer(Duration::from_millis(300));
///
/// let mut fired = Vec::new();
/// scheduler.advance(Duration::from_millis(300), |_, wakeup| fired.push(wakeup));
/// assert_eq!(fired, vec![Wakeup::Timer(timer)]);
/// ```
#[derive(Debug)]
pub struct FrameScheduler {
    now: Duration,
    frame_interval: Duration,
    next_id: u64,
    frames: Vec<FrameHandle>,
    timers: Vec<(Duration, TimerHandle)>,
    in_flight: VecDeque<Wakeup>,
}

impl FrameScheduler {
    /// Create a scheduler at time zero with the default frame interval
    pub fn new() -> Self {
        Self::with_frame_interval(DEFAULT_FRAME_INTERVAL)
    }

    /// Create a scheduler at time zero with a custom frame interval
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            now: Duration::ZERO,
            frame_interval: frame_interval.max(MIN_FRAME_INTERVAL),
            next_id: 0,
            frames: Vec::new(),
            timers: Vec::new(),
            in_flight: VecDeque::new(),
        }
    }

    /// Spacing between virtual frames
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Number of frame requests waiting for the next step
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of timers that have not fired yet
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether any frame request or timer is outstanding
    pub fn is_idle(&self) -> bool {
        self.frames.is_empty() && self.timers.is_empty()
    }

    /// Advance virtual time by `by`, dispatching wakeups as they fire
    ///
    /// Time moves in frame-interval steps, additionally stopping at every
    /// timer deadline and exactly at `now + by`. `advance(Duration::ZERO, ..)`
    /// performs a single step at the current time, which services pending
    /// frame requests.
    pub fn advance<F>(&mut self, by: Duration, mut dispatch: F)
    where
        F: FnMut(&mut dyn Scheduler, Wakeup),
    {
        let target = self.now + by;
        loop {
            let mut next = (self.now + self.frame_interval).min(target);
            if let Some(deadline) = self.next_deadline() {
                if deadline > self.now {
                    next = next.min(deadline);
                }
            }
            self.step(next, &mut dispatch);
            if next >= target {
                break;
            }
        }
    }

    /// Perform a single step at a host-supplied time
    ///
    /// Intended for real frame loops: call once per rendered frame with the
    /// elapsed time since the host's origin. Time never moves backwards.
    pub fn begin_frame<F>(&mut self, now: Duration, mut dispatch: F)
    where
        F: FnMut(&mut dyn Scheduler, Wakeup),
    {
        let at = now.max(self.now);
        self.step(at, &mut dispatch);
    }

    /// Advance by `by`, routing every wakeup to `target` and collecting its outputs
    pub fn drive<W: Wakeable>(&mut self, by: Duration, target: &mut W) -> Vec<W::Output> {
        let mut outputs = Vec::new();
        self.advance(by, |scheduler, wakeup| {
            if let Some(output) = target.on_wakeup(scheduler, wakeup) {
                outputs.push(output);
            }
        });
        outputs
    }

    fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|(deadline, _)| *deadline).min()
    }

    fn step<F>(&mut self, at: Duration, dispatch: &mut F)
    where
        F: FnMut(&mut dyn Scheduler, Wakeup),
    {
        self.now = at;

        let mut due = Vec::new();
        self.timers.retain(|&(deadline, handle)| {
            if deadline <= at {
                due.push((deadline, handle));
                false
            } else {
                true
            }
        });
        due.sort();

        self.in_flight
            .extend(due.into_iter().map(|(_, handle)| Wakeup::Timer(handle)));
        self.in_flight
            .extend(self.frames.drain(..).map(Wakeup::Frame));

        // Wakeups cancelled by an earlier dispatch in this step are removed
        // from `in_flight` by the cancel methods.
        while let Some(wakeup) = self.in_flight.pop_front() {
            dispatch(self, wakeup);
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FrameScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id());
        self.frames.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.retain(|h| *h != handle);
        self.in_flight.retain(|w| *w != Wakeup::Frame(handle));
    }

    fn set_timer(&mut self, delay: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id());
        self.timers.push((self.now + delay, handle));
        handle
    }

    fn cancel_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|(_, h)| *h != handle);
        self.in_flight.retain(|w| *w != Wakeup::Timer(handle));
    }
}
