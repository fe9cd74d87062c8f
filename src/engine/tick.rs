// Fixed-rate tick timing
//
// Accumulator over wall-clock time: each call to `due_ticks` converts elapsed
// time into whole tick intervals, with catch-up capped so one long stall
// cannot snowball into an unbounded burst.

use std::time::{Duration, Instant};

/// Tick rate used when none is given at start
pub const DEFAULT_FPS: u32 = 30;

/// Maximum number of catch-up ticks per frame
const MAX_CATCH_UP_TICKS: u32 = 5;

/// Timing state for the fixed-interval tick loop
#[derive(Debug)]
pub struct TickTimer {
    /// Interval between ticks (1000/fps milliseconds)
    interval: Duration,

    /// Accumulated time not yet converted into ticks
    accumulator: Duration,

    /// Time of the last `due_ticks` call
    last_frame_time: Instant,

    /// Total ticks handed out
    tick_count: u64,
}

impl TickTimer {
    /// Create a timer firing `fps` times per second
    ///
    /// Callers validate fps > 0 before constructing.
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            tick_count: 0,
        }
    }

    /// The fixed interval between ticks
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks that have become due since the last call, capped
    pub fn due_ticks(&mut self) -> u32 {
        let now = Instant::now();
        self.accumulator += now.duration_since(self.last_frame_time);
        self.last_frame_time = now;

        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_CATCH_UP_TICKS {
            self.accumulator -= self.interval;
            due += 1;
        }

        // Time beyond the cap is discarded rather than carried forward.
        if due == MAX_CATCH_UP_TICKS {
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(due);
        due
    }

    /// Total ticks handed out since construction
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
