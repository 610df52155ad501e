use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use super::FramePacer;

impl FramePacer {
    /// Create a pacer which sleeps for `delay` after each frame.
    pub fn new(delay: Duration, frames_to_track: usize) -> Self {
        let frames_to_track = frames_to_track.max(1);
        Self {
            delay,
            frames_to_track,
            frame_starts: VecDeque::with_capacity(frames_to_track + 1),
        }
    }

    /// Call at the beginning of each frame.
    pub fn start_frame(&mut self) {
        self.start_frame_at(Instant::now());
    }

    fn start_frame_at(&mut self, start: Instant) {
        if self.frame_starts.len() >= self.frames_to_track {
            self.frame_starts.pop_back();
        }
        self.frame_starts.push_front(start);
    }

    /// Block for the fixed inter-frame delay.
    pub fn sleep(&self) {
        if !self.delay.is_zero() {
            spin_sleep::sleep(self.delay);
        }
    }

    /// The number of frames started so far, up to `frames_to_track`.
    pub fn frames_tracked(&self) -> usize {
        self.frame_starts.len()
    }

    /// The average time between the oldest tracked frame start and now, or
    /// zero when no frame has started.
    pub fn avg_frame_time(&self) -> Duration {
        self.avg_frame_time_at(Instant::now())
    }

    fn avg_frame_time_at(&self, now: Instant) -> Duration {
        match self.frame_starts.back() {
            Some(oldest) => {
                let total = now.saturating_duration_since(*oldest);
                total / self.frame_starts.len() as u32
            }
            None => Duration::ZERO,
        }
    }
}
