mod clock;
mod frame_pacer;

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

pub use self::clock::Clock;

/// The animation sleeps for a fixed delay after every frame rather than
/// targeting a frame rate. Slow frames simply make the animation run a
/// little slower; nothing tries to catch up.
///
/// The pacer also remembers when recent frames started so the average frame
/// time can be reported.
pub struct FramePacer {
    delay: Duration,
    frames_to_track: usize,
    frame_starts: VecDeque<Instant>,
}
