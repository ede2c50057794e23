/// Frame clock for the platformer.
///
/// Gameplay advances in fixed ticks so running speed, jump height and the
/// animation cadence do not depend on the display's refresh rate. The
/// dialogue typewriter reads wall-clock frame time instead.
use std::time::{Duration, Instant};

/// Tick duration, one display frame at 60 Hz
pub const TICK_DURATION: Duration = Duration::from_micros(16_667);

/// Upper bound on ticks run for a single frame, so a stall does not
/// replay seconds of gameplay at once
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Longest frame the dialogue clock will accept
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Game loop timing state
pub struct GameLoop {
    /// Time not yet consumed by ticks
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    frame_count: u64,

    tick_count: u64,

    current_fps: f32,

    /// Wall-clock time covered by the current frame
    frame_delta: Duration,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
            frame_delta: Duration::ZERO,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        self.begin_frame_at(Instant::now())
    }

    fn begin_frame_at(&mut self, now: Instant) -> u32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // While paused neither gameplay nor the dialogue clock advance
        if self.paused {
            self.frame_delta = Duration::ZERO;
            return 0;
        }
        self.frame_delta = frame_time.min(MAX_FRAME_DELTA);

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }
        // Drop backlog the cap refused to run
        if ticks == MAX_TICKS_PER_FRAME {
            self.accumulator = self.accumulator.min(TICK_DURATION);
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Wall-clock milliseconds this frame contributes to timed effects
    pub fn frame_delta_ms(&self) -> f32 {
        self.frame_delta.as_secs_f32() * 1000.0
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state, returns true when now paused
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_one_tick_per_display_frame() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        let mut now = start;
        let mut ticks = 0;
        for _ in 0..60 {
            now += TICK_DURATION;
            ticks += game_loop.begin_frame_at(now);
        }
        assert_eq!(ticks, 60);
        assert_eq!(game_loop.tick_count(), 60);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        assert_eq!(game_loop.begin_frame_at(start + TICK_DURATION / 2), 0);
        assert_eq!(game_loop.begin_frame_at(start + TICK_DURATION), 1);
    }

    #[test]
    fn test_max_ticks_limit() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        let ticks = game_loop.begin_frame_at(start + Duration::from_millis(300));
        assert_eq!(ticks, MAX_TICKS_PER_FRAME);

        // The refused backlog is not replayed next frame
        let next = game_loop.begin_frame_at(start + Duration::from_millis(300) + TICK_DURATION);
        assert!(next <= 2);
    }

    #[test]
    fn test_paused_no_ticks_and_no_delta() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.pause();

        let ticks = game_loop.begin_frame_at(start + Duration::from_millis(50));
        assert_eq!(ticks, 0);
        assert_eq!(game_loop.frame_delta_ms(), 0.0);
        assert_eq!(game_loop.frame_count(), 1);
    }

    #[test]
    fn test_frame_delta_ms() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.begin_frame_at(start + Duration::from_millis(16));
        assert_relative_eq!(game_loop.frame_delta_ms(), 16.0, epsilon = 0.01);

        // Long stalls are capped
        game_loop.begin_frame_at(start + Duration::from_secs(5));
        assert_relative_eq!(game_loop.frame_delta_ms(), 250.0, epsilon = 0.01);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        assert!(game_loop.toggle_pause());
        assert!(game_loop.is_paused());
        assert!(!game_loop.toggle_pause());
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_resume_discards_accumulated_time() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        game_loop.begin_frame_at(start + TICK_DURATION / 2);
        game_loop.pause();
        game_loop.resume();
        assert_eq!(game_loop.begin_frame_at(start + TICK_DURATION), 0);
    }

    #[test]
    fn test_fps_reported_after_ten_frames() {
        let start = Instant::now();
        let mut game_loop = GameLoop::starting_at(start);
        let mut now = start;
        for _ in 0..10 {
            now += Duration::from_millis(20);
            game_loop.begin_frame_at(now);
        }
        assert_relative_eq!(game_loop.fps(), 50.0, epsilon = 0.5);
    }
}
