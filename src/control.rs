use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Measures how often something happens, averaged over the last
/// few registrations, independently of any scheduling
struct RateCounter {
    /// Frames registered at each instant
    buffer: VecDeque<(usize, Instant)>,
}

impl RateCounter {
    const LEN: usize = 16;

    fn new() -> Self {
        Self { buffer: VecDeque::with_capacity(Self::LEN) }
    }

    fn register_frames(&mut self, num_frames: usize, now: Instant) {
        if self.buffer.len() >= Self::LEN {
            self.buffer.pop_front();
        }
        self.buffer.push_back((num_frames, now));
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Frames per second, the frames of the first entry happened
    /// before the measured span and are not counted
    fn rate(&self) -> f64 {
        match (self.buffer.front(), self.buffer.back()) {
            (Some((_, first)), Some((_, last))) if self.buffer.len() >= 2 => {
                let span = last.duration_since(*first).as_secs_f64();
                let frames = self.buffer.iter().skip(1).map(|(n, _)| n).sum::<usize>();
                if span > 0. {
                    frames as f64 / span
                } else {
                    0.
                }
            }
            _ => 0.,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Playing,
    Paused,
    GameOver,
}

/// Fixed-timestep clock for the game, decides when ticks are due
/// and tracks whether the round is running
pub struct Control {
    tick_duration: Duration,
    last_update: Instant,

    // fraction of a tick that was not yet accounted for
    remainder: f64,

    // ticks that still need to be performed to catch up
    // with the current time
    missed_updates: Option<usize>,

    // time since the last update when the game was paused
    frozen_elapsed: Option<Duration>,

    state: State,

    measured_tick_rate: RateCounter,
    measured_draw_rate: RateCounter,
}

impl Control {
    /// After a long stall (e.g. the window being dragged) at most
    /// this many ticks are replayed, the rest are dropped
    pub const MAX_CATCH_UP: usize = 5;

    pub fn new(tick_duration: Duration) -> Result<Self> {
        Self::new_at(tick_duration, Instant::now())
    }

    pub fn new_at(tick_duration: Duration, now: Instant) -> Result<Self> {
        if tick_duration.is_zero() {
            return Err(Error::config("tick duration must be positive"));
        }
        Ok(Self {
            tick_duration,
            last_update: now,
            remainder: 0.,
            missed_updates: None,
            frozen_elapsed: None,
            state: State::Playing,
            measured_tick_rate: RateCounter::new(),
            measured_draw_rate: RateCounter::new(),
        })
    }

    // repeatedly called in update() as while loop condition
    pub fn can_update(&mut self) -> bool {
        self.can_update_at(Instant::now())
    }

    pub fn can_update_at(&mut self, now: Instant) -> bool {
        if self.state != State::Playing {
            return false;
        }

        match &mut self.missed_updates {
            Some(0) => {
                self.missed_updates = None;
                false
            }
            Some(n) => {
                *n -= 1;
                true
            }
            None => {
                let ticks = now.saturating_duration_since(self.last_update).as_secs_f64()
                    / self.tick_duration.as_secs_f64()
                    + self.remainder;
                let mut missed_updates = ticks as usize;

                if missed_updates == 0 {
                    return false;
                }

                self.remainder = ticks % 1.;
                self.last_update = now;
                if missed_updates > Self::MAX_CATCH_UP {
                    log::debug!(
                        "dropping {} ticks after a stall",
                        missed_updates - Self::MAX_CATCH_UP
                    );
                    missed_updates = Self::MAX_CATCH_UP;
                }
                self.missed_updates = Some(missed_updates - 1);
                self.measured_tick_rate.register_frames(missed_updates, now);
                true
            }
        }
    }

    // call in draw()
    pub fn graphics_frame(&mut self) {
        self.measured_draw_rate.register_frames(1, Instant::now());
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now())
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.state != State::Paused {
            return;
        }
        self.state = State::Playing;
        self.measured_tick_rate.reset();
        if let Some(elapsed) = self.frozen_elapsed.take() {
            self.last_update = now.checked_sub(elapsed).unwrap_or(now);
        }
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now())
    }

    pub fn pause_at(&mut self, now: Instant) {
        if self.state != State::Playing {
            return;
        }
        self.state = State::Paused;
        self.frozen_elapsed = Some(now.saturating_duration_since(self.last_update));
        self.missed_updates = None;
    }

    /// Stops all further ticks, there is no way back to `Playing`
    pub fn game_over(&mut self) {
        self.state = State::GameOver;
        self.missed_updates = None;
        self.frozen_elapsed = None;
    }

    pub fn measured_tick_rate(&self) -> f64 {
        self.measured_tick_rate.rate()
    }

    pub fn measured_draw_rate(&self) -> f64 {
        self.measured_draw_rate.rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    const TICK: Duration = Duration::from_millis(200);

    fn count_updates(control: &mut Control, now: Instant) -> usize {
        let mut n = 0;
        while control.can_update_at(now) {
            n += 1;
        }
        n
    }

    #[test]
    fn zero_tick_duration_is_rejected() {
        let err = Control::new_at(Duration::ZERO, Instant::now()).err().unwrap();
        assert!(matches!(err.error_type(), ErrorType::ConfigError(_)));
    }

    #[test]
    fn ticks_at_fixed_interval() {
        let start = Instant::now();
        let mut control = Control::new_at(TICK, start).unwrap();

        assert_eq!(count_updates(&mut control, start + Duration::from_millis(150)), 0);
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(200)), 1);
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(350)), 0);
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(410)), 1);
    }

    #[test]
    fn catches_up_on_missed_ticks() {
        let start = Instant::now();
        let mut control = Control::new_at(TICK, start).unwrap();
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(650)), 3);
        // the leftover 50ms carries over
        assert_eq!(count_updates(&mut control, start + Duration::from_millis(850)), 1);
    }

    #[test]
    fn catch_up_is_capped() {
        let start = Instant::now();
        let mut control = Control::new_at(TICK, start).unwrap();
        assert_eq!(
            count_updates(&mut control, start + Duration::from_secs(60)),
            Control::MAX_CATCH_UP
        );
    }

    #[test]
    fn no_ticks_while_paused() {
        let start = Instant::now();
        let mut control = Control::new_at(TICK, start).unwrap();

        control.pause_at(start + Duration::from_millis(150));
        assert_eq!(control.state(), State::Paused);
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(5)), 0);

        // 150ms of the tick were already spent before pausing
        let resume = start + Duration::from_secs(10);
        control.play_at(resume);
        assert_eq!(count_updates(&mut control, resume + Duration::from_millis(40)), 0);
        assert_eq!(count_updates(&mut control, resume + Duration::from_millis(60)), 1);
    }

    #[test]
    fn game_over_is_final() {
        let start = Instant::now();
        let mut control = Control::new_at(TICK, start).unwrap();
        control.game_over();
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(1)), 0);

        control.play_at(start + Duration::from_secs(2));
        assert_eq!(control.state(), State::GameOver);
        assert_eq!(count_updates(&mut control, start + Duration::from_secs(3)), 0);
    }
}
