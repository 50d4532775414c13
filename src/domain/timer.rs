// Two-phase presentation countdown
// Per-session display state; never shared or persisted

use serde::Serialize;

pub const DEFAULT_PRESENTATION_MINUTES: f64 = 7.0;
pub const DEFAULT_QA_MINUTES: f64 = 3.0;

/// Which part of a team's slot the countdown is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Presentation,
    Qa,
    Done,
}

/// Countdown for one team's presentation followed by its Q&A
///
/// Driven by one `tick` per elapsed second. When the presentation countdown
/// runs out the timer stops and moves to Q&A with the Q&A default loaded;
/// when Q&A runs out it moves to `Done`.
///
/// # Example
/// ```
/// use teamdraw_api::domain::timer::{PresentationTimer, TimerPhase};
///
/// let mut timer = PresentationTimer::new();
/// timer.start(0.05);
/// for _ in 0..3 {
///     timer.tick();
/// }
/// assert_eq!(timer.phase(), TimerPhase::Qa);
/// assert!(!timer.is_running());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationTimer {
    phase: TimerPhase,
    running: bool,
    seconds_left: u64,
    input_minutes: f64,
    presentation_minutes: f64,
    qa_minutes: f64,
}

impl Default for PresentationTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationTimer {
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_PRESENTATION_MINUTES, DEFAULT_QA_MINUTES)
    }

    /// Timer with custom per-phase default lengths
    pub fn with_defaults(presentation_minutes: f64, qa_minutes: f64) -> Self {
        Self {
            phase: TimerPhase::Presentation,
            running: false,
            seconds_left: 0,
            input_minutes: presentation_minutes,
            presentation_minutes,
            qa_minutes,
        }
    }

    /// Starts counting down `minutes` in the current phase
    ///
    /// Fractional minutes are floored to whole seconds. Starting after `Done`
    /// begins a fresh presentation phase.
    pub fn start(&mut self, minutes: f64) {
        if self.phase == TimerPhase::Done {
            self.phase = TimerPhase::Presentation;
        }
        self.input_minutes = minutes;
        self.seconds_left = (minutes.max(0.0) * 60.0).floor() as u64;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stops and restores the current phase's default length
    pub fn reset(&mut self) {
        self.stop();
        self.input_minutes = match self.phase {
            TimerPhase::Presentation => self.presentation_minutes,
            _ => self.qa_minutes,
        };
    }

    /// Advances the countdown by one second
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.seconds_left > 1 {
            self.seconds_left -= 1;
            return;
        }

        self.seconds_left = 0;
        self.running = false;
        match self.phase {
            TimerPhase::Presentation => {
                self.phase = TimerPhase::Qa;
                self.input_minutes = self.qa_minutes;
            }
            TimerPhase::Qa | TimerPhase::Done => self.phase = TimerPhase::Done,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seconds_left(&self) -> u64 {
        self.seconds_left
    }

    /// Minutes that the next `start` would normally use
    pub fn input_minutes(&self) -> f64 {
        self.input_minutes
    }

    /// Remaining time as `M:SS`
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.seconds_left / 60, self.seconds_left % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(timer: &mut PresentationTimer, seconds: u64) {
        for _ in 0..seconds {
            timer.tick();
        }
    }

    #[test]
    fn starts_idle_in_presentation() {
        let timer = PresentationTimer::new();
        assert_eq!(timer.phase(), TimerPhase::Presentation);
        assert!(!timer.is_running());
        assert_eq!(timer.input_minutes(), 7.0);
        assert_eq!(timer.display(), "0:00");
    }

    #[test]
    fn start_loads_whole_seconds() {
        let mut timer = PresentationTimer::new();
        timer.start(1.51);
        assert_eq!(timer.seconds_left(), 90);
        assert_eq!(timer.display(), "1:30");
    }

    #[test]
    fn tick_counts_down_while_running() {
        let mut timer = PresentationTimer::new();
        timer.start(1.0);
        run(&mut timer, 5);
        assert_eq!(timer.display(), "0:55");
    }

    #[test]
    fn stopped_timer_does_not_count() {
        let mut timer = PresentationTimer::new();
        timer.start(1.0);
        timer.stop();
        run(&mut timer, 5);
        assert_eq!(timer.seconds_left(), 60);
    }

    #[test]
    fn presentation_rolls_into_qa() {
        let mut timer = PresentationTimer::new();
        timer.start(0.5);
        run(&mut timer, 30);

        assert_eq!(timer.phase(), TimerPhase::Qa);
        assert!(!timer.is_running());
        assert_eq!(timer.seconds_left(), 0);
        assert_eq!(timer.input_minutes(), 3.0);
    }

    #[test]
    fn qa_rolls_into_done() {
        let mut timer = PresentationTimer::new();
        timer.start(0.5);
        run(&mut timer, 30);
        timer.start(timer.input_minutes());
        run(&mut timer, 180);

        assert_eq!(timer.phase(), TimerPhase::Done);
        assert!(!timer.is_running());
    }

    #[test]
    fn reset_restores_phase_default() {
        let mut timer = PresentationTimer::with_defaults(5.0, 2.0);
        timer.start(9.0);
        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.input_minutes(), 5.0);

        timer.start(0.1);
        run(&mut timer, 6);
        timer.start(4.0);
        timer.reset();
        assert_eq!(timer.input_minutes(), 2.0);
    }

    #[test]
    fn display_pads_seconds() {
        let mut timer = PresentationTimer::new();
        timer.start(10.5);
        run(&mut timer, 25);
        assert_eq!(timer.display(), "10:05");
    }
}
