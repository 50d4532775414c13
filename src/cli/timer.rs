//! Timer command - runs a presentation countdown followed by Q&A

use std::time::Duration;

use clap::Args;
use tracing::info;

use crate::domain::timer::{
    PresentationTimer, TimerPhase, DEFAULT_PRESENTATION_MINUTES, DEFAULT_QA_MINUTES,
};

#[derive(Args)]
pub struct TimerArgs {
    /// Presentation length in minutes
    #[arg(long, default_value_t = DEFAULT_PRESENTATION_MINUTES)]
    pub minutes: f64,

    /// Q&A length in minutes
    #[arg(long, default_value_t = DEFAULT_QA_MINUTES)]
    pub qa_minutes: f64,
}

pub async fn run(args: TimerArgs) -> anyhow::Result<()> {
    let mut timer = PresentationTimer::with_defaults(args.minutes, args.qa_minutes);
    timer.start(args.minutes);

    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    println!("{}", status_line(&timer));

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!(remaining = %timer.display(), "timer interrupted");
                return Ok(());
            }
        }

        if advance(&mut timer) {
            println!("Time is up");
            return Ok(());
        }
        println!("{}", status_line(&timer));
    }
}

/// One elapsed second; Q&A starts as soon as the presentation runs out
///
/// Returns true once both phases are over.
pub fn advance(timer: &mut PresentationTimer) -> bool {
    let before = timer.phase();
    timer.tick();

    if before == TimerPhase::Presentation && timer.phase() == TimerPhase::Qa {
        info!("presentation over, starting Q&A");
        timer.start(timer.input_minutes());
    }

    timer.phase() == TimerPhase::Done
}

fn status_line(timer: &PresentationTimer) -> String {
    let label = match timer.phase() {
        TimerPhase::Presentation => "Presentation",
        TimerPhase::Qa => "Q&A",
        TimerPhase::Done => "Done",
    };
    format!("{:<12} {}", label, timer.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_presentation_then_qa() {
        let mut timer = PresentationTimer::with_defaults(0.5, 0.25);
        timer.start(0.5);

        for _ in 0..29 {
            assert!(!advance(&mut timer));
        }
        assert_eq!(status_line(&timer), "Presentation 0:01");

        // Q&A starts on the same tick the presentation ends
        assert!(!advance(&mut timer));
        assert_eq!(timer.phase(), TimerPhase::Qa);
        assert!(timer.is_running());
        assert_eq!(status_line(&timer), "Q&A          0:15");

        for _ in 0..14 {
            assert!(!advance(&mut timer));
        }
        assert!(advance(&mut timer));
        assert_eq!(timer.phase(), TimerPhase::Done);
    }

    #[test]
    fn zero_length_qa_finishes_right_after_presentation() {
        let mut timer = PresentationTimer::with_defaults(0.5, 0.0);
        timer.start(0.5);

        let ticks = (1..=100).find(|_| advance(&mut timer));
        assert_eq!(ticks, Some(31));
    }
}
