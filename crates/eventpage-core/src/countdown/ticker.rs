//! Drives a [`CountdownEngine`] on a fixed one-second cadence.
//!
//! The first tick fires immediately; the schedule ends the moment the engine
//! reports [`Phase::Finished`], which drops the interval.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use super::clock::Clock;
use super::engine::{CountdownEngine, DisplaySurface, Phase};

/// Tick period.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Run the engine until it finishes, then hand it back.
///
/// Dropping the returned future stops the countdown early (e.g. when the
/// hosting view goes away).
pub async fn run<S, C>(mut engine: CountdownEngine<S, C>) -> CountdownEngine<S, C>
where
    S: DisplaySurface,
    C: Clock,
{
    let mut ticks = interval(TICK_PERIOD);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut count: u64 = 0;
    loop {
        ticks.tick().await;
        count += 1;
        if engine.tick() == Phase::Finished {
            break;
        }
    }

    tracing::debug!("Countdown ticker stopped after {} ticks", count);
    engine
}
