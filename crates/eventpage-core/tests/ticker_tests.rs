//! Ticker lifecycle tests
//!
//! Run on tokio's paused clock so whole countdowns complete instantly. The
//! engine's wall clock is anchored to tokio time so both advance together.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use eventpage_core::countdown::{ticker, Clock, CountdownEngine, CountdownFrame, DisplaySurface, TargetMoment};
use parking_lot::Mutex;

// ============================================================================
// Test Utilities
// ============================================================================

/// Wall clock that advances with tokio's (possibly paused) clock.
struct TokioClock {
    wall: DateTime<Utc>,
    origin: tokio::time::Instant,
}

impl TokioClock {
    fn new(wall: DateTime<Utc>) -> Self {
        Self {
            wall,
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> DateTime<Utc> {
        self.wall + chrono::Duration::from_std(self.origin.elapsed()).unwrap()
    }
}

/// Surface whose frames stay readable after the engine is moved away.
#[derive(Clone, Default)]
struct SharedSurface {
    frames: Arc<Mutex<Vec<CountdownFrame>>>,
}

impl SharedSurface {
    fn values(&self) -> Vec<[String; 4]> {
        self.frames
            .lock()
            .iter()
            .map(|f| f.values().map(str::to_string))
            .collect()
    }
}

impl DisplaySurface for SharedSurface {
    fn replace(&mut self, frame: &CountdownFrame) {
        self.frames.lock().push(frame.clone());
    }
}

fn wall_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 9, 0, 0).unwrap()
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_counts_down_and_stops_at_zero() {
    let clock = TokioClock::new(wall_start());
    let target = TargetMoment::at(wall_start() + chrono::Duration::seconds(3));
    let surface = SharedSurface::default();

    let engine = CountdownEngine::with_target(target, surface.clone(), clock);
    let started = tokio::time::Instant::now();
    let engine = ticker::run(engine).await;

    assert!(engine.is_finished());
    assert_eq!(started.elapsed(), Duration::from_secs(3));

    let seconds: Vec<String> = surface.values().iter().map(|v| v[3].clone()).collect();
    assert_eq!(seconds, ["03", "02", "01", "00"]);
    assert!(surface.frames.lock().last().unwrap().is_zero());
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_is_immediate_and_only_animated_one() {
    let clock = TokioClock::new(wall_start());
    let target = TargetMoment::at(wall_start() + chrono::Duration::milliseconds(90_061_000));
    let surface = SharedSurface::default();
    let engine = CountdownEngine::with_target(target, surface.clone(), clock);

    // Long countdown: let it run for a bit, then drop it.
    let result = tokio::time::timeout(Duration::from_millis(2_500), ticker::run(engine)).await;
    assert!(result.is_err(), "countdown should still be running");

    let frames = surface.frames.lock();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].to_string(), "01 Hari / 01 Jam / 01 Menit / 01 Detik");
    assert!(frames[0].is_animated());
    assert!(frames[1..].iter().all(|f| !f.is_animated()));
    assert_eq!(frames[2].values(), ["01", "01", "00", "59"]);
}

#[tokio::test(start_paused = true)]
async fn test_past_target_finishes_without_waiting() {
    let clock = TokioClock::new(wall_start());
    let target = TargetMoment::at(wall_start() - chrono::Duration::milliseconds(5_000));
    let surface = SharedSurface::default();

    let started = tokio::time::Instant::now();
    let engine = ticker::run(CountdownEngine::with_target(target, surface.clone(), clock)).await;

    assert!(engine.is_finished());
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(surface.values(), vec![["00", "00", "00", "00"].map(String::from)]);
}

#[tokio::test(start_paused = true)]
async fn test_independent_engines() {
    let short = SharedSurface::default();
    let long = SharedSurface::default();

    let a = CountdownEngine::with_target(
        TargetMoment::at(wall_start() + chrono::Duration::seconds(1)),
        short.clone(),
        TokioClock::new(wall_start()),
    );
    let b = CountdownEngine::with_target(
        TargetMoment::at(wall_start() + chrono::Duration::seconds(2)),
        long.clone(),
        TokioClock::new(wall_start()),
    );

    let (a, b) = tokio::join!(ticker::run(a), ticker::run(b));
    assert!(a.is_finished() && b.is_finished());
    assert_eq!(short.frames.lock().len(), 2);
    assert_eq!(long.frames.lock().len(), 3);
}
