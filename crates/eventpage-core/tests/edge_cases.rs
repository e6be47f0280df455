//! Edge case and boundary condition tests
//!
//! These tests verify the countdown handles unusual configuration, clock
//! boundaries, and surface lifecycle correctly.

use chrono::{DateTime, TimeZone, Utc};
use eventpage_core::countdown::{CountdownEngine, CountdownFrame, DisplaySurface, ManualClock, Phase, TargetMoment};
use eventpage_core::EventConfig;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

fn engine_for(config: &EventConfig, clock: &ManualClock) -> CountdownEngine<Vec<CountdownFrame>, ManualClock> {
    CountdownEngine::init(config, Some(Vec::new()), clock.clone()).unwrap()
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Garbage date strings never prevent the engine from starting
#[test]
fn test_invalid_dates_use_fallback() {
    let clock = ManualClock::new(now());

    for bad in ["not-a-date", "", "   ", "2026-02-30T10:00:00", "tomorrow"] {
        let config = EventConfig::default().with_date_iso(bad);
        let mut engine = engine_for(&config, &clock);

        assert!(engine.target().is_fallback(), "{bad:?}");
        assert_eq!(*engine.target(), TargetMoment::fallback());
        assert_eq!(engine.tick(), Phase::Running);
    }
}

/// The fallback renders exactly what the fallback instant implies
#[test]
fn test_fallback_render_matches_fallback_instant() {
    let clock = ManualClock::new(now());
    let config = EventConfig::default().with_date_iso("not-a-date");
    let mut engine = engine_for(&config, &clock);
    engine.tick();

    let diff = TargetMoment::fallback().millis_until(now());
    let expected = CountdownFrame::from_remaining(&eventpage_core::RemainingDuration::from_millis(diff));
    assert_eq!(engine.surface()[0].values(), expected.values());
}

/// A config file with unknown keys still loads
#[test]
fn test_config_ignores_unknown_keys() {
    let config = EventConfig::from_json(
        r#"{ "dateISO": "2026-06-01T00:00:00Z", "venue": "Gedung Serbaguna", "bank": { "account": "1", "name": "BCA" } }"#,
    )
    .unwrap();
    assert_eq!(config.bank.account, "1");
}

/// Without a display surface the countdown does nothing
#[test]
fn test_missing_surface() {
    let engine: Option<CountdownEngine<Vec<CountdownFrame>, ManualClock>> =
        CountdownEngine::init(&EventConfig::default(), None, ManualClock::new(now()));
    assert!(engine.is_none());
}

// ============================================================================
// Clock Boundary Tests
// ============================================================================

/// Exactly at the target counts as finished
#[test]
fn test_exactly_at_target() {
    let clock = ManualClock::new(now());
    let config = EventConfig::default().with_date_iso("2026-01-01T12:00:00Z");
    let mut engine = engine_for(&config, &clock);

    assert_eq!(engine.tick(), Phase::Finished);
    assert!(engine.surface()[0].is_zero());
}

/// One millisecond before the target is still running
#[test]
fn test_one_millisecond_before_target() {
    let clock = ManualClock::new(now() - chrono::Duration::milliseconds(1));
    let config = EventConfig::default().with_date_iso("2026-01-01T12:00:00Z");
    let mut engine = engine_for(&config, &clock);

    assert_eq!(engine.tick(), Phase::Running);
    assert!(engine.surface()[0].is_zero());
}

/// Ticking after finishing keeps repainting zero, never animation
#[test]
fn test_terminal_state_is_idempotent() {
    let clock = ManualClock::new(now());
    let config = EventConfig::default().with_date_iso("2025-12-31T00:00:00Z");
    let mut engine = engine_for(&config, &clock);

    for _ in 0..5 {
        assert_eq!(engine.tick(), Phase::Finished);
    }
    let frames = engine.surface();
    assert_eq!(frames.len(), 5);
    assert!(frames.iter().all(|f| f.is_zero() && !f.is_animated()));
}

/// Very distant targets render wide day counts
#[test]
fn test_far_future_target() {
    let clock = ManualClock::new(now());
    let config = EventConfig::default().with_date_iso("2126-01-01T12:00:00Z");
    let mut engine = engine_for(&config, &clock);
    engine.tick();

    assert_eq!(engine.surface()[0].values(), ["36524", "00", "00", "00"]);
}

/// A long stall between ticks just renders the new value
#[test]
fn test_clock_jump_forward() {
    let clock = ManualClock::new(now());
    let config = EventConfig::default().with_date_iso("2026-01-02T12:00:00Z");
    let mut engine = engine_for(&config, &clock);

    engine.tick();
    clock.advance(chrono::Duration::hours(23));
    engine.tick();
    assert_eq!(engine.surface()[1].values(), ["00", "01", "00", "00"]);

    clock.advance(chrono::Duration::hours(2));
    assert_eq!(engine.tick(), Phase::Finished);
}

// ============================================================================
// Surface Lifecycle Tests
// ============================================================================

struct FlakySurface {
    attached: bool,
    frames: Vec<CountdownFrame>,
}

impl DisplaySurface for FlakySurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn replace(&mut self, frame: &CountdownFrame) {
        self.frames.push(frame.clone());
    }
}

/// A surface that goes away mid-countdown is skipped, not an error
#[test]
fn test_surface_detached_mid_lifecycle() {
    let clock = ManualClock::new(now());
    let target = TargetMoment::at(now() + chrono::Duration::seconds(10));
    let surface = FlakySurface {
        attached: true,
        frames: Vec::new(),
    };
    let mut engine = CountdownEngine::with_target(target, surface, clock.clone());

    engine.tick();
    let mut surface = engine.into_surface();
    surface.attached = false;

    let mut engine = CountdownEngine::with_target(target, surface, clock.clone());
    clock.advance(chrono::Duration::seconds(20));
    assert_eq!(engine.tick(), Phase::Running);
    assert_eq!(engine.surface().frames.len(), 1);
}

/// Borrowed surfaces work as well as owned ones
#[test]
fn test_borrowed_surface() {
    let mut frames: Vec<CountdownFrame> = Vec::new();
    {
        let target = TargetMoment::at(now() + chrono::Duration::seconds(61));
        let mut engine = CountdownEngine::with_target(target, &mut frames, ManualClock::new(now()));
        engine.tick();
    }
    assert_eq!(frames[0].values(), ["00", "00", "01", "01"]);
}
