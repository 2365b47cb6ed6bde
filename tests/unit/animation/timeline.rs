use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ch {
    Y,
    Alpha,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cue {
    InPlace,
}

#[test]
fn steps_run_back_to_back() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new()
        .set(Ch::Y, 100.0)
        .tween(Ch::Y, 100.0, 0.0, 1.0, Ease::Linear)
        .cue(Cue::InPlace);
    assert_eq!(tl.duration(), 1.0);

    let t0 = tl.advance(0.0);
    assert_eq!(t0.value(Ch::Y), Some(100.0));
    assert!(t0.cues.is_empty());
    assert!(!t0.completed);

    let t1 = tl.advance(0.5);
    assert_eq!(t1.value(Ch::Y), Some(50.0));
    assert!(t1.cues.is_empty());

    let t2 = tl.advance(0.5);
    assert_eq!(t2.value(Ch::Y), Some(0.0));
    assert_eq!(t2.cues, vec![Cue::InPlace]);
    assert!(t2.completed);
    assert_eq!(tl.state(), TimelineState::Completed);

    let t3 = tl.advance(1.0);
    assert!(t3.values.is_empty());
    assert!(t3.cues.is_empty());
    assert!(!t3.completed);
}

#[test]
fn hold_delays_following_steps() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new().hold(0.15).cue(Cue::InPlace);
    assert!(tl.advance(0.1).cues.is_empty());
    let tick = tl.advance(0.05);
    assert_eq!(tick.cues, vec![Cue::InPlace]);
    assert!(tick.completed);
}

#[test]
fn tween_at_runs_in_parallel_without_extending_the_sequence() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new()
        .hold(0.15)
        .tween_at(0.15, Ch::Alpha, 1.0, 0.0, 0.2, Ease::Linear)
        .tween(Ch::Y, 0.0, -100.0, 0.65, Ease::Linear)
        .set(Ch::Y, 100.0);
    assert!((tl.duration() - 0.8).abs() < 1e-12);

    let tick = tl.advance(0.25);
    let alpha = tick.value(Ch::Alpha).unwrap();
    let y = tick.value(Ch::Y).unwrap();
    assert!(alpha > 0.0 && alpha < 1.0);
    assert!(y < 0.0 && y > -100.0);

    let tick = tl.advance(0.6);
    assert!(tick.completed);
    // The trailing set lands after the tween's final value.
    assert_eq!(tick.values.last(), Some(&(Ch::Y, 100.0)));
    assert_eq!(tick.value(Ch::Alpha), Some(0.0));
}

#[test]
fn kill_suppresses_everything_after() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new()
        .tween(Ch::Y, 0.0, 1.0, 1.0, Ease::Linear)
        .cue(Cue::InPlace);
    tl.advance(0.5);
    assert!(tl.is_running());
    tl.kill();
    assert!(!tl.is_running());
    let tick = tl.advance(5.0);
    assert!(tick.values.is_empty());
    assert!(tick.cues.is_empty());
    assert!(!tick.completed);
    assert_eq!(tl.state(), TimelineState::Killed);
}

#[test]
fn empty_timeline_completes_immediately() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new();
    assert!(tl.advance(0.0).completed);
}

#[test]
fn negative_and_nan_deltas_do_not_rewind() {
    let mut tl: Timeline<Ch, Cue> = Timeline::new().tween(Ch::Y, 0.0, 1.0, 1.0, Ease::Linear);
    tl.advance(0.5);
    tl.advance(-1.0);
    tl.advance(f64::NAN);
    assert_eq!(tl.elapsed(), 0.5);
}
