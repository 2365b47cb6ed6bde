use super::*;

fn settle(session: &mut AppSession) {
    for _ in 0..3 {
        session.step_frame();
    }
}

#[test]
fn initial_render_is_announced_without_starting_a_transition() {
    let mut s = AppSession::new(TransitionConfig::default(), "/", 0);
    let first = s.step_frame();
    assert_eq!(first.ready, Some(RouteReady::new("/", "")));
    assert!(!first.transitioning);
    assert_eq!(s.sequencer().last_known_path(), "/");
}

#[test]
fn blog_post_mounts_reading_progress() {
    let mut s = AppSession::new(TransitionConfig::default(), "/blog/edge-caching", 0)
        .with_viewport(1440.0, 1000.0);
    settle(&mut s);
    assert!(s.morph().get_snapshot().enabled);

    s.scroll(500.0, 3000.0);
    let f = s.step_frame();
    assert_eq!(f.morph.progress, 0.25);
    assert!(f.morph_active);
}

#[test]
fn home_mounts_the_pinned_hand_off() {
    let mut s = AppSession::new(TransitionConfig::default(), "/", 0).with_viewport(1440.0, 800.0);
    settle(&mut s);
    assert!(!s.morph().get_snapshot().enabled);

    s.scroll(400.0, 4000.0);
    let f = s.step_frame();
    assert!(f.morph.enabled);
    assert!(f.morph.progress > 0.0 && f.morph.progress < 0.5);
    assert!(f.morph_active);
}

#[test]
fn events_are_reported_on_the_frame_they_happen() {
    let mut s = AppSession::new(TransitionConfig::default(), "/", 0);
    settle(&mut s);
    s.navigate(TransitionRequest::new("/about"));
    let f = s.step_frame();
    assert_eq!(f.events, vec![TransitionEvent::Start]);
    assert!(s.step_frame().events.is_empty());
}

#[test]
fn time_budget_is_converted_at_the_session_frame_rate() {
    let mut s = AppSession::new(TransitionConfig::default(), "/", 0)
        .with_fps(Fps::new(30, 1).unwrap());
    settle(&mut s);
    s.navigate(TransitionRequest::new("/about"));

    let short = s.run_until_idle_for(0.5);
    assert_eq!(short.len(), 15);
    assert!(short.last().unwrap().transitioning);

    let rest = s.run_until_idle_for(10.0);
    assert!(rest.len() < 300);
    assert!(!rest.last().unwrap().transitioning);
}
