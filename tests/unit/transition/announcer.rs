use super::*;

#[test]
fn signal_is_delivered_on_the_next_frame_only() {
    let mut a = RouteReadyAnnouncer::new();
    assert_eq!(a.on_animation_frame(), None);

    assert!(a.on_route_render("/blog", "?tag=rsc"));
    assert!(a.has_scheduled());
    assert_eq!(
        a.on_animation_frame(),
        Some(RouteReady::new("/blog", "tag=rsc"))
    );
    assert_eq!(a.on_animation_frame(), None);
}

#[test]
fn newer_render_replaces_the_scheduled_signal() {
    let mut a = RouteReadyAnnouncer::new();
    a.on_route_render("/a", "");
    a.on_route_render("/b", "");
    assert_eq!(a.on_animation_frame(), Some(RouteReady::new("/b", "")));
    assert_eq!(a.on_animation_frame(), None);
}

#[test]
fn unchanged_route_is_not_announced_again() {
    let mut a = RouteReadyAnnouncer::new();
    assert!(a.on_route_render("/blog", ""));
    a.on_animation_frame();
    assert!(!a.on_route_render("/blog", ""));
    assert!(a.on_route_render("/blog", "page=2"));
    assert!(a.on_route_render("/", ""));
}

#[test]
fn cancel_drops_pending_signal() {
    let mut a = RouteReadyAnnouncer::new();
    a.on_route_render("/about", "");
    a.cancel();
    assert_eq!(a.on_animation_frame(), None);
}
