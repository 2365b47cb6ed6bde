use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{config::TransitionConfig, transition::events::Navigator};

struct Recorder(Rc<RefCell<Vec<String>>>);

impl Navigator for Recorder {
    fn push(&mut self, href: &str) {
        self.0.borrow_mut().push(href.to_string());
    }
}

fn sequencer() -> (TransitionSequencer, Rc<RefCell<Vec<String>>>) {
    let pushes = Rc::new(RefCell::new(Vec::new()));
    let seq = TransitionSequencer::new(
        TransitionConfig::default(),
        Box::new(Recorder(Rc::clone(&pushes))),
        "/",
    );
    (seq, pushes)
}

#[test]
fn plain_click_on_internal_link_starts_a_transition() {
    let (mut seq, _) = sequencer();
    let link = TransitionLink::new("/blog").with_label("Journal");
    assert_eq!(
        link.activate(&ActivationEvent::primary(), &mut seq),
        LinkActivation::Intercepted
    );
    assert!(seq.is_transitioning());
    assert_eq!(
        seq.pending().map(|p| p.resolved_label.as_str()),
        Some("JOURNAL")
    );
}

#[test]
fn modified_or_secondary_clicks_fall_through() {
    let (mut seq, _) = sequencer();
    let link = TransitionLink::new("/blog");

    let mut cmd = ActivationEvent::primary();
    cmd.modifiers.meta = true;
    let middle = ActivationEvent {
        button: 1,
        ..ActivationEvent::primary()
    };
    let prevented = ActivationEvent {
        default_prevented: true,
        ..ActivationEvent::primary()
    };

    for event in [cmd, middle, prevented] {
        assert_eq!(link.activate(&event, &mut seq), LinkActivation::BrowserDefault);
    }
    assert!(!seq.is_transitioning());
}

#[test]
fn external_new_tab_and_fragment_links_fall_through() {
    let (mut seq, _) = sequencer();
    let click = ActivationEvent::primary();
    for link in [
        TransitionLink::new("https://example.com/blog"),
        TransitionLink::new("//cdn.example.com/x"),
        TransitionLink::new("#top"),
        TransitionLink::new("blog"),
        TransitionLink::new("/blog").with_target("_blank"),
    ] {
        assert_eq!(link.activate(&click, &mut seq), LinkActivation::BrowserDefault);
    }
    assert!(!seq.is_transitioning());
}

#[test]
fn double_click_runs_one_transition() {
    let (mut seq, pushes) = sequencer();
    let link = TransitionLink::new("/about");
    let click = ActivationEvent::primary();
    assert_eq!(link.activate(&click, &mut seq), LinkActivation::Intercepted);
    assert_eq!(link.activate(&click, &mut seq), LinkActivation::Intercepted);

    seq.tick(1.0);
    assert_eq!(*pushes.borrow(), vec!["/about".to_string()]);
}
