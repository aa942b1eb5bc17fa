//! Completion notification tests.
//!
//! These tests verify the event is emitted exactly once per finished
//! session, carries the right payload, and reaches every host context.

use std::cell::RefCell;
use std::rc::Rc;

use hotspot_match::core::{FixedOrder, MatchConfig, Target, TargetSet};
use hotspot_match::engine::MatchEngine;
use hotspot_match::games::skeleton::{self, SkeletonGameBuilder, ACTIVITY_ID};
use hotspot_match::notify::{
    CollectingSink, CompletionEvent, CompletionSink, HostRelay, JsonLineSink, COMPLETION_KIND,
};

fn two_targets() -> TargetSet {
    TargetSet::new(vec![Target::new("a", "A"), Target::new("b", "B")]).unwrap()
}

/// One event per Finished transition, none on reset or queries.
#[test]
fn test_emitted_once_per_finish() {
    let mut engine = SkeletonGameBuilder::new()
        .seed(1)
        .build(CollectingSink::new())
        .unwrap();

    engine.validate().unwrap();
    let _ = engine.score();
    let _ = engine.score_message();
    let _ = engine.results();
    assert!(engine.validate().is_err());
    assert_eq!(engine.sink().len(), 1);

    engine.reset().unwrap();
    assert_eq!(engine.sink().len(), 1);

    engine.validate().unwrap();
    assert_eq!(engine.sink().len(), 2);
}

#[test]
fn test_payload() {
    let mut engine = MatchEngine::with_shuffler(
        skeleton::targets().unwrap(),
        skeleton::config(),
        CollectingSink::new(),
        FixedOrder,
    );
    engine.place("Crâne", "skull").unwrap();
    engine.place("Côtes", "ribs").unwrap();
    engine.place("Tibia", "tibia").unwrap();

    let score = engine.validate().unwrap();

    let events = engine.sink_mut().take();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.kind, COMPLETION_KIND);
    assert_eq!(event.activity_id, ACTIVITY_ID);
    assert!(event.completed);
    assert_eq!(event.score, score);
    assert_eq!(event.score, 25);
    assert_eq!(event.max_score, 100);
}

/// The event reaches the direct host and the enclosing one.
#[test]
fn test_relay_to_parent_context() {
    let relay = HostRelay::embedded(CollectingSink::new(), CollectingSink::new());
    let mut engine = MatchEngine::with_shuffler(
        two_targets(),
        MatchConfig::new("quiz"),
        relay,
        FixedOrder,
    );
    engine.place("A", "a").unwrap();
    engine.validate().unwrap();

    let expected = CompletionEvent::finished("quiz", 50);
    assert_eq!(engine.sink().direct().events(), &[expected.clone()]);
    assert_eq!(
        engine.sink().parent().map(|p| p.events().to_vec()),
        Some(vec![expected])
    );
}

/// Closures work as sinks; state shared with the host is updated in place.
#[test]
fn test_closure_sink() {
    let received = Rc::new(RefCell::new(Vec::new()));
    let host = Rc::clone(&received);
    let sink = move |event: &CompletionEvent| host.borrow_mut().push(event.score);

    let mut engine = MatchEngine::with_shuffler(two_targets(), MatchConfig::default(), sink, FixedOrder);
    engine.place("A", "a").unwrap();
    engine.place("B", "b").unwrap();
    engine.validate().unwrap();

    assert_eq!(*received.borrow(), vec![100]);
}

/// JSON lines use the host wire names.
#[test]
fn test_json_line_sink_output() {
    let mut engine = MatchEngine::with_shuffler(
        two_targets(),
        MatchConfig::new("quiz"),
        JsonLineSink::new(Vec::new()),
        FixedOrder,
    );
    engine.validate().unwrap();

    let mut sink = JsonLineSink::new(Vec::new());
    std::mem::swap(engine.sink_mut(), &mut sink);
    let output = String::from_utf8(sink.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(output.trim_end()).unwrap();
    assert_eq!(value["type"], "BLOCK_COMPLETION");
    assert_eq!(value["blockId"], "quiz");
    assert_eq!(value["completed"], true);
    assert_eq!(value["score"], 0);
    assert_eq!(value["maxScore"], 100);
}

/// A sink that counts deliveries, to check nothing fires before validate.
#[derive(Default)]
struct CountingSink(usize);

impl CompletionSink for CountingSink {
    fn notify(&mut self, _event: &CompletionEvent) {
        self.0 += 1;
    }
}

#[test]
fn test_no_event_while_playing() {
    let mut engine = MatchEngine::with_shuffler(
        two_targets(),
        MatchConfig::default().with_abort(),
        CountingSink::default(),
        FixedOrder,
    );

    engine.place("A", "b").unwrap();
    engine.unplace("b").unwrap();
    engine.reset().unwrap();
    assert_eq!(engine.sink().0, 0);

    engine.validate().unwrap();
    assert_eq!(engine.sink().0, 1);
}
