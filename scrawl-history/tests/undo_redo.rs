use std::sync::{Arc, Mutex};

use scrawl_core::{Brush, PathPoint, Stroke};
use scrawl_history::DrawingHistory;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn stroke(seed: f32) -> Stroke {
    Stroke::new(
        vec![
            PathPoint::new(seed, seed),
            PathPoint::new(seed + 1.0, seed),
        ],
        Brush::default(),
    )
    .unwrap()
}

#[test]
fn committed_timeline_counts_every_stroke() {
    init_tracing();
    let mut history = DrawingHistory::new();
    for i in 0..20 {
        history.add_stroke(stroke(i as f32));
        assert_eq!(history.strokes().len(), i + 1);
    }
}

#[test]
fn undo_window_is_bounded_at_custom_depth() {
    init_tracing();
    let mut history = DrawingHistory::with_depth(2);
    history.add_stroke(stroke(1.0));
    history.add_stroke(stroke(2.0));
    history.add_stroke(stroke(3.0));

    history.undo();
    history.undo();
    assert!(!history.can_undo());
    history.undo();

    // the first stroke slid out of the window and survives
    assert_eq!(history.strokes().len(), 1);
}

#[test]
fn undo_then_redo_restores_timeline() {
    init_tracing();
    let mut history = DrawingHistory::new();
    let (a, b) = (stroke(1.0), stroke(2.0));
    history.add_stroke(a.clone());
    history.add_stroke(b.clone());

    history.undo();
    assert_eq!(history.strokes(), std::slice::from_ref(&a));

    history.redo();
    assert_eq!(history.strokes(), [a, b].as_slice());
}

#[test]
fn redo_reapplies_in_reverse_undo_order() {
    init_tracing();
    let mut history = DrawingHistory::new();
    let (a, b, c) = (stroke(1.0), stroke(2.0), stroke(3.0));
    history.add_stroke(a.clone());
    history.add_stroke(b.clone());
    history.add_stroke(c.clone());

    history.undo();
    history.undo();
    assert_eq!(history.strokes(), std::slice::from_ref(&a));

    history.redo();
    assert_eq!(history.strokes(), [a.clone(), b.clone()].as_slice());
    history.redo();
    assert_eq!(history.strokes(), [a, b, c].as_slice());
    assert!(!history.can_redo());
}

#[test]
fn observers_see_every_mutation_in_order() {
    init_tracing();
    let mut history = DrawingHistory::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    history.subscribe(move |strokes| sink.lock().unwrap().push(strokes.len()));

    history.add_stroke(stroke(1.0));
    history.add_stroke(stroke(2.0));
    history.undo();
    history.redo();
    history.clear();

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1, 2, 0]);
}

#[test]
fn noop_calls_do_not_notify() {
    init_tracing();
    let mut history = DrawingHistory::new();
    let calls = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&calls);
    history.subscribe(move |_| *sink.lock().unwrap() += 1);

    history.undo();
    history.redo();
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    init_tracing();
    let mut history = DrawingHistory::new();
    let calls = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&calls);
    let id = history.subscribe(move |_| *sink.lock().unwrap() += 1);

    history.add_stroke(stroke(1.0));
    assert!(history.unsubscribe(id));
    assert!(!history.unsubscribe(id));
    history.add_stroke(stroke(2.0));

    assert_eq!(*calls.lock().unwrap(), 1);
}
