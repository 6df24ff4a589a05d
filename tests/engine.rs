use inkboard::canvas::Tool;
use inkboard::canvas::color::{BLACK, WHITE};
use inkboard::input::{Contact, Event};
use inkboard::{Config, SketchState};

fn make_state(width: i32, height: i32) -> SketchState {
    let _ = env_logger::builder().is_test(true).try_init();
    SketchState::with_defaults(width, height, Tool::Pen, BLACK, 4.0, WHITE, 0).unwrap()
}

fn stroke(state: &mut SketchState, from: (f64, f64), to: (f64, f64)) {
    state.handle(Event::ContactStart(vec![Contact::new(from.0, from.1)]));
    state.handle(Event::ContactMove(vec![Contact::new(to.0, to.1)]));
    state.handle(Event::ContactEnd);
}

fn pixel(state: &mut SketchState, x: i32, y: i32) -> (u8, u8, u8, u8) {
    state.surface.pixel(x, y).unwrap().unwrap()
}

fn alpha(state: &mut SketchState, x: i32, y: i32) -> u8 {
    pixel(state, x, y).3
}

#[test]
fn end_to_end_sketch_clear_undo() {
    let mut state = make_state(100, 100);

    // Fresh surface: blank, nothing recorded
    assert!(state.surface.is_blank().unwrap());
    assert_eq!(state.history.cursor(), None);

    // Stroke A: pen, black, width 4, from (10,10) to (50,50)
    stroke(&mut state, (10.0, 10.0), (50.0, 50.0));
    assert_eq!(state.history.cursor(), Some(0));
    assert_eq!(state.history.len(), 1);
    let (r, g, b, a) = pixel(&mut state, 30, 30);
    assert_eq!((r, g, b, a), (0, 0, 0, 255)); // opaque black line

    // Clear: blank surface, second snapshot
    state.handle(Event::Clear);
    assert_eq!(state.history.cursor(), Some(1));
    assert_eq!(state.history.len(), 2);
    assert!(state.surface.is_blank().unwrap());

    // Undo: back to the stroke A state
    state.handle(Event::Undo);
    assert_eq!(state.history.cursor(), Some(0));
    assert_eq!(alpha(&mut state, 30, 30), 255);
}

#[test]
fn mid_stroke_tool_switch_styles_segments_independently() {
    let mut state = make_state(100, 100);

    // A finished pen line across y=50
    stroke(&mut state, (10.0, 50.0), (90.0, 50.0));
    assert_eq!(alpha(&mut state, 50, 50), 255);

    // One stroke that starts as pen and becomes an eraser mid-move
    state.handle(Event::ContactStart(vec![Contact::new(50.0, 10.0)]));
    state.handle(Event::ContactMove(vec![Contact::new(50.0, 40.0)]));
    state.handle(Event::SelectTool(Tool::Eraser));
    state.handle(Event::SelectWidth(12.0));
    state.handle(Event::ContactMove(vec![Contact::new(50.0, 90.0)]));
    state.handle(Event::ContactEnd);

    // Earlier segment painted, later segment erased a hole through the line
    assert_eq!(alpha(&mut state, 50, 25), 255);
    assert_eq!(alpha(&mut state, 50, 50), 0);
    assert_eq!(alpha(&mut state, 30, 50), 255);

    // Still exactly one snapshot per completed stroke
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.cursor(), Some(1));
}

#[test]
fn drawing_after_undo_discards_the_undone_tail() {
    let mut state = make_state(100, 100);

    for y in [10.0, 30.0, 50.0] {
        stroke(&mut state, (10.0, y), (90.0, y));
    }
    assert_eq!(state.history.len(), 3);

    state.handle(Event::Undo);
    state.handle(Event::Undo);
    assert_eq!(state.history.cursor(), Some(0));

    stroke(&mut state, (10.0, 70.0), (90.0, 70.0));

    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history.cursor(), Some(1));
    assert_eq!(alpha(&mut state, 50, 10), 255);
    assert_eq!(alpha(&mut state, 50, 30), 0); // undone stroke is gone
    assert_eq!(alpha(&mut state, 50, 70), 255);
}

#[test]
fn repeated_undo_bottoms_out_blank() {
    let mut state = make_state(100, 100);

    stroke(&mut state, (10.0, 10.0), (50.0, 50.0));

    for _ in 0..4 {
        state.handle(Event::Undo);
        assert!(state.surface.is_blank().unwrap());
    }
}

#[test]
fn resize_keeps_the_visible_drawing() {
    let mut state = make_state(100, 100);

    stroke(&mut state, (10.0, 10.0), (50.0, 50.0));

    state.handle(Event::Resized {
        width: 240,
        height: 180,
    });
    assert_eq!(state.surface.width(), 240);
    assert_eq!(state.surface.height(), 180);
    assert_eq!(alpha(&mut state, 30, 30), 255);

    // Shrinking crops; the drawing near the origin survives
    state.handle(Event::Resized {
        width: 40,
        height: 40,
    });
    assert_eq!(alpha(&mut state, 20, 20), 255);
}

#[test]
fn engine_from_default_config_draws_in_black_pen() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config::default();
    let mut state = SketchState::new(100, 100, &config).unwrap();

    assert_eq!(state.current_tool, Tool::Pen);
    assert_eq!(state.current_color, BLACK);

    stroke(&mut state, (10.0, 50.0), (90.0, 50.0));
    assert_eq!(pixel(&mut state, 50, 50), (0, 0, 0, 255));
}
