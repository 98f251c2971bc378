use super::*;
use crate::tui::test_utils::render_app_to_buffer;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn make_mouse_event(kind: MouseEventKind, row: u16, column: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn left_click(area: Rect) -> MouseEvent {
    make_mouse_event(
        MouseEventKind::Down(MouseButton::Left),
        area.y + 1,
        area.x + area.width / 2,
    )
}

#[test]
fn test_click_without_rendered_button_is_ignored() {
    let app = make_app(60);
    let mouse = make_mouse_event(MouseEventKind::Down(MouseButton::Left), 5, 5);
    assert_eq!(app.handle_mouse_event(mouse), Action::None);
}

#[tokio::test(start_paused = true)]
async fn test_click_on_button_wakes_up() {
    let mut app = make_app(60);
    app.start().expect("runtime available");
    render_app_to_buffer(&mut app, 60, 20);
    let button = app.wake_button_area.expect("home renders the button");
    assert_eq!(app.handle_mouse_event(left_click(button)), Action::WakeUp);
}

#[tokio::test(start_paused = true)]
async fn test_click_outside_button_is_ignored() {
    let mut app = make_app(60);
    app.start().expect("runtime available");
    render_app_to_buffer(&mut app, 60, 20);
    let button = app.wake_button_area.expect("home renders the button");
    let above = make_mouse_event(
        MouseEventKind::Down(MouseButton::Left),
        button.y.saturating_sub(1),
        button.x,
    );
    let left_of = make_mouse_event(
        MouseEventKind::Down(MouseButton::Left),
        button.y + 1,
        button.x.saturating_sub(1),
    );
    assert_eq!(app.handle_mouse_event(above), Action::None);
    assert_eq!(app.handle_mouse_event(left_of), Action::None);
}

#[tokio::test(start_paused = true)]
async fn test_right_click_and_release_are_ignored() {
    let mut app = make_app(60);
    app.start().expect("runtime available");
    render_app_to_buffer(&mut app, 60, 20);
    let button = app.wake_button_area.expect("home renders the button");
    let mut right = left_click(button);
    right.kind = MouseEventKind::Down(MouseButton::Right);
    let mut release = left_click(button);
    release.kind = MouseEventKind::Up(MouseButton::Left);
    assert_eq!(app.handle_mouse_event(right), Action::None);
    assert_eq!(app.handle_mouse_event(release), Action::None);
}

#[tokio::test(start_paused = true)]
async fn test_click_after_wake_up_is_ignored() {
    let mut app = make_app(60);
    app.start().expect("runtime available");
    render_app_to_buffer(&mut app, 60, 20);
    let button = app.wake_button_area.expect("home renders the button");
    app.apply(Action::WakeUp).expect("runtime available");
    assert!(app.wake_button_area.is_none());
    assert_eq!(app.handle_mouse_event(left_click(button)), Action::None);
}

#[tokio::test(start_paused = true)]
async fn test_repeated_wake_up_does_not_restart_countdown() {
    let mut app = make_app(60);
    app.start().expect("runtime available");
    app.apply(Action::WakeUp).expect("runtime available");
    tokio::time::sleep(Duration::from_millis(5500)).await;
    app.apply(Action::WakeUp).expect("runtime available");
    assert_eq!(
        app.snapshot.countdown,
        Some(CountdownDisplay::Remaining("00:00:55".to_string()))
    );
}

#[test]
fn test_apply_quit_sets_flag() {
    let mut app = make_app(60);
    app.apply(Action::Quit).expect("quit never fails");
    assert!(app.should_quit);
}

#[test]
fn test_apply_none_changes_nothing() {
    let mut app = make_app(60);
    app.apply(Action::None).expect("no-op never fails");
    assert!(!app.should_quit);
    assert_eq!(app.snapshot.view, View::Home);
}

#[test]
fn test_tick_events_are_counted() {
    let mut app = make_app(60);
    for _ in 0..3 {
        assert_eq!(app.handle_event(Event::Tick), Action::None);
    }
    assert_eq!(app.handle_event(Event::Resize(80, 24)), Action::None);
    assert_eq!(app.tick_count, 3, "only ticks are counted");
}

#[test]
fn test_key_event_routed_through_handle_event() {
    use crossterm::event::{KeyCode, KeyEvent};
    let mut app = make_app(60);
    let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert_eq!(app.handle_event(Event::Key(key)), Action::Quit);
    assert_eq!(app.tick_count, 0);
}
