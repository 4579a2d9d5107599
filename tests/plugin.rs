// Headless App tests for InputEventsPlugin
use bevy::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bevy_rts_input::constants::{CAMERA_FORWARD, DEFAULT_ACTIONS, SIMPLE_SELECT};
use bevy_rts_input::{
    ActionBinding, ActionQueue, ActionState, EventBus, GameEvent, InputActions,
    InputEventsPlugin, Listener,
};

struct Selected {
    count: usize,
}

impl GameEvent for Selected {}

#[derive(Resource)]
struct SelectQueue(ActionQueue);

fn headless_app(register_default_actions: bool) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(InputEventsPlugin { register_default_actions });
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
}

/// Run one frame, then clear per-frame edges the way InputPlugin would
fn frame(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.world_mut().resource_mut::<ButtonInput<MouseButton>>().clear();
}

#[test]
fn default_actions_registered_at_startup() {
    let mut app = headless_app(true);
    app.update();

    let actions = app.world().resource::<InputActions>();
    assert_eq!(actions.binding_count(), DEFAULT_ACTIONS.len());
    assert_eq!(
        actions.action_name(&ActionBinding::mouse(MouseButton::Left)),
        Some(SIMPLE_SELECT)
    );
}

#[test]
fn defaults_can_be_skipped() {
    let mut app = headless_app(false);
    app.update();
    assert_eq!(app.world().resource::<InputActions>().binding_count(), 0);
}

#[test]
fn held_key_ticks_through_the_schedule() {
    let mut app = headless_app(true);
    let queue = ActionQueue::new();
    app.world_mut()
        .resource_mut::<InputActions>()
        .add_action_listener(CAMERA_FORWARD, queue.listener());

    press(&mut app, KeyCode::ArrowUp);
    frame(&mut app);
    frame(&mut app);
    release(&mut app, KeyCode::ArrowUp);
    frame(&mut app);

    let states: Vec<_> = queue.drain().into_iter().map(|info| info.state).collect();
    assert_eq!(
        states,
        vec![ActionState::Initiated, ActionState::Executing, ActionState::Finished]
    );
}

fn publish_selections(queue: Res<SelectQueue>, bus: Res<EventBus>) {
    let finished = queue
        .0
        .drain()
        .into_iter()
        .filter(|info| info.state == ActionState::Finished)
        .count();
    if finished > 0 {
        bus.publish(&Selected { count: finished });
    }
}

#[test]
fn actions_feed_bus_events_via_systems() {
    let mut app = headless_app(false);
    let queue = ActionQueue::new();
    let delivered = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&delivered);
    let listener = Listener::new(move |event: &Selected| {
        sink.fetch_add(event.count, Ordering::SeqCst);
    });

    {
        let mut actions = app.world_mut().resource_mut::<InputActions>();
        actions.add_action("Select", ActionBinding::key(KeyCode::Space));
        actions.add_action_listener("Select", queue.listener());
    }
    app.world_mut().resource_mut::<EventBus>().add_listener(&listener);
    app.insert_resource(SelectQueue(queue))
        .add_systems(Update, publish_selections);

    press(&mut app, KeyCode::Space);
    frame(&mut app);
    release(&mut app, KeyCode::Space);
    frame(&mut app);
    assert_eq!(delivered.load(Ordering::SeqCst), 1);

    app.world_mut().resource_mut::<EventBus>().remove_listener(&listener);
    press(&mut app, KeyCode::Space);
    frame(&mut app);
    release(&mut app, KeyCode::Space);
    frame(&mut app);
    assert_eq!(delivered.load(Ordering::SeqCst), 1);
    assert!(app.world().resource::<EventBus>().is_empty());
}
