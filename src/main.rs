// Demo: a selection consumer wired to the input action table and the event bus
use bevy::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bevy_rts_input::constants::*;
use bevy_rts_input::{
    ActionInfo, ActionQueue, ActionState, EventBus, GameEvent, InputActions, InputEventsPlugin,
    Listener,
};

/// Published when a drag selection is released
struct SelectionBoxEvent {
    start: Vec2,
    end: Vec2,
    additive: bool,  // Shift held: add to the current selection
}

impl GameEvent for SelectionBoxEvent {}

#[derive(Resource)]
struct SelectionInput {
    drags: ActionQueue,
    additive: Arc<AtomicBool>,
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(InputEventsPlugin::default())
        .add_systems(Startup, (setup_camera, wire_selection_consumer))
        .add_systems(Update, publish_box_selections)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Startup system: Subscribe the selection consumer to actions and bus events
fn wire_selection_consumer(
    mut commands: Commands,
    mut actions: ResMut<InputActions>,
    mut bus: ResMut<EventBus>,
) {
    let drags = ActionQueue::new();
    actions.add_action_listener(DRAG_SELECT, drags.listener());

    let additive = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&additive);
    actions.add_action_listener(ADD_MODIFIER, &Listener::new(move |info: &ActionInfo| {
        flag.store(info.state != ActionState::Finished, Ordering::Relaxed);
    }));

    actions.add_mouse_position_listener(
        |info| info.initial_position.x < SCREEN_EDGE_MARGIN,
        &Listener::new(|info: &ActionInfo| {
            debug!("Pointer at left screen edge: {:?}", info.last_position)
        }),
    );

    bus.add_listener(&Listener::new(|event: &SelectionBoxEvent| {
        info!(
            "Box selection from {:?} to {:?} (additive: {})",
            event.start, event.end, event.additive
        );
    }));

    commands.insert_resource(SelectionInput { drags, additive });
}

/// System: Turn finished drags into SelectionBoxEvents on the bus
fn publish_box_selections(selection: Res<SelectionInput>, bus: Res<EventBus>) {
    for info in selection.drags.drain() {
        if info.state != ActionState::Finished {
            continue;
        }
        if info.drag_delta().length() < BOX_SELECT_DRAG_THRESHOLD {
            continue;
        }
        bus.publish(&SelectionBoxEvent {
            start: info.initial_position,
            end: info.last_position,
            additive: selection.additive.load(Ordering::Relaxed),
        });
    }
}
