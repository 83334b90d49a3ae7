//! Start prompt and game-over score board (Bevy UI text).

use bevy::prelude::*;

use crate::gameplay::{GameOver, SessionReset, SessionStarted};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_start_prompt)
            .add_systems(Update, (hide_prompt_on_start, show_score_board, restore_on_reset));
    }
}

#[derive(Component)]
pub struct StartPrompt;

#[derive(Component)]
pub struct ScoreBoard;

pub fn score_text(elapsed_secs: u64) -> String {
    format!("Game over!\nYou lasted {elapsed_secs} seconds\n\nPress R to play again")
}

fn overlay_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        top: Val::Percent(35.0),
        justify_content: JustifyContent::Center,
        ..default()
    }
}

pub fn spawn_start_prompt(mut commands: Commands) {
    commands
        .spawn((StartPrompt, overlay_node()))
        .with_children(|p| {
            p.spawn((
                Text::new("Dodge the falling spheres\n\nPress Enter or click to start"),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

fn hide_prompt_on_start(
    mut commands: Commands,
    mut started: EventReader<SessionStarted>,
    prompts: Query<Entity, With<StartPrompt>>,
) {
    if started.read().count() == 0 {
        return;
    }
    for e in &prompts {
        commands.entity(e).despawn();
    }
}

/// One board per game-over event.
pub fn show_score_board(mut commands: Commands, mut game_over: EventReader<GameOver>) {
    for ev in game_over.read() {
        commands
            .spawn((ScoreBoard, overlay_node()))
            .with_children(|p| {
                p.spawn((
                    Text::new(score_text(ev.elapsed_secs)),
                    TextFont {
                        font_size: 48.0,
                        ..default()
                    },
                    TextColor(Color::srgb(1.0, 0.85, 0.2)),
                    TextLayout::new_with_justify(JustifyText::Center),
                ));
            });
    }
}

fn restore_on_reset(
    mut commands: Commands,
    mut reset: EventReader<SessionReset>,
    boards: Query<Entity, With<ScoreBoard>>,
) {
    if reset.read().count() == 0 {
        return;
    }
    for e in &boards {
        commands.entity(e).despawn();
    }
    spawn_start_prompt(commands);
}
