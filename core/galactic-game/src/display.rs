//! Plain-text rendering of cards and the scoreboard.

use crate::state::GameState;
use galactic_model::{ComparisonAttribute, GameEntity, Outcome};
use std::fmt::Display;

/// Renders one card slot. An empty slot shows a placeholder.
pub fn render_card(title: &str, card: Option<&GameEntity>, is_winner: bool) -> String {
    let marker = if is_winner { " ★ WINNER" } else { "" };
    let mut lines = vec![format!("[{title}]{marker}")];

    match card {
        None => lines.push("  (no card drawn)".to_string()),
        Some(entity) => {
            lines.push(format!("  {}", entity.name()));
            match entity {
                GameEntity::Person(p) => {
                    lines.extend(optional("Height (cm)", p.height));
                    lines.extend(optional("Gender", p.gender.as_deref()));
                }
                GameEntity::Starship(s) => {
                    lines.extend(optional("Model", s.model.as_deref()));
                    lines.extend(optional("Class", s.starship_class.as_deref()));
                    lines.extend(optional("Passengers", s.passengers));
                }
            }
            let attr = ComparisonAttribute::for_card(card);
            lines.push(format!("  {}: {}", attr.label, attr.value));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

fn optional(label: &str, value: Option<impl Display>) -> Option<String> {
    value.map(|value| format!("  {label}: {value}"))
}

/// One-line verdict for the last draw, if any.
pub fn render_verdict(state: &GameState) -> Option<String> {
    let winner = state.winner()?;
    let headline = match winner {
        Outcome::Tie => "It's a Tie!",
        Outcome::Left | Outcome::Right => "Winner!",
    };
    Some(format!("{headline} ({})", state.category().criterion()))
}

/// Two-player scoreboard.
pub fn render_scoreboard(state: &GameState) -> String {
    format!(
        "Score Board  Player 1: {}  |  Player 2: {}",
        state.left_score(),
        state.right_score()
    )
}

/// Full table: both cards, the verdict, the scoreboard and any error.
pub fn render_table(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&render_card("Player 1", state.left(), state.winner() == Some(Outcome::Left)));
    out.push_str(&render_card("Player 2", state.right(), state.winner() == Some(Outcome::Right)));
    if let Some(verdict) = render_verdict(state) {
        out.push_str(&format!("{verdict}\n"));
    }
    out.push_str(&format!("{}\n", render_scoreboard(state)));
    if let Some(error) = state.error() {
        out.push_str(&format!("Error: {error}\n"));
    }
    out
}
