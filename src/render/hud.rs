//! Text shown over the 3D view

use crate::sim::{RoundPhase, RoundSummary, SimulationState};

/// Lives and timer while playing, final scores after a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hud {
    /// Title card before the first round
    Title,
    Playing { lives: u8, time_past: u32 },
    GameOver(RoundSummary),
}

impl Hud {
    pub fn from_state(state: &SimulationState) -> Self {
        match (state.phase, state.last_round) {
            (RoundPhase::Playing, _) => Hud::Playing {
                lives: state.lives.lives_remaining(),
                time_past: state.lives.time_past(),
            },
            (_, Some(summary)) => Hud::GameOver(summary),
            (_, None) => Hud::Title,
        }
    }

    /// Lines of text to draw, top to bottom
    pub fn lines(&self) -> Vec<String> {
        match self {
            Hud::Title => vec!["Press Enter to start".to_string()],
            Hud::Playing { lives, time_past } => {
                vec![format!("Lives: {}", lives), format!("Time: {}", time_past)]
            }
            Hud::GameOver(summary) => {
                let mut lines = vec!["Game over".to_string()];
                lines.extend(
                    summary
                        .life_times
                        .iter()
                        .enumerate()
                        .map(|(i, t)| format!("Life {}: {}", i + 1, t)),
                );
                lines.push(format!("Best: {}", summary.best_time));
                lines
            }
        }
    }
}
