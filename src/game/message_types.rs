use crate::game::models::{Direction, ViewMode};
use crate::images::models::Image;
use crate::locations::models::Location;
use crate::map::models::{LatLng, RoundResult};
use serde::{Deserialize, Serialize};

/// Messages the presentation layer sends into the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum PlayerCommand {
    SaveGuess(LatLng),
    SubmitGuess,
    AdvanceImage(Direction),
    SetViewMode(ViewMode),
    NextRound,
    Restart,
    Quit,
}

/// Messages the engine emits for the presentation layer to render.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload")]
pub enum GameEvent {
    RoundStarted {
        round: u64,
        rounds: u64,
    },
    /// The round's location is resolved. Deliberately payload-free: the
    /// answer stays hidden until the round is scored.
    LocationAcquired,
    ImagesLoaded {
        images: Vec<Image>,
    },
    ImageChanged {
        index: usize,
        total: usize,
    },
    ViewModeChanged {
        mode: ViewMode,
    },
    GuessSaved {
        guess: LatLng,
    },
    RoundFinished {
        result: RoundResult,
        location: Location,
        guess: LatLng,
        #[serde(rename = "totalScore")]
        total_score: u64,
    },
    RoundFailed {
        reason: String,
    },
    GameFinished {
        #[serde(rename = "finalScore")]
        final_score: u64,
    },
}
