use crate::images::models::Image;
use crate::locations::models::Location;
use crate::map;
use crate::map::models::{LatLng, RoundResult};
use serde::{Deserialize, Serialize};

/// Where the current round stands. Commands that do not make sense in the
/// current phase are ignored.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub enum GamePhase {
    LoadingLocation,
    LoadingImages,
    AwaitingGuess,
    Scored,
    Failed,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Gallery,
    Slideshow,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Forward,
    Back,
}

/// Everything one game session knows. Owned by the session task; nothing
/// outside it ever holds a reference.
#[derive(Debug)]
pub struct SessionState {
    pub cumulative_score: u64,
    pub current_round: u64,
    pub rounds: u64,
    pub view_mode: ViewMode,
    pub phase: GamePhase,
    pub location: Option<Location>,
    pub images: Vec<Image>,
    pub current_image: usize,
    pub saved_guess: Option<LatLng>,
    pub guess_submitted: bool,
}

impl SessionState {
    pub fn new(rounds: u64) -> Self {
        Self {
            cumulative_score: 0,
            current_round: 1,
            rounds,
            view_mode: ViewMode::Gallery,
            phase: GamePhase::LoadingLocation,
            location: None,
            images: Vec::new(),
            current_image: 0,
            saved_guess: None,
            guess_submitted: false,
        }
    }

    /// Clears everything tied to the current round. Score, round counters and
    /// the view mode preference survive.
    pub fn reset_round(&mut self) {
        self.phase = GamePhase::LoadingLocation;
        self.location = None;
        self.images.clear();
        self.current_image = 0;
        self.saved_guess = None;
        self.guess_submitted = false;
    }

    pub fn reset_session(&mut self) {
        self.cumulative_score = 0;
        self.current_round = 1;
        self.view_mode = ViewMode::Gallery;
        self.reset_round();
    }

    /// Moves the photo cursor one step, wrapping around at either end.
    /// Returns the new index, or `None` when there is nothing to show.
    pub fn advance_image(&mut self, direction: Direction) -> Option<usize> {
        if self.images.is_empty() {
            return None;
        }
        let count = self.images.len();
        self.current_image = match direction {
            Direction::Forward => (self.current_image + 1) % count,
            Direction::Back => (self.current_image + count - 1) % count,
        };
        Some(self.current_image)
    }

    /// Scores the saved guess against the round's location and banks the
    /// points. Returns `None` when there is nothing to score, including when
    /// this round was already scored; a round can never be scored twice.
    pub fn score_submitted_guess(&mut self) -> Option<RoundResult> {
        if self.phase != GamePhase::AwaitingGuess || self.guess_submitted {
            return None;
        }
        let guess = self.saved_guess?;
        let location = self.location.as_ref()?;
        let result = map::estimate_guess(guess, location.coords);
        self.guess_submitted = true;
        self.cumulative_score += result.points;
        self.phase = GamePhase::Scored;
        Some(result)
    }
}
