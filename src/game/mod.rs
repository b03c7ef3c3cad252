use crate::cli::Args;
use crate::commons::CommonsApi;
use crate::errors::AcquireError;
use crate::game::message_types::{GameEvent, PlayerCommand};
use crate::game::models::{Direction, GamePhase, SessionState, ViewMode};
use crate::images::ImageResolver;
use crate::locations::LocationSource;
use crate::map::models::LatLng;
use crate::wikidata::WikidataApi;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::{interval_at, Instant, Interval};

pub mod consts;
pub mod message_types;
pub mod models;

#[derive(Copy, Clone, Debug, PartialEq)]
enum Flow {
    KeepGoing,
    Shutdown,
}

enum Input {
    Command(Option<PlayerCommand>),
    SlideshowTick,
}

/// One game session. Owns all mutable state and the provider clients,
/// consumes player commands and emits events; every state change happens
/// inside this task.
pub struct GameSession<W, C> {
    state: SessionState,
    source: LocationSource<W>,
    resolver: ImageResolver<W, C>,
    commands: mpsc::UnboundedReceiver<PlayerCommand>,
    events: mpsc::UnboundedSender<GameEvent>,
    retry_delay: Duration,
    slideshow_interval: Duration,
    slideshow: Option<Interval>,
}

impl<W, C> GameSession<W, C>
where
    W: WikidataApi + Clone,
    C: CommonsApi,
{
    pub fn new(
        args: &Args,
        wikidata: W,
        commons: C,
        commands: mpsc::UnboundedReceiver<PlayerCommand>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            state: SessionState::new(args.rounds),
            source: LocationSource::new(wikidata.clone(), args.prefetch_size, args.curated_only),
            resolver: ImageResolver::new(wikidata, commons),
            commands,
            events,
            retry_delay: Duration::from_millis(args.retry_delay_ms),
            slideshow_interval: Duration::from_millis(args.slideshow_interval_ms),
            slideshow: None,
        }
    }

    /// Drives rounds until the player leaves or the presentation side hangs
    /// up. A failed round attempt comes back here and is retried under the
    /// same round number.
    pub async fn run(mut self) {
        while self.play_round().await == Flow::KeepGoing {}
        tracing::info!("Game session finished.");
    }

    async fn play_round(&mut self) -> Flow {
        if self.drain_stale_commands() == Flow::Shutdown {
            return Flow::Shutdown;
        }
        self.begin_round();

        let location = match self.source.next_location(self.state.current_round).await {
            Ok(location) => location,
            Err(error) => {
                return self
                    .fail_round("Failed to load location. Trying again...", &error)
                    .await;
            }
        };
        tracing::info!(name = %location.name, country = %location.country, "Location acquired.");
        self.state.phase = GamePhase::LoadingImages;
        self.emit(GameEvent::LocationAcquired);

        let images = match self.resolver.resolve(&location).await {
            Ok(images) => images,
            Err(error) => {
                return self.fail_round(image_failure_reason(&error), &error).await;
            }
        };
        tracing::info!(count = images.len(), "Photos acquired.");
        self.state.location = Some(location);
        self.state.images = images;
        self.state.current_image = 0;
        self.state.phase = GamePhase::AwaitingGuess;
        self.emit(GameEvent::ImagesLoaded {
            images: self.state.images.clone(),
        });
        self.refresh_slideshow();

        self.await_guess().await
    }

    fn begin_round(&mut self) {
        self.state.reset_round();
        self.stop_slideshow();
        tracing::info!(
            round = self.state.current_round,
            rounds = self.state.rounds,
            "Starting a round."
        );
        self.emit(GameEvent::RoundStarted {
            round: self.state.current_round,
            rounds: self.state.rounds,
        });
    }

    /// Commands sent while the previous round was loading or being torn down
    /// target a state that no longer exists. Only session-level commands and
    /// the view mode preference survive the drain.
    fn drain_stale_commands(&mut self) -> Flow {
        loop {
            match self.commands.try_recv() {
                Ok(PlayerCommand::Quit) => return Flow::Shutdown,
                Ok(PlayerCommand::Restart) => self.reset_session(),
                Ok(PlayerCommand::SetViewMode(mode)) => self.set_view_mode(mode),
                Ok(command) => tracing::debug!(?command, "Dropping a stale command."),
                Err(TryRecvError::Empty) => return Flow::KeepGoing,
                Err(TryRecvError::Disconnected) => return Flow::Shutdown,
            }
        }
    }

    /// Waits for the player to guess while serving photo navigation and the
    /// slideshow timer.
    async fn await_guess(&mut self) -> Flow {
        loop {
            let commands = &mut self.commands;
            let slideshow = &mut self.slideshow;
            let input = tokio::select! {
                command = commands.recv() => Input::Command(command),
                _ = slideshow_tick(slideshow) => Input::SlideshowTick,
            };
            match input {
                Input::SlideshowTick => self.advance_image(Direction::Forward),
                Input::Command(None) => return Flow::Shutdown,
                Input::Command(Some(command)) => match command {
                    PlayerCommand::SaveGuess(guess) => self.save_guess(guess),
                    PlayerCommand::SubmitGuess => {
                        if self.submit_guess() {
                            return self.show_results().await;
                        }
                    }
                    PlayerCommand::AdvanceImage(direction) => self.advance_image(direction),
                    PlayerCommand::SetViewMode(mode) => self.set_view_mode(mode),
                    PlayerCommand::NextRound => {
                        tracing::debug!("Ignoring NextRound before the round is scored.");
                    }
                    PlayerCommand::Restart => {
                        self.reset_session();
                        return Flow::KeepGoing;
                    }
                    PlayerCommand::Quit => return Flow::Shutdown,
                },
            }
        }
    }

    /// The results screen. The round is scored; photos can still be browsed
    /// while the player decides whether to continue.
    async fn show_results(&mut self) -> Flow {
        loop {
            match self.commands.recv().await {
                None | Some(PlayerCommand::Quit) => return Flow::Shutdown,
                Some(PlayerCommand::Restart) => {
                    self.reset_session();
                    return Flow::KeepGoing;
                }
                Some(PlayerCommand::NextRound) => {
                    if self.state.current_round < self.state.rounds {
                        self.state.current_round += 1;
                        return Flow::KeepGoing;
                    }
                    return self.finish_game().await;
                }
                Some(PlayerCommand::AdvanceImage(direction)) => self.advance_image(direction),
                Some(PlayerCommand::SetViewMode(mode)) => self.set_view_mode(mode),
                Some(command) => {
                    tracing::debug!(?command, "Ignoring a command on the results screen.");
                }
            }
        }
    }

    async fn finish_game(&mut self) -> Flow {
        self.state.phase = GamePhase::GameOver;
        self.stop_slideshow();
        tracing::info!(final_score = self.state.cumulative_score, "Game over.");
        self.emit(GameEvent::GameFinished {
            final_score: self.state.cumulative_score,
        });
        loop {
            match self.commands.recv().await {
                None | Some(PlayerCommand::Quit) => return Flow::Shutdown,
                Some(PlayerCommand::Restart) => {
                    self.reset_session();
                    return Flow::KeepGoing;
                }
                Some(command) => {
                    tracing::debug!(?command, "Ignoring a command on the game over screen.");
                }
            }
        }
    }

    /// Reports the failure, waits out the retry delay and hands control back
    /// to the round loop. Sleeping inline means a round can never have more
    /// than one retry pending.
    async fn fail_round(&mut self, reason: &str, error: &AcquireError) -> Flow {
        tracing::warn!(%error, round = self.state.current_round, "Round failed, will retry.");
        self.state.phase = GamePhase::Failed;
        self.stop_slideshow();
        self.emit(GameEvent::RoundFailed {
            reason: reason.to_string(),
        });
        tokio::time::sleep(self.retry_delay).await;
        Flow::KeepGoing
    }

    fn save_guess(&mut self, guess: LatLng) {
        if self.state.phase != GamePhase::AwaitingGuess || self.state.guess_submitted {
            tracing::debug!("Ignoring a guess outside the guessing window.");
            return;
        }
        if !(-90.0..=90.0).contains(&guess.lat) || !(-180.0..=180.0).contains(&guess.lng) {
            tracing::debug!(?guess, "Ignoring an out-of-range guess.");
            return;
        }
        self.state.saved_guess = Some(guess);
        self.emit(GameEvent::GuessSaved { guess });
    }

    fn submit_guess(&mut self) -> bool {
        let Some(result) = self.state.score_submitted_guess() else {
            tracing::debug!("Ignoring a submission with no guess to score.");
            return false;
        };
        self.stop_slideshow();
        tracing::info!(
            distance_km = result.distance_km,
            points = result.points,
            "Round scored."
        );
        if let (Some(location), Some(guess)) = (self.state.location.clone(), self.state.saved_guess)
        {
            self.emit(GameEvent::RoundFinished {
                result,
                location,
                guess,
                total_score: self.state.cumulative_score,
            });
        }
        true
    }

    fn advance_image(&mut self, direction: Direction) {
        let Some(index) = self.state.advance_image(direction) else {
            return;
        };
        self.refresh_slideshow();
        self.emit(GameEvent::ImageChanged {
            index,
            total: self.state.images.len(),
        });
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode == mode {
            return;
        }
        self.state.view_mode = mode;
        self.refresh_slideshow();
        self.emit(GameEvent::ViewModeChanged { mode });
    }

    fn reset_session(&mut self) {
        tracing::info!("Restarting the session.");
        self.state.reset_session();
        self.source.clear_pool();
        self.stop_slideshow();
    }

    /// Rebuilds the auto-advance timer from scratch. Called after every
    /// change to the photos, the cursor, the view mode or the phase, so a
    /// stale timer can never fire against photos of a finished round.
    fn refresh_slideshow(&mut self) {
        let armed = self.state.phase == GamePhase::AwaitingGuess
            && self.state.view_mode == ViewMode::Slideshow
            && !self.state.images.is_empty();
        self.slideshow = armed.then(|| {
            let period = self.slideshow_interval;
            interval_at(Instant::now() + period, period)
        });
    }

    fn stop_slideshow(&mut self) {
        self.slideshow = None;
    }

    fn emit(&self, event: GameEvent) {
        // The renderer may already be gone during shutdown. Nothing to do then.
        let _ = self.events.send(event);
    }
}

async fn slideshow_tick(slideshow: &mut Option<Interval>) {
    match slideshow {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn image_failure_reason(error: &AcquireError) -> &'static str {
    match error {
        AcquireError::NoImagesFound => "No images found. Trying again...",
        _ => "Failed to load images. Trying again...",
    }
}
