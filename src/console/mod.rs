use crate::game::message_types::{GameEvent, PlayerCommand};
use crate::game::models::{Direction, ViewMode};
use crate::images::models::Image;
use crate::map::models::LatLng;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[cfg(test)]
pub mod tests;

const HELP: &str = "\
Commands:
  guess <lat> <lng>  drop your marker, e.g. `guess 48.86 2.35`
  submit             lock the marker in and score the round
  next | n           show the next photo
  prev | p           show the previous photo
  mode gallery       browse photos manually
  mode slideshow     let the photos advance on their own
  continue | c       go on to the next round
  restart            start a new game
  quit | q           leave the game
  help               print this message";

/// Renders engine events and pumps player input until the engine hangs up.
pub async fn run(
    commands: mpsc::UnboundedSender<PlayerCommand>,
    mut events: mpsc::UnboundedReceiver<GameEvent>,
) {
    println!("Welcome to Strabo! Guess where in the world each photo was taken.");
    tokio::spawn(read_player_input(commands));
    let mut renderer = Renderer::default();
    while let Some(event) = events.recv().await {
        renderer.render(&event);
    }
}

async fn read_player_input(commands: mpsc::UnboundedSender<PlayerCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Ok(Some(command)) => {
                    let quitting = command == PlayerCommand::Quit;
                    if commands.send(command).is_err() || quitting {
                        break;
                    }
                }
                Ok(None) => {}
                Err(problem) => println!("{problem}"),
            },
            // EOF means the player closed stdin; treat it as quitting.
            Ok(None) => {
                let _ = commands.send(PlayerCommand::Quit);
                break;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to read player input.");
                break;
            }
        }
    }
}

/// Maps one input line to a command. `Ok(None)` for blank lines; `Err` carries
/// text to show the player, which is also how `help` comes back.
fn parse_command(line: &str) -> Result<Option<PlayerCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };
    let command = match word {
        "guess" => {
            let (Some(lat), Some(lng)) = (parts.next(), parts.next()) else {
                return Err(String::from("Usage: guess <lat> <lng>"));
            };
            let lat: f64 = lat.parse().map_err(|_| format!("Not a latitude: {lat}"))?;
            let lng: f64 = lng.parse().map_err(|_| format!("Not a longitude: {lng}"))?;
            if !(-90.0..=90.0).contains(&lat) {
                return Err(String::from("Latitude must be between -90 and 90."));
            }
            if !(-180.0..=180.0).contains(&lng) {
                return Err(String::from("Longitude must be between -180 and 180."));
            }
            PlayerCommand::SaveGuess(LatLng { lat, lng })
        }
        "submit" => PlayerCommand::SubmitGuess,
        "next" | "n" => PlayerCommand::AdvanceImage(Direction::Forward),
        "prev" | "p" => PlayerCommand::AdvanceImage(Direction::Back),
        "mode" => match parts.next() {
            Some("gallery") => PlayerCommand::SetViewMode(ViewMode::Gallery),
            Some("slideshow") => PlayerCommand::SetViewMode(ViewMode::Slideshow),
            _ => return Err(String::from("Usage: mode gallery|slideshow")),
        },
        "continue" | "c" => PlayerCommand::NextRound,
        "restart" => PlayerCommand::Restart,
        "quit" | "q" | "exit" => PlayerCommand::Quit,
        "help" | "?" => return Err(String::from(HELP)),
        _ => return Err(format!("Unknown command: {word}. Type `help` for the list.")),
    };
    Ok(Some(command))
}

/// Keeps the photo list of the current round so photo cursor updates can be
/// rendered without asking the engine anything.
#[derive(Default)]
struct Renderer {
    images: Vec<Image>,
}

impl Renderer {
    fn render(&mut self, event: &GameEvent) {
        match event {
            GameEvent::RoundStarted { round, rounds } => {
                self.images.clear();
                println!();
                println!("=== Round {round} of {rounds} ===");
                println!("Looking for somewhere interesting...");
            }
            GameEvent::LocationAcquired => {
                println!("Found one. Loading photos...");
            }
            GameEvent::ImagesLoaded { images } => {
                self.images = images.clone();
                println!("Where was this taken? {} photo(s) to work with:", images.len());
                for (index, image) in images.iter().enumerate() {
                    println!("  {}. {}", index + 1, describe(image));
                }
                println!("Type `guess <lat> <lng>` and then `submit`. `help` lists everything else.");
            }
            GameEvent::ImageChanged { index, total } => match self.images.get(*index) {
                Some(image) => println!("Photo {} of {total}: {}", index + 1, describe(image)),
                None => println!("Photo {} of {total}", index + 1),
            },
            GameEvent::ViewModeChanged { mode } => match mode {
                ViewMode::Gallery => println!("Gallery mode: photos move when you say so."),
                ViewMode::Slideshow => println!("Slideshow mode: photos advance on their own."),
            },
            GameEvent::GuessSaved { guess } => {
                println!(
                    "Marker dropped at {:.4}, {:.4}. `submit` locks it in.",
                    guess.lat, guess.lng,
                );
            }
            GameEvent::RoundFinished {
                result,
                location,
                total_score,
                ..
            } => {
                println!();
                match location.country.is_empty() {
                    true => println!("That was {}.", location.name),
                    false => println!("That was {}, {}.", location.name, location.country),
                }
                if !location.description.is_empty() {
                    println!("({})", location.description);
                }
                println!(
                    "Your guess was {:.1} km away: +{} points.",
                    result.distance_km, result.points,
                );
                println!("{}", verdict(result.distance_km));
                println!("Score so far: {total_score}. Type `continue` when you are ready.");
            }
            GameEvent::RoundFailed { reason } => {
                println!("{reason}");
            }
            GameEvent::GameFinished { final_score } => {
                println!();
                println!("🎉 Game complete! Your final score: {final_score}");
                println!("Type `restart` to play again, or `quit` to leave.");
            }
        }
    }
}

fn describe(image: &Image) -> String {
    match image.license.is_empty() {
        true => format!("{} <{}>", image.title, image.url),
        false => format!("{} ({}) <{}>", image.title, image.license, image.url),
    }
}

fn verdict(distance_km: f64) -> &'static str {
    if distance_km < 1.0 {
        "Incredible! Are you a wizard?"
    } else if distance_km < 10.0 {
        "Amazing guess! You must know this place well."
    } else if distance_km < 100.0 {
        "Great job! You were very close."
    } else if distance_km < 500.0 {
        "Good guess! You were in the right area."
    } else if distance_km < 2000.0 {
        "Not bad! You were in the right region."
    } else {
        "Better luck next time!"
    }
}
