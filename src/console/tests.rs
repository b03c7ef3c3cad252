use crate::console::{parse_command, verdict, HELP};
use crate::game::message_types::PlayerCommand;
use crate::game::models::{Direction, ViewMode};
use crate::map::models::LatLng;

#[test]
fn a_guess_with_coordinates_parses() {
    assert_eq!(
        parse_command("guess 48.86 2.35"),
        Ok(Some(PlayerCommand::SaveGuess(LatLng {
            lat: 48.86,
            lng: 2.35,
        }))),
    );
}

#[test]
fn negative_coordinates_parse() {
    assert_eq!(
        parse_command("guess -33.86 151.21"),
        Ok(Some(PlayerCommand::SaveGuess(LatLng {
            lat: -33.86,
            lng: 151.21,
        }))),
    );
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(parse_command("   submit  "), Ok(Some(PlayerCommand::SubmitGuess)));
}

#[test]
fn a_blank_line_is_not_a_command() {
    assert_eq!(parse_command(""), Ok(None));
    assert_eq!(parse_command("   "), Ok(None));
}

#[test]
fn navigation_commands_have_short_aliases() {
    assert_eq!(
        parse_command("n"),
        Ok(Some(PlayerCommand::AdvanceImage(Direction::Forward))),
    );
    assert_eq!(
        parse_command("prev"),
        Ok(Some(PlayerCommand::AdvanceImage(Direction::Back))),
    );
    assert_eq!(parse_command("c"), Ok(Some(PlayerCommand::NextRound)));
    assert_eq!(parse_command("q"), Ok(Some(PlayerCommand::Quit)));
}

#[test]
fn view_modes_parse_and_bad_ones_do_not() {
    assert_eq!(
        parse_command("mode slideshow"),
        Ok(Some(PlayerCommand::SetViewMode(ViewMode::Slideshow))),
    );
    assert_eq!(
        parse_command("mode gallery"),
        Ok(Some(PlayerCommand::SetViewMode(ViewMode::Gallery))),
    );
    assert!(parse_command("mode sideways").is_err());
}

#[test]
fn a_guess_without_coordinates_is_rejected() {
    assert_eq!(
        parse_command("guess 48.86"),
        Err(String::from("Usage: guess <lat> <lng>")),
    );
}

#[test]
fn a_guess_with_junk_coordinates_is_rejected() {
    let problem = parse_command("guess here there").unwrap_err();
    assert!(problem.contains("Not a latitude"));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    assert!(parse_command("guess 95 0").is_err());
    assert!(parse_command("guess 0 181").is_err());
    assert!(parse_command("guess -90 -180").is_ok());
}

#[test]
fn unknown_commands_point_at_help() {
    let problem = parse_command("teleport").unwrap_err();
    assert!(problem.contains("Unknown command: teleport"));
}

#[test]
fn help_comes_back_as_printable_text() {
    assert_eq!(parse_command("help"), Err(String::from(HELP)));
}

#[test]
fn verdicts_get_kinder_the_closer_the_guess() {
    assert_eq!(verdict(0.4), "Incredible! Are you a wizard?");
    assert_eq!(verdict(5.0), "Amazing guess! You must know this place well.");
    assert_eq!(verdict(42.0), "Great job! You were very close.");
    assert_eq!(verdict(300.0), "Good guess! You were in the right area.");
    assert_eq!(verdict(1500.0), "Not bad! You were in the right region.");
    assert_eq!(verdict(8000.0), "Better luck next time!");
}
