//! Interactive play mode
//!
//! Line-based game loop: the player types words, or `:commands` to manage
//! the round. The clock is checked on every line entered.

use crate::dictionary::Dictionary;
use crate::game::{GameConfig, GameSession, SubmitError};
use crate::moderation::{UnknownWordReport, WordReporter, report_quietly};
use crate::output::formatters::format_duration;
use crate::output::{
    print_accepted, print_found_words, print_letters, print_new_game, print_rank,
    print_rejection, print_summary,
};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    RoundOver,
    Quit,
}

/// Run the interactive game on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// dictionary has no words to pick a seed from.
pub fn run_play<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    reporter: &dyn WordReporter,
    rng: &mut R,
) -> Result<(), String> {
    let stdin = io::stdin();
    play_with_input(dictionary, config, reporter, &mut stdin.lock(), rng).map(|_| ())
}

/// Run the game loop on any line source, returning the finished sessions
fn play_with_input<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: GameConfig,
    reporter: &dyn WordReporter,
    input: &mut impl BufRead,
    rng: &mut R,
) -> Result<Vec<GameSession>, String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word from Word - Play Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Build words of four or more letters from the seed's letters.");
    println!("Type :help for commands.");

    let mut finished = Vec::new();
    let mut session = GameSession::start(dictionary, config, rng).map_err(|e| e.to_string())?;
    print_new_game(&session);

    loop {
        let prompt = session
            .remaining()
            .map_or_else(|| "word".to_string(), |left| format!("[{}] word", format_duration(left)));

        let Some(line) = read_line(input, &prompt)? else {
            session.end();
            print_summary(&session.summary());
            finished.push(session);
            println!("\n👋 Thanks for playing!\n");
            return Ok(finished);
        };

        let flow = handle_line(&line, &mut session, dictionary, reporter, rng)?;
        match flow {
            Flow::Continue => {}
            Flow::Quit => {
                session.end();
                print_summary(&session.summary());
                finished.push(session);
                println!("\n👋 Thanks for playing!\n");
                return Ok(finished);
            }
            Flow::RoundOver => {
                session.end();
                print_summary(&session.summary());

                let again = read_line(input, "Play again? (yes/no)")?
                    .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y"));
                let previous = session.clone();
                if again {
                    session.restart(dictionary, rng).map_err(|e| e.to_string())?;
                    finished.push(previous);
                    print_new_game(&session);
                } else {
                    finished.push(previous);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(finished);
                }
            }
        }
    }
}

fn handle_line<R: Rng + ?Sized>(
    line: &str,
    session: &mut GameSession,
    dictionary: &Dictionary,
    reporter: &dyn WordReporter,
    rng: &mut R,
) -> Result<Flow, String> {
    if matches!(line, ":quit" | ":q") {
        return Ok(Flow::Quit);
    }
    if session.is_over() {
        println!("\n⏰ Time is up!");
        return Ok(Flow::RoundOver);
    }

    match line {
        "" => Ok(Flow::Continue),
        ":shuffle" | ":s" => {
            session.shuffle_letters(rng);
            print_letters(session);
            Ok(Flow::Continue)
        }
        ":letters" | ":l" => {
            print_letters(session);
            Ok(Flow::Continue)
        }
        ":words" | ":w" => {
            print_found_words(session);
            Ok(Flow::Continue)
        }
        ":rank" | ":r" => {
            print_rank(session);
            Ok(Flow::Continue)
        }
        ":new" | ":n" => {
            session.restart(dictionary, rng).map_err(|e| e.to_string())?;
            println!("\n🔄 New game started!");
            print_new_game(session);
            Ok(Flow::Continue)
        }
        ":end" | ":e" => Ok(Flow::RoundOver),
        ":help" | ":h" => {
            print_help();
            Ok(Flow::Continue)
        }
        cmd if cmd.starts_with(':') => {
            println!("❌ Unknown command {cmd}; type :help");
            Ok(Flow::Continue)
        }
        word => match session.submit(word) {
            Ok(accepted) => {
                print_accepted(&accepted);
                Ok(Flow::Continue)
            }
            Err(SubmitError::GameOver) => {
                println!("\n⏰ Time is up!");
                Ok(Flow::RoundOver)
            }
            Err(error) => {
                if let SubmitError::NotInDictionary(word) = &error {
                    report_quietly(reporter, &UnknownWordReport::new(word.clone(), session));
                }
                print_rejection(&error);
                Ok(Flow::Continue)
            }
        },
    }
}

/// Every `:command` with its help text
const COMMANDS: [(&str, &str); 8] = [
    (":shuffle", "re-jumble the letters"),
    (":letters", "show the letters"),
    (":words", "list words found so far"),
    (":rank", "show rank and points to the next one"),
    (":new", "abandon this round and start another"),
    (":end", "finish this round"),
    (":quit", "leave the game"),
    (":help", "show this list"),
];

fn print_help() {
    println!("Commands:");
    for (command, help) in COMMANDS {
        println!("  {command:<9} {help}");
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::{NullReporter, QueueFileReporter};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Cursor;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_slice(&["стол", "стон", "тост", "сумо", "толстосум", "толстосумы"])
    }

    fn play(script: &str, reporter: &dyn WordReporter) -> Vec<GameSession> {
        let config = GameConfig::new(10).with_time_limit(None);
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        play_with_input(&sample_dictionary(), config, reporter, &mut input, &mut rng).unwrap()
    }

    #[test]
    fn words_score_until_quit() {
        let sessions = play("стол\nтолстосум\nстол\n:quit\n", &NullReporter);

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].score(), 10);
        assert_eq!(sessions[0].found_words(), &["стол", "толстосум"]);
        assert!(sessions[0].is_over());
    }

    #[test]
    fn end_of_input_finishes_round() {
        let sessions = play("тост\n", &NullReporter);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].score(), 1);
        assert!(sessions[0].is_over());
    }

    #[test]
    fn commands_do_not_score() {
        let sessions = play(":shuffle\n:letters\n:words\n:rank\n:help\n:bogus\n\n", &NullReporter);
        assert_eq!(sessions[0].score(), 0);
        assert!(sessions[0].found_words().is_empty());
    }

    #[test]
    fn play_again_starts_fresh_round() {
        let sessions = play("стол\n:end\nyes\nсумо\n:end\nno\n", &NullReporter);

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].found_words(), &["стол"]);
        assert_eq!(sessions[1].found_words(), &["сумо"]);
    }

    #[test]
    fn new_command_discards_progress() {
        let sessions = play("стол\n:new\nтост\n:quit\n", &NullReporter);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].found_words(), &["тост"]);
    }

    #[test]
    fn unknown_words_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = QueueFileReporter::new(dir.path().join("queue.tsv"));

        play("мост\nсто\nстон\nqwerty\nжжжж\nлотос\n:quit\n", &reporter);

        let content = fs::read_to_string(reporter.path()).unwrap();
        let words: Vec<&str> = content
            .lines()
            .filter_map(|line| line.split('\t').nth(1))
            .collect();
        // Too-short words and words outside the pool are not reported
        assert_eq!(words, vec!["мост", "лотос"]);
    }

    #[test]
    fn unformable_words_are_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = QueueFileReporter::new(dir.path().join("queue.tsv"));

        let sessions = play("qwerty\nжжжж\nстон\n:quit\n", &reporter);

        assert_eq!(sessions[0].score(), 0);
        assert!(sessions[0].found_words().is_empty());
        assert!(!reporter.path().exists());
    }

    #[test]
    fn quit_after_time_up_exits() {
        let config = GameConfig::new(10).with_time_limit(Some(std::time::Duration::ZERO));
        let mut rng = StdRng::seed_from_u64(3);
        // A second line would answer a play-again prompt and start another round
        let mut input = Cursor::new(":quit\nyes\n".as_bytes().to_vec());
        let sessions =
            play_with_input(&sample_dictionary(), config, &NullReporter, &mut input, &mut rng)
                .unwrap();

        assert_eq!(sessions.len(), 1);
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "yes\n");
    }

    #[test]
    fn help_lists_every_command() {
        let listed: Vec<&str> = COMMANDS.iter().map(|&(command, _)| command).collect();
        for command in [":shuffle", ":letters", ":words", ":rank", ":new", ":end", ":quit", ":help"] {
            assert!(listed.contains(&command), "{command} missing from help");
        }

        let sessions = play(":help\n:h\n:quit\n", &NullReporter);
        assert_eq!(sessions[0].score(), 0);
    }

    #[test]
    fn expired_round_stops_accepting() {
        let config = GameConfig::new(10).with_time_limit(Some(std::time::Duration::ZERO));
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new("стол\nno\n".as_bytes().to_vec());
        let sessions =
            play_with_input(&sample_dictionary(), config, &NullReporter, &mut input, &mut rng)
                .unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].score(), 0);
    }

    #[test]
    fn empty_dictionary_errors() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut input = Cursor::new(Vec::new());
        let result = play_with_input(
            &Dictionary::default(),
            GameConfig::default(),
            &NullReporter,
            &mut input,
            &mut rng,
        );
        assert!(result.is_err());
    }
}
