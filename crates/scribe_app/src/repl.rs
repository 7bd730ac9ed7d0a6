use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use scribe_core::{update, AppState, Language, Msg, ScriptLength, Tone};
use scribe_engine::EngineConfig;

use crate::effects::EffectRunner;
use crate::render;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Apply(Msg),
    Help,
    History,
    Quit,
    Unknown(String),
}

/// Interactive session loop: parse a command, update the state machine,
/// run any effects to completion, render.
pub fn run(config: EngineConfig, output_dir: PathBuf) -> anyhow::Result<()> {
    let runner = EffectRunner::new(config, output_dir);
    let mut state = AppState::new();

    render::banner();
    render::selections(&state.view());

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(line.trim()) {
            Command::Quit => break,
            Command::Help => render::help(),
            Command::History => render::history(&state.view()),
            Command::Unknown(notice) => println!("{notice}"),
            Command::Apply(msg) => {
                let rendered_outcome = matches!(msg, Msg::Submitted);
                let (next, effects) = update(state, msg);
                state = next;
                for follow_up in runner.run(effects) {
                    let (next, leftover) = update(state, follow_up);
                    state = next;
                    debug_assert!(leftover.is_empty());
                }
                if rendered_outcome {
                    render::outcome(&state.view());
                } else {
                    render::selections(&state.view());
                }
            }
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Command {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => Command::Unknown("Type 'help' for commands.".to_string()),
        "topic" if !rest.is_empty() => Command::Apply(Msg::TopicChanged(rest.to_string())),
        "topic" => Command::Unknown("Usage: topic <text>".to_string()),
        "tone" => pick(rest, &Tone::ALL, "tone").map_or_else(
            |notice| Command::Unknown(notice),
            |tone| Command::Apply(Msg::ToneSelected(tone)),
        ),
        "length" => pick(rest, &ScriptLength::ALL, "length").map_or_else(
            |notice| Command::Unknown(notice),
            |length| Command::Apply(Msg::LengthSelected(length)),
        ),
        "language" => pick(rest, &Language::ALL, "language").map_or_else(
            |notice| Command::Unknown(notice),
            |language| Command::Apply(Msg::LanguageSelected(language)),
        ),
        "generate" => Command::Apply(Msg::Submitted),
        "save" => Command::Apply(Msg::SaveRequested),
        "history" => Command::History,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(format!("Unknown command '{other}'. Type 'help' for commands.")),
    }
}

/// Resolves a 1-based menu index against a fixed option list.
fn pick<T: Copy>(rest: &str, options: &[T], name: &str) -> Result<T, String> {
    rest.parse::<usize>()
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| options.get(index).copied())
        .ok_or_else(|| format!("Usage: {name} <1-{}>", options.len()))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use scribe_core::{Language, Msg, ScriptLength, Tone};

    #[test]
    fn topic_takes_the_rest_of_the_line() {
        assert_eq!(
            parse_command("topic the history of artificial intelligence"),
            Command::Apply(Msg::TopicChanged(
                "the history of artificial intelligence".to_string()
            ))
        );
    }

    #[test]
    fn selectors_are_one_based() {
        assert_eq!(
            parse_command("tone 2"),
            Command::Apply(Msg::ToneSelected(Tone::WittyHumorous))
        );
        assert_eq!(
            parse_command("length 3"),
            Command::Apply(Msg::LengthSelected(ScriptLength::Long))
        );
        assert_eq!(
            parse_command("language 6"),
            Command::Apply(Msg::LanguageSelected(Language::Hindi))
        );
    }

    #[test]
    fn out_of_range_selector_is_rejected() {
        assert_eq!(
            parse_command("tone 9"),
            Command::Unknown("Usage: tone <1-5>".to_string())
        );
        assert_eq!(
            parse_command("language zero"),
            Command::Unknown("Usage: language <1-6>".to_string())
        );
    }

    #[test]
    fn generate_and_save_map_to_messages() {
        assert_eq!(parse_command("generate"), Command::Apply(Msg::Submitted));
        assert_eq!(parse_command("save"), Command::Apply(Msg::SaveRequested));
    }

    #[test]
    fn unknown_commands_get_a_hint() {
        match parse_command("frobnicate") {
            Command::Unknown(notice) => assert!(notice.contains("frobnicate")),
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
