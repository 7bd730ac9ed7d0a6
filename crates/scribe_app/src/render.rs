use scribe_core::{AppViewModel, Language, ScriptLength, SessionPhase, Tone};

pub fn banner() {
    println!("Scribecast — turn any topic into a video script with title and background research.");
    println!("Type 'help' for commands.");
}

pub fn help() {
    println!("Commands:");
    println!("  topic <text>      set the video topic");
    println!("  tone <1-5>        pick a script tone:");
    for (index, tone) in Tone::ALL.iter().enumerate() {
        println!("                      {}. {}", index + 1, tone.label());
    }
    println!("  length <1-3>      pick a target length:");
    for (index, length) in ScriptLength::ALL.iter().enumerate() {
        println!("                      {}. {}", index + 1, length.label());
    }
    println!("  language <1-6>    pick an output language:");
    for (index, language) in Language::ALL.iter().enumerate() {
        println!("                      {}. {}", index + 1, language.label());
    }
    println!("  generate          fetch research and generate the script");
    println!("  history           list older generations");
    println!("  save              write the latest script to a .txt file");
    println!("  quit              end the session");
}

/// Current field values, shown after every selection change.
pub fn selections(view: &AppViewModel) {
    let topic = if view.topic_input.trim().is_empty() {
        "(not set)"
    } else {
        view.topic_input.trim()
    };
    println!(
        "topic: {topic} | tone: {} | length: {} | language: {}",
        view.tone.label(),
        view.length.label(),
        view.language.label()
    );
}

/// Outcome of a submission: the latest result in full, or the error notice.
pub fn outcome(view: &AppViewModel) {
    if let Some(message) = &view.last_error {
        println!("An error occurred: {message}");
        return;
    }
    let Some(latest) = &view.latest else {
        return;
    };
    println!();
    println!("Here's your generated content:");
    println!();
    println!("=== Generated Title ===");
    println!("{}", latest.title);
    println!();
    println!("=== Generated Script ===");
    println!("{}", latest.script);
    println!();
    if !view.history_rows.is_empty() {
        println!(
            "({} older generation(s) — type 'history' to expand)",
            view.history_rows.len()
        );
    }
}

/// The collapsed history listing: title plus the opening of each script.
pub fn history(view: &AppViewModel) {
    if view.phase == SessionPhase::Empty {
        println!("Nothing generated yet.");
        return;
    }
    if view.history_rows.is_empty() {
        println!("Only one generation so far; it is shown above.");
        return;
    }
    println!("Generation history:");
    for row in &view.history_rows {
        println!("{}. Title: {}", row.position, row.title);
        println!("   Script snippet: {}", row.snippet);
    }
}
