use scribe_core::{Language, ScriptLength, Tone};

/// Prompt for the title stage: five candidate titles, one per line.
pub fn title_prompt(topic: &str, language: Language) -> String {
    format!(
        "Generate 5 creative, click-worthy YouTube video titles in {} about the topic: '{}'.",
        language.label(),
        topic
    )
}

/// Prompt for the script stage, binding the chosen title, the background
/// summary, and the requested tone/length/language.
pub fn script_prompt(
    title: &str,
    summary: &str,
    tone: Tone,
    length: ScriptLength,
    language: Language,
) -> String {
    format!(
        "You are an expert YouTube scriptwriter. Create a compelling and engaging video script in {language}.\n\
         \n\
         Video Title: {title}\n\
         Background Research (from Wikipedia): {summary}\n\
         \n\
         Instructions:\n\
         1. **Introduction**: Start with a strong hook to grab the viewer's attention. Introduce the topic and what the video will cover.\n\
         2. **Main Body**: Expand on the topic using the background research provided. Structure it into clear, logical sections. Use a {tone} tone throughout.\n\
         3. **Conclusion**: Summarize the key points and end with a strong call to action (e.g., \"subscribe,\" \"comment,\" \"watch another video\").\n\
         4. **Formatting**: The script should be formatted clearly, with headings for Intro, Main Body, and Conclusion.\n\
         5. **Length**: The final script should be appropriate for a {length} video.",
        language = language.label(),
        title = title,
        summary = summary,
        tone = tone.label(),
        length = length.label(),
    )
}
