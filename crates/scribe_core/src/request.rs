/// Stylistic directive for the script prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Informative,
    WittyHumorous,
    Inspirational,
    CasualConversational,
    FormalAcademic,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Informative,
        Tone::WittyHumorous,
        Tone::Inspirational,
        Tone::CasualConversational,
        Tone::FormalAcademic,
    ];

    /// Human-readable label, used both in menus and in the prompt text.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Informative => "Informative",
            Tone::WittyHumorous => "Witty & Humorous",
            Tone::Inspirational => "Inspirational",
            Tone::CasualConversational => "Casual & Conversational",
            Tone::FormalAcademic => "Formal & Academic",
        }
    }
}

/// Coarse target-duration bucket influencing script verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl ScriptLength {
    pub const ALL: [ScriptLength; 3] = [ScriptLength::Short, ScriptLength::Medium, ScriptLength::Long];

    /// Label as shown to the user and bound into the script prompt.
    pub fn label(self) -> &'static str {
        match self {
            ScriptLength::Short => "~3 minutes (Short)",
            ScriptLength::Medium => "~7 minutes (Medium)",
            ScriptLength::Long => "~12 minutes (Long)",
        }
    }

    /// Approximate target duration in minutes.
    pub fn minutes(self) -> u8 {
        match self {
            ScriptLength::Short => 3,
            ScriptLength::Medium => 7,
            ScriptLength::Long => 12,
        }
    }
}

/// Output language for both generation stages, plus the matching
/// Wikipedia edition for background research.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Japanese,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Japanese,
        Language::Hindi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Japanese => "Japanese",
            Language::Hindi => "Hindi",
        }
    }

    /// Two-letter Wikipedia subdomain code.
    pub fn wiki_code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Japanese => "ja",
            Language::Hindi => "hi",
        }
    }
}

/// One submission's worth of user input. Built fresh per submission
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub tone: Tone,
    pub length: ScriptLength,
    pub language: Language,
}
