use serde::{Deserialize, Serialize};

/// Messages exchanged between the backend event loop and the UI thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Translate hotkey pressed
    TriggerTranslate,
    /// Quit hotkey pressed, accepted in any state
    Quit,
    ShowTranslation {
        result: TranslationResult,
        from_lang: String,
        to_lang: String,
    },
    ShowError {
        kind: String,
        message: String,
    },
    StatusUpdate {
        status: String,
        busy: bool,
    },
    BackendReady,
    PopupClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    Translate,
    Quit,
}

/// Screen area sampled for subtitles, in virtual desktop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CaptureRegion {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// True if the region lies fully inside the given rectangle
    pub fn is_within(&self, x: i32, y: i32, width: u32, height: u32) -> bool {
        self.x >= x
            && self.y >= y
            && self.right() <= x as i64 + width as i64
            && self.bottom() <= y as i64 + height as i64
    }
}

impl std::fmt::Display for CaptureRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrResult {
    pub text: String,
    pub language: String,
}

impl OcrResult {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One word or phrase with its grammatical role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarEntry {
    pub word: String,
    pub function: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl GrammarEntry {
    pub fn new(
        word: impl Into<String>,
        function: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            function: function.into(),
            explanation: explanation.into(),
            ..Default::default()
        }
    }

    /// `- word: explanation (function)`
    pub fn to_line(&self) -> String {
        let mut line = if self.word.is_empty() {
            format!("- {}", self.explanation)
        } else {
            format!("- {}: {}", self.word, self.explanation)
        };
        if !self.function.is_empty() {
            line.push_str(&format!(" ({})", self.function));
        }
        line
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub grammar_entries: Vec<GrammarEntry>,
}

impl TranslationResult {
    /// Plain-text rendering of the grammar entries, one per line
    pub fn grammar_text(&self) -> String {
        self.grammar_entries
            .iter()
            .map(GrammarEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
