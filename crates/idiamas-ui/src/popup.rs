use idiamas_types::{GrammarEntry, TranslationResult};

pub const GRAMMAR_FALLBACK: &str = "No grammar notes for this subtitle.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    Original,
    Translation,
    Grammar,
}

impl TabKind {
    pub const ALL: [TabKind; 3] = [TabKind::Original, TabKind::Translation, TabKind::Grammar];

    pub fn index(self) -> usize {
        match self {
            TabKind::Original => 0,
            TabKind::Translation => 1,
            TabKind::Grammar => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupTab {
    pub kind: TabKind,
    pub title: String,
    /// Text shown in the tab and copied by the copy action
    pub text: String,
}

/// Everything the popup displays for one translation, independent of slint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupModel {
    tabs: [PopupTab; 3],
    grammar_cards: Vec<GrammarEntry>,
}

impl PopupModel {
    pub fn from_result(result: &TranslationResult, from_lang: &str, to_lang: &str) -> Self {
        let grammar_text = if result.grammar_entries.is_empty() {
            GRAMMAR_FALLBACK.to_string()
        } else {
            result.grammar_text()
        };

        Self {
            tabs: [
                PopupTab {
                    kind: TabKind::Original,
                    title: titled("Original", from_lang),
                    text: result.original.clone(),
                },
                PopupTab {
                    kind: TabKind::Translation,
                    title: titled("Translation", to_lang),
                    text: result.translated.clone(),
                },
                PopupTab {
                    kind: TabKind::Grammar,
                    title: "Grammar".to_string(),
                    text: grammar_text,
                },
            ],
            grammar_cards: result.grammar_entries.clone(),
        }
    }

    pub fn tabs(&self) -> &[PopupTab] {
        &self.tabs
    }

    pub fn tab(&self, kind: TabKind) -> &PopupTab {
        &self.tabs[kind.index()]
    }

    pub fn grammar_cards(&self) -> &[GrammarEntry] {
        &self.grammar_cards
    }

    /// Text the copy action puts on the clipboard for tab `index`
    pub fn copy_text(&self, index: usize) -> Option<&str> {
        TabKind::from_index(index).map(|kind| self.tab(kind).text.as_str())
    }
}

fn titled(label: &str, lang: &str) -> String {
    if lang.is_empty() {
        label.to_string()
    } else {
        format!("{label} ({lang})")
    }
}
