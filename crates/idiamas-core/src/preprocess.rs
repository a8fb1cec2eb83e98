use unicode_normalization::UnicodeNormalization;

/// Cleanup applied to raw OCR output before it is sent for translation
pub trait Preprocessor {
    // Subtitles wrap over two or three lines; they are joined into one sentence
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Tesseract ends pages with a form feed
        text.split(|c: char| c.is_whitespace() || c == '\u{c}')
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
