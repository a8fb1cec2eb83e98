use crate::TranslationOptions;

pub fn system_prompt(options: &TranslationOptions) -> String {
    format!(
        "You are a patient language teacher for beginners. You receive lines of \
         subtitles captured from the screen (OCR language code: {source}). \
         Reply with a single JSON object and nothing else, using exactly these keys:\n\
         - \"original\": the subtitle text exactly as received\n\
         - \"translation\": a clear, natural translation into {target}\n\
         - \"grammar\": an array with one object per important word, each with \
         \"word\", \"function\" (grammatical function: verb, noun, preposition...) and \
         \"explanation\" (meaning and notes on contractions, conjugations or idioms), \
         optionally \"examples\" and \"difficulty\".\n\
         All explanations must be written in {target}.",
        source = options.source_language,
        target = options.explanation_language,
    )
}

pub fn user_prompt(text: &str) -> String {
    format!("Text to translate: {text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_name_languages_and_text() {
        let options = TranslationOptions {
            model: "gpt-3.5-turbo".into(),
            max_tokens: 500,
            temperature: 0.7,
            source_language: "ita".into(),
            explanation_language: "spanish".into(),
        };
        let system = system_prompt(&options);
        assert!(system.contains("ita"));
        assert!(system.contains("into spanish"));
        assert!(system.contains("\"grammar\""));
        assert_eq!(user_prompt("Ciao mondo"), "Text to translate: Ciao mondo");
    }
}
