use pulldown_cmark::{html, Options, Parser};

use crate::reports::types::AnswerResult;

/// HTML formatter for answers (renders the markdown answer text)
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Render only the answer text.
    pub fn format(result: &AnswerResult) -> String {
        Self::render(&result.answer)
    }

    pub fn render(markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }
}
