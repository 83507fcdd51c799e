use crate::reports::types::AnswerResult;

/// Markdown formatter for answers
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Answer text followed by a sources section.
    pub fn format(result: &AnswerResult) -> String {
        let mut md = String::with_capacity(result.answer.len() + 512);
        md.push_str(result.answer.trim_end());
        md.push_str("\n\n---\n\n### Data Sources\n\n");

        for source in &result.sources {
            md.push_str(&format!(
                "- **[{}]({})**: {}\n",
                source.name, source.url, source.description
            ));
        }

        md
    }
}
