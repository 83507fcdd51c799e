pub mod markdown;
#[cfg(feature = "api")]
pub mod html;

pub use markdown::MarkdownFormatter;
#[cfg(feature = "api")]
pub use html::HtmlFormatter;
