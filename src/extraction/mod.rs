//! Entity Extraction
//!
//! Rule-based recognition of states, crops, years, metrics, and intent in a
//! natural-language question.

pub mod keywords;
pub mod types;
pub mod extractor;

pub use extractor::{detect_intent, EntityExtractor};
pub use keywords::{KeywordSet, CROP_KEYWORDS, STATE_KEYWORDS};
pub use types::{ExtractedEntities, Intent, Metric};
