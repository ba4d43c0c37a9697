//! Rule-based insight narrative.
//!
//! The insight is a pure function of which categories contributed: one
//! fixed fragment per contributing category, in the fixed category order,
//! between a header naming the topic and a fixed closing sentence. No
//! randomness and no dependency on item content, so identical bundles
//! always produce identical text.

use crate::types::{SourceBundle, SourceCategory};

const CLOSING: &str = "Key takeaway: This topic has multi-dimensional coverage across \
different information types, suggesting it's a well-researched and currently relevant subject.";

/// Fragment contributed by one category, if any. Quick-facts entries
/// corroborate other sources and carry no fragment of their own.
fn fragment(category: SourceCategory) -> Option<&'static str> {
    match category {
        SourceCategory::Encyclopedia => {
            Some("Encyclopedia sources provide foundational knowledge.")
        }
        SourceCategory::News => {
            Some("Recent news coverage indicates active developments in this area.")
        }
        SourceCategory::Web => {
            Some("Web results show broader online presence and resources available.")
        }
        SourceCategory::Discussion => {
            Some("Community discussions reveal public interest and diverse perspectives.")
        }
        SourceCategory::Knowledge | SourceCategory::Manual => None,
    }
}

/// Generate the analysis narrative for a non-empty bundle.
pub fn generate(bundle: &SourceBundle, topic: &str, source_count: usize) -> String {
    let mut insight = format!(
        "Nexora analysis: researched \"{topic}\" across {source_count} different sources."
    );

    for category in SourceCategory::ORDERED {
        if bundle.contributes(category) {
            if let Some(fragment) = fragment(category) {
                insight.push(' ');
                insight.push_str(fragment);
            }
        }
    }

    insight.push_str("\n\n");
    insight.push_str(CLOSING);
    insight
}
