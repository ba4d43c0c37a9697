//! Bundle-to-report synthesis.
//!
//! Turns a [`SourceBundle`] into a [`Report`]: per-category summary
//! sections and citations in the fixed category order, plus the derived
//! insight narrative. When no provider contributed anything the fallback
//! path produces a deterministic "limited results" report with two
//! synthetic manual-search citations.
//!
//! Synthesis is pure: no clocks, no randomness, no I/O. Calling it twice
//! on the same bundle yields byte-identical reports.

use crate::research::insight;
use crate::types::{Citation, Report, SourceBundle, SourceCategory, SourceResult};

/// Build a report from the bundle for `topic`.
pub fn synthesize(bundle: &SourceBundle, topic: &str) -> Report {
    let source_count = bundle.contributing_sources();
    if source_count == 0 {
        return fallback_report(topic);
    }

    let mut summary = format!("# Comprehensive Research: {topic}\n");
    let mut citations = Vec::new();

    for (category, items) in bundle.iter() {
        if items.is_empty() {
            continue;
        }

        summary.push_str("\n## ");
        summary.push_str(category.section_heading());
        summary.push('\n');

        for item in items {
            render_item(&mut summary, item);
            citations.push(Citation {
                title: item.title.clone(),
                url: item.url.clone(),
                category,
                source_label: Some(item.source_label.clone()),
            });
        }
    }

    let insight = insight::generate(bundle, topic, source_count);

    Report {
        summary,
        citations,
        insight,
        source_count,
    }
}

fn render_item(summary: &mut String, item: &SourceResult) {
    summary.push_str("\n**");
    summary.push_str(&item.title);
    summary.push_str("**\n");

    if !item.summary.is_empty() {
        summary.push_str(&item.summary);
        summary.push('\n');
    }

    let mut meta = Vec::new();
    if let Some(published_at) = item.published_at {
        meta.push(published_at.format("%Y-%m-%d").to_string());
    }
    if let Some(score) = item.score {
        meta.push(format!("{score} votes"));
    }
    meta.push(format!("Source: {}", item.source_label));
    summary.push_str(&meta.join(" | "));
    summary.push('\n');
}

/// Deterministic report for a bundle with zero contributing sources.
fn fallback_report(topic: &str) -> Report {
    let summary = format!(
        "# Limited Results Found\n\n\
         Nexora found limited information for \"{topic}\". This could be because:\n\
         - The topic is very recent or niche\n\
         - The search terms are misspelled or too specific\n\
         - Related topics or synonyms may work better\n\n\
         Suggestion: Try searching for broader concepts related to your topic.\n"
    );

    let encoded = urlencoding::encode(topic).into_owned();
    let citations = vec![
        Citation {
            title: format!("Search \"{topic}\" on Google"),
            url: Some(format!("https://www.google.com/search?q={encoded}")),
            category: SourceCategory::Manual,
            source_label: None,
        },
        Citation {
            title: format!("Explore \"{topic}\" on Wikipedia"),
            url: Some(format!(
                "https://en.wikipedia.org/wiki/Special:Search/{encoded}"
            )),
            category: SourceCategory::Manual,
            source_label: None,
        },
    ];

    let insight = format!(
        "Unable to find comprehensive information about \"{topic}\". Try refining your \
         search with more specific terms or exploring related concepts."
    );

    Report {
        summary,
        citations,
        insight,
        source_count: 0,
    }
}
