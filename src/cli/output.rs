//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for one-shot research
//! reports.

use crate::types::{Report, SourceCategory};
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the Nexora banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
"#,
                " _  _  ____  _  _  __  ____   __  ".bright_cyan().bold(),
                "( \\( )( ___)( \\/ )/  \\(  _ \\ / _\\ ".cyan().bold(),
                " )_)(_)(____)(_/\\_)\\__/(_/\\_)\\_/\\_)".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Multi-Source Research Engine".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!("\nNexora - Multi-Source Research Engine v{}\n", env!("CARGO_PKG_VERSION"));
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "→".bright_blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a full research report: summary, grouped citations, insight.
    pub fn report(&self, report: &Report) {
        println!("{}", report.summary);

        if !report.citations.is_empty() {
            self.section("Citations");
            let mut current_group: Option<SourceCategory> = None;
            for citation in &report.citations {
                if current_group != Some(citation.category) {
                    current_group = Some(citation.category);
                    self.group_header(citation.category.group_label());
                }
                let link = citation.url.as_deref().unwrap_or("(no link)");
                if self.colored {
                    println!("    {} {}", citation.title.bold(), link.dimmed());
                } else {
                    println!("    {} <{}>", citation.title, link);
                }
                if let Some(label) = &citation.source_label {
                    if self.colored {
                        println!("      {}", label.dimmed());
                    } else {
                        println!("      {}", label);
                    }
                }
            }
        }

        self.section("Insight");
        println!("{}", report.insight);

        if self.colored {
            println!(
                "\n  {} {}",
                "✓".green().bold(),
                format!(
                    "{} sources contributed, {} citations",
                    report.source_count,
                    report.citations.len()
                )
                .green()
            );
        } else {
            println!(
                "\n  [OK] {} sources contributed, {} citations",
                report.source_count,
                report.citations.len()
            );
        }
    }

    fn section(&self, title: &str) {
        if self.colored {
            println!("\n{}", title.bright_white().bold().underline());
        } else {
            println!("\n== {} ==", title);
        }
    }

    fn group_header(&self, label: &str) {
        if self.colored {
            println!("  {}", label.bright_cyan());
        } else {
            println!("  {}", label);
        }
    }
}
