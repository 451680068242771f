//! Minimal HTML report assembly.
//!
//! Sections hold maud content blocks and inline Plotly plots; `Report`
//! renders them into a single self-contained page (the Plotly runtime is
//! pulled from the CDN).

use std::path::Path;

use anyhow::{Context, Result};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

enum Block {
    Content(Markup),
    Plot(String),
}

/// One titled section of the report.
pub struct ReportSection {
    heading: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(heading: &str) -> Self {
        ReportSection {
            heading: heading.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    /// Embed a plot as inline HTML. Each plot gets a unique div id derived
    /// from its position in the report.
    pub fn add_plot(&mut self, plot: Plot) {
        let div_id = format!("nabla-plot-{}", self.blocks.len());
        self.blocks
            .push(Block::Plot(plot.to_inline_html(Some(div_id.as_str()))));
    }
}

/// A full HTML report: title, timestamp, and a list of sections.
pub struct Report {
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Report {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> Markup {
        let generated = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style {
                        "body { font-family: sans-serif; margin: 2em auto; max-width: 960px; }"
                        "h2 { border-bottom: 1px solid #ccc; padding-bottom: 0.2em; }"
                        ".timestamp { color: #666; font-size: 0.85em; }"
                    }
                }
                body {
                    h1 { (self.title) }
                    p class="timestamp" { "Generated " (generated) }
                    @for section in &self.sections {
                        h2 { (section.heading) }
                        @for block in &section.blocks {
                            @match block {
                                Block::Content(markup) => { p { (markup) } }
                                Block::Plot(inline) => { (PreEscaped(inline.as_str())) }
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.render().into_string())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_contains_title_and_sections() {
        let mut report = Report::new("Training Report");
        let mut section = ReportSection::new("Introduction");
        section.add_content(html! { "Overview of the run." });
        report.add_section(section);

        let page = report.render().into_string();
        assert!(page.contains("Training Report"));
        assert!(page.contains("Introduction"));
        assert!(page.contains("Overview of the run."));
    }
}
