//! HTML preview rendering.
//!
//! Produces a self-contained fragment for showing a reconstruction on
//! screen before it is handed to a document renderer.

use quick_xml::escape::escape;

use crate::error::Result;
use crate::model::{Alignment, Block, Document, Heading, Paragraph, TextRun};

use super::RenderOptions;

const HEADING_RUN_STYLE: &str = "font-size: 1.3em; font-weight: bold; color: #62a1ff;";

/// Convert a document to an HTML preview fragment.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML preview renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to an HTML fragment.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::from("<div class=\"unscan-preview\">\n");
        for block in doc {
            self.render_block(&mut output, block);
        }
        output.push_str("</div>");
        Ok(output)
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading(h) => self.render_heading(output, h),
            Block::Paragraph(p) => self.render_paragraph(output, p),
            Block::Blank => {
                if self.options.include_blank_blocks {
                    output.push_str("<br>\n");
                }
            }
        }
    }

    fn render_heading(&self, output: &mut String, heading: &Heading) {
        let level = heading.level.min(self.options.max_heading_level).min(6);
        output.push_str(&format!("<h{}>", level));
        for run in &heading.runs {
            self.render_run(output, run);
        }
        output.push_str(&format!("</h{}>\n", level));
    }

    fn render_paragraph(&self, output: &mut String, para: &Paragraph) {
        match (para.alignment, self.options.preview_styles) {
            (Alignment::Center, true) => output.push_str("<div style=\"text-align: center;\">"),
            (Alignment::Center, false) => output.push_str("<div class=\"align-center\">"),
            (Alignment::Left, _) => output.push_str("<div>"),
        }
        for run in &para.runs {
            self.render_run(output, run);
        }
        output.push_str("</div>\n");
    }

    fn render_run(&self, output: &mut String, run: &TextRun) {
        let text = escape(run.text.as_str());

        if run.style.heading_size {
            if self.options.preview_styles {
                output.push_str(&format!(
                    "<span style=\"{}\">{}</span>",
                    HEADING_RUN_STYLE, text
                ));
            } else {
                output.push_str(&format!("<span class=\"heading-run\">{}</span>", text));
            }
            return;
        }

        let mut html = text.into_owned();
        if run.style.bold {
            html = format!("<b>{}</b>", html);
        }
        if run.style.italic {
            html = format!("<i>{}</i>", html);
        }
        output.push_str(&html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph_alignment() {
        let doc = Document::from_blocks(vec![
            Paragraph::with_text("left").into(),
            Paragraph::with_text("middle")
                .aligned(Alignment::Center)
                .into(),
        ]);

        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert!(html.starts_with("<div class=\"unscan-preview\">"));
        assert!(html.contains("<div>left</div>"));
        assert!(html.contains("<div style=\"text-align: center;\">middle</div>"));

        let options = RenderOptions::new().with_preview_styles(false);
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("<div class=\"align-center\">middle</div>"));
    }

    #[test]
    fn test_render_emphasis_and_escaping() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::bold("A&B"));
        para.add_run(TextRun::italic(" <x>"));

        let html = to_html(&Document::from_blocks(vec![para.into()]), &RenderOptions::new())
            .unwrap();
        assert!(html.contains("<b>A&amp;B</b><i> &lt;x&gt;</i>"));
    }

    #[test]
    fn test_render_heading_and_blank() {
        let doc = Document::from_blocks(vec![
            Heading::new(vec![TextRun::heading("Title")], 1).into(),
            Block::Blank,
            Heading::with_text("Deep", 9).into(),
        ]);

        let html = to_html(&doc, &RenderOptions::new()).unwrap();
        assert!(html.contains("<h1><span style=\"font-size: 1.3em;"));
        assert!(html.contains("<br>"));
        assert!(html.contains("<h6>Deep</h6>"));

        let html = to_html(&doc, &RenderOptions::new().with_blank_blocks(false)).unwrap();
        assert!(!html.contains("<br>"));
    }
}
