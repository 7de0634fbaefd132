//! Shell template abstraction.

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_attr(href)
        ));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_attr(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_attr(name),
                escape_attr(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template wrapping the streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, header, wrapper).
    pub body_start: String,
    /// HTML after sections (footer, closing tags).
    pub body_end: String,
    /// Script tags appended right before `</body>`.
    pub scripts: Vec<String>,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<main>\n".to_string(),
            body_end: "</main>\n".to_string(),
            scripts: Vec::new(),
        }
    }

    /// Set custom body start HTML (inside `<body>`).
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML (inside `<body>`).
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Add an external script.
    pub fn with_script_src(mut self, src: &str) -> Self {
        self.scripts
            .push(format!(r#"<script src="{}"></script>"#, escape_attr(src)));
        self
    }

    /// Add an inline script.
    pub fn with_inline_script(mut self, js: &str) -> Self {
        self.scripts.push(format!("<script>{}</script>", js));
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_attr(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        let mut html = self.body_end.clone();
        for script in &self.scripts {
            html.push_str(script);
            html.push('\n');
        }
        html.push_str("</body>\n</html>");
        html
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_contains_head() {
        let shell = Shell::new(
            HeadContent::new("Repairs & Accessories")
                .with_meta("viewport", "width=device-width, initial-scale=1"),
        );
        let html = shell.render_opening();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Repairs &amp; Accessories</title>"));
        assert!(html.contains(r#"<meta name="viewport""#));
        assert!(html.ends_with("<main>\n"));
    }

    #[test]
    fn test_closing_places_scripts_before_body_end() {
        let shell = Shell::new(HeadContent::default())
            .with_script_src("/js/slider.js")
            .with_inline_script("init();");
        let html = shell.render_closing();
        let script = html.find("<script>init();</script>").unwrap();
        let src = html.find(r#"<script src="/js/slider.js">"#).unwrap();
        let body_end = html.find("</body>").unwrap();
        assert!(src < script);
        assert!(script < body_end);
        assert!(html.ends_with("</html>"));
    }
}
