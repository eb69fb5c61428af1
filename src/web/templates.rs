//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("detail.html", include_str!("../templates/detail.html")),
            ("notice.html", include_str!("../templates/notice.html")),
            (
                "components/card.html",
                include_str!("../templates/components/card.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_notice_is_escaped() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("instance_name", "Finder");
        ctx.insert("title", "Oops");
        ctx.insert("message", "<script>alert(1)</script>");

        let html = templates.render("notice.html", &ctx).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }
}
