//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off so that URLs
//! and rendered markup pass through untouched; templates escape user text
//! (titles, tag names) explicitly.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::contact::SocialLink;
use crate::config::{ContactConfig, SiteConfig, StackInfo};
use crate::error::Result;
use crate::layout::Layout;
use crate::palette::BannerColors;

/// Template renderer with the embedded site theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("index.html", include_str!("site/index.html")),
            ("tags.html", include_str!("site/tags.html")),
            ("tag_single.html", include_str!("site/tag_single.html")),
            ("category.html", include_str!("site/category.html")),
            ("contact.html", include_str!("site/contact.html")),
            ("links.html", include_str!("site/links.html")),
            (
                "partials/footer.html",
                include_str!("site/partials/footer.html"),
            ),
            (
                "partials/banner.html",
                include_str!("site/partials/banner.html"),
            ),
            ("partials/tag.html", include_str!("site/partials/tag.html")),
            (
                "partials/item_list.html",
                include_str!("site/partials/item_list.html"),
            ),
            (
                Layout::PostLayout.template(),
                include_str!("site/layouts/post.html"),
            ),
            (
                Layout::PostSimple.template(),
                include_str!("site/layouts/post_simple.html"),
            ),
            (
                Layout::PostBanner.template(),
                include_str!("site/layouts/post_banner.html"),
            ),
            (
                Layout::ListLayout.template(),
                include_str!("site/layouts/list.html"),
            ),
            (
                Layout::AuthorLayout.template(),
                include_str!("site/layouts/author.html"),
            ),
        ])?;

        tera.register_filter("date_format", date_format_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format a `YYYY-MM-DD` date string
///
/// `format="LL"` gives `May 30, 2023`; anything else leaves the value as is.
fn date_format_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_format", "value", String, value);
    let format = match args.get("format") {
        Some(val) => tera::try_get_value!("date_format", "format", String, val),
        None => "YYYY-MM-DD".to_string(),
    };

    if format == "LL" {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
            return Ok(tera::Value::String(date.format("%B %d, %Y").to_string()));
        }
    }

    Ok(tera::Value::String(s))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub author: String,
    pub shortname: String,
    pub occupation: String,
    pub description: String,
    pub url: String,
    pub root: String,
    pub tag_dir: String,
    pub default_category: String,
    pub cv_url: Option<String>,
    pub resources_url: Option<String>,
    pub year: i32,
    pub contact: ContactConfig,
    pub social: Vec<SocialLink>,
    /// Header links to the link list pages
    pub pages: Vec<NavLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
}

impl ConfigData {
    pub fn new(config: &SiteConfig, year: i32) -> Self {
        Self {
            title: config.title.clone(),
            author: config.author.clone(),
            shortname: config.shortname.clone(),
            occupation: config.occupation.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            root: config.url_for(""),
            tag_dir: config.tag_dir.clone(),
            default_category: config.default_category.clone(),
            cv_url: config.cv_url.clone(),
            resources_url: config.resources_url.clone(),
            year,
            contact: config.contact.clone(),
            social: config.contact.social_links(),
            pages: config
                .pages
                .iter()
                .map(|(dir, page)| NavLink {
                    title: page.title.clone(),
                    url: config.url_for(&format!("{}/", dir)),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagData {
    pub name: String,
    pub slug: String,
    pub url: String,
    pub count: usize,
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemData {
    pub title: String,
    pub date: Option<String>,
    pub url: String,
    pub layout: Layout,
    pub tags: Vec<TagData>,
    pub summary: Option<String>,
    pub content: String,
}

/// Everything a page template may refer to besides its own data
#[derive(Debug, Clone, Serialize)]
pub struct PageChrome {
    pub config: ConfigData,
    pub banner: BannerColors,
    pub stack: Vec<StackInfo>,
}

impl PageChrome {
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.config);
        context.insert("banner", &self.banner);
        context.insert("stack", &self.stack);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WORK_STACK;
    use crate::palette::ColorPalette;

    fn chrome() -> PageChrome {
        PageChrome {
            config: ConfigData::new(&SiteConfig::default(), 2024),
            banner: ColorPalette.at(0).into(),
            stack: WORK_STACK.iter().map(|s| s.info()).collect(),
        }
    }

    fn tag(name: &str, count: usize) -> TagData {
        TagData {
            name: name.to_string(),
            slug: slug::slugify(name),
            url: format!("/tags/{}/", slug::slugify(name)),
            count,
            color: None,
        }
    }

    #[test]
    fn test_tags_page_lists_tags() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = chrome().context();
        context.insert("unavailable", &false);
        context.insert("tags", &vec![tag("go", 2), tag("c <b>", 1)]);

        let html = renderer.render("tags.html", &context).unwrap();
        assert!(html.contains(r#"href="/tags/go/">go</a>"#));
        assert!(html.contains("(2)"));
        assert!(html.contains("c &lt;b&gt;"));
        assert!(html.contains("&copy; 2024 Kiarash Soleimanzadeh"));
        assert!(!html.contains("No tags found."));
    }

    #[test]
    fn test_tags_page_empty_and_unavailable_differ() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut context = chrome().context();
        context.insert("unavailable", &false);
        context.insert("tags", &Vec::<TagData>::new());
        let empty = renderer.render("tags.html", &context).unwrap();
        assert!(empty.contains("No tags found."));
        assert!(!empty.contains("Tags unavailable."));

        context.insert("unavailable", &true);
        let unavailable = renderer.render("tags.html", &context).unwrap();
        assert!(unavailable.contains("Tags unavailable."));
        assert!(!unavailable.contains("No tags found."));
    }

    #[test]
    fn test_every_layout_renders() {
        let renderer = TemplateRenderer::new().unwrap();
        for layout in Layout::ALL {
            let mut context = chrome().context();
            context.insert(
                "item",
                &ItemData {
                    title: "Hello".to_string(),
                    date: Some("2023-05-30".to_string()),
                    url: "/blog/hello/".to_string(),
                    layout,
                    tags: vec![tag("go", 1)],
                    summary: None,
                    content: "<p>Body</p>".to_string(),
                },
            );
            let html = renderer.render(layout.template(), &context).unwrap();
            assert!(html.contains("<p>Body</p>"), "{} lost the body", layout);
            assert!(html.contains("Hello"));
        }
    }

    #[test]
    fn test_contact_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render("contact.html", &chrome().context()).unwrap();
        assert!(html.contains(r#"href="https://calendly.com/_kiarash_""#));
        assert!(html.contains("@ItIsKiarash"));
        assert!(html.contains(r#"href="mailto:kiarash.s@hotmail.com""#));
    }

    #[test]
    fn test_links_page() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = chrome().context();
        let pages = crate::config::pages::default_link_pages();
        context.insert("page", &pages["presentations"]);

        let html = renderer.render("links.html", &context).unwrap();
        assert!(html.contains("<h1>Presentations</h1>"));
        assert!(html.contains("Clean Code"));
        assert!(html.contains("Coming soon..."));
        assert!(html.contains(r#"href="https://resource.kiarashs.ir""#));
        assert!(html.contains(r#"href="/slides/">Slides</a>"#));
    }

    #[test]
    fn test_date_format_filter() {
        let mut args = HashMap::new();
        args.insert("format".to_string(), tera::Value::String("LL".to_string()));
        let out = date_format_filter(&tera::Value::String("2023-05-30".to_string()), &args)
            .unwrap();
        assert_eq!(out, tera::Value::String("May 30, 2023".to_string()));
    }
}
