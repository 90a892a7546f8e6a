//! Generator module - writes the tag pages, item pages, home page and the
//! about, contact and link list pages

use anyhow::Result;
use chrono::Datelike;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::Context;

use crate::config::colors::color_for;
use crate::config::WORK_STACK;
use crate::config::LinkPage;
use crate::content::{ContentAccessor, ContentItem, MarkdownRenderer, StaticCorpus};
use crate::layout::Layout;
use crate::palette::ColorPalette;
use crate::tags::{self, normalize, slugify, TagIndex};
use crate::templates::{ConfigData, ItemData, PageChrome, TagData, TemplateRenderer};
use crate::Folio;

/// Number of posts listed on the home page
const RECENT_ITEMS: usize = 5;

/// Category holding the author profile, `<content_dir>/authors/default.md`
const AUTHORS_CATEGORY: &str = "authors";
const DEFAULT_AUTHOR: &str = "default";

const ABOUT_DIR: &str = "about";
const CONTACT_DIR: &str = "contact";

/// What a generation run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub tags: usize,
    pub tag_pages: usize,
    pub items: usize,
    /// About, contact and link list pages
    pub pages: usize,
}

/// Static page generator using Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
    chrome: PageChrome,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::new(&folio.config.highlight_theme);

        let mut rng = match folio.config.palette_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let chrome = PageChrome {
            config: ConfigData::new(&folio.config, chrono::Local::now().year()),
            banner: ColorPalette.pick(&mut rng).into(),
            stack: WORK_STACK.iter().map(|s| s.info()).collect(),
        };

        Ok(Self {
            folio: folio.clone(),
            renderer,
            markdown,
            chrome,
        })
    }

    /// Generate every page of the default category
    ///
    /// If the category cannot be read, the tags page is written in its
    /// unavailable state and the error is returned.
    pub fn generate<A>(&self, accessor: &A) -> Result<GenerateReport>
    where
        A: ContentAccessor + ?Sized,
    {
        fs::create_dir_all(&self.folio.public_dir)?;
        let category = self.folio.config.default_category.as_str();

        // These pages do not depend on the category
        self.write_about_page(accessor)?;
        self.write_contact_page()?;
        let pages = 2 + self.write_link_pages()?;

        let items = match accessor.items(category) {
            Ok(items) => items,
            Err(e) => {
                tracing::error!("Cannot build tag index: {}", e);
                self.write_tags_index(None)?;
                return Err(e.into());
            }
        };

        // One read of the category serves every page below
        let snapshot = StaticCorpus::new().with_category(category, items);
        let index = tags::aggregate(&snapshot, category)?;
        let items: Vec<ContentItem> = snapshot
            .items(category)?
            .into_iter()
            .filter(ContentItem::is_eligible)
            .collect();

        let index_tags = self.write_tags_index(Some(&index))?;
        let tag_pages = self.write_tag_pages(&snapshot, category, &index_tags)?;
        let item_data = self.write_item_pages(category, &items)?;
        self.write_category_page(category, &item_data)?;
        self.write_home_page(&item_data)?;

        let report = GenerateReport {
            tags: index.len(),
            tag_pages,
            items: item_data.len(),
            pages,
        };
        tracing::info!(
            "Generated {} items, {} tags, {} tag pages",
            report.items,
            report.tags,
            report.tag_pages
        );
        Ok(report)
    }

    fn tag_data(&self, name: &str, count: usize) -> TagData {
        let slug = slugify(name);
        let url = if slug.is_empty() {
            self.folio.config.url_for(&format!("{}/", self.folio.config.tag_dir))
        } else {
            self.folio.config.tag_url(&slug)
        };
        TagData {
            name: name.to_string(),
            slug,
            url,
            count,
            color: color_for(name),
        }
    }

    /// Write `<tag_dir>/index.html`; `None` renders the unavailable state
    fn write_tags_index(&self, index: Option<&TagIndex>) -> Result<Vec<TagData>> {
        let tags: Vec<TagData> = index
            .map(|index| {
                index
                    .sorted_descending()
                    .into_iter()
                    .map(|t| self.tag_data(&t.name, t.count))
                    .collect()
            })
            .unwrap_or_default();

        let mut context = self.chrome.context();
        context.insert("unavailable", &index.is_none());
        context.insert("tags", &tags);

        let html = self.renderer.render("tags.html", &context)?;
        let dir = self.folio.public_dir.join(&self.folio.config.tag_dir);
        write_page(&dir, &html)?;

        Ok(tags)
    }

    fn write_tag_pages(
        &self,
        snapshot: &StaticCorpus,
        category: &str,
        index_tags: &[TagData],
    ) -> Result<usize> {
        let mut written: HashMap<&str, &str> = HashMap::new();

        for tag in index_tags {
            if tag.slug.is_empty() {
                tracing::warn!("Tag '{}' has no usable slug, no page written", tag.name);
                continue;
            }
            if let Some(first) = written.get(tag.slug.as_str()) {
                tracing::warn!(
                    "Tags '{}' and '{}' share the slug '{}'",
                    first,
                    tag.name,
                    tag.slug
                );
                continue;
            }

            let items: Vec<ItemData> = tags::items_for_slug(snapshot, category, &tag.slug)?
                .iter()
                .map(|item| self.item_data(category, item, false))
                .collect();

            let mut context = self.chrome.context();
            context.insert("tag", tag);
            context.insert("items", &items);

            let html = self.renderer.render("tag_single.html", &context)?;
            let dir = self
                .folio
                .public_dir
                .join(&self.folio.config.tag_dir)
                .join(&tag.slug);
            write_page(&dir, &html)?;

            written.insert(&tag.slug, &tag.name);
        }

        Ok(written.len())
    }

    fn write_item_pages(&self, category: &str, items: &[ContentItem]) -> Result<Vec<ItemData>> {
        let mut sorted: Vec<&ContentItem> = items.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        let mut data = Vec::with_capacity(sorted.len());
        for item in sorted {
            let item_data = self.item_data(category, item, true);

            let mut context = self.chrome.context();
            context.insert("item", &item_data);
            let html = self.renderer.render(item.layout.template(), &context)?;

            let dir = self.folio.public_dir.join(category).join(&item.slug);
            write_page(&dir, &html)?;

            data.push(item_data);
        }

        Ok(data)
    }

    fn write_category_page(&self, category: &str, items: &[ItemData]) -> Result<()> {
        let mut context = self.chrome.context();
        context.insert("heading", &title_case(category));
        context.insert("items", items);

        let html = self.renderer.render("category.html", &context)?;
        write_page(&self.folio.public_dir.join(category), &html)?;
        Ok(())
    }

    fn write_home_page(&self, items: &[ItemData]) -> Result<()> {
        let recent: Vec<&ItemData> = items.iter().take(RECENT_ITEMS).collect();

        let mut context: Context = self.chrome.context();
        context.insert("items", &recent);

        let html = self.renderer.render("index.html", &context)?;
        write_page(&self.folio.public_dir, &html)?;
        Ok(())
    }

    /// `about/index.html` from the author profile, or a bare profile
    fn write_about_page<A>(&self, accessor: &A) -> Result<()>
    where
        A: ContentAccessor + ?Sized,
    {
        let profile = match accessor.items(AUTHORS_CATEGORY) {
            Ok(items) => items.into_iter().find(|item| item.slug == DEFAULT_AUTHOR),
            Err(e) => {
                tracing::debug!("No author profile: {}", e);
                None
            }
        };

        let mut about = match &profile {
            Some(profile) => self.item_data(AUTHORS_CATEGORY, profile, true),
            None => ItemData {
                title: self.folio.config.author.clone(),
                date: None,
                url: String::new(),
                layout: Layout::AuthorLayout,
                tags: Vec::new(),
                summary: None,
                content: String::new(),
            },
        };
        about.url = self.folio.config.url_for(&format!("{}/", ABOUT_DIR));
        about.layout = Layout::AuthorLayout;

        let mut context = self.chrome.context();
        context.insert("item", &about);
        let html = self.renderer.render(Layout::AuthorLayout.template(), &context)?;
        write_page(&self.folio.public_dir.join(ABOUT_DIR), &html)
    }

    fn write_contact_page(&self) -> Result<()> {
        let html = self.renderer.render("contact.html", &self.chrome.context())?;
        write_page(&self.folio.public_dir.join(CONTACT_DIR), &html)
    }

    fn write_link_pages(&self) -> Result<usize> {
        let mut written = 0;
        for (dir, page) in &self.folio.config.pages {
            if !self.is_free_page_dir(dir) {
                tracing::warn!("Link page '{}' has an unusable directory name, skipped", dir);
                continue;
            }
            self.write_link_page(dir, page)?;
            written += 1;
        }
        Ok(written)
    }

    fn write_link_page(&self, dir: &str, page: &LinkPage) -> Result<()> {
        let mut context = self.chrome.context();
        context.insert("page", page);

        let html = self.renderer.render("links.html", &context)?;
        write_page(&self.folio.public_dir.join(dir), &html)
    }

    /// A single slug-shaped directory not taken by another page
    fn is_free_page_dir(&self, dir: &str) -> bool {
        let config = &self.folio.config;
        !dir.is_empty()
            && slugify(dir) == dir
            && ![
                ABOUT_DIR,
                CONTACT_DIR,
                config.tag_dir.as_str(),
                config.default_category.as_str(),
            ]
            .contains(&dir)
    }

    fn item_data(&self, category: &str, item: &ContentItem, with_content: bool) -> ItemData {
        let mut item_tags: Vec<TagData> = Vec::new();
        if let Ok(raw_tags) = item.tags.strings(&item.source) {
            for name in raw_tags.iter().filter_map(|raw| normalize(raw)) {
                if !item_tags.iter().any(|t| t.name == name) {
                    item_tags.push(self.tag_data(&name, 1));
                }
            }
        }

        ItemData {
            title: item.title.clone(),
            date: item.date.map(|d| d.format("%Y-%m-%d").to_string()),
            url: self
                .folio
                .config
                .url_for(&format!("{}/{}/", category, item.slug)),
            layout: item.layout,
            tags: item_tags,
            summary: item.summary.as_deref().map(|s| self.markdown.render(s)),
            content: if with_content {
                self.markdown.render(&item.body)
            } else {
                String::new()
            },
        }
    }
}

fn write_page(dir: &Path, html: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join("index.html"), html)?;
    Ok(())
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
