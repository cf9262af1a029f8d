//! Server-rendered HTML pages.
//!
//! Templates are embedded at compile time and compiled once per process.
//! The `.html` names switch on minijinja's HTML auto-escaping.

use candy_core::{Candy, CandyPage, DEFAULT_IMAGE};
use minijinja::Environment;
use serde::Serialize;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("macros.html", include_str!("templates/macros.html")),
    ("index.html", include_str!("templates/index.html")),
    ("list.html", include_str!("templates/list.html")),
    ("admin.html", include_str!("templates/admin.html")),
    ("new.html", include_str!("templates/new.html")),
    ("edit.html", include_str!("templates/edit.html")),
];

/// Most page links the pager shows at once.
const PAGER_WINDOW: u32 = 9;

/// Compiled page templates.
pub struct Views {
    env: Environment<'static>,
}

/// Template context for a paginated listing.
#[derive(Serialize)]
struct PageContext<'a> {
    candies: &'a [Candy],
    current_page: u32,
    total_pages: u32,
    /// Page numbers linked from the pager, around the current page.
    pages: Vec<u32>,
    total: u64,
    kind: Option<&'a str>,
    has_previous: bool,
    has_next: bool,
}

impl<'a> From<&'a CandyPage> for PageContext<'a> {
    fn from(page: &'a CandyPage) -> Self {
        Self {
            candies: &page.items,
            current_page: page.current_page,
            total_pages: page.total_pages,
            pages: pager_window(page.current_page, page.total_pages),
            total: page.total,
            kind: page.filter.kind.as_deref(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

/// Up to `PAGER_WINDOW` consecutive page numbers within `1..=total_pages`,
/// centred on `current` where the bounds allow.
fn pager_window(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let half = PAGER_WINDOW / 2;
    let end = current
        .saturating_add(half)
        .max(PAGER_WINDOW)
        .min(total_pages);
    let start = end.saturating_sub(PAGER_WINDOW - 1).max(1);
    (start..=end).collect()
}

#[derive(Serialize)]
struct ListContext<'a> {
    page: PageContext<'a>,
}

#[derive(Serialize)]
struct EditContext<'a> {
    candy: &'a Candy,
}

#[derive(Serialize)]
struct Empty {}

impl Views {
    /// Compile every page template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        env.add_global("default_image", DEFAULT_IMAGE);
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, ctx: &T) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }

    /// Landing page.
    pub fn index(&self) -> Result<String, minijinja::Error> {
        self.render("index.html", &Empty {})
    }

    /// Public listing with the kind filter form.
    pub fn list(&self, page: &CandyPage) -> Result<String, minijinja::Error> {
        self.render("list.html", &ListContext { page: page.into() })
    }

    /// Admin listing with edit and delete actions.
    pub fn admin(&self, page: &CandyPage) -> Result<String, minijinja::Error> {
        self.render("admin.html", &ListContext { page: page.into() })
    }

    pub fn new_form(&self) -> Result<String, minijinja::Error> {
        self.render("new.html", &Empty {})
    }

    pub fn edit_form(&self, candy: &Candy) -> Result<String, minijinja::Error> {
        self.render("edit.html", &EditContext { candy })
    }
}
