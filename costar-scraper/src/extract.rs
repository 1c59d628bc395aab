use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Title categories that never contribute co-star edges.
const EXCLUDED_TITLE_TYPES: &str = r"(?i)TV Series|Video Game|Short|TV Mini Series";

/// Compact title-id pattern used by the reduced filmography page format.
const TITLE_ID_PATTERN: &str = r"tt\d{7,8}";

/// Extracts work and participant URLs out of fetched pages.
///
/// All returned URLs are normalized full-credits URLs: query string dropped,
/// trailing slash ensured, `fullcredits` appended, resolved against the page
/// base so relative and absolute hrefs both work.
#[derive(Clone)]
pub struct Extractor {
    excluded_types: Regex,
    title_ids: Regex,
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            excluded_types: Regex::new(EXCLUDED_TITLE_TYPES)
                .expect("invalid excluded-types pattern"),
            title_ids: Regex::new(TITLE_ID_PATTERN).expect("invalid title-id pattern"),
        }
    }

    /// Full-credits URLs for every qualifying work on an actor's
    /// filmography page.
    ///
    /// Rows credited to anything other than an acting role are ignored, as
    /// are rows matching an excluded title type. Filmography pages sometimes
    /// arrive in a reduced format with no row markup at all; those are
    /// handled by scanning the raw document for compact title ids.
    pub fn extract_works(&self, base: &Url, html: &str) -> HashSet<String> {
        let document = Html::parse_document(html);
        let row_selector = Selector::parse("div.filmo-row").unwrap();
        let link_selector = Selector::parse("a[href]").unwrap();

        let mut works = HashSet::new();
        let mut saw_filmography = false;

        for row in document.select(&row_selector) {
            saw_filmography = true;

            let id = row.value().id().unwrap_or("");
            if !id.contains("actor") && !id.contains("actress") {
                continue;
            }

            let text: String = row.text().collect();
            if self.excluded_types.is_match(&text) {
                debug!("Skipping excluded title row {}", id);
                continue;
            }

            if let Some(link) = row.select(&link_selector).next()
                && let Some(href) = link.value().attr("href")
                && let Some(credits) = credits_url(base, href)
            {
                works.insert(credits);
            }
        }

        if !saw_filmography {
            for title_id in self.title_ids.find_iter(html) {
                if let Ok(url) = base.join(&format!("/title/{}/fullcredits", title_id.as_str())) {
                    works.insert(url.to_string());
                }
            }
        }

        works
    }

    /// Full-credits URLs for every actor in a work's cast list.
    pub fn extract_participants(&self, base: &Url, html: &str) -> HashSet<String> {
        let document = Html::parse_document(html);
        let row_selector =
            Selector::parse("table.cast_list tr.odd, table.cast_list tr.even").unwrap();
        let cell_selector = Selector::parse("td").unwrap();
        let link_selector = Selector::parse("a[href]").unwrap();

        let mut participants = HashSet::new();

        for row in document.select(&row_selector) {
            // The actor-name cell is the one with an empty class attribute;
            // the photo and character cells link elsewhere.
            let name_cell = row
                .select(&cell_selector)
                .find(|cell| cell.value().attr("class") == Some(""));

            if let Some(cell) = name_cell
                && let Some(link) = cell.select(&link_selector).next()
                && let Some(href) = link.value().attr("href")
                && let Some(credits) = credits_url(base, href)
            {
                participants.insert(credits);
            }
        }

        participants
    }

    /// Whether a work's credits page is tagged with an excluded category in
    /// its subnav sidebar.
    pub fn is_excluded_category(&self, html: &str) -> bool {
        let document = Html::parse_document(html);
        let subnav_selector = Selector::parse("div.aux-content-widget-2.links.subnav").unwrap();

        document
            .select(&subnav_selector)
            .next()
            .map(|div| {
                let text: String = div.text().collect();
                self.excluded_types.is_match(&text)
            })
            .unwrap_or(false)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a filmography or cast-list href into a full-credits URL.
fn credits_url(base: &Url, href: &str) -> Option<String> {
    let trimmed = href.split('?').next().unwrap_or(href);
    if trimmed.is_empty() {
        return None;
    }

    let mut path = trimmed.to_string();
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str("fullcredits");

    base.join(&path).ok().map(|url| url.to_string())
}
