//! Parsed article pages
//!
//! A [`Page`] owns the parsed document of one fetched article. The heading and
//! the main content node are read through a borrowed [`PageView`], so nothing
//! outlives the iteration that fetched the page.

use crate::FetchError;
use scraper::{ElementRef, Html, Selector};

/// Element holding the article title
pub const HEADING_SELECTOR: &str = "#firstHeading";

/// Element holding the article body
pub const CONTENT_SELECTOR: &str = "#mw-content-text";

/// Elements whose text is never counted as article words
const NON_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A node of the article body, as far as link selection and word counting
/// are concerned
///
/// Both methods yield values in document order.
pub trait ContentNode {
    /// `href` values of every `<a>` element below this node
    fn anchor_hrefs(&self) -> Vec<&str>;

    /// Raw text nodes below this node, excluding scripts and stylesheets
    fn text_fragments(&self) -> Vec<&str>;
}

impl<'a> ContentNode for ElementRef<'a> {
    fn anchor_hrefs(&self) -> Vec<&str> {
        self.descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name() == "a")
            .filter_map(|element| element.value().attr("href"))
            .collect()
    }

    fn text_fragments(&self) -> Vec<&str> {
        self.descendants()
            .filter(|node| {
                node.parent()
                    .and_then(|parent| parent.value().as_element())
                    .map_or(true, |parent| !NON_TEXT_ELEMENTS.contains(&parent.name()))
            })
            .filter_map(|node| node.value().as_text())
            .map(|text| &**text)
            .collect()
    }
}

/// One fetched article
#[derive(Debug)]
pub struct Page {
    /// URL the response was finally served from, after redirects
    final_url: String,

    document: Html,
}

/// Borrowed view of the parts of a page the walk needs
#[derive(Debug)]
pub struct PageView<'a> {
    /// Trimmed text of the article heading
    pub heading: String,

    /// The main content element
    pub content: ElementRef<'a>,
}

impl Page {
    /// Parses a response body served from `final_url`
    pub fn parse(final_url: impl Into<String>, body: &str) -> Self {
        Self {
            final_url: final_url.into(),
            document: Html::parse_document(body),
        }
    }

    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    /// Locates the heading and content elements
    ///
    /// # Returns
    ///
    /// * `Ok(PageView)` - Both elements were found
    /// * `Err(FetchError::MissingNode)` - The document is not shaped like an article
    pub fn view(&self) -> Result<PageView<'_>, FetchError> {
        let heading = self.select_first(HEADING_SELECTOR)?;
        let content = self.select_first(CONTENT_SELECTOR)?;

        Ok(PageView {
            heading: heading.text().collect::<String>().trim().to_string(),
            content,
        })
    }

    fn select_first(&self, selector: &'static str) -> Result<ElementRef<'_>, FetchError> {
        Selector::parse(selector)
            .ok()
            .and_then(|parsed| self.document.select(&parsed).next())
            .ok_or_else(|| FetchError::MissingNode {
                url: self.final_url.clone(),
                selector,
            })
    }
}
