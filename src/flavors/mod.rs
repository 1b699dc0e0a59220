//! Fetch the seasonal-flavors page and scrape the flavor names out of it.
//!
//! The page lists each flavor inside `.product > strong`. We take the text of
//! every match in document order, space-split it, drop empty and bare-newline
//! tokens, and join the rest back into one speakable string.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::info;

use crate::core::config::AppConfig;
use crate::errors::SkillError;

static FLAVOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".product > strong").expect("flavor selector compiles"));

/// GET the flavors page and return the scraped flavor text.
///
/// No timeout is set on the request; an unresponsive server holds the
/// invocation until the platform kills it.
///
/// # Errors
///
/// Returns `SkillError::BadStatus` for a non-success status and
/// `SkillError::HttpError` for transport or body-read failures. Callers decide
/// whether to surface these; the shipped intent handler logs and drops them.
pub async fn fetch_seasonal_flavors(
    client: &reqwest::Client,
    config: &AppConfig,
) -> Result<String, SkillError> {
    let response = client.get(&config.flavors_url).send().await?;

    let status = response.status();
    info!(status = %status, url = %config.flavors_url, "Fetched flavors page");

    if !status.is_success() {
        return Err(SkillError::BadStatus(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(extract_flavor_text(&body))
}

/// Scrape the flavor list out of a page body.
#[must_use]
pub fn extract_flavor_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut raw = String::new();
    for element in document.select(&FLAVOR_SELECTOR) {
        for piece in element.text() {
            raw.push_str(piece);
        }
    }

    raw.split(' ')
        .filter(|token| !token.is_empty())
        .filter(|token| *token != "\n")
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::extract_flavor_text;

    #[test]
    fn extracts_targeted_elements_only() {
        let html = "<html><body>\
            <div class=\"product\"><strong>\n sweet cream \n </strong></div>\
            <div class=\"product\"><strong>\n honey lavender \n </strong></div>\
            <div class=\"other\"><strong>\n not a flavor \n </strong></div>\
            </body></html>";
        assert_eq!(extract_flavor_text(html), "sweet cream honey lavender");
    }

    #[test]
    fn drops_empty_and_newline_tokens() {
        let html = "<div class=\"product\"><strong>\n salted  caramel \n</strong></div>";
        assert_eq!(extract_flavor_text(html), "salted caramel");
    }

    #[test]
    fn no_matches_yields_empty_string() {
        assert_eq!(extract_flavor_text("<p>nothing here</p>"), "");
    }

    #[test]
    fn strong_must_be_a_direct_child() {
        let html = "<div class=\"product\"><em><strong>nested</strong></em></div>";
        assert_eq!(extract_flavor_text(html), "");
    }
}
