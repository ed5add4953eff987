//! The default extraction chain, one strategy per known page layout.

use scraper::{ElementRef, Html};

use super::helpers::{
    CHANGE_PERCENT, DIAGNOSTIC, HEADING, PRICE, QUOTE_HEADER, STREAMER_CHANGE_PERCENT,
    STREAMER_PRICE, element_text, first_text, first_text_or, nearest_ancestor_text,
    text_or_value, truncate,
};
use super::{ExtractionStrategy, QuoteFields};

/// Strategy 1: the quote-header region.
///
/// Company is the region's heading; price and change each fall back from the primary
/// marker to the streamer field, both looked up inside the region. Requires a company
/// and a price.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteHeader;

impl ExtractionStrategy for QuoteHeader {
    fn name(&self) -> &'static str {
        "quote-header"
    }

    fn attempt(&self, document: &Html, _ticker: &str) -> Option<QuoteFields> {
        document.select(&QUOTE_HEADER).find_map(|header| {
            let company = first_text(header, &HEADING);
            let price = first_text_or(header, &PRICE, &STREAMER_PRICE);
            if company.is_empty() || price.is_empty() {
                return None;
            }
            let change = first_text_or(header, &CHANGE_PERCENT, &STREAMER_CHANGE_PERCENT);
            Some(QuoteFields {
                company,
                price,
                change,
            })
        })
    }
}

/// Strategy 2: a bare price marker anywhere in the page.
///
/// Company and change come from the nearest ancestors holding a heading and a change
/// marker; either may be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceAnchor;

impl ExtractionStrategy for PriceAnchor {
    fn name(&self) -> &'static str {
        "qsp-price"
    }

    fn attempt(&self, document: &Html, _ticker: &str) -> Option<QuoteFields> {
        let (anchor, price) = document
            .select(&PRICE)
            .map(|el| (el, element_text(el)))
            .find(|(_, price)| !price.is_empty())?;

        Some(QuoteFields {
            company: nearest_ancestor_text(anchor, &HEADING, element_text),
            price,
            change: nearest_ancestor_text(anchor, &CHANGE_PERCENT, element_text),
        })
    }
}

/// Strategy 3: the live-streaming price field.
///
/// Like [`PriceAnchor`], but price and change read the `value` attribute when the
/// element has no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamerAnchor;

impl ExtractionStrategy for StreamerAnchor {
    fn name(&self) -> &'static str {
        "fin-streamer"
    }

    fn attempt(&self, document: &Html, _ticker: &str) -> Option<QuoteFields> {
        let (anchor, price) = document
            .select(&STREAMER_PRICE)
            .map(|el| (el, text_or_value(el)))
            .find(|(_, price)| !price.is_empty())?;

        Some(QuoteFields {
            company: nearest_ancestor_text(anchor, &HEADING, element_text),
            price,
            change: nearest_ancestor_text(anchor, &STREAMER_CHANGE_PERCENT, text_or_value),
        })
    }
}

/// Elements with a non-empty `data-testid` or `data-field`, paired with both values.
fn marked_elements(document: &Html) -> impl Iterator<Item = (ElementRef<'_>, &str, &str)> {
    document.select(&DIAGNOSTIC).filter_map(|el| {
        let element = el.value();
        let testid = element.attr("data-testid").unwrap_or_default();
        let field = element.attr("data-field").unwrap_or_default();
        (!testid.is_empty() || !field.is_empty()).then_some((el, testid, field))
    })
}

/// Strategy 4: never yields fields. Traces every element carrying `data-testid` or
/// `data-field` so a changed page layout can be diagnosed from the logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostic;

impl ExtractionStrategy for Diagnostic {
    fn name(&self) -> &'static str {
        "diagnostic"
    }

    fn yields_records(&self) -> bool {
        false
    }

    fn attempt(&self, document: &Html, ticker: &str) -> Option<QuoteFields> {
        let mut seen = 0usize;
        for (el, testid, field) in marked_elements(document) {
            seen += 1;
            tracing::debug!(
                "{ticker}: found element <{}> data-testid='{testid}' data-field='{field}' text='{}'",
                el.value().name(),
                truncate(&element_text(el), 80)
            );
        }
        tracing::debug!("{ticker}: {seen} marked elements, none matched a known layout");
        None
    }
}
