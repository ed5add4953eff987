use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

fn parse(css: &str) -> Selector {
    Selector::parse(css).expect("static marker selector")
}

/// Quote-header region of the current page layout.
pub(crate) static QUOTE_HEADER: LazyLock<Selector> =
    LazyLock::new(|| parse("div[data-testid='quote-header']"));
/// Company heading.
pub(crate) static HEADING: LazyLock<Selector> = LazyLock::new(|| parse("h1"));
/// Primary price marker.
pub(crate) static PRICE: LazyLock<Selector> = LazyLock::new(|| parse("[data-testid='qsp-price']"));
/// Primary percent-change marker.
pub(crate) static CHANGE_PERCENT: LazyLock<Selector> =
    LazyLock::new(|| parse("[data-testid='qsp-price-change-percent']"));
/// Live-streaming price field.
pub(crate) static STREAMER_PRICE: LazyLock<Selector> =
    LazyLock::new(|| parse("fin-streamer[data-field='regularMarketPrice']"));
/// Live-streaming percent-change field.
pub(crate) static STREAMER_CHANGE_PERCENT: LazyLock<Selector> =
    LazyLock::new(|| parse("fin-streamer[data-field='regularMarketChangePercent']"));
/// Any element carrying a diagnostic marker attribute.
pub(crate) static DIAGNOSTIC: LazyLock<Selector> =
    LazyLock::new(|| parse("[data-testid], [data-field]"));

pub(crate) fn truncate(s: &str, n: usize) -> String {
    match s.char_indices().nth(n) {
        None => s.to_string(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + 16);
            out.push_str(&s[..cut]);
            out.push_str(" …[trunc]");
            out
        }
    }
}

/// All descendant text of `el`, trimmed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Element text, falling back to its `value` attribute (streamer fields render either).
pub(crate) fn text_or_value(el: ElementRef<'_>) -> String {
    let text = element_text(el);
    if !text.is_empty() {
        return text;
    }
    el.value().attr("value").map(str::trim).unwrap_or_default().to_string()
}

/// First non-empty text among the matches of `sel` inside `scope`.
pub(crate) fn first_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .map(element_text)
        .find(|t| !t.is_empty())
        .unwrap_or_default()
}

/// [`first_text`] for `primary`, then for `secondary` within the same scope.
pub(crate) fn first_text_or(scope: ElementRef<'_>, primary: &Selector, secondary: &Selector) -> String {
    let text = first_text(scope, primary);
    if text.is_empty() {
        first_text(scope, secondary)
    } else {
        text
    }
}

/// Ancestors of `el`, nearest first, stopping before `<body>`.
pub(crate) fn ancestors_below_body(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .take_while(|a| !matches!(a.value().name(), "body" | "html"))
}

/// Walk upward from `el` to the nearest ancestor holding a non-empty match of `sel`.
pub(crate) fn nearest_ancestor_text(
    el: ElementRef<'_>,
    sel: &Selector,
    read: fn(ElementRef<'_>) -> String,
) -> String {
    ancestors_below_body(el)
        .find_map(|ancestor| ancestor.select(sel).map(read).find(|t| !t.is_empty()))
        .unwrap_or_default()
}
