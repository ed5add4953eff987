//! Helpers for inferring a trading currency from ticker syntax.

use std::fmt;

use serde::Serialize;

/// Currencies that can be inferred from an exchange suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Gbp,
    Cad,
    Usd,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exchange suffix → currency, checked in order against the raw ticker.
const SUFFIX_TO_CURRENCY: &[(&[&str], Currency)] = &[
    (&[".BO", ".NS"], Currency::Inr),
    (&[".L"], Currency::Gbp),
    (&[".TO"], Currency::Cad),
];

/// Attempt to infer the trading currency of a ticker.
///
/// Returns `None` for index, future and derivative symbols: a raw `%`, or a `=` / `^`
/// once percent-decoded (`^GSPC`, `%5EGSPC`, `CL=F`). Unrecognized symbols default to USD.
pub fn infer_currency(raw: &str) -> Option<Currency> {
    let decoded = urlencoding::decode(raw)
        .map(|d| d.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    tracing::debug!("currency: raw ticker '{raw}', decoded '{decoded}'");

    if raw.contains('%') || decoded.contains('=') || decoded.contains('^') {
        tracing::debug!("currency: '{raw}' looks like an index/future, no currency");
        return None;
    }

    let currency = SUFFIX_TO_CURRENCY
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| raw.contains(s)))
        .map_or(Currency::Usd, |(_, c)| *c);
    tracing::debug!("currency: '{raw}' -> {currency}");
    Some(currency)
}
