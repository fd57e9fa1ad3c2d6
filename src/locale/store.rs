use std::fmt;

use crate::locale::{
    tables::{self, EN},
    types::Country,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleError {
    pub message: String,
}

impl LocaleError {
    fn unknown(what: &str, code: &str) -> Self {
        Self {
            message: format!("unknown {} code '{}'", what, code),
        }
    }
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LocaleError {}

/// Active language/country selection plus the static lookup tables.
///
/// Constructed once at the application root and passed down by reference;
/// only the selection mutates, never the tables.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    language: &'static str,
    country: &'static Country,
}

impl LocaleStore {
    pub fn new(language: &str, country: &str) -> Result<Self, LocaleError> {
        let language = tables::find_language(language)
            .ok_or_else(|| LocaleError::unknown("language", language))?;
        let country =
            tables::find_country(country).ok_or_else(|| LocaleError::unknown("country", country))?;
        Ok(Self {
            language: language.code,
            country,
        })
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn country(&self) -> &'static Country {
        self.country
    }

    pub fn set_language(&mut self, code: &str) -> Result<(), LocaleError> {
        let language =
            tables::find_language(code).ok_or_else(|| LocaleError::unknown("language", code))?;
        self.language = language.code;
        Ok(())
    }

    /// Selecting a country whose language differs also switches the
    /// language.
    pub fn set_country(&mut self, code: &str) -> Result<(), LocaleError> {
        let country =
            tables::find_country(code).ok_or_else(|| LocaleError::unknown("country", code))?;
        self.country = country;
        if country.language != self.language {
            self.language = country.language;
        }
        Ok(())
    }

    /// Looks up `key` in the active language table, falling back to the
    /// English table, then to the key itself.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        tables::translation_table(self.language)
            .and_then(|table| tables::lookup(table, key))
            .or_else(|| tables::lookup(EN, key))
            .unwrap_or(key)
    }

    /// Converts a base-USD amount at the active country's exchange rate and
    /// renders it with the currency symbol and 0-2 fraction digits. No digit
    /// grouping.
    pub fn format_price(&self, amount_usd: f64) -> String {
        let converted = amount_usd * self.country.exchange_rate;
        let rounded = (converted * 100.0).round() / 100.0;
        let mut rendered = format!("{:.2}", rounded);
        while rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
        format!("{}{}", self.country.currency_symbol, rendered)
    }
}
