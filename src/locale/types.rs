#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    /// Language the country switches the UI to when selected.
    pub language: &'static str,
    pub flag: &'static str,
    pub currency_symbol: &'static str,
    pub currency_code: &'static str,
    /// Rate relative to USD.
    pub exchange_rate: f64,
}
