use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::labels::Language;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language: Language,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl LocaleConfig {
    /// Builds preferences from a tag such as `en-US`, `es-PA`, or `es-ES`.
    pub fn from_tag(tag: &str) -> Self {
        let language = Language::from_tag(tag);
        let region = tag.split(['-', '_']).nth(1).unwrap_or_default();
        // Panama and most of Latin America group like en-US; Spain swaps them.
        let (decimal_separator, grouping_separator) = match region.to_ascii_uppercase().as_str() {
            "ES" | "AR" | "CO" | "CL" => (',', '.'),
            _ => ('.', ','),
        };
        Self {
            language,
            decimal_separator,
            grouping_separator,
            date_format: match language {
                Language::English => DateFormatStyle::Short,
                Language::Spanish => DateFormatStyle::Medium,
            },
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::from_tag("en-US")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" | "PAB" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "MXN" => "MX$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `value` rounded to `precision` places with locale separators.
pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp(precision);
    let body = format!("{:.*}", precision as usize, rounded.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };

    let mut out = String::new();
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an amount such as `$1,234.50` or `($200.00)`.
pub fn format_currency_value(
    amount: Decimal,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let negative = amount.round_dp(precision) < Decimal::ZERO;
    let unsigned = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };
    match (negative, options.negative_style) {
        (false, _) => unsigned,
        (true, NegativeStyle::Sign) => format!("-{unsigned}"),
        (true, NegativeStyle::Parentheses) => format!("({unsigned})"),
    }
}

/// Renders a `[0, 1]` ratio as a percentage with one decimal, e.g. `42.0%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(locale.language, date.month()),
            date.year()
        ),
    }
}

fn month_label(language: Language, month: u32) -> &'static str {
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    const ES: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
    ];
    let names = match language {
        Language::English => &EN,
        Language::Spanish => &ES,
    };
    month
        .checked_sub(1)
        .and_then(|idx| names.get(idx as usize))
        .copied()
        .unwrap_or("")
}
