//! Locale context for sorting and display.
//!
//! A [`GridContext`] is built once per language and passed explicitly to every grid
//! operation. It bundles the collator used for text ordering and the number formatter
//! used by the `Number` render strategy.

use std::cmp::Ordering;
use std::fmt;

use fixed_decimal::FixedDecimal;
use icu::collator::{Collator, CollatorOptions};
use icu::decimal::options::FixedDecimalFormatterOptions;
use icu::decimal::FixedDecimalFormatter;

use crate::error::{GridError, Result};
use crate::language::Language;

/// Maximum fraction digits shown by [`NumberFormat`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Locale-aware text ordering for one language.
pub struct Collation {
    language: Language,
    collator: Collator,
}

impl Collation {
    /// Loads the collation tables for the language.
    pub fn new(language: Language) -> Result<Self> {
        let collator = Collator::try_new(&language.locale().into(), CollatorOptions::new())
            .map_err(|err| GridError::Collation {
                language,
                reason: err.to_string(),
            })?;
        Ok(Collation { language, collator })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Compares two strings under the language's collation rules.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Locale-aware number formatting (grouping and decimal separators).
pub struct NumberFormat {
    language: Language,
    formatter: FixedDecimalFormatter,
}

impl NumberFormat {
    /// Loads the decimal symbols for the language.
    pub fn new(language: Language) -> Result<Self> {
        let formatter = FixedDecimalFormatter::try_new(
            &language.locale().into(),
            FixedDecimalFormatterOptions::default(),
        )
        .map_err(|err| GridError::NumberFormat {
            language,
            reason: err.to_string(),
        })?;
        Ok(NumberFormat {
            language,
            formatter,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Formats a number with at most three fraction digits.
    ///
    /// ```
    /// use enerji_grid::{Language, NumberFormat};
    ///
    /// let tr = NumberFormat::new(Language::Tr).unwrap();
    /// assert_eq!(tr.format(1717368.0), "1.717.368");
    /// ```
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return crate::value::Number::F64(value).to_text();
        }

        let plain = plain_decimal(value);
        match plain.parse::<FixedDecimal>() {
            Ok(decimal) => self.formatter.format_to_string(&decimal),
            Err(err) => {
                log::warn!("cannot format {plain} as a decimal: {err:?}");
                plain
            }
        }
    }
}

impl fmt::Debug for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFormat")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Rounds to [`MAX_FRACTION_DIGITS`] and drops trailing zeros: `28.80` -> `28.8`, `5.000` -> `5`.
fn plain_decimal(value: f64) -> String {
    let mut text = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Percent text in the language's convention: `%28.8` in Turkish, `28.8%` in English.
pub fn format_percent(text: &str, language: Language) -> String {
    match language {
        Language::Tr => format!("%{text}"),
        Language::En => format!("{text}%"),
    }
}

/// Everything a grid operation needs to know about the active language.
#[derive(Debug)]
pub struct GridContext {
    language: Language,
    collation: Collation,
    numbers: NumberFormat,
}

impl GridContext {
    /// Builds the context for a language, loading collation and number data.
    pub fn new(language: Language) -> Result<Self> {
        Ok(GridContext {
            language,
            collation: Collation::new(language)?,
            numbers: NumberFormat::new(language)?,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn collation(&self) -> &Collation {
        &self.collation
    }

    pub fn numbers(&self) -> &NumberFormat {
        &self.numbers
    }

    /// Shorthand for [`format_percent`] in this context's language.
    pub fn percent(&self, text: &str) -> String {
        format_percent(text, self.language)
    }
}
