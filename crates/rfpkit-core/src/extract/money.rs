use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ExtractionResult;
use crate::text::normalize_whitespace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Inr,
    Usd,
    Eur,
    Gbp,
    Jpy,
    Cad,
    Aud,
    #[default]
    Unknown,
}

impl Currency {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(crate::Error::InvalidCurrency(s.to_string())),
        }
    }
}

/// Amount and currency found in a budget or price statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoneyExtraction {
    pub amount: Option<f64>,
    pub currency: Currency,
}

/// Currency detection rules in priority order. The first rule whose pattern
/// matches the scan scope decides the currency.
///
/// Symbols are matched case-sensitively, words case-insensitively and on word
/// boundaries, so "hrs" never reads as rupees.
pub const CURRENCY_RULES: &[(Currency, &str)] = &[
    (Currency::Inr, r"₹|(?i:\brs\b|\brs\.|\brupees?\b|\binr\b)"),
    (Currency::Usd, r"\$|(?i:\busd\b|\bdollars?\b)"),
    (Currency::Eur, r"€|(?i:\beur\b|\beuros?\b)"),
    (Currency::Gbp, r"£|(?i:\bgbp\b|\bpounds?\b)"),
    (Currency::Jpy, r"¥|(?i:\bjpy\b|\byen\b)"),
    (Currency::Cad, r"(?i:\bcad\b|\bcanadian dollars?\b)"),
    (Currency::Aud, r"(?i:\baud\b|\baustralian dollars?\b)"),
];

/// A line mentioning any of these words narrows the budget scan to that line.
pub const BUDGET_LINE_PATTERN: &str = r"(?i)budget|price|pricing|total|cost|fees|amount|ceiling";

const NUMBER_PATTERN: &str = r"[0-9][0-9,.]*";

pub struct CurrencyRule {
    pub currency: Currency,
    pub regex: Regex,
}

impl CurrencyRule {
    pub fn new(currency: Currency, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            currency,
            regex: Regex::new(pattern)?,
        })
    }
}

pub struct BudgetExtractor {
    budget_line: Regex,
    number: Regex,
    currency_rules: Vec<CurrencyRule>,
}

impl BudgetExtractor {
    pub fn new() -> ExtractionResult<Self> {
        let currency_rules = CURRENCY_RULES
            .iter()
            .map(|(currency, pattern)| CurrencyRule::new(*currency, pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            budget_line: Regex::new(BUDGET_LINE_PATTERN)?,
            number: Regex::new(NUMBER_PATTERN)?,
            currency_rules,
        })
    }

    pub fn extract(&self, text: &str) -> MoneyExtraction {
        let scope = normalize_whitespace(self.scan_scope(text));

        MoneyExtraction {
            amount: self.largest_amount(&scope),
            currency: self.detect_currency(&scope),
        }
    }

    /// The first line naming a budget-like word, or the whole text.
    fn scan_scope<'t>(&self, text: &'t str) -> &'t str {
        text.lines()
            .find(|line| self.budget_line.is_match(line))
            .unwrap_or(text)
    }

    /// Takes the largest figure because budget lines tend to mention a deposit
    /// or unit price before the overall ceiling. Unrelated large numbers on the
    /// same line (phone numbers, years) win too.
    pub fn largest_amount(&self, scope: &str) -> Option<f64> {
        self.number
            .find_iter(scope)
            .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .fold(None, |largest, n| match largest {
                Some(current) if current >= n => Some(current),
                _ => Some(n),
            })
    }

    pub fn detect_currency(&self, scope: &str) -> Currency {
        self.currency_rules
            .iter()
            .find(|rule| rule.regex.is_match(scope))
            .map_or(Currency::Unknown, |rule| rule.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(text: &str) -> MoneyExtraction {
        BudgetExtractor::new().unwrap().extract(text)
    }

    #[test]
    fn test_budget_takes_maximum() {
        let money = budget("Budget: $500, with a $2,000 ceiling");
        assert_eq!(money.amount, Some(2000.0));
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_currency_priority_order() {
        let money = budget("₹1000 or about $12");
        assert_eq!(money.currency, Currency::Inr);
        assert_eq!(money.amount, Some(1000.0));
    }

    #[test]
    fn test_budget_line_narrows_scope() {
        let text = "Call 5551234567 for details.\nOur budget is EUR 40,000.\nDeposit 90000 later.";
        let money = budget(text);
        assert_eq!(money.amount, Some(40000.0));
        assert_eq!(money.currency, Currency::Eur);
    }

    #[test]
    fn test_whole_text_scanned_without_budget_line() {
        let money = budget("We can deliver for 1,250.50 pounds\nand 300 more");
        assert_eq!(money.amount, Some(1250.5));
        assert_eq!(money.currency, Currency::Gbp);
    }

    #[test]
    fn test_currency_without_amount() {
        let money = budget("Price in USD to be confirmed");
        assert_eq!(money.amount, None);
        assert_eq!(money.currency, Currency::Usd);
    }

    #[test]
    fn test_no_signal() {
        assert_eq!(budget("nothing useful here"), MoneyExtraction::default());
        assert_eq!(budget(""), MoneyExtraction::default());
    }

    #[test]
    fn test_rupee_words() {
        assert_eq!(budget("Total: Rs. 8,00,000").currency, Currency::Inr);
        assert_eq!(budget("Total 5000 rupees").currency, Currency::Inr);
        assert_eq!(budget("Total 5000 hrs of work").currency, Currency::Unknown);
    }

    #[test]
    fn test_canadian_dollars_read_as_usd_first() {
        assert_eq!(budget("Cost: 900 canadian dollars").currency, Currency::Usd);
        assert_eq!(budget("Cost: 900 CAD").currency, Currency::Cad);
        assert_eq!(budget("Cost: 900 AUD").currency, Currency::Aud);
        assert_eq!(budget("Cost: ¥90000").currency, Currency::Jpy);
    }

    #[test]
    fn test_unparseable_tokens_skipped() {
        let money = budget("Version 1.2.3 costs 40");
        assert_eq!(money.amount, Some(40.0));
    }

    #[test]
    fn test_trailing_period_still_parses() {
        assert_eq!(budget("The fee is 750.").amount, Some(750.0));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" INR ".parse::<Currency>().unwrap(), Currency::Inr);
        assert!("XYZ".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serde_codes() {
        assert_eq!(serde_json::to_string(&Currency::Unknown).unwrap(), "\"UNKNOWN\"");
        let parsed: Currency = serde_json::from_str("\"GBP\"").unwrap();
        assert_eq!(parsed, Currency::Gbp);
    }
}
