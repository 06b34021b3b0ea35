//! Pattern-based field extractors for RFP and proposal text.
//!
//! Every extractor is total: malformed input yields `None`, `UNKNOWN` or an
//! empty list, never an error. Compiled patterns live in one process-wide
//! [`FieldExtractor`].

mod date;
mod fields;
mod money;
mod section;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

pub use date::DeadlineExtractor;
pub use fields::{extract_summary, extract_title, DEFAULT_TITLE, TITLE_MARKERS};
pub use money::{
    BudgetExtractor, Currency, CurrencyRule, MoneyExtraction, BUDGET_LINE_PATTERN,
    CURRENCY_RULES,
};
pub use section::{list_items, SectionHeadings, SectionSpec, DELIVERABLES, KEY_REQUIREMENTS};

#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Internal parser fault: {0}")]
    Internal(String),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

const TIMELINE_PATTERN: &str = r"(?i)[0-9]+\s*(?:weeks?|months?|days?)";

static SHARED: LazyLock<ExtractionResult<FieldExtractor>> = LazyLock::new(FieldExtractor::new);

pub struct FieldExtractor {
    budget: BudgetExtractor,
    deadline: DeadlineExtractor,
    timeline: Regex,
    requirements: SectionSpec,
    deliverables: SectionSpec,
}

impl FieldExtractor {
    pub fn new() -> ExtractionResult<Self> {
        Ok(Self {
            budget: BudgetExtractor::new()?,
            deadline: DeadlineExtractor::new()?,
            timeline: Regex::new(TIMELINE_PATTERN)?,
            requirements: SectionSpec::new(&KEY_REQUIREMENTS)?,
            deliverables: SectionSpec::new(&DELIVERABLES)?,
        })
    }

    /// The process-wide extractor, compiled on first use.
    pub fn shared() -> ExtractionResult<&'static Self> {
        SHARED.as_ref().map_err(Clone::clone)
    }

    pub fn title(&self, text: &str) -> String {
        extract_title(text)
    }

    pub fn summary(&self, text: &str) -> String {
        extract_summary(text)
    }

    pub fn budget(&self, text: &str) -> MoneyExtraction {
        self.budget.extract(text)
    }

    pub fn deadline(&self, text: &str) -> Option<String> {
        self.deadline.extract(text)
    }

    /// The first duration phrase such as "6 weeks", verbatim.
    pub fn timeline(&self, text: &str) -> Option<String> {
        self.timeline.find(text).map(|m| m.as_str().to_string())
    }

    pub fn requirements(&self, text: &str) -> Vec<String> {
        self.requirements.items(text)
    }

    pub fn deliverables(&self, text: &str) -> Vec<String> {
        self.deliverables.items(text)
    }
}

pub fn extract_budget(text: &str) -> MoneyExtraction {
    FieldExtractor::shared()
        .map(|fields| fields.budget(text))
        .unwrap_or_default()
}

pub fn extract_deadline(text: &str) -> Option<String> {
    FieldExtractor::shared()
        .ok()
        .and_then(|fields| fields.deadline(text))
}

pub fn extract_timeline(text: &str) -> Option<String> {
    FieldExtractor::shared()
        .ok()
        .and_then(|fields| fields.timeline(text))
}

pub fn extract_requirements(text: &str) -> Vec<String> {
    FieldExtractor::shared()
        .map(|fields| fields.requirements(text))
        .unwrap_or_default()
}

pub fn extract_deliverables(text: &str) -> Vec<String> {
    FieldExtractor::shared()
        .map(|fields| fields.deliverables(text))
        .unwrap_or_default()
}
