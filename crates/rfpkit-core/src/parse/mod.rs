//! Text parsers that turn free text into structured records.
//!
//! Parsing never fails from the caller's point of view. A parser reports
//! internal faults from [`TextParser::try_parse`], and [`TextParser::parse`]
//! swaps in the degraded record from [`TextParser::fallback`].

mod proposal;
mod rfp;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::extract::{ExtractionError, ExtractionResult};

pub use proposal::{parse_proposal_text, ProposalTextParser};
pub use rfp::{parse_rfp_text, RfpTextParser};

pub trait TextParser: Send + Sync {
    type Output;

    /// Short name used in log events.
    fn name(&self) -> &'static str;

    fn try_parse(&self, raw: &str) -> ExtractionResult<Self::Output>;

    /// Record returned in place of a failed parse.
    fn fallback(&self, raw: &str) -> Self::Output;

    fn parse(&self, raw: &str) -> Self::Output {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_parse(raw)))
            .unwrap_or_else(|payload| Err(ExtractionError::Internal(panic_message(&*payload))));

        match outcome {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!(
                    parser = self.name(),
                    chars = raw.chars().count(),
                    "Parse failed, using fallback record: {}",
                    e
                );
                self.fallback(raw)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic with non-string payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flaky {
        panics: bool,
    }

    impl TextParser for Flaky {
        type Output = String;

        fn name(&self) -> &'static str {
            "flaky"
        }

        fn try_parse(&self, raw: &str) -> ExtractionResult<String> {
            if self.panics {
                panic!("extractor blew up on {raw}");
            }
            Err(ExtractionError::Internal("no luck".into()))
        }

        fn fallback(&self, raw: &str) -> String {
            format!("fallback:{raw}")
        }
    }

    #[test]
    fn test_error_uses_fallback() {
        let parser = Flaky { panics: false };
        assert_eq!(parser.parse("abc"), "fallback:abc");
    }

    #[test]
    fn test_panic_uses_fallback() {
        let parser = Flaky { panics: true };
        assert_eq!(parser.parse("abc"), "fallback:abc");
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static message");
        assert_eq!(panic_message(&*payload), "static message");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned message"));
        assert_eq!(panic_message(&*payload), "owned message");

        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(&*payload), "panic with non-string payload");
    }
}
