#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod evaluate;
pub mod extract;
pub mod invitation;
pub mod parse;
pub mod proposal;
pub mod rfp;
pub mod text;
pub mod vendor;

pub use error::{Error, Result};
pub use evaluate::{
    evaluate_proposals, timeline_to_weeks, EvaluationResult, ProposalView, Recommendation,
};
pub use extract::{Currency, ExtractionError, ExtractionResult, FieldExtractor, MoneyExtraction};
pub use invitation::{render_invitation, render_invitations, Invitation, DEFAULT_SENDER};
pub use parse::{parse_proposal_text, parse_rfp_text, ProposalTextParser, RfpTextParser, TextParser};
pub use proposal::{ParsedProposal, StoredProposal};
pub use rfp::{RfpBrief, StructuredRfp};
pub use vendor::Vendor;
