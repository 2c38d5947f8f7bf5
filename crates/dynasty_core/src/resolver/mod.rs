pub mod describe;
pub mod matching;

pub use describe::{describe_last_honor, HonorSummary};
pub use matching::{
    resolve_batch, resolve_entry, AutoLink, Disposition, HonorBatchOutcome, MatchKind, RosterRef,
    TransferCandidate, ELIGIBILITY_WINDOW_YEARS,
};
