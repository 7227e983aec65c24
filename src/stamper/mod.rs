//! The header stamper: inspects candidate files and rewrites the ones missing a header.

mod stamper;

pub use stamper::{StampError, StampMode, StampOutcome, StampSummary, Stamper};
