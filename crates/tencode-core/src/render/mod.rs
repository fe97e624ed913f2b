//! Template rendering for callsigns and case numbers
//!
//! Admin-configured template strings contain literal text interleaved with
//! `{placeholder}` tokens. Rendering is best-effort and never fails: absent
//! values drop their placeholder, unrecognized names stay as literal text,
//! and malformed templates degrade to whatever string assembly yields.

pub mod callsign;
pub mod case_number;
pub mod template;

pub use callsign::{generate_callsign, CallsignPieces};
pub use case_number::format_case_number;
pub use template::{render_template, Replacements};
