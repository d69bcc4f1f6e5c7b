//! Typed payloads carried by literals and their canonical text forms.

mod bit_string;
mod char_string;
mod collation;
pub mod temporal;

pub use bit_string::BitString;
pub use char_string::CharString;
pub use collation::{Coercibility, Collation};
