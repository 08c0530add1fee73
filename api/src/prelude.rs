//! General-use types from the Sparrow API.

pub use crate::document::{Binding, Document, ValueRecord, ValueType};
pub use crate::format::Format;
pub use crate::prefix::PrefixMap;
pub use crate::serializer::Stringifier;
pub use crate::term::{Literal, Subject, Term, TermKind};
pub use crate::triple::Triple;
