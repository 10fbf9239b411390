//! Chapter-Forms Validation Core
//!
//! Pure predicate functions shared by the schema, the validated newtypes and
//! the WASM bindings. Nothing here knows about field paths or messages; the
//! schema in `chapter-forms` maps these results onto user-facing errors.

pub mod collection;
pub mod email;
pub mod phone;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use email::*;
pub use phone::*;
pub use string::*;
