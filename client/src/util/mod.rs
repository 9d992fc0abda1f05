//! Browser glue behind the `theme` crate's traits.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser API (`localStorage`, `matchMedia`, the
//! DOM) so the controller logic stays testable natively. Every function
//! compiles to a no-op fallback without the `hydrate` feature.

pub mod dom;
pub mod media;
pub mod storage;
