//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each module holds a plain struct owned by one component instance and
//! wrapped in an `RwSignal` there. Nothing here is shared across views.

pub mod messages;
pub mod nav;
