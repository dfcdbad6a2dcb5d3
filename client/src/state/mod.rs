//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only state shared between views; everything else is
//! local to the view that fetched it.

pub mod session;
