//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The app holds one explicitly owned session store and hands it to routes
//! and pages through Leptos context instead of a global.

pub mod session;
