//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The trip page owns its whole state through one reducer; components only
//! see read-only values and callbacks.

pub mod trip;
