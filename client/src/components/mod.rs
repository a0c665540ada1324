//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are leaves: they render values handed down by the trip page
//! and report user input through callbacks, never touching shared state.

pub mod input_form;
pub mod result_card;
