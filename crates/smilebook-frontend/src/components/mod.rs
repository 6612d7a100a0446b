//! Reusable UI components for the Smilebook frontend.

pub mod calendar;
pub mod text_field;
pub mod toast;

pub use calendar::*;
pub use text_field::*;
pub use toast::*;
