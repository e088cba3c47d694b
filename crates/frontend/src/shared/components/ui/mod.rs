pub mod badge;
pub mod button;

pub use badge::{variant_for_color, Badge};
pub use button::Button;
