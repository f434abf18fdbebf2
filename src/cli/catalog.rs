//! `kavya types` command implementation.

use crate::core::catalog::{ContentType, Length, Tone};
use strum::IntoEnumIterator;

/// Print the content types, tones, and lengths accepted by `generate`.
pub fn run() {
    println!("Types:");
    for content_type in ContentType::iter() {
        println!(
            "  {} {:<20} {}",
            content_type.icon(),
            content_type.to_string(),
            content_type.label()
        );
    }

    println!("\nTones:");
    for tone in Tone::iter() {
        println!("  {} {tone}", tone.emoji());
    }

    println!("\nLengths:");
    for length in Length::iter() {
        println!("  {length}");
    }
}
