//! Preference model and variant selection.
//!
//! # Examples
//!
//! ```rust
//! use conneg::negotiation::metadata::Language;
//! use conneg::negotiation::{ContentNegotiator, Preference, Preferences, Variant};
//!
//! let preferences = Preferences::new()
//! 	.with_languages(Preference::parse_header("fr, en;q=0.5").unwrap());
//! let variants = vec![
//! 	Variant::builder().language(Language::new("en")).build().unwrap(),
//! 	Variant::builder().language(Language::new("fr-CA")).build().unwrap(),
//! ];
//!
//! let best = ContentNegotiator::default().select_best_variant(&preferences, &variants, None);
//! assert_eq!(best, Some(&variants[1]));
//! ```

pub use conneg_negotiation::*;
