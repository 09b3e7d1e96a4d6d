//! # conneg-negotiation
//!
//! Content negotiation: choosing the representation of a resource that best
//! fits the preferences a client stated in its `Accept*` headers.
//!
//! ## Overview
//!
//! - [`Preference`] holds the quality-weighted values a client accepts on
//!   one axis, in the order they were stated.
//! - [`Preferences`] groups the four axes: media type, language, character
//!   set and encoding.
//! - [`Variant`] describes one concrete representation.
//! - [`ContentNegotiator`] scores every variant and selects the best one,
//!   or none when nothing is acceptable (an HTTP 406 for the caller).
//!
//! ## Example
//!
//! ```
//! use conneg_negotiation::{
//! 	ContentNegotiator, Language, MediaType, Preference, Preferences, Variant,
//! };
//!
//! let preferences = Preferences::new()
//! 	.with_media_types(Preference::parse_header("text/html;q=0.9, text/plain;q=0.5").unwrap());
//!
//! let variants = vec![
//! 	Variant::builder()
//! 		.media_type(MediaType::text_plain())
//! 		.language(Language::new("en"))
//! 		.build()
//! 		.unwrap(),
//! 	Variant::builder()
//! 		.media_type(MediaType::text_html())
//! 		.language(Language::new("en"))
//! 		.build()
//! 		.unwrap(),
//! ];
//!
//! let negotiator = ContentNegotiator::default();
//! let best = negotiator.select_best_variant(&preferences, &variants, None).unwrap();
//! assert_eq!(best.media_type(), Some(&MediaType::text_html()));
//! ```

pub mod engine;
pub mod error;
pub mod header;
pub mod metadata;
pub mod preference;
pub mod settings;
pub mod variant;

pub use engine::{AxisScore, ContentNegotiator, VariantScore};
pub use error::{NegotiationError, NegotiationResult};
pub use metadata::{CharacterSet, Encoding, Language, MediaType, Metadata, Specificity};
pub use preference::{Preference, Preferences, Quality, QualityValue};
pub use settings::{AxisWeights, NegotiationSettings};
pub use variant::{Variant, VariantBuilder};
