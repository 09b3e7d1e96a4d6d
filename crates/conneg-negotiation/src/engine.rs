//! Variant selection.
//!
//! Each candidate is scored on the four axes independently. On an axis
//! where the client stated preferences, the score is the quality of the
//! best matching entry (exact matches win over wildcard matches of the
//! same quality); an axis without preferences, or a variant leaving the
//! axis unset, scores the neutral maximum 1.0. The axis scores are combined
//! with the configured [`AxisWeights`](crate::AxisWeights).
//!
//! A variant is acceptable only if it scores above zero on every
//! mandatory axis, that is every axis whose preference list names at least
//! one non-wildcard value. Among acceptable variants the highest total
//! wins; ties go to the first variant carrying the default language, and
//! otherwise to the first variant in input order.

use crate::error::NegotiationResult;
use crate::metadata::{Language, Metadata, Specificity};
use crate::preference::{Preference, Preferences};
use crate::settings::NegotiationSettings;
use crate::variant::Variant;

/// Totals closer than this are considered tied.
const TIE_TOLERANCE: f32 = 1e-6;

/// The score of a variant on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScore {
	/// Quality of the chosen preference entry, or 1.0 when neutral.
	pub quality: f32,
	/// How the chosen entry matched; `None` when neutral or unmatched.
	pub specificity: Option<Specificity>,
}

impl AxisScore {
	/// The score of an unconstrained axis.
	pub const NEUTRAL: AxisScore = AxisScore {
		quality: 1.0,
		specificity: None,
	};

	/// The score of an axis where no preference entry matched.
	pub const UNMATCHED: AxisScore = AxisScore {
		quality: 0.0,
		specificity: None,
	};
}

/// The full score of one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantScore {
	pub media_type: AxisScore,
	pub language: AxisScore,
	pub character_set: AxisScore,
	pub encoding: AxisScore,
	/// Weighted sum of the axis qualities.
	pub total: f32,
	/// Whether every mandatory axis scored above zero.
	pub acceptable: bool,
}

/// Selects the best variant of a resource for a client.
///
/// The negotiator holds only its settings and is a pure function of its
/// inputs.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::{ContentNegotiator, MediaType, Preference, Preferences, Variant};
///
/// let mut accept = Preference::new();
/// accept.add(MediaType::text_html(), 0.9).unwrap();
/// accept.add(MediaType::text_plain(), 0.5).unwrap();
/// let preferences = Preferences::new().with_media_types(accept);
///
/// let variants = vec![
/// 	Variant::builder().media_type(MediaType::text_plain()).build().unwrap(),
/// 	Variant::builder().media_type(MediaType::text_html()).build().unwrap(),
/// ];
///
/// let negotiator = ContentNegotiator::default();
/// let best = negotiator.select_best_variant(&preferences, &variants, None);
/// assert_eq!(best, Some(&variants[1]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentNegotiator {
	settings: NegotiationSettings,
}

impl ContentNegotiator {
	/// Creates a negotiator from validated settings.
	///
	/// # Errors
	///
	/// Returns [`NegotiationError::InvalidSettings`](crate::NegotiationError::InvalidSettings)
	/// for negative or non-finite weights and for a malformed default
	/// language.
	pub fn new(settings: NegotiationSettings) -> NegotiationResult<Self> {
		settings.validate()?;
		Ok(Self { settings })
	}

	pub fn settings(&self) -> &NegotiationSettings {
		&self.settings
	}

	/// Scores `variant` against `preferences`.
	pub fn score_variant(&self, preferences: &Preferences, variant: &Variant) -> VariantScore {
		let media_type = score_axis(preferences.media_types(), variant.media_type());
		let language = score_axis(preferences.languages(), variant.language());
		let character_set = score_axis(preferences.character_sets(), variant.character_set());
		let encoding = score_axis(preferences.encodings(), variant.encoding());

		let acceptable = passes(preferences.media_types(), media_type)
			&& passes(preferences.languages(), language)
			&& passes(preferences.character_sets(), character_set)
			&& passes(preferences.encodings(), encoding);

		VariantScore {
			media_type,
			language,
			character_set,
			encoding,
			total: self.settings.weights.combine(
				media_type.quality,
				language.quality,
				character_set.quality,
				encoding.quality,
			),
			acceptable,
		}
	}

	/// Returns the acceptable variants, best first.
	///
	/// Variants with equal totals keep their input order.
	pub fn rank_variants<'v>(
		&self,
		preferences: &Preferences,
		variants: &'v [Variant],
	) -> Vec<(&'v Variant, VariantScore)> {
		let mut ranked: Vec<_> = variants
			.iter()
			.map(|variant| (variant, self.score_variant(preferences, variant)))
			.filter(|(_, score)| score.acceptable)
			.collect();
		ranked.sort_by(|(_, a), (_, b)| b.total.total_cmp(&a.total));
		ranked
	}

	/// Returns the best variant, or `None` when no variant is acceptable.
	///
	/// `default_language` falls back to the configured default language and
	/// decides between variants that tie on the best total.
	pub fn select_best_variant<'v>(
		&self,
		preferences: &Preferences,
		variants: &'v [Variant],
		default_language: Option<&Language>,
	) -> Option<&'v Variant> {
		let default_language = default_language.or(self.settings.default_language.as_ref());
		let mut best_total = f32::NEG_INFINITY;
		let mut tied: Vec<&'v Variant> = Vec::new();

		for variant in variants {
			let score = self.score_variant(preferences, variant);
			tracing::debug!(
				variant = %variant,
				total = score.total,
				acceptable = score.acceptable,
				"scored variant"
			);
			if !score.acceptable {
				continue;
			}
			if score.total > best_total + TIE_TOLERANCE {
				best_total = score.total;
				tied.clear();
				tied.push(variant);
			} else if (score.total - best_total).abs() <= TIE_TOLERANCE {
				tied.push(variant);
			}
		}

		let preferred_language = default_language.and_then(|language| {
			tied.iter().copied().find(|variant| {
				variant
					.language()
					.is_some_and(|candidate| language.match_against(candidate).is_some())
			})
		});
		let selected = preferred_language.or_else(|| tied.first().copied());

		match selected {
			Some(variant) => tracing::debug!(variant = %variant, total = best_total, "selected variant"),
			None => tracing::debug!(candidates = variants.len(), "no acceptable variant"),
		}
		selected
	}
}

fn score_axis<T: Metadata>(preference: Option<&Preference<T>>, value: Option<&T>) -> AxisScore {
	let (Some(preference), Some(value)) = (preference, value) else {
		return AxisScore::NEUTRAL;
	};
	if preference.is_empty() {
		return AxisScore::NEUTRAL;
	}

	let mut best: Option<(f32, Specificity)> = None;
	for entry in preference {
		let Some(specificity) = entry.value().match_against(value) else {
			continue;
		};
		let quality = entry.quality().value();
		let better = match best {
			None => true,
			Some((best_quality, best_specificity)) => {
				quality > best_quality || (quality == best_quality && specificity > best_specificity)
			}
		};
		if better {
			best = Some((quality, specificity));
		}
	}

	best.map_or(AxisScore::UNMATCHED, |(quality, specificity)| AxisScore {
		quality,
		specificity: Some(specificity),
	})
}

fn passes<T: Metadata>(preference: Option<&Preference<T>>, score: AxisScore) -> bool {
	let mandatory = preference.is_some_and(Preference::has_concrete_entry);
	!mandatory || score.quality > 0.0
}
