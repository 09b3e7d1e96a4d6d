use conneg_negotiation::{
	CharacterSet, ContentNegotiator, Encoding, Language, MediaType, Preference, Preferences,
	Variant,
};
use rstest::{fixture, rstest};

#[fixture]
fn negotiator() -> ContentNegotiator {
	ContentNegotiator::default()
}

fn variant(media_type: &str, language: Option<&str>) -> Variant {
	let mut builder = Variant::builder().media_type(media_type.parse().unwrap());
	if let Some(language) = language {
		builder = builder.language(language.parse().unwrap());
	}
	builder.build().unwrap()
}

#[rstest]
fn test_higher_quality_wins_regardless_of_position(negotiator: ContentNegotiator) {
	// Arrange
	let mut accept = Preference::new();
	accept.add(MediaType::text_html(), 0.9).unwrap();
	accept.add(MediaType::text_plain(), 0.5).unwrap();
	let preferences = Preferences::new().with_media_types(accept);
	let variants = vec![variant("text/plain", None), variant("text/html", None)];

	// Act
	let best = negotiator.select_best_variant(&preferences, &variants, None);

	// Assert
	assert_eq!(best, Some(&variants[1]));
}

#[rstest]
fn test_default_language_breaks_tie(negotiator: ContentNegotiator) {
	// Arrange
	let preferences = Preferences::new();
	let variants = vec![
		Variant::builder()
			.language(Language::with_region("en", "US"))
			.build()
			.unwrap(),
		Variant::builder().language(Language::new("fr")).build().unwrap(),
	];
	let english = Language::new("en");

	// Act
	let best = negotiator.select_best_variant(&preferences, &variants, Some(&english));

	// Assert
	assert_eq!(best, Some(&variants[0]));
}

#[rstest]
fn test_default_language_later_in_list(negotiator: ContentNegotiator) {
	let variants = vec![
		variant("text/html", Some("fr")),
		variant("text/html", Some("en-GB")),
	];
	let english = Language::new("en");

	let best = negotiator.select_best_variant(&Preferences::new(), &variants, Some(&english));
	assert_eq!(best, Some(&variants[1]));
}

#[rstest]
fn test_default_language_does_not_override_better_score(negotiator: ContentNegotiator) {
	let mut languages = Preference::new();
	languages.add(Language::new("fr"), 1.0).unwrap();
	languages.add(Language::new("en"), 0.5).unwrap();
	let preferences = Preferences::new().with_languages(languages);
	let variants = vec![variant("text/html", Some("en")), variant("text/html", Some("fr"))];
	let english = Language::new("en");

	let best = negotiator.select_best_variant(&preferences, &variants, Some(&english));
	assert_eq!(best, Some(&variants[1]));
}

#[rstest]
fn test_no_acceptable_variant_returns_none(negotiator: ContentNegotiator) {
	// Arrange
	let preferences = Preferences::new()
		.with_media_types(Preference::parse_header("application/json").unwrap());
	let variants = vec![variant("text/html", None), variant("application/xml", None)];

	// Act
	let best = negotiator.select_best_variant(&preferences, &variants, None);

	// Assert
	assert_eq!(best, None);
}

#[rstest]
fn test_single_fully_matching_variant_selected(negotiator: ContentNegotiator) {
	// Arrange
	let preferences = Preferences::new()
		.with_media_types(Preference::parse_header("application/json").unwrap())
		.with_languages(Preference::parse_header("ja").unwrap())
		.with_character_sets(Preference::parse_header("utf-8").unwrap())
		.with_encodings(Preference::parse_header("gzip").unwrap());
	let full = |media: MediaType, language: &str, charset: CharacterSet, encoding: Encoding| {
		Variant::builder()
			.media_type(media)
			.language(language.parse().unwrap())
			.character_set(charset)
			.encoding(encoding)
			.build()
			.unwrap()
	};
	let variants = vec![
		full(MediaType::application_json(), "ja", CharacterSet::iso_8859_1(), Encoding::gzip()),
		full(MediaType::application_json(), "en", CharacterSet::utf_8(), Encoding::gzip()),
		full(MediaType::application_json(), "ja", CharacterSet::utf_8(), Encoding::gzip()),
		full(MediaType::application_xml(), "ja", CharacterSet::utf_8(), Encoding::gzip()),
		full(MediaType::application_json(), "ja", CharacterSet::utf_8(), Encoding::brotli()),
	];

	// Act
	let best = negotiator.select_best_variant(&preferences, &variants, None);

	// Assert
	assert_eq!(best, Some(&variants[2]));
}

#[rstest]
fn test_charset_separates_variants_tied_on_primary_axes(negotiator: ContentNegotiator) {
	let preferences = Preferences::new()
		.with_character_sets(Preference::parse_header("utf-8, iso-8859-1;q=0.4").unwrap());
	let variants = vec![
		Variant::builder()
			.character_set(CharacterSet::iso_8859_1())
			.build()
			.unwrap(),
		Variant::builder()
			.character_set(CharacterSet::utf_8())
			.build()
			.unwrap(),
	];

	let best = negotiator.select_best_variant(&preferences, &variants, None);
	assert_eq!(best, Some(&variants[1]));
}

#[rstest]
fn test_language_outweighs_media_type(negotiator: ContentNegotiator) {
	// Arrange
	let preferences = Preferences::new()
		.with_media_types(Preference::parse_header("text/html, application/json;q=0.5").unwrap())
		.with_languages(Preference::parse_header("de, en;q=0.5").unwrap());
	let variants = vec![
		variant("text/html", Some("en")),
		variant("application/json", Some("de")),
	];

	// Act
	let ranked = negotiator.rank_variants(&preferences, &variants);

	// Assert
	assert_eq!(ranked[0].0, &variants[1]);
	assert!(ranked[0].1.total > ranked[1].1.total);
}

#[rstest]
fn test_variant_without_axis_matches_any_preference(negotiator: ContentNegotiator) {
	let preferences = Preferences::new()
		.with_languages(Preference::parse_header("ko").unwrap());
	let variants = vec![variant("text/html", Some("en")), variant("text/html", None)];

	let best = negotiator.select_best_variant(&preferences, &variants, None);
	assert_eq!(best, Some(&variants[1]));
}
