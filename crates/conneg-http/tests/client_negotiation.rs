use std::sync::Arc;
use std::thread;

use conneg_http::ClientInfo;
use conneg_negotiation::{
	ContentNegotiator, Language, MediaType, Preference, Preferences, Variant,
};
use rstest::rstest;

fn variants() -> Vec<Variant> {
	let build = |media_type: MediaType, language: &str| {
		Variant::builder()
			.media_type(media_type)
			.language(language.parse().unwrap())
			.build()
			.unwrap()
	};
	vec![
		build(MediaType::application_json(), "en"),
		build(MediaType::text_html(), "en"),
		build(MediaType::text_html(), "fr"),
	]
}

#[rstest]
fn test_preferred_variant_uses_client_preferences() {
	// Arrange
	let mut client = ClientInfo::new();
	client.set_accepted_media_types(Some(
		Preference::parse_header("text/html, application/json;q=0.8").unwrap(),
	));
	client.set_accepted_languages(Some(Preference::parse_header("fr, en;q=0.6").unwrap()));
	let variants = variants();

	// Act
	let best = client.preferred_variant(&ContentNegotiator::default(), &variants, None);

	// Assert
	assert_eq!(best, Some(&variants[2]));
}

#[rstest]
fn test_preferred_variant_without_preferences_honours_default_language() {
	let client = ClientInfo::new();
	let variants = variants();
	let french = Language::new("fr");

	let best = client.preferred_variant(&ContentNegotiator::default(), &variants, Some(&french));
	assert_eq!(best, Some(&variants[2]));
}

#[rstest]
fn test_unacceptable_preferences_yield_none() {
	let mut client = ClientInfo::new();
	client
		.accepted_media_types_mut()
		.add("image/png".parse().unwrap(), 1.0)
		.unwrap();

	let variants = variants();
	assert_eq!(
		client.preferred_variant(&ContentNegotiator::default(), &variants, None),
		None
	);
}

#[rstest]
fn test_preferences_replaced_wholesale() {
	let mut client = ClientInfo::new();
	client.set_preferences(
		Preferences::new().with_languages(Preference::parse_header("de").unwrap()),
	);
	assert_eq!(client.accepted_languages().map(Preference::len), Some(1));
	assert!(client.accepted_media_types().is_none());
}

#[rstest]
fn test_concurrent_first_access_converges() {
	// Arrange
	let mut client = ClientInfo::new();
	client.set_agent(Some(
		"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
		 (KHTML, like Gecko) Version/17.1 Safari/605.1.15"
			.to_string(),
	));
	let client = Arc::new(client);

	// Act
	let seen: Vec<usize> = thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let client = Arc::clone(&client);
				scope.spawn(move || {
					let product = client.agent_main_product().unwrap();
					assert_eq!(product.name(), "Safari");
					product as *const _ as usize
				})
			})
			.collect();
		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	// Assert
	assert!(seen.windows(2).all(|pair| pair[0] == pair[1]));
	assert_eq!(client.agent_version(), Some("17.1"));
}
