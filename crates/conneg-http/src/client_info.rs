//! Information about the client issuing a request.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use conneg_agent::{AgentResolver, Product, ResolvedAgent, parse_products};
use conneg_negotiation::{
	CharacterSet, ContentNegotiator, Encoding, Language, MediaType, Preference, Preferences,
	Variant,
};
use once_cell::race::OnceBox;

/// The client side of one request: its stated preferences, network
/// addresses and User-Agent.
///
/// Data derived from the agent string is computed on first access and
/// kept until the agent changes. Computation publishes without locks;
/// threads racing on first access may each resolve the agent, and all of
/// them observe the single value that was published.
///
/// # Examples
///
/// ```
/// use conneg_http::ClientInfo;
///
/// let mut client = ClientInfo::new();
/// client.set_agent(Some("curl/8.4.0".to_string()));
/// client.set_address("192.0.2.10");
///
/// assert_eq!(client.agent_name(), Some("curl"));
/// assert_eq!(client.agent_version(), Some("8.4.0"));
/// assert_eq!(client.address(), Some("192.0.2.10"));
/// assert_eq!(client.port(), None);
/// ```
pub struct ClientInfo {
	preferences: Preferences,
	addresses: Vec<String>,
	port: Option<u16>,
	agent: Option<String>,
	resolver: Arc<AgentResolver>,
	resolved_agent: OnceBox<Option<ResolvedAgent>>,
	products: OnceBox<Vec<Product>>,
}

impl ClientInfo {
	/// Creates an empty client resolving agents with the built-in catalog.
	pub fn new() -> Self {
		Self::with_resolver(AgentResolver::builtin())
	}

	pub fn with_resolver(resolver: Arc<AgentResolver>) -> Self {
		Self {
			preferences: Preferences::new(),
			addresses: Vec::new(),
			port: None,
			agent: None,
			resolver,
			resolved_agent: OnceBox::new(),
			products: OnceBox::new(),
		}
	}

	pub fn preferences(&self) -> &Preferences {
		&self.preferences
	}

	pub fn preferences_mut(&mut self) -> &mut Preferences {
		&mut self.preferences
	}

	pub fn set_preferences(&mut self, preferences: Preferences) {
		self.preferences = preferences;
	}

	pub fn accepted_media_types(&self) -> Option<&Preference<MediaType>> {
		self.preferences.media_types()
	}

	pub fn accepted_languages(&self) -> Option<&Preference<Language>> {
		self.preferences.languages()
	}

	pub fn accepted_character_sets(&self) -> Option<&Preference<CharacterSet>> {
		self.preferences.character_sets()
	}

	pub fn accepted_encodings(&self) -> Option<&Preference<Encoding>> {
		self.preferences.encodings()
	}

	/// Returns the media type preferences, creating an empty list if unset.
	pub fn accepted_media_types_mut(&mut self) -> &mut Preference<MediaType> {
		self.preferences.media_types_mut()
	}

	pub fn accepted_languages_mut(&mut self) -> &mut Preference<Language> {
		self.preferences.languages_mut()
	}

	pub fn accepted_character_sets_mut(&mut self) -> &mut Preference<CharacterSet> {
		self.preferences.character_sets_mut()
	}

	pub fn accepted_encodings_mut(&mut self) -> &mut Preference<Encoding> {
		self.preferences.encodings_mut()
	}

	pub fn set_accepted_media_types(&mut self, preference: Option<Preference<MediaType>>) {
		self.preferences.set_media_types(preference);
	}

	pub fn set_accepted_languages(&mut self, preference: Option<Preference<Language>>) {
		self.preferences.set_languages(preference);
	}

	pub fn set_accepted_character_sets(&mut self, preference: Option<Preference<CharacterSet>>) {
		self.preferences.set_character_sets(preference);
	}

	pub fn set_accepted_encodings(&mut self, preference: Option<Preference<Encoding>>) {
		self.preferences.set_encodings(preference);
	}

	/// Returns the address of the immediate client, the first of
	/// [`addresses`](Self::addresses).
	pub fn address(&self) -> Option<&str> {
		self.addresses.first().map(String::as_str)
	}

	/// Returns every known client address, the immediate client first and
	/// the originating client, usually behind proxies, last.
	pub fn addresses(&self) -> &[String] {
		&self.addresses
	}

	pub fn addresses_mut(&mut self) -> &mut Vec<String> {
		&mut self.addresses
	}

	/// Replaces the immediate client address, keeping any proxy chain.
	pub fn set_address(&mut self, address: impl Into<String>) {
		let address = address.into();
		match self.addresses.first_mut() {
			Some(first) => *first = address,
			None => self.addresses.push(address),
		}
	}

	pub fn port(&self) -> Option<u16> {
		self.port
	}

	pub fn set_port(&mut self, port: Option<u16>) {
		self.port = port;
	}

	/// Returns the raw User-Agent string.
	pub fn agent(&self) -> Option<&str> {
		self.agent.as_deref()
	}

	/// Replaces the User-Agent string and forgets everything derived from
	/// the previous one.
	pub fn set_agent(&mut self, agent: Option<String>) {
		self.agent = agent;
		self.resolved_agent = OnceBox::new();
		self.products = OnceBox::new();
	}

	pub fn resolver(&self) -> &Arc<AgentResolver> {
		&self.resolver
	}

	/// Returns the main product decoded from the agent string.
	pub fn agent_main_product(&self) -> Option<&Product> {
		self.resolved_agent().map(ResolvedAgent::product)
	}

	pub fn agent_name(&self) -> Option<&str> {
		self.agent_main_product().map(Product::name)
	}

	pub fn agent_version(&self) -> Option<&str> {
		self.agent_main_product().and_then(Product::version)
	}

	/// Returns every variable the matching catalog template captured.
	pub fn agent_attributes(&self) -> Option<&HashMap<String, String>> {
		self.resolved_agent().map(ResolvedAgent::attributes)
	}

	/// Returns all product tokens of the agent string.
	pub fn agent_products(&self) -> &[Product] {
		self.products.get_or_init(|| {
			Box::new(self.agent.as_deref().map(parse_products).unwrap_or_default())
		})
	}

	/// Selects the variant that best fits this client's preferences.
	pub fn preferred_variant<'v>(
		&self,
		negotiator: &ContentNegotiator,
		variants: &'v [Variant],
		default_language: Option<&Language>,
	) -> Option<&'v Variant> {
		negotiator.select_best_variant(&self.preferences, variants, default_language)
	}

	fn resolved_agent(&self) -> Option<&ResolvedAgent> {
		self.resolved_agent
			.get_or_init(|| {
				let resolved = self
					.agent
					.as_deref()
					.and_then(|agent| self.resolver.resolve(agent));
				tracing::trace!(resolved = resolved.is_some(), "memoized agent resolution");
				Box::new(resolved)
			})
			.as_ref()
	}
}

impl Default for ClientInfo {
	fn default() -> Self {
		Self::new()
	}
}

impl Clone for ClientInfo {
	/// Clones the client data; derived agent data is recomputed on demand.
	fn clone(&self) -> Self {
		Self {
			preferences: self.preferences.clone(),
			addresses: self.addresses.clone(),
			port: self.port,
			agent: self.agent.clone(),
			resolver: Arc::clone(&self.resolver),
			resolved_agent: OnceBox::new(),
			products: OnceBox::new(),
		}
	}
}

impl fmt::Debug for ClientInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientInfo")
			.field("preferences", &self.preferences)
			.field("addresses", &self.addresses)
			.field("port", &self.port)
			.field("agent", &self.agent)
			.finish_non_exhaustive()
	}
}
