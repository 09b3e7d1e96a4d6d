use std::io::Write;

use conneg_agent::{AgentCatalog, AgentError, AgentResolver, AgentSettings, CatalogPolicy};
use rstest::rstest;
use tempfile::NamedTempFile;

fn catalog_file(text: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().unwrap();
	file.write_all(text.as_bytes()).unwrap();
	file.flush().unwrap();
	file
}

#[rstest]
fn test_catalog_order_precedence() {
	// Arrange: both templates match, the second would capture more.
	let catalog = AgentCatalog::parse(
		"{agentName}/{facultativeData}\n{agentName}/{agentVersion} ({agentOs}; {agentComment})\n",
		CatalogPolicy::Strict,
	)
	.unwrap();
	let resolver = AgentResolver::new(catalog);

	// Act
	let resolved = resolver.resolve("Mozilla/5.0 (X11; Linux x86_64)").unwrap();

	// Assert
	assert_eq!(resolved.product().name(), "Mozilla");
	assert_eq!(resolved.product().version(), None);
	assert_eq!(resolved.attribute("agentOs"), None);
	assert_eq!(resolved.attribute("facultativeData"), Some("5.0 (X11; Linux x86_64)"));
}

#[rstest]
fn test_reordered_catalog_changes_result() {
	let catalog = AgentCatalog::parse(
		"{agentName}/{agentVersion} ({agentOs}; {agentComment})\n{agentName}/{facultativeData}\n",
		CatalogPolicy::Strict,
	)
	.unwrap();
	let resolved = AgentResolver::new(catalog)
		.resolve("Mozilla/5.0 (X11; Linux x86_64)")
		.unwrap();
	assert_eq!(resolved.product().version(), Some("5.0"));
	assert_eq!(resolved.attribute("agentOs"), Some("X11"));
	assert_eq!(resolved.product().comment(), Some("Linux x86_64"));
}

#[rstest]
fn test_from_path() {
	let file = catalog_file("# local overrides\nInternalBot/{agentVersion}{facultativeData}\n{agentName}\n");

	let catalog = AgentCatalog::from_path(file.path(), CatalogPolicy::Skip).unwrap();

	assert_eq!(catalog.len(), 1);
	assert_eq!(catalog.diagnostics().len(), 1);
	assert!(matches!(
		catalog.diagnostics()[0].error,
		AgentError::MissingAgentName { line: 2 }
	));
}

#[rstest]
fn test_from_path_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let result = AgentCatalog::from_path(dir.path().join("absent.catalog"), CatalogPolicy::Skip);
	assert!(matches!(result, Err(AgentError::Io(_))));
}

#[rstest]
fn test_resolver_from_settings() {
	// Arrange
	let file = catalog_file("{agentName}/{agentVersion}\n");
	let document = format!(
		"catalog = {:?}\npolicy = \"strict\"\n",
		file.path().display().to_string()
	);
	let settings: AgentSettings = toml::from_str(&document).unwrap();

	// Act
	let resolver = AgentResolver::from_settings(&settings).unwrap();

	// Assert
	assert_eq!(settings.policy, CatalogPolicy::Strict);
	assert_eq!(resolver.catalog().len(), 1);
	assert!(resolver.resolve("Tool/3").is_some());
	assert!(resolver.resolve("Tool").is_none());
}

#[rstest]
fn test_default_settings_use_builtin_catalog() {
	let settings: AgentSettings = toml::from_str("").unwrap();
	assert_eq!(settings, AgentSettings::default());
	let resolver = AgentResolver::from_settings(&settings).unwrap();
	assert_eq!(resolver.catalog().len(), AgentCatalog::builtin().len());
}
