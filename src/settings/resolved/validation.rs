use sitepick::{IndexSource, ui::style};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(timeout) = config.timeout_secs
		&& timeout == 0
	{
		return Err(ConfigError::invalid(
			"index.timeout_secs",
			timeout.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	match (&config.path, &config.origin) {
		(Some(_), _) => {}
		(None, Some(origin)) => {
			if let Err(err) = IndexSource::remote(origin) {
				return Err(ConfigError::invalid(
					"index.origin",
					origin.clone(),
					sources.source_for_origin(),
					err.to_string(),
				));
			}
		}
		(None, None) => {
			return Err(ConfigError::invalid(
				"index.origin",
				"(unset)",
				sources.source_for_origin(),
				"set index.origin or index.path, or pass --origin or --path",
			));
		}
	}

	if let Some(theme) = &config.theme
		&& style::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", style::names().join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use sitepick::UiLabels;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			origin: Some("https://docs.example.com".into()),
			path: None,
			timeout_secs: None,
			labels: UiLabels::default(),
			initial_query: String::new(),
			theme: None,
			log_file: None,
			log_level: "info".into(),
		}
	}

	#[test]
	fn validation_accepts_a_plain_origin() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_non_http_origin() {
		let config = ResolvedConfig {
			origin: Some("ftp://docs.example.com".into()),
			..config()
		};
		let sources = ConfigSources {
			index_origin: Some(SettingSource::Environment("SITEPICK__INDEX__ORIGIN")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "index.origin"));
		let message = err.to_string();
		assert!(message.contains("value: ftp://docs.example.com"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_secs: Some(0),
			..config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "index.timeout_secs"));
		assert!(err.to_string().contains("value: 0"));
	}

	#[test]
	fn validation_skips_origin_when_path_is_set() {
		let config = ResolvedConfig {
			origin: Some("not a url".into()),
			path: Some("public".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: Some("dark".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
