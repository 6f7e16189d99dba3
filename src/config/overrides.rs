use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigResult;

/// Page budget of the binary when neither a flag nor a config file sets one
pub const CLI_DEFAULT_MAX_PAGES: u32 = 1000;

/// Settings given on the command line, applied on top of any config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub start_url: Option<String>,
    pub max_pages: Option<u32>,
}

/// Builds the effective configuration of a command-line run
///
/// Without a config file the library defaults apply, except for the page
/// budget, which becomes [`CLI_DEFAULT_MAX_PAGES`]. A config file replaces
/// those defaults wholesale. Flags in `overrides` win over both. The merged
/// configuration is validated, so an override can still be rejected.
pub fn apply_overrides(
    file_config: Option<Config>,
    overrides: &CliOverrides,
) -> ConfigResult<Config> {
    let mut config = file_config.unwrap_or_else(|| {
        let mut config = Config::default();
        config.crawl.max_pages = CLI_DEFAULT_MAX_PAGES;
        config
    });

    if let Some(start_url) = &overrides.start_url {
        config.crawl.start_url = start_url.clone();
    }
    if let Some(max_pages) = overrides.max_pages {
        config.crawl.max_pages = max_pages;
    }

    validate(&config)?;
    Ok(config)
}
