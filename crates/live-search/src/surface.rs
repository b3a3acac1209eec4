//! The three places the site offers search

use std::time::Duration;

use search_core::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Surface {
    /// Inline search in the navigation header, shown as a dropdown
    Header,
    /// Standalone search bar embedded in a page
    Widget,
    /// Dedicated search results page
    #[strum(to_string = "results", serialize = "results-page")]
    ResultsPage,
}

impl Surface {
    /// How many results the surface shows before offering "see more".
    pub fn preview_limit(self, config: &SearchConfig) -> Option<usize> {
        match self {
            Surface::Header | Surface::Widget => Some(config.preview_limit),
            Surface::ResultsPage => None,
        }
    }

    /// Dropdown surfaces close once the user picks a result.
    pub fn closes_on_select(self) -> bool {
        matches!(self, Surface::Header | Surface::Widget)
    }

    pub fn options(self, config: &SearchConfig) -> AdapterOptions {
        AdapterOptions {
            debounce: config.debounce(),
            preview_limit: self.preview_limit(config),
            request_timeout: config.request_timeout(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterOptions {
    pub debounce: Duration,
    pub preview_limit: Option<usize>,
    pub request_timeout: Option<Duration>,
}

impl Default for AdapterOptions {
    fn default() -> Self {
        Surface::Widget.options(&SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("header", Surface::Header)]
    #[case("widget", Surface::Widget)]
    #[case("results", Surface::ResultsPage)]
    #[case("results-page", Surface::ResultsPage)]
    fn parses_surface_names(#[case] name: &str, #[case] expected: Surface) {
        assert_eq!(Surface::from_str(name).unwrap(), expected);
    }

    #[test]
    fn results_page_is_unbounded() {
        let config = SearchConfig::default();
        assert_eq!(Surface::Header.preview_limit(&config), Some(8));
        assert_eq!(Surface::ResultsPage.preview_limit(&config), None);
        assert!(!Surface::ResultsPage.closes_on_select());
    }

    #[test]
    fn options_follow_config() {
        let config = SearchConfig {
            debounce_ms: 120,
            request_timeout_ms: Some(900),
            ..SearchConfig::default()
        };
        let options = Surface::Header.options(&config);
        assert_eq!(options.debounce, Duration::from_millis(120));
        assert_eq!(options.request_timeout, Some(Duration::from_millis(900)));
    }
}
