use live_search::DisplayState;

/// Text for one display state. Hidden surfaces render nothing.
pub fn render(display: &DisplayState) -> Option<String> {
    match display {
        DisplayState::Hidden => None,
        DisplayState::Loading => Some("searching...".to_string()),
        DisplayState::Results {
            items,
            remaining,
            refreshing,
        } => {
            let mut lines: Vec<String> = items
                .iter()
                .map(|item| format!("  {:>3}  {}  [{}]", item.id, item.title, item.label))
                .collect();
            if *remaining > 0 {
                lines.push(format!("  ... {remaining} more, see all results"));
            }
            if *refreshing {
                lines.push("  (updating)".to_string());
            }
            Some(lines.join("\n"))
        }
        DisplayState::NoResults { query } => Some(format!("no results for '{query}'")),
        DisplayState::Failed { message } => Some(message.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use live_search::ResultItem;

    fn item(id: u32, title: &str) -> ResultItem {
        ResultItem {
            id,
            title: title.to_string(),
            label: "Documentation".to_string(),
            path: format!("/resources/{id}"),
        }
    }

    #[test]
    fn hidden_renders_nothing() {
        assert_eq!(render(&DisplayState::Hidden), None);
    }

    #[test]
    fn results_show_see_more_and_refresh_markers() {
        let display = DisplayState::Results {
            items: vec![item(1, "MySQL Performance Tuning")],
            remaining: 2,
            refreshing: true,
        };
        assert_eq!(
            render(&display).unwrap(),
            "    1  MySQL Performance Tuning  [Documentation]\n  ... 2 more, see all results\n  (updating)"
        );
    }

    #[test]
    fn no_results_and_failure_are_distinct() {
        let none = render(&DisplayState::NoResults { query: "xyz123".into() });
        let failed = render(&DisplayState::Failed { message: live_search::FAILURE_MESSAGE.into() });
        assert_eq!(none.as_deref(), Some("no results for 'xyz123'"));
        assert_eq!(failed.as_deref(), Some(live_search::FAILURE_MESSAGE));
    }
}
