use super::{Command, build_service};
use crate::config::Config;
use crate::error::Result;
use live_search::ResultItem;
use search_core::ContentEntry;

pub struct SearchCommand {
    config: Config,
    query: String,
    json: bool,
}

impl SearchCommand {
    pub fn new(cfg: Config, query: String, json: bool) -> Self {
        Self {
            config: cfg,
            query,
            json,
        }
    }
}

fn render(query: &str, results: &[ContentEntry]) -> String {
    if results.is_empty() {
        return format!("no results for '{}'", query.trim());
    }
    results
        .iter()
        .map(|entry| {
            let item = ResultItem::from(entry);
            format!("{:>4}  {}  [{}]  {}", item.id, item.title, item.label, item.path)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let service = build_service(&self.config)?;
        let results = service.search(&self.query);
        tracing::debug!(query = %self.query, matches = results.len(), "search finished");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            println!("{}", render(&self.query, &results));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_match_with_label() {
        let entries = vec![
            ContentEntry::new(1, "MySQL Performance Tuning", "Documentation", "/resources/mysql", "")
                .with_category("Performance"),
            ContentEntry::new(2, "Backups", "Blog Post", "/resources/backups", ""),
        ];
        assert_eq!(
            render("mysql", &entries),
            "   1  MySQL Performance Tuning  [Documentation · Performance]  /resources/mysql\n   2  Backups  [Blog Post]  /resources/backups"
        );
    }

    #[test]
    fn empty_results_name_the_query() {
        assert_eq!(render("  xyz123 ", &[]), "no results for 'xyz123'");
    }
}
