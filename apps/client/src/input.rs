use search_core::EntryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// New content of the search box
    Text(String),
    Clear,
    Go(EntryId),
    Open(bool),
    Quit,
    Unknown(String),
}

pub fn parse(line: &str) -> Line {
    let Some(command) = line.strip_prefix(':') else {
        return Line::Text(line.to_string());
    };
    let mut words = command.split_whitespace();
    match (words.next(), words.next()) {
        (Some("clear"), None) => Line::Clear,
        (Some("open"), None) => Line::Open(true),
        (Some("close"), None) => Line::Open(false),
        (Some("quit" | "q"), None) => Line::Quit,
        (Some("go"), Some(id)) => match id.parse() {
            Ok(id) => Line::Go(id),
            Err(_) => Line::Unknown(line.to_string()),
        },
        _ => Line::Unknown(line.to_string()),
    }
}
