//! Command-line tokenizing.

use crate::query::list::SortOrder;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(SortOrder),
    /// Keyword is `None` when the user typed bare `find`.
    Find(Option<String>),
    Add,
    Help,
    Quit,
    /// Unrecognized action token.
    Unknown(String),
}

/// Parses a raw input line.
///
/// The line is trimmed and lower-cased, then split on whitespace. Returns
/// `None` for blank lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let normalized = line.trim().to_lowercase();
    let mut tokens = normalized.split_whitespace();
    let action = tokens.next()?;
    let args = tokens.collect::<Vec<_>>();

    let command = match action {
        "list" => Command::List(SortOrder::from_args(&args)),
        "find" => Command::Find(args.first().map(|keyword| (*keyword).to_string())),
        "add" => Command::Add,
        "help" => Command::Help,
        "quit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use crate::query::list::SortOrder;

    #[test]
    fn parses_list_variants() {
        assert_eq!(
            parse_command("LIST by Cuisine"),
            Some(Command::List(SortOrder::Cuisine))
        );
        assert_eq!(parse_command("list price"), Some(Command::List(SortOrder::Price)));
        assert_eq!(parse_command("  list  "), Some(Command::List(SortOrder::Name)));
    }

    #[test]
    fn find_takes_first_keyword_only() {
        assert_eq!(
            parse_command("find Pizza place"),
            Some(Command::Find(Some("pizza".to_string())))
        );
        assert_eq!(parse_command("find"), Some(Command::Find(None)));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), None);
        assert_eq!(
            parse_command("xyz 1 2"),
            Some(Command::Unknown("xyz".to_string()))
        );
    }
}
