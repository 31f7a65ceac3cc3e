use clap::{ArgAction, Parser, Subcommand};
use roster::model::Field;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Search, edit and prune a list of users", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where to load users from: an http(s) URL or a JSON file path
    #[arg(short, long, global = true)]
    pub source: Option<String>,

    /// Rows per table page
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    /// Verbose logging (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the user table once and exit
    #[command(alias = "ls")]
    List {
        /// Only show users matching this text
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Interactive console (default)
    Shell,
}

/// One line typed into the interactive console.
#[derive(Parser, Debug)]
#[command(name = "console", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Filter by name, email or role (two characters or more; shorter resets)
    #[command(alias = "s")]
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        text: Vec<String>,
    },

    /// Start editing a row
    #[command(alias = "e")]
    Edit { id: String },

    /// Change a field of the row being edited
    Set {
        field: Field,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        value: Vec<String>,
    },

    /// Save the row being edited
    Save,

    /// Discard changes to the row being edited
    Cancel {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete one row
    #[command(alias = "rm")]
    Delete {
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Select rows for bulk deletion (replaces the current selection)
    Select {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Select every row on the current page
    SelectPage,

    /// Clear the selection
    Unselect,

    /// Delete every selected row
    DeleteSelected,

    /// Jump to a page
    Page { number: usize },

    /// Next page
    #[command(alias = "n")]
    Next,

    /// Previous page
    #[command(alias = "p")]
    Prev,

    /// Redraw the table
    Show,

    /// Leave the console
    #[command(alias = "exit", alias = "q")]
    Quit,
}

/// Splits a console line into words, honoring single and double quotes.
///
/// `set name ""` yields an empty word, which is how a field gets cleared.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> ShellCommand {
        ShellLine::try_parse_from(split_line(line).unwrap())
            .unwrap()
            .command
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split_line("  edit   3 ").unwrap(), vec!["edit", "3"]);
    }

    #[test]
    fn keeps_quoted_words_together() {
        assert_eq!(
            split_line(r#"set name "Aaron  Miles""#).unwrap(),
            vec!["set", "name", "Aaron  Miles"]
        );
        assert_eq!(split_line("set role ''").unwrap(), vec!["set", "role", ""]);
    }

    #[test]
    fn rejects_unterminated_quote() {
        assert!(split_line(r#"search "abc"#).is_err());
    }

    #[test]
    fn parses_search_words() {
        match parse("search Aaron Miles") {
            ShellCommand::Search { text } => assert_eq!(text, vec!["Aaron", "Miles"]),
            other => panic!("unexpected {:?}", other),
        }
        match parse("search") {
            ShellCommand::Search { text } => assert!(text.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_set_with_field() {
        match parse("set email a@b.com") {
            ShellCommand::Set { field, value } => {
                assert_eq!(field, Field::Email);
                assert_eq!(value, vec!["a@b.com"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_delete_flags() {
        match parse("rm 4 -y") {
            ShellCommand::Delete { id, yes } => {
                assert_eq!(id, "4");
                assert!(yes);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_top_level_list() {
        let cli = Cli::try_parse_from(["roster", "--source", "users.json", "list", "-q", "Kumar"])
            .unwrap();
        assert_eq!(cli.source.as_deref(), Some("users.json"));
        match cli.command {
            Some(Commands::List { search }) => assert_eq!(search.as_deref(), Some("Kumar")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
