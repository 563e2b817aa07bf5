use crate::error::{InspectorError, Result};
use serde_json::{Value, json};

/// One line typed at the interactive prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a registered tool
    Tool { name: String, params: Value },
    Help,
    ListTools,
    Quit,
    /// Blank line
    Empty,
}

impl Command {
    fn tool(name: &str, params: Value) -> Self {
        Command::Tool { name: name.to_string(), params }
    }
}

pub const HELP: &str = "\
:go <url>        load a page
:tags            list page elements
:select <n>      inspect element n
:view <name>     show the page, text or chat panel
:text            print the page text
:tools           list tools and their parameters
:help            show this help
:quit            exit
anything else    ask a question about the page";

/// Parse a prompt line. Lines starting with `:` are commands, anything else
/// is a question.
pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::tool("ask", json!({ "question": line })));
    };

    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };

    match word {
        "go" | "open" => {
            require_arg(word, arg)?;
            Ok(Command::tool("navigate", json!({ "url": arg })))
        }
        "tags" | "elements" => Ok(Command::tool("list_elements", json!({}))),
        "select" | "s" => {
            require_arg(word, arg)?;
            let position: i64 = arg.parse().map_err(|_| {
                InspectorError::InvalidArgument(format!("'{}' is not an element number", arg))
            })?;
            Ok(Command::tool("select_element", json!({ "position": position })))
        }
        "view" | "v" => {
            require_arg(word, arg)?;
            Ok(Command::tool("switch_view", json!({ "view": arg.to_ascii_lowercase() })))
        }
        "text" => Ok(Command::tool("get_text", json!({}))),
        "tools" => Ok(Command::ListTools),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(InspectorError::InvalidArgument(format!(
            "Unknown command ':{}' (try :help)",
            other
        ))),
    }
}

fn require_arg(word: &str, arg: &str) -> Result<()> {
    if arg.is_empty() {
        return Err(InspectorError::InvalidArgument(format!(":{} needs an argument", word)));
    }
    Ok(())
}
