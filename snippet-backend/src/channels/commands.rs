//! Chat command parsing and execution
//!
//! Transport-independent: turns raw message text into a [`Command`] and runs
//! it against the note store, producing the reply text.

use crate::error::NoteStoreError;
use crate::notes::NoteStore;

pub const WELCOME: &str = "Welcome to the bot! \
    You can save a message under a title, retrieve it, or delete it later. \
    Use /help to see available commands.";

pub const HELP: &str = "Available commands:\n\
    /start - Start the bot and see the welcome message\n\
    /help - Get the list of available commands\n\
    /get <Title> - Retrieve a saved message by its title\n\
    /delete <Title> - Delete a saved message by its title\n\n\
    To save a message, type a title followed by your message (e.g., \"Title: Your message\").\n\
    To search saved titles from any chat, type the bot's @username followed by part of a title.";

pub const SAVE_USAGE: &str =
    "Please provide a title and a message separated by a colon (e.g., \"Title: Your message\").";

pub const GET_USAGE: &str =
    "Please provide a title to retrieve the message (e.g., \"/get Title\").";

pub const DELETE_USAGE: &str =
    "Please provide a title to delete the message (e.g., \"/delete Title\").";

pub const STORAGE_FAILURE: &str =
    "Something went wrong while accessing saved messages. Please try again later.";

/// Separates the title from the message body in a save request
pub const TITLE_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/get <title...>`; `None` when no title was given
    Get(Option<String>),
    /// `/delete <title...>`; `None` when no title was given
    Delete(Option<String>),
    /// Free text `Title: message`
    Save { title: String, body: String },
    /// Free text with no separator
    MissingSeparator,
    /// Any other slash command
    Unknown(String),
}

/// Parse a command from message text
pub fn parse(text: &str) -> Command {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix('/') {
        let mut parts = rest.split_whitespace();
        // "/get@my_bot" in group chats
        let name = parts
            .next()
            .and_then(|head| head.split('@').next())
            .unwrap_or("")
            .to_lowercase();
        let args = parts.collect::<Vec<_>>().join(" ");
        let title = if args.is_empty() { None } else { Some(args) };

        return match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "get" => Command::Get(title),
            "delete" => Command::Delete(title),
            _ => Command::Unknown(name),
        };
    }

    match text.split_once(TITLE_SEPARATOR) {
        Some((title, body)) => Command::Save {
            title: title.trim().to_string(),
            body: body.trim().to_string(),
        },
        None => Command::MissingSeparator,
    }
}

/// Execute a command and return the reply text
pub fn execute(cmd: Command, store: &NoteStore) -> String {
    match cmd {
        Command::Start => WELCOME.to_string(),
        Command::Help => HELP.to_string(),
        Command::Save { title, body } => match store.create(&title, &body) {
            Ok(note) => saved_reply(&note.title),
            Err(NoteStoreError::DuplicateTitle(title)) => duplicate_reply(&title),
            Err(NoteStoreError::InvalidInput(_)) => SAVE_USAGE.to_string(),
            Err(e) => storage_failure_reply(&e),
        },
        Command::MissingSeparator => SAVE_USAGE.to_string(),
        Command::Get(None) => GET_USAGE.to_string(),
        Command::Get(Some(title)) => match store.get(&title) {
            Ok(note) => format!("Message under title \"{}\": {}", title, note.body),
            Err(NoteStoreError::NotFound(_)) => not_found_reply(&title),
            Err(e) => storage_failure_reply(&e),
        },
        Command::Delete(None) => DELETE_USAGE.to_string(),
        Command::Delete(Some(title)) => match store.delete(&title) {
            Ok(_) => format!("Message under title \"{}\" has been deleted.", title),
            Err(NoteStoreError::NotFound(_)) => not_found_reply(&title),
            Err(e) => storage_failure_reply(&e),
        },
        Command::Unknown(name) => {
            format!("Unknown command /{}. Use /help to see available commands.", name)
        }
    }
}

fn saved_reply(title: &str) -> String {
    format!("Message saved under title \"{}\".", title)
}

fn duplicate_reply(title: &str) -> String {
    format!(
        "A message with the title \"{}\" already exists. Please choose a different title.",
        title
    )
}

fn not_found_reply(title: &str) -> String {
    format!("No message found under title \"{}\".", title)
}

fn storage_failure_reply(e: &NoteStoreError) -> String {
    log::error!("[NOTES] Store failure while handling command: {}", e);
    STORAGE_FAILURE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NoteStore {
        NoteStore::open_in_memory().expect("Failed to open store")
    }

    #[test]
    fn test_parse_start_and_help() {
        assert_eq!(parse("/start"), Command::Start);
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("  /HELP  "), Command::Help);
    }

    #[test]
    fn test_parse_get_joins_words() {
        assert_eq!(parse("/get Weekly   Report "), Command::Get(Some("Weekly Report".to_string())));
        assert_eq!(parse("/get"), Command::Get(None));
        assert_eq!(parse("/get    "), Command::Get(None));
    }

    #[test]
    fn test_parse_delete() {
        assert_eq!(parse("/delete alpha"), Command::Delete(Some("alpha".to_string())));
        assert_eq!(parse("/delete"), Command::Delete(None));
    }

    #[test]
    fn test_parse_bot_suffix() {
        assert_eq!(parse("/get@snippet_bot foo"), Command::Get(Some("foo".to_string())));
        assert_eq!(parse("/start@snippet_bot"), Command::Start);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(parse("/list"), Command::Unknown("list".to_string()));
    }

    #[test]
    fn test_parse_save_splits_on_first_colon() {
        assert_eq!(
            parse("Meeting: at 10:30 tomorrow"),
            Command::Save {
                title: "Meeting".to_string(),
                body: "at 10:30 tomorrow".to_string(),
            }
        );
        assert_eq!(
            parse("  Foo  :  bar  "),
            Command::Save {
                title: "Foo".to_string(),
                body: "bar".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_free_text_without_separator() {
        assert_eq!(parse("just some text"), Command::MissingSeparator);
    }

    #[test]
    fn test_execute_static_replies() {
        let store = store();
        assert_eq!(execute(Command::Start, &store), WELCOME);
        assert_eq!(execute(Command::Help, &store), HELP);
        assert_eq!(execute(Command::MissingSeparator, &store), SAVE_USAGE);
        assert_eq!(execute(Command::Get(None), &store), GET_USAGE);
        assert_eq!(execute(Command::Delete(None), &store), DELETE_USAGE);
    }

    #[test]
    fn test_execute_save_get_delete_flow() {
        let store = store();

        assert_eq!(
            execute(parse("Alpha: one"), &store),
            "Message saved under title \"Alpha\"."
        );
        assert_eq!(
            execute(parse("alpha: two"), &store),
            "A message with the title \"alpha\" already exists. Please choose a different title."
        );
        assert_eq!(
            execute(parse("/get ALPHA"), &store),
            "Message under title \"ALPHA\": one"
        );
        assert_eq!(
            execute(parse("/delete alpha"), &store),
            "Message under title \"alpha\" has been deleted."
        );
        assert_eq!(
            execute(parse("/get alpha"), &store),
            "No message found under title \"alpha\"."
        );
        assert_eq!(
            execute(parse("/delete alpha"), &store),
            "No message found under title \"alpha\"."
        );
    }

    #[test]
    fn test_execute_save_with_blank_parts() {
        let store = store();
        assert_eq!(execute(parse(": body only"), &store), SAVE_USAGE);
        assert_eq!(execute(parse("Title only:"), &store), SAVE_USAGE);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_execute_unknown() {
        let store = store();
        let reply = execute(parse("/list"), &store);
        assert!(reply.contains("/list"));
        assert!(reply.contains("/help"));
    }

    #[test]
    fn test_storage_fault_gets_generic_reply() {
        let store = store();
        store.break_storage();

        assert_eq!(execute(parse("/get x"), &store), STORAGE_FAILURE);
        assert_eq!(execute(parse("/delete x"), &store), STORAGE_FAILURE);
        assert_eq!(execute(parse("x: y"), &store), STORAGE_FAILURE);
    }
}
