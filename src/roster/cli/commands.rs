use super::logging::init_logging;
use super::render::{error_messages, print_messages, render_console, RowScope};
use super::setup::{split_line, Cli, Commands, ShellCommand, ShellLine};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdMessage, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::UserId;
use roster::source::{ConfiguredSource, UserSource};
use std::io::{self, BufRead, IsTerminal, Lines, Write};
use std::path::PathBuf;

const DELETE_PROMPT: &str = "Are you sure, you want to delete it?";
const CANCEL_PROMPT: &str = "Sure to cancel?";

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;
    let source = ConfiguredSource::from_location(&config.source)?;
    let api = RosterApi::with_page_size(source, config.page_size);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::List { search } => handle_list(api, search).await,
        Commands::Shell => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            run_shell(api, stdin.lock(), interactive).await
        }
    }
}

/// `$ROSTER_HOME` if set, otherwise the platform config directory.
fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("ROSTER_HOME") {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().to_path_buf())
}

fn load_config(cli: &Cli) -> Result<RosterConfig> {
    let mut config = match config_dir() {
        Some(dir) => RosterConfig::load(dir)?,
        None => RosterConfig::default(),
    };

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    config.validate()?;

    Ok(config)
}

async fn handle_list<S: UserSource>(mut api: RosterApi<S>, search: Option<String>) -> Result<()> {
    api.load().await?;

    let mut messages = Vec::new();
    if let Some(term) = search {
        messages = api.filter(&term)?.messages;
    }

    print!("{}", render_console(api.state(), RowScope::All));
    print_messages(&messages);
    Ok(())
}

async fn run_shell<S, R>(mut api: RosterApi<S>, input: R, interactive: bool) -> Result<()>
where
    S: UserSource,
    R: BufRead,
{
    print!("{}", render_console(api.state(), RowScope::Page));
    api.subscribe(|state| print!("{}", render_console(state, RowScope::Page)));

    // A failed fetch is already logged; the console carries on with an empty table
    let _ = api.load().await;

    let mut shell = Shell {
        api,
        lines: input.lines(),
        interactive,
    };
    shell.run()
}

enum Flow {
    Continue,
    Quit,
}

struct Shell<S: UserSource, R: BufRead> {
    api: RosterApi<S>,
    lines: Lines<R>,
    interactive: bool,
}

impl<S: UserSource, R: BufRead> Shell<S, R> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.prompt("> ")?;
            let Some(line) = self.lines.next() else {
                break;
            };
            let line = line?;

            let words = match split_line(&line) {
                Ok(words) => words,
                Err(msg) => {
                    print_messages(&[CmdMessage::warning(msg)]);
                    continue;
                }
            };
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(err) => {
                    print!("{}", err.render());
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(err) => print_messages(&error_messages(&err)),
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        let result = match command {
            ShellCommand::Search { text } => self.api.filter(&text.join(" "))?,
            ShellCommand::Edit { id } => self.api.edit_by_id(&UserId::new(id))?,
            ShellCommand::Set { field, value } => self.api.set_field(field, &value.join(" "))?,
            ShellCommand::Save => {
                let id = self
                    .api
                    .state()
                    .editor()
                    .session()
                    .map(|s| s.id.clone())
                    .ok_or(RosterError::NoEditSession)?;
                self.api.save(&id)?
            }
            ShellCommand::Cancel { yes } => {
                if self.api.state().editor().session().is_none() {
                    return Ok(Flow::Continue);
                }
                if !yes && !self.confirm(CANCEL_PROMPT)? {
                    return Ok(Flow::Continue);
                }
                self.api.cancel()?
            }
            ShellCommand::Delete { id, yes } => {
                if !yes && !self.confirm(DELETE_PROMPT)? {
                    return Ok(Flow::Continue);
                }
                let id = UserId::new(id);
                let mut result = self.api.delete_one(&id)?;
                if result.affected_users.is_empty() {
                    result.add_message(CmdMessage::info(format!("No user with id {}", id)));
                }
                result
            }
            ShellCommand::Select { ids } => {
                self.api.toggle_selection(ids.into_iter().map(UserId::new))?
            }
            ShellCommand::SelectPage => self.api.select_page()?,
            ShellCommand::Unselect => self.api.clear_selection()?,
            ShellCommand::DeleteSelected => self.api.delete_selected()?,
            ShellCommand::Page { number } => self.api.go_to_page(number)?,
            ShellCommand::Next => self.api.next_page()?,
            ShellCommand::Prev => self.api.previous_page()?,
            ShellCommand::Show => {
                print!("{}", render_console(self.api.state(), RowScope::Page));
                return Ok(Flow::Continue);
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        };

        print_messages(&result.messages);
        Ok(Flow::Continue)
    }

    fn prompt(&self, text: &str) -> Result<()> {
        if self.interactive {
            print!("{}", text);
            io::stdout().flush()?;
        }
        Ok(())
    }

    /// Asks a yes/no question on the next input line. End of input means no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        println!("{} [y/N]", question);
        self.prompt("? ")?;
        match self.lines.next() {
            Some(answer) => {
                let answer = answer?.trim().to_lowercase();
                Ok(answer == "y" || answer == "yes")
            }
            None => Ok(false),
        }
    }
}
