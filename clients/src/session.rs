//! Interactive browse session.
//!
//! Each input line is parsed into a [`Command`] and handled to completion
//! before the next line is read. The session remembers the most recently
//! shown class and individual lists so that `#n` can select from them.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use geo_ontology::{ClassRef, IndividualRef, OntologyFacade};
use crate::calc::{self, Failure};
use crate::render::{self, OutputMode};

const HELP: &str = "\
Commands:
  classes                      list every class
  class <name|#n>              select a class and list its individuals
  individual <name|#n>         select an individual and show its properties
  calc <shape> <dim1> [dim2]   area and perimeter (Circle, Square,
                               EquilateralTriangle, IsoscelesTriangle)
  help                         show this text
  quit                         leave the session
";

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Reload and show the class list.
    Classes,
    /// Select a class by name or `#n`.
    SelectClass(String),
    /// Select an individual by name or `#n`.
    SelectIndividual(String),
    /// Run the shape calculator on the entered texts.
    Calculate {
        /// Shape tag.
        shape: String,
        /// First dimension text.
        primary: String,
        /// Second dimension text, if entered.
        secondary: Option<String>,
    },
    /// Show the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Why an input line is not a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}' (type 'help')", self.0)
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));
        let mut args = rest.split_whitespace();
        let command = match (word, rest.is_empty()) {
            ("classes", true) => Command::Classes,
            ("class", false) => Command::SelectClass(rest.to_owned()),
            ("individual", false) => Command::SelectIndividual(rest.to_owned()),
            ("calc", false) => match (args.next(), args.next(), args.next(), args.next()) {
                (Some(shape), Some(primary), secondary, None) => Command::Calculate {
                    shape: shape.to_owned(),
                    primary: primary.to_owned(),
                    secondary: secondary.map(str::to_owned),
                },
                _ => return Err(UnknownCommand(line.to_owned())),
            },
            ("help" | "?", true) => Command::Help,
            ("quit" | "exit", true) => Command::Quit,
            _ => return Err(UnknownCommand(line.to_owned())),
        };
        Ok(command)
    }
}

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Text(String),
    /// The session is over.
    Quit,
}

/// Browse state over one facade.
pub struct Session<'a> {
    facade: &'a OntologyFacade,
    mode: OutputMode,
    classes: Vec<ClassRef>,
    individuals: Vec<IndividualRef>,
}

impl<'a> Session<'a> {
    /// Starts a session with empty selection lists.
    pub fn new(facade: &'a OntologyFacade, mode: OutputMode) -> Self {
        Self {
            facade,
            mode,
            classes: Vec::new(),
            individuals: Vec::new(),
        }
    }

    /// Parses and handles one input line. Blank lines produce empty text.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Text(String::new());
        }
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => Reply::Text(format!("{err}\n")),
        }
    }

    /// Handles one command.
    pub fn handle(&mut self, command: Command) -> Reply {
        let rendered = match command {
            Command::Classes => {
                self.classes = self.facade.list_classes();
                render::classes(self.mode, &self.classes)
            }
            Command::SelectClass(selection) => {
                let class = pick(&selection, &self.classes, ClassRef::as_str);
                self.individuals = self.facade.list_individuals(&class);
                render::individuals(self.mode, &class, &self.individuals)
            }
            Command::SelectIndividual(selection) => {
                let individual = pick(&selection, &self.individuals, IndividualRef::as_str);
                let assertions = self.facade.list_property_assertions(&individual);
                render::properties(self.mode, &individual, &assertions)
            }
            Command::Calculate {
                shape,
                primary,
                secondary,
            } => calc::run(
                self.mode,
                &shape,
                &primary,
                secondary.as_deref(),
                Failure::Strict,
            ),
            Command::Help => Ok(HELP.to_owned()),
            Command::Quit => return Reply::Quit,
        };
        Reply::Text(rendered.unwrap_or_else(|err| format!("Error: {err:#}\n")))
    }

    /// Reads commands from `input` until `quit` or end of input, writing
    /// every reply to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        output
            .write_all(b"Ontology Viewer - Basic Geometry (type 'help')\n")
            .context("Failed to write to output")?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line) {
                Reply::Text(text) => output
                    .write_all(text.as_bytes())
                    .context("Failed to write to output")?,
                Reply::Quit => break,
            }
            output.flush().context("Failed to flush output")?;
        }
        Ok(())
    }
}

/// Maps `#n` to the n-th (1-based) entry of `list`; any other text is used
/// as a name. An out-of-range index is kept as typed, so it resolves to
/// nothing.
fn pick<T>(selection: &str, list: &[T], name: fn(&T) -> &str) -> String {
    match selection.strip_prefix('#').map(str::parse::<usize>) {
        Some(Ok(n)) => n
            .checked_sub(1)
            .and_then(|i| list.get(i))
            .map_or_else(|| selection.to_owned(), |item| name(item).to_owned()),
        _ => selection.to_owned(),
    }
}
