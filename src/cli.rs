use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use nom::bytes::complete::is_not;
use nom::character::complete::space0;
use nom::multi::many0;
use nom::sequence::preceded;
use nom::IResult;
use thiserror::Error;
use tracing::debug;

use crate::wordlist::wordlist::{FileFormat, Wordlist};

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Help,
    Add(String),
    Contains(String),
    Remove(String),
    File(String),
    Print,
    Suggest(String, usize),
    Match(String),
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unrecognized command \"{0}\".  Hit <return> for list of commands.")]
    Unrecognized(String),
    #[error("The {name} command expects {expected} arguments.")]
    WrongArity { name: &'static str, expected: usize },
    #[error("Distance \"{0}\" is not a non-negative integer.")]
    BadDistance(String),
}

struct CommandSpec {
    abbrev: &'static str,
    name: &'static str,
    usage: &'static str,
    help: &'static str,
    num_args: usize,
}

impl Display for CommandSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let head = format!("{}  {}", self.abbrev, self.name);
        let head = format!("{:<14}{}", head, self.usage);
        write!(f, "{:<32}{}", head, self.help)
    }
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec { abbrev: "a", name: "add", usage: "<word>", help: "Add word to lexicon", num_args: 1 },
    CommandSpec { abbrev: "c", name: "contains", usage: "<str>", help: "Search lexicon for word/prefix", num_args: 1 },
    CommandSpec { abbrev: "r", name: "remove", usage: "<word>", help: "Remove word from lexicon", num_args: 1 },
    CommandSpec { abbrev: "f", name: "file", usage: "<filename>", help: "Add words from filename to lexicon", num_args: 1 },
    CommandSpec { abbrev: "p", name: "print", usage: "", help: "Print all words in lexicon", num_args: 0 },
    CommandSpec { abbrev: "s", name: "suggest", usage: "<target> <dist>", help: "Find suggestions for target within dist", num_args: 2 },
    CommandSpec { abbrev: "m", name: "match", usage: "<pattern>", help: "Find matches for pattern", num_args: 1 },
    CommandSpec { abbrev: "q", name: "quit", usage: "", help: "Quit the program", num_args: 0 },
];

fn tokens(input: &str) -> IResult<&str, Vec<&str>> {
    many0(preceded(space0, is_not(" \t\r\n")))(input)
}

impl Command {
    /// Parses one input line. A command is recognised by its full name or by
    /// any token starting with its abbreviation.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let args = match tokens(line) {
            Ok((_, args)) => args,
            Err(_) => vec![],
        };
        let (user_cmd, args) = match args.split_first() {
            None => return Ok(Command::Help),
            Some(split) => split,
        };
        let spec = COMMANDS.iter()
            .find(|x| user_cmd.starts_with(x.abbrev) || *user_cmd == x.name)
            .ok_or_else(|| CommandError::Unrecognized(user_cmd.to_string()))?;
        if spec.num_args != args.len() {
            return Err(CommandError::WrongArity { name: spec.name, expected: spec.num_args });
        }

        let arg = |i: usize| args[i].to_lowercase();
        Ok(match spec.name {
            "add" => Command::Add(arg(0)),
            "contains" => Command::Contains(arg(0)),
            "remove" => Command::Remove(arg(0)),
            "file" => Command::File(args[0].to_string()),
            "print" => Command::Print,
            "suggest" => {
                let dist = args[1].parse::<usize>()
                    .map_err(|_| CommandError::BadDistance(args[1].to_string()))?;
                Command::Suggest(arg(0), dist)
            }
            "match" => Command::Match(arg(0)),
            _ => Command::Quit,
        })
    }
}

/// Runs commands against a word list, writing human-readable results to `out`.
pub struct Session<W: Write> {
    wordlist: Wordlist,
    format: FileFormat,
    json: bool,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(wordlist: Wordlist, format: FileFormat, json: bool, out: W) -> Self {
        Session { wordlist, format, json, out }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes one input line; returns false once the user quits.
    pub fn execute(&mut self, line: &str) -> io::Result<bool> {
        match Command::parse(line) {
            Ok(command) => self.run(command),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(true)
            }
        }
    }

    pub fn run(&mut self, command: Command) -> io::Result<bool> {
        debug!(?command, "running command");
        match command {
            Command::Help => {
                write!(self.out, "Command listing: ")?;
                writeln!(self.out, "[abbrv] [cmd] [args] [description]")?;
                for spec in COMMANDS {
                    writeln!(self.out, "{}", spec)?;
                }
            }
            Command::Add(word) => {
                if self.wordlist.add_word(&word) {
                    writeln!(self.out, "\"{}\" added to lexicon.", word)?;
                } else {
                    writeln!(self.out, "\"{}\" already was in lexicon.", word)?;
                    self.report_count()?;
                }
            }
            Command::Remove(word) => {
                if self.wordlist.remove_word(&word) {
                    writeln!(self.out, "\"{}\" removed from lexicon.", word)?;
                } else {
                    writeln!(self.out, "\"{}\" wasn't in lexicon.", word)?;
                }
                self.report_count()?;
            }
            Command::Contains(s) => {
                let is = |b: bool| if b { "IS" } else { "is NOT" };
                writeln!(self.out, "Prefix \"{}\" {} contained in lexicon.",
                         s, is(self.wordlist.contains_prefix(&s)))?;
                writeln!(self.out, "Word \"{}\" {} contained in lexicon.",
                         s, is(self.wordlist.contains_word(&s)))?;
            }
            Command::File(filename) => self.load(&filename)?,
            Command::Print => {
                if self.json {
                    let words: Vec<String> = self.wordlist.words().collect();
                    self.write_json(&words)?;
                } else {
                    writeln!(self.out, "Lexicon contains {} words.  Here they are:", self.wordlist.num_words())?;
                    writeln!(self.out, "--------------------------------------------")?;
                    for word in self.wordlist.words() {
                        writeln!(self.out, "{}", word)?;
                    }
                }
            }
            Command::Suggest(target, dist) => {
                let corrections = self.wordlist.suggest_corrections(&target, dist);
                if !self.json {
                    writeln!(self.out, "Words that are within distance {} of \"{}\"", dist, target)?;
                    writeln!(self.out, "--------------------------------------------")?;
                }
                self.write_set(corrections)?;
            }
            Command::Match(pattern) => {
                match self.wordlist.match_pattern(&pattern) {
                    Ok(matches) => {
                        if !self.json {
                            writeln!(self.out, "Words that match pattern {}", pattern)?;
                            writeln!(self.out, "-----------------------------------")?;
                        }
                        self.write_set(matches)?;
                    }
                    Err(e) => writeln!(self.out, "{}", e)?,
                }
            }
            Command::Quit => {
                writeln!(self.out, "Bye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Loads a word file, reporting the outcome the same way as the `f`
    /// command.
    pub fn load(&mut self, filename: &str) -> io::Result<()> {
        match self.wordlist.load_file(filename, self.format) {
            Ok(stats) if self.json => {
                serde_json::to_writer(&mut self.out, &stats)?;
                writeln!(self.out)
            }
            Ok(stats) => {
                writeln!(self.out, "Read {} words from file \"{}\".", stats.added, filename)?;
                self.report_count()
            }
            Err(_) => writeln!(self.out, "Failed to read file \"{}\".", filename),
        }
    }

    fn report_count(&mut self) -> io::Result<()> {
        writeln!(self.out, "Lexicon now contains {} words.", self.wordlist.num_words())
    }

    fn write_set(&mut self, set: HashSet<String>) -> io::Result<()> {
        let mut words: Vec<String> = set.into_iter().collect();
        words.sort();
        if self.json {
            self.write_json(&words)
        } else {
            writeln!(self.out, "[{}]", words.join(", "))
        }
    }

    fn write_json(&mut self, words: &[String]) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, words)?;
        writeln!(self.out)
    }
}
