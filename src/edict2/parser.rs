use std::{collections::HashSet, io};

use tracing::{debug, warn};

use crate::edict2::{entry::Entry, error::Edict2Error, line_parser::parse_line};

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    // 本文中に '/' を含むなど，区切りと見分けられない既知の不正な行 (1 始まり)
    pub known_bad_lines: HashSet<usize>,
}

impl ParseOptions {
    pub fn with_known_bad_lines(lines: impl IntoIterator<Item = usize>) -> Self {
        ParseOptions {
            known_bad_lines: lines.into_iter().collect(),
        }
    }
}

#[derive(Debug)]
pub struct ParsedEdict2 {
    pub entries: Vec<Entry>,
    pub skipped_lines: Vec<usize>,
    // 途中で止まった場合は entries にそれまでの行が入っている
    pub error: Option<Edict2Error>,
}

impl ParsedEdict2 {
    pub fn into_result(self) -> Result<Vec<Entry>, Edict2Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.entries),
        }
    }
}

pub fn parse_edict2_lines<I, S>(lines: I, options: &ParseOptions) -> ParsedEdict2
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut skipped_lines = Vec::new();
    let mut line_number = 0;

    for line in lines {
        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return ParsedEdict2 {
                    entries,
                    skipped_lines,
                    error: Some(Edict2Error::EndOfInput {
                        line: line_number,
                        source,
                    }),
                };
            }
        };

        line_number += 1;

        match parse_line(line.as_ref()) {
            Ok(entry) => entries.push(entry),

            Err(error) if options.known_bad_lines.contains(&line_number) => {
                warn!(line = line_number, %error, "skipping known-bad line");
                skipped_lines.push(line_number);
            }

            Err(source) => {
                return ParsedEdict2 {
                    entries,
                    skipped_lines,
                    error: Some(Edict2Error::Line {
                        line: line_number,
                        source,
                    }),
                };
            }
        }
    }

    debug!(
        lines = line_number,
        entries = entries.len(),
        skipped = skipped_lines.len(),
        "parsed edict2"
    );

    ParsedEdict2 {
        entries,
        skipped_lines,
        error: None,
    }
}

pub fn parse_edict2(txt: &str, options: &ParseOptions) -> ParsedEdict2 {
    parse_edict2_lines(txt.lines().map(Ok::<_, io::Error>), options)
}
