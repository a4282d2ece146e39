//! Stroke script parsing and replay
//!
//! A stroke script lists the palette definitions followed by the tool
//! events a host window would have produced, one per line:
//!
//! ```text
//! # palette
//! define grass 1 0.2 1
//! define rock
//! # events
//! tool bucket
//! click 15 15
//! group 3 0 0
//! resize 12 8
//! ```

use crate::io::error::{EditorError, Result, script_error};
use crate::paint::{EditSession, Tool};
use crate::palette::{Color, Definition};
use std::path::Path;
use std::str::FromStr;

/// One replayable editor event
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    /// Select the palette entry with this asset key
    Select(String),
    /// Overwrite a palette entry's color
    SetColor {
        /// Palette ordinal
        index: usize,
        /// New color
        color: Color,
    },
    /// Switch every palette color to its spectrum slot color
    Spectrum,
    /// Re-sample every palette color
    Reroll,
    /// Choose the tool used by clicks
    SetTool(Tool),
    /// Choose the group number used by shift-clicks
    GroupNumber(u32),
    /// Pointer click in pixels with the current tool
    Click {
        /// Pointer x in pixels
        x: f32,
        /// Pointer y in pixels
        y: f32,
    },
    /// Pointer click in pixels assigning the current group number
    GroupClick {
        /// Pointer x in pixels
        x: f32,
        /// Pointer y in pixels
        y: f32,
    },
    /// Apply a tool directly at grid coordinates
    Apply {
        /// Tool to apply
        tool: Tool,
        /// Grid column
        x: i64,
        /// Grid row
        y: i64,
    },
    /// Change the grid shape
    Resize {
        /// New column count
        width: usize,
        /// New row count
        height: usize,
    },
}

/// A parsed script: palette input plus the ordered event list
#[derive(Debug, Clone, Default)]
pub struct StrokeScript {
    /// Definitions in the order they were declared
    pub definitions: Vec<Definition>,
    /// Events paired with their 1-based line numbers
    pub commands: Vec<(usize, ScriptCommand)>,
}

/// Counts gathered while replaying a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Events replayed
    pub commands: usize,
    /// Cell mutations caused by the events
    pub cells_changed: usize,
    /// Events rejected by the session (logged and skipped)
    pub rejected: usize,
}

impl StrokeScript {
    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EditorError::FileSystem {
            path: path.to_path_buf(),
            operation: "read stroke script",
            source,
        })?;
        text.parse()
    }

    /// Replay every event against `session`
    ///
    /// Events the session rejects (an unselectable palette, an invalid
    /// resize) are logged and skipped, the way a host ignores a bad input
    /// and waits for the next one. `on_step` runs after each event.
    pub fn replay(
        &self,
        session: &mut EditSession,
        mut on_step: impl FnMut(usize),
    ) -> ReplaySummary {
        let mut summary = ReplaySummary::default();

        for (step, (line, command)) in self.commands.iter().enumerate() {
            match run_command(session, command) {
                Ok(changed) => summary.cells_changed += changed,
                Err(error) => {
                    tracing::warn!(line, %error, "event rejected");
                    summary.rejected += 1;
                }
            }
            summary.commands += 1;
            on_step(step + 1);
        }

        summary
    }
}

impl FromStr for StrokeScript {
    type Err = EditorError;

    fn from_str(text: &str) -> Result<Self> {
        let mut script = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = content.split_whitespace().collect();
            let Some((&keyword, args)) = tokens.split_first() else {
                continue;
            };

            if keyword == "define" {
                script.definitions.push(parse_definition(line, args)?);
            } else {
                let command = parse_command(line, keyword, args)?;
                script.commands.push((line, command));
            }
        }

        Ok(script)
    }
}

fn run_command(session: &mut EditSession, command: &ScriptCommand) -> Result<usize> {
    match command {
        ScriptCommand::Select(key) => {
            if let Some(id) = session.palette.position(key) {
                session.palette.select_id(id);
            } else {
                tracing::debug!(key = %key, "selection ignored, key not in palette");
            }
            Ok(0)
        }
        ScriptCommand::SetColor { index, color } => {
            session.palette.set_color(*index, *color)?;
            Ok(0)
        }
        ScriptCommand::Spectrum => {
            session.palette.apply_spectrum_colors();
            Ok(0)
        }
        ScriptCommand::Reroll => {
            session.palette.randomize_colors();
            Ok(0)
        }
        ScriptCommand::SetTool(tool) => {
            session.set_tool(*tool);
            Ok(0)
        }
        ScriptCommand::GroupNumber(number) => {
            session.set_group_number(*number);
            Ok(0)
        }
        ScriptCommand::Click { x, y } => session.click(*x, *y),
        ScriptCommand::GroupClick { x, y } => Ok(session.group_click(*x, *y)),
        ScriptCommand::Apply { tool, x, y } => session.apply_at(*x, *y, *tool),
        ScriptCommand::Resize { width, height } => {
            session.resize(*width, *height)?;
            Ok(0)
        }
    }
}

fn parse_definition(line: usize, args: &[&str]) -> Result<Definition> {
    match args {
        [key] => Ok(Definition::new(*key)),
        [key, sx, sy, sz] => Ok(Definition::new(*key).with_size([
            parse_number(line, sx)?,
            parse_number(line, sy)?,
            parse_number(line, sz)?,
        ])),
        _ => Err(script_error(line, &"expected 'define KEY [SX SY SZ]'")),
    }
}

fn parse_command(line: usize, keyword: &str, args: &[&str]) -> Result<ScriptCommand> {
    let command = match (keyword, args) {
        ("select", [key]) => ScriptCommand::Select((*key).to_string()),
        ("color", [index, r, g, b]) => ScriptCommand::SetColor {
            index: parse_number(line, index)?,
            color: Color::rgb(
                parse_number(line, r)?,
                parse_number(line, g)?,
                parse_number(line, b)?,
            ),
        },
        ("color", [index, r, g, b, a]) => ScriptCommand::SetColor {
            index: parse_number(line, index)?,
            color: Color::rgba(
                parse_number(line, r)?,
                parse_number(line, g)?,
                parse_number(line, b)?,
                parse_number(line, a)?,
            ),
        },
        ("spectrum", []) => ScriptCommand::Spectrum,
        ("reroll", []) => ScriptCommand::Reroll,
        ("tool", [name]) => ScriptCommand::SetTool(
            name.parse::<Tool>()
                .map_err(|reason| script_error(line, &reason))?,
        ),
        ("groupnum", [number]) => ScriptCommand::GroupNumber(parse_number(line, number)?),
        ("click", [x, y]) => ScriptCommand::Click {
            x: parse_number(line, x)?,
            y: parse_number(line, y)?,
        },
        ("shift-click", [x, y]) => ScriptCommand::GroupClick {
            x: parse_number(line, x)?,
            y: parse_number(line, y)?,
        },
        ("paint", [x, y]) => direct(line, Tool::Paint, x, y)?,
        ("erase", [x, y]) => direct(line, Tool::Erase, x, y)?,
        ("bucket", [x, y]) => direct(line, Tool::Bucket, x, y)?,
        ("group", [tag, x, y]) => direct(line, Tool::SetGroup(parse_number(line, tag)?), x, y)?,
        ("resize", [width, height]) => ScriptCommand::Resize {
            width: parse_number(line, width)?,
            height: parse_number(line, height)?,
        },
        _ => {
            return Err(script_error(
                line,
                &format!("unrecognised command '{keyword}' with {} argument(s)", args.len()),
            ));
        }
    };
    Ok(command)
}

fn direct(line: usize, tool: Tool, x: &str, y: &str) -> Result<ScriptCommand> {
    Ok(ScriptCommand::Apply {
        tool,
        x: parse_number(line, x)?,
        y: parse_number(line, y)?,
    })
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_parse_error| script_error(line, &format!("invalid number '{token}'")))
}
