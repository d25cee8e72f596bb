//! Navigation event loop.
//!
//! Each input line is one navigation command. Commands are handled one at
//! a time to completion; after each, the mount point is written out.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast;

use crate::app::{AppError, Application, Document};
use crate::routing::NavigationOutcome;

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("invalid history delta {0:?}")]
    InvalidDelta(String),

    #[error("{0} needs a target")]
    MissingTarget(&'static str),
}

/// Errors that stop the event loop.
#[derive(Debug, thiserror::Error)]
pub enum EventLoopError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    Push(String),
    Replace(String),
    Go(isize),
    Back,
    Forward,
    Current,
    Quit,
}

impl NavigationCommand {
    /// Parse one input line. Blank lines yield `None`; anything that is not
    /// a keyword is a push target.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let command = match keyword {
            "back" => NavigationCommand::Back,
            "forward" => NavigationCommand::Forward,
            "current" => NavigationCommand::Current,
            "quit" | "exit" => NavigationCommand::Quit,
            "go" => NavigationCommand::Go(
                rest.parse()
                    .map_err(|_| CommandError::InvalidDelta(rest.to_string()))?,
            ),
            "push" if rest.is_empty() => return Err(CommandError::MissingTarget("push")),
            "push" => NavigationCommand::Push(rest.to_string()),
            "replace" if rest.is_empty() => return Err(CommandError::MissingTarget("replace")),
            "replace" => NavigationCommand::Replace(rest.to_string()),
            _ => NavigationCommand::Push(line.to_string()),
        };
        Ok(Some(command))
    }
}

/// How the active route is written after each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markup of the mount point.
    #[default]
    Html,
    /// The active route as a JSON object.
    Json,
}

/// Apply one command to the application.
pub fn handle_command(
    app: &mut Application,
    document: &mut Document,
    command: &NavigationCommand,
) -> Result<NavigationOutcome, AppError> {
    match command {
        NavigationCommand::Push(target) => app.navigate(document, target),
        NavigationCommand::Replace(target) => app.replace(document, target),
        NavigationCommand::Go(delta) => app.go(document, *delta),
        NavigationCommand::Back => app.back(document),
        NavigationCommand::Forward => app.forward(document),
        NavigationCommand::Current | NavigationCommand::Quit => Ok(NavigationOutcome::Duplicated),
    }
}

/// Write the mounted output in `format`.
pub fn write_current<W: Write>(
    app: &Application,
    document: &Document,
    format: OutputFormat,
    output: &mut W,
) -> Result<(), EventLoopError> {
    match format {
        OutputFormat::Html => {
            let html = app
                .mounted_at()
                .and_then(|selector| document.query_selector(selector))
                .map(|element| element.inner_html())
                .unwrap_or_default();
            writeln!(output, "{html}")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(&app.current_route())?;
            writeln!(output, "{json}")?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Process commands from `input` until it closes, `quit` is read, or
/// shutdown is triggered.
pub async fn run_event_loop<R, W>(
    app: &mut Application,
    document: &mut Document,
    input: R,
    output: &mut W,
    format: OutputFormat,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<(), EventLoopError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        tokio::select! {
            _ = shutdown.recv() => {
                tracing::info!("Shutdown requested, leaving event loop");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("Input closed");
                    break;
                };

                let command = match NavigationCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "Rejected command");
                        writeln!(output, "error: {e}")?;
                        continue;
                    }
                };

                if command == NavigationCommand::Quit {
                    break;
                }

                match handle_command(app, document, &command) {
                    Ok(outcome) => {
                        tracing::debug!(command = ?command, outcome = ?outcome, "Command handled");
                        write_current(app, document, format, output)?;
                    }
                    Err(e) => {
                        tracing::warn!(command = ?command, error = %e, "Navigation failed");
                        writeln!(output, "error: {e}")?;
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(NavigationCommand::parse("  "), Ok(None));
        assert_eq!(NavigationCommand::parse("back"), Ok(Some(NavigationCommand::Back)));
        assert_eq!(
            NavigationCommand::parse("forward"),
            Ok(Some(NavigationCommand::Forward))
        );
        assert_eq!(NavigationCommand::parse("exit"), Ok(Some(NavigationCommand::Quit)));
        assert_eq!(NavigationCommand::parse("go -2"), Ok(Some(NavigationCommand::Go(-2))));
        assert_eq!(
            NavigationCommand::parse("replace /dashboard"),
            Ok(Some(NavigationCommand::Replace("/dashboard".into())))
        );
    }

    #[test]
    fn test_parse_paths() {
        assert_eq!(
            NavigationCommand::parse("/unknown/path"),
            Ok(Some(NavigationCommand::Push("/unknown/path".into())))
        );
        assert_eq!(
            NavigationCommand::parse("push /dashboard?tab=1"),
            Ok(Some(NavigationCommand::Push("/dashboard?tab=1".into())))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            NavigationCommand::parse("go back"),
            Err(CommandError::InvalidDelta("back".into()))
        );
        assert_eq!(
            NavigationCommand::parse("push"),
            Err(CommandError::MissingTarget("push"))
        );
    }
}
