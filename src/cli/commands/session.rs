//! Session command - Line-oriented event loop over stdin
//!
//! Each input line is one user action and runs to completion before the next
//! is read. Acknowledgements from the notification channel are printed as
//! they arrive, in between actions.

use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::cli::output::{format_items, format_report, format_state};
use crate::dashboard::Dashboard;
use crate::errors::Result;
use crate::notify::{AckReceiver, Acknowledgement, RecordingChannel, TokioChannel};
use crate::registry::ITEMS;
use crate::schemas::Config;
use crate::state::RequestOutcome;

const HELP: &str = "\
commands:
  toggle <id>    flip an item between done and not done
  request <id>   request supporting information for an item
  state          show the checklist
  validate       show progress and dependency issues
  items          list item ids
  help           show this message
  quit           end the session
";

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle(String),
    Request(String),
    State,
    Validate,
    Items,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<SessionCommand>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("too many arguments to '{}'", verb));
    }

    let command = match (verb, arg) {
        ("toggle", Some(id)) => SessionCommand::Toggle(id.to_string()),
        ("request", Some(id)) => SessionCommand::Request(id.to_string()),
        ("toggle" | "request", None) => return Err(format!("'{}' needs an item id", verb)),
        ("state", None) => SessionCommand::State,
        ("validate", None) => SessionCommand::Validate,
        ("items", None) => SessionCommand::Items,
        ("help", None) => SessionCommand::Help,
        ("quit" | "exit", None) => SessionCommand::Quit,
        (_, Some(_)) if ["state", "validate", "items", "help", "quit", "exit"].contains(&verb) => {
            return Err(format!("'{}' takes no arguments", verb))
        }
        _ => return Err(format!("unknown command '{}' (try 'help')", verb)),
    };
    Ok(Some(command))
}

async fn next_ack(acks: &mut Option<AckReceiver>) -> Option<Acknowledgement> {
    match acks {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

fn print_ack<W: Write>(out: &mut W, ack: &Acknowledgement) -> Result<()> {
    writeln!(out, "{} ({})", ack.message(), ack)?;
    Ok(())
}

/// Drive a dashboard from line input until EOF or `quit`.
///
/// Acknowledgements still in flight at the end are waited for and printed.
pub async fn run_session<R, W>(
    dashboard: &mut Dashboard,
    mut acks: Option<AckReceiver>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut outstanding = 0usize;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = match parse_line(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(message) => {
                        writeln!(out, "error: {}", message)?;
                        continue;
                    }
                };

                match command {
                    SessionCommand::Toggle(id) => match dashboard.toggle(&id) {
                        Ok(done) => {
                            let mark = if done { "done" } else { "not done" };
                            writeln!(out, "{} is now {}", id, mark)?;
                        }
                        Err(e) => writeln!(out, "error [{}]: {}", e.code(), e)?,
                    },
                    SessionCommand::Request(id) => match dashboard.request(&id) {
                        Ok(RequestOutcome::Issued) => {
                            outstanding += 1;
                            writeln!(out, "requested {}", id)?;
                        }
                        Ok(RequestOutcome::AlreadyRequested) => {
                            writeln!(out, "{} was already requested", id)?;
                        }
                        Err(e) => writeln!(out, "error [{}]: {}", e.code(), e)?,
                    },
                    SessionCommand::State => write!(out, "{}", format_state(&dashboard.get_state()))?,
                    SessionCommand::Validate => {
                        write!(out, "{}", format_report(&dashboard.get_validation()))?
                    }
                    SessionCommand::Items => write!(out, "{}", format_items(ITEMS))?,
                    SessionCommand::Help => write!(out, "{}", HELP)?,
                    SessionCommand::Quit => break,
                }
                out.flush()?;
            }
            Some(ack) = next_ack(&mut acks) => {
                outstanding = outstanding.saturating_sub(1);
                tracing::info!(item = ack.item_id, "{}", ack);
                print_ack(out, &ack)?;
                out.flush()?;
            }
        }
    }

    if let Some(rx) = acks.as_mut() {
        while outstanding > 0 {
            let Some(ack) = rx.recv().await else { break };
            outstanding -= 1;
            tracing::info!(item = ack.item_id, "{}", ack);
            print_ack(out, &ack)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Run an interactive session on stdin/stdout
pub async fn run(config: &Config, dry_run: bool) -> Result<()> {
    let (mut dashboard, acks) = if dry_run {
        (Dashboard::new(Box::new(RecordingChannel::new())), None)
    } else {
        let (channel, acks) = TokioChannel::from_current(Duration::from_millis(config.ack_delay_ms))?;
        (Dashboard::new(Box::new(channel)), Some(acks))
    };

    tracing::info!(items = ITEMS.len(), dry_run, "session started");
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_session(&mut dashboard, acks, stdin, &mut stdout).await?;

    let report = dashboard.get_validation();
    tracing::info!(verdict = %report.verdict, completed = report.completed_count, "session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn drive(script: &str, dry_run: bool) -> (Dashboard, String) {
        let (mut dashboard, acks) = if dry_run {
            (Dashboard::new(Box::new(RecordingChannel::new())), None)
        } else {
            let (channel, acks) = TokioChannel::from_current(Duration::from_millis(1)).unwrap();
            (Dashboard::new(Box::new(channel)), Some(acks))
        };
        let mut out = Vec::new();
        run_session(&mut dashboard, acks, script.as_bytes(), &mut out)
            .await
            .unwrap();
        (dashboard, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(
            parse_line("toggle consent"),
            Ok(Some(SessionCommand::Toggle("consent".into())))
        );
        assert_eq!(
            parse_line("  request   mri-scan "),
            Ok(Some(SessionCommand::Request("mri-scan".into())))
        );
        assert_eq!(parse_line("validate"), Ok(Some(SessionCommand::Validate)));
        assert_eq!(parse_line("exit"), Ok(Some(SessionCommand::Quit)));
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("toggle").unwrap_err().contains("needs an item id"));
        assert!(parse_line("toggle a b").unwrap_err().contains("too many"));
        assert!(parse_line("state now").unwrap_err().contains("takes no arguments"));
        assert!(parse_line("launch").unwrap_err().contains("unknown command"));
    }

    #[tokio::test]
    async fn test_session_toggles_and_validates() {
        let (dashboard, out) = drive("toggle surgery-date\nvalidate\n", true).await;

        assert!(out.contains("surgery-date is now done"));
        assert!(out.contains("Verdict: warning"));
        assert!(dashboard.get_state().snapshot.is_done("surgery-date"));
    }

    #[tokio::test]
    async fn test_session_reports_errors_and_continues() {
        let (dashboard, out) = drive("toggle unknown-id\nrequest consent\ntoggle consent\n", true).await;

        assert!(out.contains("error [UNKNOWN_ITEM]"));
        assert!(out.contains("error [NOT_REQUESTABLE]"));
        assert!(out.contains("consent is now done"));
        assert!(dashboard.get_state().requested_ids.is_empty());
    }

    #[tokio::test]
    async fn test_session_acknowledges_each_item_once() {
        let (dashboard, out) = drive("request mri-scan\nrequest mri-scan\n", false).await;

        assert!(out.contains("requested mri-scan"));
        assert!(out.contains("mri-scan was already requested"));
        assert_eq!(out.matches("Request sent for MRI scan").count(), 1);
        assert!(out.contains("request for item mri-scan acknowledged"));
        assert!(dashboard.is_requested("mri-scan"));
    }

    #[tokio::test]
    async fn test_session_stops_at_quit() {
        let (dashboard, out) = drive("quit\ntoggle consent\n", true).await;

        assert!(!out.contains("consent is now done"));
        assert!(!dashboard.get_state().snapshot.is_done("consent"));
    }
}
