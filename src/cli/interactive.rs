//! Line-driven dashboard session over stdin.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::dashboard::Dashboard;
use crate::pipeline::CategoryFilter;
use crate::report::{Report, ReportFormat};

const HELP: &str = "\
Commands:
  topic <name|all>      filter by topic
  format <name|all>     filter by podcast format
  search [text]         search name, description and guest (blank clears)
  clear                 reset all filters
  first | prev | next | last | page <n>
  mark <id> | unmark <id> | toggle <id>
  unselect              clear the selection
  delete                delete every selected response
  stats | show          print counts / the current page
  logout | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Topic(CategoryFilter),
    Format(CategoryFilter),
    Search(String),
    Clear,
    First,
    Previous,
    Next,
    Last,
    Page(i64),
    Mark(String),
    Unmark(String),
    Toggle(String),
    Unselect,
    Delete,
    Stats,
    Show,
    Help,
    Logout,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    let needs_arg = |what: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("`{word}` needs {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let cmd = match word.to_ascii_lowercase().as_str() {
        "topic" => ReplCommand::Topic(CategoryFilter::parse(&needs_arg("a topic or `all`")?)),
        "format" => ReplCommand::Format(CategoryFilter::parse(&needs_arg("a format or `all`")?)),
        "search" => ReplCommand::Search(rest.to_string()),
        "clear" => ReplCommand::Clear,
        "first" => ReplCommand::First,
        "prev" | "previous" => ReplCommand::Previous,
        "next" => ReplCommand::Next,
        "last" => ReplCommand::Last,
        "page" => {
            let raw = needs_arg("a page number")?;
            let n = raw
                .parse::<i64>()
                .map_err(|_| format!("'{raw}' is not a page number"))?;
            ReplCommand::Page(n)
        }
        "mark" => ReplCommand::Mark(needs_arg("a response id")?),
        "unmark" => ReplCommand::Unmark(needs_arg("a response id")?),
        "toggle" => ReplCommand::Toggle(needs_arg("a response id")?),
        "unselect" => ReplCommand::Unselect,
        "delete" => ReplCommand::Delete,
        "stats" => ReplCommand::Stats,
        "show" | "ls" => ReplCommand::Show,
        "help" | "?" => ReplCommand::Help,
        "logout" => ReplCommand::Logout,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => return Err(format!("Unknown command '{other}', try `help`")),
    };
    Ok(Some(cmd))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// State changed; print the current page.
    Render,
    Message(String),
    Exit,
}

/// Apply one command to the dashboard. Failures come back as messages;
/// they never end the session.
pub async fn apply(dash: &mut Dashboard, cmd: ReplCommand) -> Step {
    match cmd {
        ReplCommand::Topic(t) => dash.set_topic_filter(t),
        ReplCommand::Format(f) => dash.set_format_filter(f),
        ReplCommand::Search(s) => dash.set_search(&s),
        ReplCommand::Clear => dash.clear_filters(),
        ReplCommand::First => dash.first_page(),
        ReplCommand::Previous => dash.previous_page(),
        ReplCommand::Next => dash.next_page(),
        ReplCommand::Last => dash.last_page(),
        ReplCommand::Page(n) => dash.go_to_page(n),
        ReplCommand::Mark(input) => {
            return match super::resolve_id(super::record_ids(dash.filtered()), &input) {
                Ok(id) => {
                    dash.mark(&id);
                    Step::Message(format!("Marked {id} ({} selected)", dash.selection().len()))
                }
                Err(e) => Step::Message(e.to_string()),
            };
        }
        ReplCommand::Unmark(input) => {
            let selected = dash.selection().ids();
            return match super::resolve_id(selected.iter().map(String::as_str), &input) {
                Ok(id) => {
                    dash.unmark(&id);
                    Step::Message(format!("Unmarked {id} ({} selected)", dash.selection().len()))
                }
                Err(e) => Step::Message(e.to_string()),
            };
        }
        ReplCommand::Toggle(input) => {
            return match super::resolve_id(super::record_ids(dash.filtered()), &input) {
                Ok(id) => {
                    let state = if dash.toggle(&id) { "Marked" } else { "Unmarked" };
                    Step::Message(format!("{state} {id} ({} selected)", dash.selection().len()))
                }
                Err(e) => Step::Message(e.to_string()),
            };
        }
        ReplCommand::Unselect => {
            dash.clear_selection();
            return Step::Message("Selection cleared".into());
        }
        ReplCommand::Delete => {
            return match dash.bulk_delete().await {
                Ok(n) => Step::Message(format!(
                    "Deleted {n} response(s). {} remaining.",
                    dash.records().len()
                )),
                Err(e) => Step::Message(format!("Delete failed: {e}")),
            };
        }
        ReplCommand::Stats => {
            let stats = dash.stats();
            if stats.topics.is_empty() && stats.podcast_formats.is_empty() {
                return Step::Message("No responses to count.".into());
            }
            let mut out = String::from("Topics:\n");
            for e in stats.topics.sorted() {
                out.push_str(&format!("  {:<24} {}\n", e.label, e.count));
            }
            out.push_str("Podcast formats:\n");
            for e in stats.podcast_formats.sorted() {
                out.push_str(&format!("  {:<24} {}\n", e.label, e.count));
            }
            return Step::Message(out.trim_end().to_string());
        }
        ReplCommand::Show => {}
        ReplCommand::Help => return Step::Message(HELP.to_string()),
        ReplCommand::Logout => {
            return match dash.logout().await {
                Ok(()) => Step::Exit,
                Err(e) => Step::Message(format!("Logout failed: {e}")),
            };
        }
        ReplCommand::Quit => return Step::Exit,
    }
    Step::Render
}

pub async fn run(mut dash: Dashboard) -> anyhow::Result<()> {
    if let Some(session) = dash.session() {
        println!("Signed in as {}.", session.email);
    }
    println!("{}", Report::build(&dash).render(ReportFormat::Terminal)?);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        match apply(&mut dash, cmd).await {
            Step::Render => println!("{}", Report::build(&dash).render(ReportFormat::Terminal)?),
            Step::Message(msg) => println!("{msg}"),
            Step::Exit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::dashboard::tests::{MemoryStore, StaticIdentity};
    use crate::pipeline::fixtures::numbered;
    use crate::theme::ThemeMode;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("topic Health & Wellness"),
            Ok(Some(ReplCommand::Topic(CategoryFilter::Only(
                "Health & Wellness".into()
            ))))
        );
        assert_eq!(
            parse_command("FORMAT all"),
            Ok(Some(ReplCommand::Format(CategoryFilter::All)))
        );
        assert_eq!(
            parse_command("search"),
            Ok(Some(ReplCommand::Search(String::new())))
        );
        assert_eq!(parse_command("page -4"), Ok(Some(ReplCommand::Page(-4))));
        assert_eq!(parse_command("prev"), Ok(Some(ReplCommand::Previous)));
        assert!(parse_command("page two").is_err());
        assert!(parse_command("mark").is_err());
        assert!(parse_command("topic").is_err());
        assert!(parse_command("frobnicate").is_err());
    }

    async fn session(n: usize) -> (std::sync::Arc<MemoryStore>, Dashboard) {
        let store = MemoryStore::with(numbered(n));
        let mut dash = Dashboard::new(store.clone(), StaticIdentity::signed_in(true), ThemeMode::Light);
        dash.load().await.unwrap();
        (store, dash)
    }

    #[tokio::test]
    async fn test_navigation_and_filter_reset() {
        let (_store, mut dash) = session(25).await;
        assert_eq!(apply(&mut dash, ReplCommand::Last).await, Step::Render);
        assert_eq!(dash.paginator().current_page(), 3);

        apply(&mut dash, ReplCommand::Search("person 2".into())).await;
        assert_eq!(dash.paginator().current_page(), 1);
        // "Person 2" and "Person 20".."Person 25"
        assert_eq!(dash.filtered().len(), 7);

        apply(&mut dash, ReplCommand::Page(99)).await;
        assert_eq!(dash.paginator().current_page(), 1);
    }

    #[tokio::test]
    async fn test_mark_and_delete() {
        let (store, mut dash) = session(3).await;

        let step = apply(&mut dash, ReplCommand::Mark("r1".into())).await;
        assert_eq!(step, Step::Message("Marked r1 (1 selected)".into()));
        apply(&mut dash, ReplCommand::Toggle("r2".into())).await;
        apply(&mut dash, ReplCommand::Toggle("r2".into())).await;
        apply(&mut dash, ReplCommand::Mark("r3".into())).await;
        apply(&mut dash, ReplCommand::Unmark("r3".into())).await;
        assert_eq!(dash.selection().ids(), vec!["r1"]);

        let step = apply(&mut dash, ReplCommand::Delete).await;
        assert_eq!(step, Step::Message("Deleted 1 response(s). 2 remaining.".into()));
        assert_eq!(store.records.lock().unwrap().len(), 2);

        let step = apply(&mut dash, ReplCommand::Delete).await;
        assert!(matches!(step, Step::Message(m) if m.starts_with("Delete failed")));
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_session_going() {
        let (store, mut dash) = session(3).await;
        store.fail_delete.store(true, Ordering::SeqCst);
        apply(&mut dash, ReplCommand::Mark("r2".into())).await;
        let step = apply(&mut dash, ReplCommand::Delete).await;
        assert!(matches!(step, Step::Message(m) if m.starts_with("Delete failed")));
        assert!(dash.selection().contains("r2"));
        assert_eq!(dash.records().len(), 3);
    }

    #[tokio::test]
    async fn test_mark_outside_filtered_view_rejected() {
        let (_store, mut dash) = session(3).await;
        apply(&mut dash, ReplCommand::Search("person 1".into())).await;
        let step = apply(&mut dash, ReplCommand::Mark("r2".into())).await;
        assert_eq!(step, Step::Message("Response 'r2' not found".into()));
        assert!(dash.selection().is_empty());
    }

    #[tokio::test]
    async fn test_stats_output() {
        let (_store, mut dash) = session(0).await;
        assert_eq!(
            apply(&mut dash, ReplCommand::Stats).await,
            Step::Message("No responses to count.".into())
        );

        let (_store, mut dash) = session(3).await;
        let Step::Message(out) = apply(&mut dash, ReplCommand::Stats).await else {
            panic!("expected stats message");
        };
        assert!(out.starts_with("Topics:"));
        assert!(out.contains("Technology"));
        assert!(out.contains("Interview"));
    }

    #[tokio::test]
    async fn test_quit_and_logout_exit() {
        let (_store, mut dash) = session(1).await;
        assert_eq!(apply(&mut dash, ReplCommand::Quit).await, Step::Exit);
        assert_eq!(apply(&mut dash, ReplCommand::Logout).await, Step::Exit);
        assert!(dash.records().is_empty());
    }
}
