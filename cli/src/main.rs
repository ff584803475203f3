mod output;
mod transport;

use std::process::ExitCode;

use clap::{Arg, ArgMatches, Command};
use todo_core::{ApiClient, ApiConfig, ApiError, Notifier, TodoList, Transport};
use tracing_subscriber::EnvFilter;

use output::StderrNotifier;
use transport::UreqTransport;

fn cli() -> Command {
    let id_arg = || Arg::new("id").required(true).help("Todo id as shown by `todo list`");
    Command::new("todo")
        .version("0.1.0")
        .about("Manage the todo list on a todo API server")
        .subcommand_required(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .help("API origin; overrides TODO_API_URL (default http://127.0.0.1:8080)"),
        )
        .subcommand(Command::new("list").about("Show every todo"))
        .subcommand(
            Command::new("add").about("Create a todo").arg(
                Arg::new("content")
                    .required(true)
                    .num_args(1..)
                    .help("Todo text; blank text is ignored"),
            ),
        )
        .subcommand(Command::new("done").about("Mark a todo as done").arg(id_arg()))
        .subcommand(Command::new("undone").about("Mark a todo as not done").arg(id_arg()))
        .subcommand(Command::new("remove").about("Delete a todo").arg(id_arg()))
}

/// Load the list, then apply the subcommand. Errors have already been shown
/// by the list's notifier when this returns `Err`.
fn run<T: Transport, N: Notifier>(list: &mut TodoList<'_, T, N>, matches: &ArgMatches) -> Result<(), ApiError> {
    list.load()?;
    match matches.subcommand() {
        Some(("add", args)) => {
            let content: Vec<&str> = args
                .get_many::<String>("content")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            list.add(&content.join(" "))?;
        }
        Some(("done", args)) => {
            list.toggle(id(args), true)?;
        }
        Some(("undone", args)) => {
            list.toggle(id(args), false)?;
        }
        Some(("remove", args)) => {
            list.remove(id(args))?;
        }
        _ => {}
    }
    Ok(())
}

fn id(args: &ArgMatches) -> &str {
    args.get_one::<String>("id").map(String::as_str).unwrap_or_default()
}

/// `--api-url` wins over `TODO_API_URL`. A blank flag counts as absent,
/// the same as a blank variable.
fn resolve_config(flag: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> ApiConfig {
    match flag {
        Some(url) if !url.trim().is_empty() => ApiConfig::new(url),
        _ => ApiConfig::from_lookup(lookup),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let flag = matches.get_one::<String>("api-url").map(String::as_str);
    let config = resolve_config(flag, |name| std::env::var(name).ok());
    tracing::debug!(base_path = %config.base_path(), "resolved API base path");

    let api = ApiClient::new(&config, UreqTransport::new());
    let mut list = TodoList::new(&api, StderrNotifier);
    let outcome = run(&mut list, &matches);

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = output::render(&list.todos(), &mut stdout) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn add_collects_all_words() {
        let matches = cli().get_matches_from(["todo", "add", "buy", "milk"]);
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "add");
        let words: Vec<&String> = args.get_many::<String>("content").unwrap().collect();
        assert_eq!(words, ["buy", "milk"]);
    }

    #[test]
    fn api_url_is_accepted_after_subcommand() {
        let matches = cli().get_matches_from(["todo", "list", "--api-url", "http://10.1.1.1:9000"]);
        assert_eq!(
            matches.get_one::<String>("api-url").map(String::as_str),
            Some("http://10.1.1.1:9000")
        );
    }

    #[test]
    fn flag_takes_precedence_over_environment() {
        let config = resolve_config(Some("http://flag:1"), |_| Some("http://env:2".to_string()));
        assert_eq!(config.base_path(), "http://flag:1/api/v1");
    }

    #[test]
    fn environment_used_without_flag() {
        let config = resolve_config(None, |_| Some("http://env:2".to_string()));
        assert_eq!(config.base_path(), "http://env:2/api/v1");
    }

    #[test]
    fn blank_flag_falls_back_like_blank_variable() {
        let config = resolve_config(Some("  "), |_| Some("http://env:2".to_string()));
        assert_eq!(config.origin(), "http://env:2");
        let config = resolve_config(Some(""), |_| None);
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn toggle_requires_an_id() {
        assert!(cli().try_get_matches_from(["todo", "done"]).is_err());
    }
}
