// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::{AppState, Request, Tab};
use crate::theme::{Theme, THEME_NAMES};
use juris_core::validation::ProcessNumberRule;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Clear the active tab
    NewQuery,
    // Jump to a result page of the case-law search
    Page(u32),
    // Switch the process-number rule for this session
    Rule(ProcessNumberRule),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "sair" => Ok(Command::Quit),
            "help" | "ajuda" => Ok(Command::Help),
            "novo" | "nova" => Ok(Command::NewQuery),
            "theme" | "tema" => {
                if rest.is_empty() {
                    Err(format!("uso: theme <{}>", THEME_NAMES.join("|")))
                } else if Theme::by_name(rest).is_none() {
                    Err(format!("tema desconhecido: {rest}"))
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "pagina" | "página" => match rest.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(Command::Page(n)),
                Ok(_) => Err("a página deve ser maior ou igual a 1".to_string()),
                Err(_) => Err("uso: pagina <n>".to_string()),
            },
            "regra" => rest.parse::<ProcessNumberRule>().map(Command::Rule),
            other => Err(format!("comando desconhecido: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// Returns the request to spawn, if the command resubmits a search.
pub fn execute_command(s: &mut AppState, cmd: Command) -> Option<Request> {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            if let Some(theme) = Theme::by_name(&name) {
                s.theme = theme;
            }
        }
        Command::NewQuery => s.new_query(),
        Command::Page(n) => {
            s.jurisprudence.form.page = n;
            if !s.jurisprudence.form.tema.value.trim().is_empty() {
                s.active = Tab::Jurisprudence;
                return s.submit_jurisprudence();
            }
        }
        Command::Rule(rule) => {
            tracing::debug!(%rule, "process number rule changed");
            s.rule = rule;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use juris_core::config::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("  sair  "), Ok(Command::Quit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(Command::parse("theme gruvbox"), Ok(Command::Theme("gruvbox".to_string())));
        assert!(Command::parse("theme").is_err());
        assert_eq!(
            Command::parse("theme neon"),
            Err("tema desconhecido: neon".to_string())
        );
    }

    #[test]
    fn parse_page() {
        assert_eq!(Command::parse("pagina 3"), Ok(Command::Page(3)));
        assert!(Command::parse("pagina 0").is_err());
        assert!(Command::parse("pagina x").is_err());
    }

    #[test]
    fn parse_rule() {
        assert_eq!(
            Command::parse("regra exato"),
            Ok(Command::Rule(ProcessNumberRule::ExactDigits))
        );
        assert!(Command::parse("regra talvez").is_err());
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }

    #[test]
    fn page_resubmits_only_with_a_tema() {
        let mut s = AppState::new(Config::defaults(), false);
        assert_eq!(execute_command(&mut s, Command::Page(2)), None);
        assert_eq!(s.jurisprudence.form.page, 2);

        s.jurisprudence.form.tema.set("usucapião");
        let Some(Request::Jurisprudence(query)) = execute_command(&mut s, Command::Page(4)) else {
            panic!("expected a resubmission");
        };
        assert_eq!(query.page, 4);
        assert_eq!(s.active, Tab::Jurisprudence);
    }

    #[test]
    fn help_toggles() {
        let mut s = AppState::new(Config::defaults(), false);
        execute_command(&mut s, Command::Help);
        assert!(s.show_help);
        execute_command(&mut s, Command::Help);
        assert!(!s.show_help);
    }
}
