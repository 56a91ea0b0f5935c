use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use strum::IntoEnumIterator;

use hivsim_application::{Notice, SimulatorUseCase};
use hivsim_core::config::RootConfig;
use hivsim_core::mode::EffectiveMode;
use hivsim_core::session::UpgradeOutcome;
use hivsim_core::simulation::PayloadType;
use hivsim_interaction::SimulationClient;

use crate::render;

const COMMANDS: &[&str] = &[
    "register", "request-pro", "mode", "set", "show", "run", "chart", "admin", "approve",
    "whoami", "help", "quit",
];

const FIELDS: &[&str] = &["therapy_start", "release_rate", "payload_type"];

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq)]
enum ReplCommand {
    Register(String),
    RequestPro,
    Mode(bool),
    Set { field: InputField, value: String },
    Show,
    Run,
    Chart,
    Admin,
    Approve(String),
    WhoAmI,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputField {
    TherapyStart,
    ReleaseRate,
    PayloadType,
}

impl ReplCommand {
    fn parse(line: &str) -> std::result::Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let rest: Vec<&str> = parts.collect();

        let parsed = match (command, rest.as_slice()) {
            ("register", [identity]) => Self::Register(identity.to_string()),
            ("request-pro", []) => Self::RequestPro,
            ("mode", ["on"]) => Self::Mode(true),
            ("mode", ["off"]) => Self::Mode(false),
            ("set", [field, value]) => Self::Set {
                field: InputField::parse(field)?,
                value: value.to_string(),
            },
            ("show", []) => Self::Show,
            ("run", []) => Self::Run,
            ("chart", []) => Self::Chart,
            ("admin", []) => Self::Admin,
            ("approve", [identity]) => Self::Approve(identity.to_string()),
            ("whoami", []) => Self::WhoAmI,
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("register" | "approve", _) => return Err(format!("Usage: {} <email>", command)),
            ("mode", _) => return Err("Usage: mode on|off".to_string()),
            ("set", _) => return Err(format!("Usage: set {} <value>", FIELDS.join("|"))),
            _ => return Err(format!("Unknown command '{}'. Type 'help'.", line.trim())),
        };
        Ok(parsed)
    }
}

impl InputField {
    fn parse(name: &str) -> std::result::Result<Self, String> {
        match name {
            "therapy_start" => Ok(Self::TherapyStart),
            "release_rate" => Ok(Self::ReleaseRate),
            "payload_type" => Ok(Self::PayloadType),
            other => Err(format!(
                "Unknown field '{}'. Expected one of: {}",
                other,
                FIELDS.join(", ")
            )),
        }
    }
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Candidates for the word being typed: commands first, then `set` fields.
    fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        match line.split_once(' ') {
            None => (
                0,
                self.commands
                    .iter()
                    .filter(|cmd| cmd.starts_with(line))
                    .cloned()
                    .collect(),
            ),
            Some(("set", field)) if !field.contains(' ') => (
                4,
                FIELDS
                    .iter()
                    .filter(|f| f.starts_with(field))
                    .map(|f| f.to_string())
                    .collect(),
            ),
            Some(("mode", arg)) if !arg.contains(' ') => (
                5,
                ["on", "off"]
                    .iter()
                    .filter(|a| a.starts_with(arg))
                    .map(|a| a.to_string())
                    .collect(),
            ),
            _ => (0, Vec::new()),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let first = line.split_whitespace().next().unwrap_or_default();
        if self.commands.iter().any(|cmd| cmd == first) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        let (start, words) = self.candidates(line);
        let typed = &line[start..];
        words
            .into_iter()
            .find(|word| word.len() > typed.len())
            .map(|word| word[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

/// Runs the interactive client until `quit` or EOF.
pub async fn run(config: &RootConfig) -> Result<()> {
    let engine = Arc::new(SimulationClient::from_settings(&config.api));
    let mut usecase = SimulatorUseCase::new(engine);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== HIV Simulator ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Engine: {}. Type 'register <email>' to begin, 'help' for commands.",
            config.api.base_url
        )
        .bright_black()
    );
    println!();

    loop {
        let prompt = match usecase.session() {
            Some(session) => format!("{} [{}]> ", session.identity, session.role),
            None => ">> ".to_string(),
        };

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match ReplCommand::parse(trimmed) {
                    Ok(ReplCommand::Quit) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Ok(command) => execute(&mut usecase, command).await,
                    Err(usage) => println!("{}", usage.yellow()),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn execute(usecase: &mut SimulatorUseCase, command: ReplCommand) {
    match command {
        ReplCommand::Register(identity) => match usecase.register(&identity) {
            Ok(session) => println!(
                "{}",
                format!("Registered {} as {}.", session.identity, session.role).green()
            ),
            Err(e) => render::print_notice(&Notice::from_error(&e)),
        },
        ReplCommand::RequestPro => {
            let notice = match usecase.request_upgrade() {
                Ok(UpgradeOutcome::Requested(_)) => Notice::upgrade_requested(),
                Ok(UpgradeOutcome::AlreadyRequested) => Notice::upgrade_already_requested(),
                Ok(UpgradeOutcome::AlreadyElevated) => Notice::already_elevated(),
                Err(e) => Notice::from_error(&e),
            };
            render::print_notice(&notice);
        }
        ReplCommand::Mode(on) => match usecase.set_professional_mode(on) {
            Ok(mode) => print_mode(mode),
            Err(e) => {
                render::print_notice(&Notice::from_error(&e));
                print_mode(EffectiveMode::Casual);
            }
        },
        ReplCommand::Set { field, value } => {
            let inputs = usecase.inputs_mut();
            match field {
                InputField::TherapyStart => inputs.therapy_start = value,
                InputField::ReleaseRate => inputs.release_rate = value,
                InputField::PayloadType => inputs.payload_type = value,
            }
            if !usecase.is_professional_mode_on() {
                println!(
                    "{}",
                    "Saved. Casual runs ignore these values until professional mode is on."
                        .bright_black()
                );
            }
        }
        ReplCommand::Show => {
            let inputs = usecase.inputs();
            let mode = if usecase.is_professional_mode_on() {
                EffectiveMode::Professional
            } else {
                EffectiveMode::Casual
            };
            print_mode(mode);
            println!("  therapy_start = {}", inputs.therapy_start);
            println!("  release_rate  = {}", inputs.release_rate);
            let payloads: Vec<String> = PayloadType::iter().map(|p| p.to_string()).collect();
            println!(
                "  payload_type  = {} ({})",
                inputs.payload_type,
                payloads.join("|")
            );
        }
        ReplCommand::Run => match usecase.run_simulation().await {
            Ok(report) => {
                println!(
                    "{}",
                    format!("{} simulation finished: {} days.", report.mode, report.points)
                        .bright_blue()
                );
                render::print_chart(usecase.chart().displayed());
            }
            Err(e) => render::print_notice(&Notice::from_error(&e)),
        },
        ReplCommand::Chart => render::print_chart(usecase.chart().displayed()),
        ReplCommand::Admin => {
            let pending = usecase.pending_approvals();
            if pending.is_empty() {
                render::print_notice(&Notice::no_pending_requests());
            }
            for request in pending {
                println!(
                    "  {} (requested {})",
                    request.identity.bright_yellow(),
                    request.requested_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
        }
        ReplCommand::Approve(identity) => match usecase.approve(&identity) {
            Ok(_) => render::print_notice(&Notice::access_granted()),
            Err(e) => render::print_notice(&Notice::from_error(&e)),
        },
        ReplCommand::WhoAmI => match usecase.session() {
            Some(session) => println!("{} ({})", session.identity, session.role),
            None => println!("{}", "Not registered.".bright_black()),
        },
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => {}
    }
}

fn print_mode(mode: EffectiveMode) {
    match mode {
        EffectiveMode::Professional => println!("{}", "Professional Mode".bright_magenta()),
        EffectiveMode::Casual => println!("{}", "Casual Mode".bright_cyan()),
    }
}

fn print_help() {
    let lines = [
        ("register <email>", "start a casual session"),
        ("request-pro", "ask for professional access"),
        ("mode on|off", "toggle professional mode"),
        ("set <field> <value>", "edit therapy_start, release_rate or payload_type"),
        ("show", "print the current mode and inputs"),
        ("run", "run a simulation and print the chart"),
        ("chart", "print the last chart"),
        ("admin", "list pending upgrade requests"),
        ("approve <email>", "grant a pending request"),
        ("whoami", "print the active session"),
        ("quit", "exit"),
    ];
    for (usage, text) in lines {
        println!("  {:<22} {}", usage.bright_cyan(), text);
    }
}
