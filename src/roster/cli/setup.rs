use clap::{Args, CommandFactory, Parser, Subcommand};
use roster::form::FormField;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

/// Process-level options.
#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "In-memory employee roster session", long_about = None)]
pub struct Cli {
    /// Read configuration from this TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty roster instead of the sample employees
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging on stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: LineCommand,
}

/// Form inputs that can be given inline with `submit`.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub telephone: Option<String>,
    #[arg(long)]
    pub position: Option<String>,
    #[arg(long)]
    pub identity_number: Option<String>,
    /// Image file to attach
    #[arg(long, value_name = "PATH")]
    pub image: Option<PathBuf>,
}

impl FormArgs {
    pub fn is_empty(&self) -> bool {
        self.inputs().is_empty() && self.image.is_none()
    }

    /// The text inputs that were given, in form order.
    pub fn inputs(&self) -> Vec<(FormField, &str)> {
        [
            (FormField::Name, &self.name),
            (FormField::Surname, &self.surname),
            (FormField::Email, &self.email),
            (FormField::Telephone, &self.telephone),
            (FormField::Position, &self.position),
            (FormField::IdentityNumber, &self.identity_number),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Subcommand, Debug)]
pub enum LineCommand {
    /// List all employees
    #[command(visible_alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit the form (adds, or updates the employee being edited)
    #[command(visible_aliases = ["add", "save", "update"])]
    Submit(FormArgs),

    /// Set one form input
    Set {
        /// name, surname, email, telephone, position or identity-number
        field: FormField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },

    /// Attach an image file to the form
    Image {
        path: Option<PathBuf>,
        /// Remove the image instead
        #[arg(long, conflicts_with = "path")]
        clear: bool,
    },

    /// Show the form
    Form,

    /// Start editing an employee
    #[command(visible_alias = "e")]
    Edit { id: String },

    /// Stop editing and clear the form
    Cancel,

    /// Delete an employee
    #[command(visible_alias = "rm")]
    Delete { id: String },

    /// Find an employee by id and show the profile
    Search {
        #[arg(num_args = 0.., trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Show an employee profile (the current one when no id is given)
    #[command(visible_alias = "show")]
    View {
        id: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Leave the profile view
    Back,

    /// Print help for the session or a command
    Help { command: Option<String> },

    /// End the session
    #[command(visible_aliases = ["exit", "q"])]
    Quit,
}

/// Splits a typed line into words. Single and double quotes group words;
/// a backslash escapes the next character.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (_, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(q), c) if c == q => quote = None,
            (Some(_), c) => current.push(c),
            (None, '"') | (None, '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed quote: {}", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

pub fn get_session_help() -> String {
    let cmd = Line::command();
    let mut output = String::new();
    output.push_str("Commands:\n");
    for sc in cmd.get_subcommands().filter(|sc| !sc.is_hide_set()) {
        let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
        output.push_str(&format!("  {:<10} {}\n", sc.get_name(), about));
    }
    output.push('\n');
    output.push_str("Values with spaces can be quoted: submit --position \"Senior Engineer\"\n");
    output
}

/// Help for a single command, or `None` if there is no such command.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = Line::command();
    let help = cmd
        .get_subcommands_mut()
        .find(|sc| sc.get_name() == name || sc.get_all_aliases().any(|a| a == name))
        .map(|sc| sc.render_help().to_string());
    help
}
