/// One line of terminal input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Username(String),
    Email(String),
    Update,
    Show,
    Help,
    Quit,
}

impl Command {
    pub const USAGE: &'static str = "\
commands:
  username <value>   type into the username field
  email <value>      type into the email field
  update             press \"Update Profile\"
  show               print the current profile
  help               print this message
  quit               exit
";

    /// Parses a line. Blank lines yield `None`.
    ///
    /// Field values are everything after the first space, kept verbatim.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }
        let line = line.trim_start();
        let (verb, value) = match line.split_once(' ') {
            Some((verb, value)) => (verb, Some(value)),
            None => (line, None),
        };

        let command = match (verb, value) {
            ("username", value) => Self::Username(value.unwrap_or_default().to_owned()),
            ("email", value) => Self::Email(value.unwrap_or_default().to_owned()),
            ("update", None) => Self::Update,
            ("show", None) => Self::Show,
            ("help", None) => Self::Help,
            ("quit" | "exit", None) => Self::Quit,
            ("update" | "show" | "help" | "quit" | "exit", Some(_)) => {
                anyhow::bail!("`{}` takes no arguments", verb)
            }
            (other, _) => anyhow::bail!("unknown command `{}`", other),
        };
        Ok(Some(command))
    }
}
