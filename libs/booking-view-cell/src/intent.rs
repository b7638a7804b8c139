use thiserror::Error;

use booking_store_cell::ViewModel;

pub const HELP_TEXT: &str = "\
Commands:
  name <text>         set the patient name
  doctor <id|number>  choose a doctor
  slot <label|number> choose a time slot
  date <YYYY-MM-DD>   set the booking date
  clear doctor|slot   clear a selection
  book                submit the booking
  refresh             reload the doctor list
  json                print the current state as JSON
  help                show this help
  quit                leave";

/// A user intent, already resolved against what the form currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SetPatientName(String),
    SelectDoctor(Option<String>),
    SelectSlot(Option<String>),
    SetBookingDate(String),
    Submit,
    Refresh,
    Dump,
    Help,
    Noop,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("There is no {kind} number {index} (choose 1-{available})")]
    OutOfRange {
        kind: &'static str,
        index: usize,
        available: usize,
    },
}

pub fn parse_intent(line: &str, view_model: &ViewModel) -> Result<Intent, IntentError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Intent::Noop);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        // an empty name is a legitimate edit
        "name" => Ok(Intent::SetPatientName(rest.to_string())),
        "doctor" => {
            let doctor_ids: Vec<&str> = view_model.state.doctors.iter().map(|d| d.id.as_str()).collect();
            let id = pick("doctor", rest, &doctor_ids)?;
            Ok(Intent::SelectDoctor(Some(id)))
        }
        "slot" => {
            let slots: Vec<&str> = view_model.state.available_slots.iter().map(String::as_str).collect();
            let slot = pick("slot", rest, &slots)?;
            Ok(Intent::SelectSlot(Some(slot)))
        }
        "date" => Ok(Intent::SetBookingDate(rest.to_string())),
        "clear" => match rest.to_lowercase().as_str() {
            "doctor" => Ok(Intent::SelectDoctor(None)),
            "slot" => Ok(Intent::SelectSlot(None)),
            "" => Err(IntentError::MissingArgument("clear")),
            other => Err(IntentError::UnknownCommand(format!("clear {}", other))),
        },
        "book" | "submit" => Ok(Intent::Submit),
        "refresh" => Ok(Intent::Refresh),
        "json" => Ok(Intent::Dump),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "exit" => Ok(Intent::Quit),
        other => Err(IntentError::UnknownCommand(other.to_string())),
    }
}

/// Accept either a 1-based position in `options` or a literal value.
fn pick(kind: &'static str, value: &str, options: &[&str]) -> Result<String, IntentError> {
    if value.is_empty() {
        return Err(IntentError::MissingArgument(kind));
    }

    match value.parse::<usize>() {
        Ok(index) if index >= 1 && index <= options.len() => Ok(options[index - 1].to_string()),
        Ok(index) => Err(IntentError::OutOfRange {
            kind,
            index,
            available: options.len(),
        }),
        Err(_) => Ok(value.to_string()),
    }
}
