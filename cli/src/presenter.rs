//! Terminal presentation of staged dialogs
//!
//! `ConsolePresenter` draws one scenario record as a boxed modal dialog and
//! blocks on stdin for a response from the record's button set.
//! `ConsoleStage` stands in for the authoring window: hiding clears the
//! screen, showing announces the return to the workshop.

use std::io::{self, Write};

use feint_core::{Presenter, PresenterError, ScenarioRecord, StageVisibility};
use feint_types::{DialogButtons, DialogResponse, Language};

use crate::labels::{self, UiStrings};

const MIN_DIALOG_WIDTH: usize = 24;

pub struct ConsolePresenter {
    strings: &'static UiStrings,
}

impl ConsolePresenter {
    pub fn new(language: Language) -> Self {
        Self {
            strings: labels::for_language(language),
        }
    }

    fn render(&self, record: &ScenarioRecord) {
        let heading = format!("{} {}", record.icon().marker(), record.title());
        let width = heading
            .chars()
            .count()
            .max(record.message().chars().count())
            .max(MIN_DIALOG_WIDTH);

        println!();
        println!("┌─{}─┐", "─".repeat(width));
        println!("│ {} │", pad(&heading, width));
        println!("├─{}─┤", "─".repeat(width));
        println!("│ {} │", pad(record.message(), width));
        println!("└─{}─┘", "─".repeat(width));
    }

    fn prompt_for(&self, buttons: DialogButtons) -> &'static str {
        match buttons {
            DialogButtons::Ok => self.strings.prompt_ok,
            DialogButtons::OkCancel => self.strings.prompt_ok_cancel,
            DialogButtons::YesNo => self.strings.prompt_yes_no,
        }
    }
}

impl Presenter for ConsolePresenter {
    fn show(&self, record: &ScenarioRecord) -> Result<DialogResponse, PresenterError> {
        self.render(record);
        let prompt = self.prompt_for(record.buttons());

        loop {
            print!("{prompt} ");
            io::stdout()
                .flush()
                .map_err(|e| PresenterError::new(e.to_string()))?;

            let mut line = String::new();
            let read = io::stdin()
                .read_line(&mut line)
                .map_err(|e| PresenterError::new(e.to_string()))?;
            if read == 0 {
                return Err(PresenterError::new(self.strings.input_closed));
            }

            match parse_response(record.buttons(), line.trim()) {
                Some(response) => return Ok(response),
                None => println!("{}", self.strings.invalid_response),
            }
        }
    }
}

/// Map typed input onto the record's button set. Enter defaults to OK where
/// OK is offered; yes/no has no default.
fn parse_response(buttons: DialogButtons, input: &str) -> Option<DialogResponse> {
    let input = input.to_ascii_lowercase();
    match buttons {
        DialogButtons::Ok => {
            matches!(input.as_str(), "" | "o" | "ok").then_some(DialogResponse::Ok)
        }
        DialogButtons::OkCancel => match input.as_str() {
            "" | "o" | "ok" => Some(DialogResponse::Ok),
            "c" | "cancel" => Some(DialogResponse::Cancel),
            _ => None,
        },
        DialogButtons::YesNo => match input.as_str() {
            "y" | "yes" => Some(DialogResponse::Yes),
            "n" | "no" => Some(DialogResponse::No),
            _ => None,
        },
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.chars().count());
    format!("{s}{}", " ".repeat(fill))
}

pub struct ConsoleStage {
    strings: &'static UiStrings,
}

impl ConsoleStage {
    pub fn new(language: Language) -> Self {
        Self {
            strings: labels::for_language(language),
        }
    }
}

impl StageVisibility for ConsoleStage {
    fn hide(&self) {
        // ANSI clear screen + cursor home
        print!("\x1b[2J\x1b[H");
        let _ = io::stdout().flush();
    }

    fn show(&self) {
        println!("\n{}", self.strings.stage_restored);
    }
}
