//! Line-based terminal front end drawn with crossterm.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use log::warn;

use super::{Hud, Presenter};
use crate::errors::GameError;
use crate::events::Tone;

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Cyan,
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Danger => Color::Red,
        Tone::Loot => Color::Blue,
        Tone::Magic => Color::Magenta,
    }
}

pub struct TerminalPresenter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalPresenter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&buf).trim().to_string())
    }

    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        queue!(
            self.output,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\r\n")
        )?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        queue!(self.output, Print(text))?;
        self.output.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn begin_screen(&mut self, hud: &Hud) -> Result<(), GameError> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.write_colored(&hud.line(), Color::White)?;
        self.write_colored(&"-".repeat(60), Color::DarkGrey)?;
        Ok(())
    }

    fn choose(&mut self, title: &str, options: &[String]) -> Result<usize, GameError> {
        loop {
            self.write_colored(title, Color::Cyan)?;
            for (i, option) in options.iter().enumerate() {
                queue!(self.output, Print(format!("{}. {}\r\n", i + 1, option)))?;
            }
            let answer = self.prompt("Enter your choice: ")?;
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.write_colored("Invalid choice. Please try again.", Color::Red)?,
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, GameError> {
        let answer = self.prompt(&format!("{} (yes/no): ", prompt))?;
        Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
    }

    fn ask_quantity(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, GameError> {
        loop {
            let answer = self.prompt(&format!("{} (0 to return): ", prompt))?;
            match answer.parse::<u32>() {
                Ok(0) => return Ok(None),
                Ok(n) if n <= max => return Ok(Some(n)),
                _ => self.write_colored("Invalid choice. Please try again.", Color::Red)?,
            }
        }
    }

    fn notify(&mut self, message: &str, tone: Tone) {
        if let Err(e) = self.write_colored(message, tone_color(tone)) {
            warn!("failed to write message: {}", e);
        }
    }

    fn pause(&mut self) -> Result<(), GameError> {
        self.prompt("Press Enter to continue...")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn presenter(input: &str) -> TerminalPresenter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPresenter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn options() -> Vec<String> {
        vec!["Attack".to_string(), "Flee".to_string()]
    }

    #[test]
    fn test_choose_reprompts_until_valid() {
        let mut ui = presenter("7\nabc\n2\n");
        assert_eq!(ui.choose("Choose your action:", &options()).unwrap(), 1);
        let output = String::from_utf8(ui.into_output()).unwrap();
        assert_eq!(output.matches("Invalid choice").count(), 2);
        assert!(output.contains("1. Attack"));
    }

    #[test]
    fn test_invalid_utf8_reprompts() {
        let mut ui = TerminalPresenter::new(
            Cursor::new(vec![0xff, b'\n', b'1', b'\n']),
            Vec::new(),
        );
        assert_eq!(ui.choose("Choose your action:", &options()).unwrap(), 0);
        let output = String::from_utf8(ui.into_output()).unwrap();
        assert_eq!(output.matches("Invalid choice").count(), 1);
    }

    #[test]
    fn test_confirm_accepts_y_and_yes() {
        let mut ui = presenter("Y\nyes\nnope\n");
        assert!(ui.confirm("Proceed?").unwrap());
        assert!(ui.confirm("Proceed?").unwrap());
        assert!(!ui.confirm("Proceed?").unwrap());
    }

    #[test]
    fn test_ask_quantity_bounds() {
        let mut ui = presenter("5\n3\n0\n");
        assert_eq!(ui.ask_quantity("Keys to sell", 3).unwrap(), Some(3));
        assert_eq!(ui.ask_quantity("Keys to sell", 3).unwrap(), None);
    }

    #[test]
    fn test_eof_is_input_closed() {
        let mut ui = presenter("");
        assert!(matches!(ui.pause(), Err(GameError::InputClosed)));
        assert!(matches!(
            ui.choose("Menu", &options()),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn test_notify_writes_message() {
        let mut ui = presenter("");
        ui.notify("You found 20 gold!", Tone::Loot);
        let output = String::from_utf8(ui.into_output()).unwrap();
        assert!(output.contains("You found 20 gold!"));
    }
}
