//! Intro dialog with a typewriter reveal

use std::time::Duration;

use crate::config::IntroConfig;

/// Script shown before the walk starts; `{name}` is the player's name
pub const INTRO_LINES: [&str; 5] = [
    "Welcome! I am the Professor of this world.",
    "People call me the 3D Master!",
    "Before we begin, may I know your name?",
    "Can you tell me how you look like ",
    "Thank you, {name}! Let's begin your journey!",
];

/// Line that asks for the player's name
pub const NAME_LINE: usize = 2;

/// Outcome of pressing "next"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroStep {
    /// Current line still typing; press ignored
    Busy,
    /// Name line needs a non-empty name
    NameRequired,
    /// Moved on to the given line
    Line(usize),
    /// Script finished; dialog hidden
    Finished,
}

/// Typewriter state for the intro script
#[derive(Debug, Clone)]
pub struct IntroDialog {
    lines: Vec<String>,
    current: usize,
    chars: Vec<char>,
    revealed: usize,
    clock: Duration,
    next_at: Duration,
    typing: bool,
    finished: bool,
    player_name: String,
    char_delay: Duration,
    space_delay: Duration,
}

impl IntroDialog {
    pub fn new(config: &IntroConfig) -> Self {
        Self::with_lines(config, INTRO_LINES.iter().map(|l| l.to_string()).collect())
    }

    pub fn with_lines(config: &IntroConfig, lines: Vec<String>) -> Self {
        let mut dialog = Self {
            lines,
            current: 0,
            chars: Vec::new(),
            revealed: 0,
            clock: Duration::ZERO,
            next_at: Duration::ZERO,
            typing: false,
            finished: false,
            player_name: String::new(),
            char_delay: config.char_delay(),
            space_delay: config.space_delay(),
        };
        if dialog.lines.is_empty() {
            dialog.finished = true;
        } else {
            dialog.start_line();
        }
        dialog
    }

    pub fn current_line(&self) -> usize {
        self.current
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Name input is shown on the name line
    pub fn wants_name(&self) -> bool {
        !self.finished && self.current == NAME_LINE
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Text revealed so far on the current line
    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Advance the typewriter clock
    pub fn update(&mut self, elapsed: Duration) {
        if !self.typing {
            return;
        }
        self.clock += elapsed;
        self.pump();
    }

    /// Reveal everything due by the current clock
    fn pump(&mut self) {
        while self.typing && self.clock >= self.next_at {
            match self.chars.get(self.revealed) {
                Some(&c) => {
                    self.revealed += 1;
                    self.next_at += if c == ' ' { self.space_delay } else { self.char_delay };
                }
                None => self.typing = false,
            }
        }
    }

    fn start_line(&mut self) {
        let line = self.lines[self.current].replace("{name}", &self.player_name);
        self.chars = line.chars().collect();
        self.revealed = 0;
        self.clock = Duration::ZERO;
        self.next_at = Duration::ZERO;
        self.typing = true;
        // First character shows immediately
        self.pump();
    }

    /// "Next" pressed, with the current contents of the name field
    pub fn advance(&mut self, name_input: &str) -> IntroStep {
        if self.finished {
            return IntroStep::Finished;
        }
        if self.typing {
            return IntroStep::Busy;
        }
        if self.current == NAME_LINE {
            let name = name_input.trim();
            if name.is_empty() {
                return IntroStep::NameRequired;
            }
            self.player_name = name.to_string();
        }

        self.current += 1;
        if self.current >= self.lines.len() {
            self.finished = true;
            log::info!("Intro finished for '{}'", self.player_name);
            return IntroStep::Finished;
        }
        self.start_line();
        IntroStep::Line(self.current)
    }
}
