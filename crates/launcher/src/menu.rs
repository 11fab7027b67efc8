//! Launcher menu state machine. Pure, no I/O.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::GameEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Start,
    Game,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Start, MenuOption::Game, MenuOption::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Start => "Start",
            MenuOption::Game => "Game",
            MenuOption::Quit => "Quit",
        }
    }

    fn index(&self) -> usize {
        match self {
            MenuOption::Start => 0,
            MenuOption::Game => 1,
            MenuOption::Quit => 2,
        }
    }
}

/// Keys the menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    PrevOption,
    NextOption,
    PrevGame,
    NextGame,
    Confirm,
    Quit,
}

impl MenuInput {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'a' => Some(MenuInput::PrevOption),
            'd' => Some(MenuInput::NextOption),
            'w' => Some(MenuInput::PrevGame),
            's' => Some(MenuInput::NextGame),
            'q' => Some(MenuInput::Quit),
            '\n' | '\r' => Some(MenuInput::Confirm),
            _ => None,
        }
    }

    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(MenuInput::Quit)
            }
            KeyCode::Enter => Some(MenuInput::Confirm),
            KeyCode::Char(ch) => Self::from_char(ch),
            _ => None,
        }
    }
}

/// What the caller should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// State may have changed; redraw.
    Redraw,
    /// Launch the game at this catalog index.
    Launch(usize),
    Quit,
}

#[derive(Debug, Clone)]
pub struct Menu {
    games: Vec<GameEntry>,
    selected: MenuOption,
    game_index: usize,
}

impl Menu {
    pub fn new(games: Vec<GameEntry>) -> Self {
        Self {
            games,
            selected: MenuOption::Start,
            game_index: 0,
        }
    }

    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    pub fn game_index(&self) -> usize {
        self.game_index
    }

    pub fn current_game(&self) -> Option<&GameEntry> {
        self.games.get(self.game_index)
    }

    pub fn handle(&mut self, input: MenuInput) -> MenuCommand {
        match input {
            MenuInput::PrevOption => {
                let n = MenuOption::ALL.len();
                self.selected = MenuOption::ALL[(self.selected.index() + n - 1) % n];
            }
            MenuInput::NextOption => {
                let n = MenuOption::ALL.len();
                self.selected = MenuOption::ALL[(self.selected.index() + 1) % n];
            }
            MenuInput::PrevGame | MenuInput::NextGame => {
                let n = self.games.len();
                if self.selected == MenuOption::Game && n > 1 {
                    self.game_index = if input == MenuInput::PrevGame {
                        (self.game_index + n - 1) % n
                    } else {
                        (self.game_index + 1) % n
                    };
                }
            }
            MenuInput::Confirm => match self.selected {
                MenuOption::Start | MenuOption::Game if !self.games.is_empty() => {
                    return MenuCommand::Launch(self.game_index);
                }
                MenuOption::Start | MenuOption::Game => {}
                MenuOption::Quit => return MenuCommand::Quit,
            },
            MenuInput::Quit => return MenuCommand::Quit,
        }
        MenuCommand::Redraw
    }
}
