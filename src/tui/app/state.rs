use crate::cards::{parse_card, Card};
use crate::hand::{Board, HoleCards};
use crate::probability::{OddsReport, ProbabilityEstimator};
use crate::simulation::{EvResult, EvSimulator, SimulationConfig, Wager};
use std::time::{Duration, Instant};

/// Card slots on the calculator: two hole cards then five board cards.
pub const SLOTS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Calculator,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    FocusNext,
    FocusPrev,
    FocusSlot(usize),
    EntryOpen,
    EntryChar(char),
    EntryBackspace,
    EntrySubmit,
    EntryCancel,
    ClearSlot,
    ClearAll,
    Simulate,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub slots: [Option<Card>; SLOTS],
    pub focus: usize,
    pub num_players: usize,
    pub trials: usize,
    pub wager: Wager,
    pub seed: Option<u64>,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_trials: usize,
    pub cfg_pot: u64,
    pub cfg_call: u64,
    pub cfg_raise: u64,
    report: Option<OddsReport>,
    ev: Option<EvResult>,
    help_open: bool,
    entry: Option<String>,
    error: Option<String>,
    error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let config = SimulationConfig::default();
        let wager = Wager::new(100, 20, 0);
        Self {
            scene: Scene::Menu,
            slots: [None; SLOTS],
            focus: 0,
            num_players: 2,
            trials: config.trials,
            wager,
            seed: config.seed,
            menu_index: 0,
            cfg_num_players: 2,
            cfg_trials: config.trials,
            cfg_pot: wager.pot,
            cfg_call: wager.call,
            cfg_raise: wager.raise,
            report: None,
            ev: None,
            help_open: false,
            entry: None,
            error: None,
            error_at: None,
        }
    }
}

impl AppState {
    pub const HOLE_SLOTS: usize = 2;
    const ERROR_TTL: Duration = Duration::from_secs(4);
    const ENTRY_MAX: usize = 3;

    /// Fixed seed for every simulation started from this state.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn entry_active(&self) -> bool {
        self.entry.is_some()
    }

    pub fn entry_text(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn report(&self) -> Option<&OddsReport> {
        self.report.as_ref()
    }

    pub fn ev(&self) -> Option<&EvResult> {
        self.ev.as_ref()
    }

    fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.error_at = Some(Instant::now());
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }

    pub fn hole(&self) -> Option<HoleCards> {
        match (self.slots[0], self.slots[1]) {
            (Some(a), Some(b)) => HoleCards::try_new(a, b).ok(),
            _ => None,
        }
    }

    /// Filled board slots, in slot order.
    pub fn board_cards(&self) -> Vec<Card> {
        self.slots[Self::HOLE_SLOTS..].iter().flatten().copied().collect()
    }

    /// Re-estimate after any card or table change. Simulation results are stale
    /// from here on and are dropped.
    pub(crate) fn recompute(&mut self) {
        self.ev = None;
        self.report = None;
        let Some(hole) = self.hole() else {
            return;
        };
        let board = match Board::try_new(self.board_cards()) {
            Ok(b) => b,
            Err(err) => {
                self.set_error(err.to_string());
                return;
            }
        };
        match ProbabilityEstimator::new(hole, self.num_players) {
            Ok(est) => match est.report(&board) {
                Ok(report) => self.report = Some(report),
                Err(err) => self.set_error(err.to_string()),
            },
            Err(err) => self.set_error(err.to_string()),
        }
    }

    fn open_entry(&mut self) -> bool {
        if self.scene != Scene::Calculator {
            return false;
        }
        self.entry = Some(String::new());
        true
    }

    fn entry_push(&mut self, c: char) {
        if self.scene != Scene::Calculator {
            return;
        }
        let buf = self.entry.get_or_insert_with(String::new);
        if buf.chars().count() < Self::ENTRY_MAX && c.is_ascii_alphanumeric() {
            buf.push(c.to_ascii_uppercase());
        }
    }

    fn entry_backspace(&mut self) {
        if let Some(buf) = self.entry.as_mut() {
            buf.pop();
        }
    }

    fn entry_cancel(&mut self) {
        self.entry = None;
    }

    fn entry_submit(&mut self) -> bool {
        let Some(buf) = self.entry.take() else {
            return false;
        };
        let card = match parse_card(&buf) {
            Ok(c) => c,
            Err(err) => {
                self.set_error(err.to_string());
                return false;
            }
        };
        let dup = self.slots.iter().enumerate().any(|(i, s)| i != self.focus && *s == Some(card));
        if dup {
            self.set_error(format!("{card} is already on the table"));
            return false;
        }
        self.clear_error();
        self.slots[self.focus] = Some(card);
        self.focus_next();
        self.recompute();
        true
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % SLOTS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + SLOTS - 1) % SLOTS;
    }

    pub fn set_focus(&mut self, idx: usize) {
        self.focus = idx % SLOTS;
    }

    fn clear_slot(&mut self) {
        self.slots[self.focus] = None;
        self.clear_error();
        self.recompute();
    }

    fn clear_all(&mut self) {
        self.slots = [None; SLOTS];
        self.focus = 0;
        self.clear_error();
        self.recompute();
    }

    /// Run the Monte Carlo estimate for the cards on the table.
    pub fn simulate(&mut self) -> bool {
        let Some(hole) = self.hole() else {
            self.set_error("enter both hole cards first");
            return false;
        };
        let board = match Board::try_new(self.board_cards()) {
            Ok(b) => b,
            Err(err) => {
                self.set_error(err.to_string());
                return false;
            }
        };
        let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
        let mut config = SimulationConfig::default().with_trials(self.trials).with_workers(workers);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        match EvSimulator::new(config).run(&hole, &board, self.wager, self.num_players) {
            Ok(res) => {
                self.clear_error();
                self.ev = Some(res);
                true
            }
            Err(err) => {
                self.set_error(err.to_string());
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Calculator {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::FocusNext => {
                if self.scene == Scene::Calculator {
                    self.focus_next();
                }
                false
            }
            InputAction::FocusPrev => {
                if self.scene == Scene::Calculator {
                    self.focus_prev();
                }
                false
            }
            InputAction::FocusSlot(idx) => {
                if self.scene == Scene::Calculator {
                    self.set_focus(idx);
                }
                false
            }
            InputAction::EntryOpen => self.open_entry(),
            InputAction::EntryChar(c) => {
                self.entry_push(c);
                false
            }
            InputAction::EntryBackspace => {
                self.entry_backspace();
                false
            }
            InputAction::EntrySubmit => self.entry_submit(),
            InputAction::EntryCancel => {
                self.entry_cancel();
                false
            }
            InputAction::ClearSlot => {
                if self.scene == Scene::Calculator {
                    self.clear_slot();
                }
                false
            }
            InputAction::ClearAll => {
                if self.scene == Scene::Calculator {
                    self.clear_all();
                }
                false
            }
            InputAction::Simulate => self.scene == Scene::Calculator && self.simulate(),
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.clear_error();
            }
        }
    }
}
