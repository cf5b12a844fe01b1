use crate::hand::MAX_PLAYERS;
use crate::simulation::Wager;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    Trials,
    Pot,
    Call,
    Raise,
}

const MENU_ITEMS: [MenuItem; 5] =
    [MenuItem::Players, MenuItem::Trials, MenuItem::Pot, MenuItem::Call, MenuItem::Raise];

const TRIALS_STEP: usize = 1_000;
const POT_STEP: u64 = 10;
const BET_STEP: u64 = 5;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::Trials => format!("Trials: {}", app.cfg_trials),
            MenuItem::Pot => format!("Pot: ${}", app.cfg_pot),
            MenuItem::Call => format!("Call: ${}", app.cfg_call),
            MenuItem::Raise => format!("Raise: ${}", app.cfg_raise),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_add(TRIALS_STEP);
            }
            MenuItem::Pot => {
                app.cfg_pot = app.cfg_pot.saturating_add(POT_STEP);
            }
            MenuItem::Call => {
                app.cfg_call = app.cfg_call.saturating_add(BET_STEP);
            }
            MenuItem::Raise => {
                app.cfg_raise = app.cfg_raise.saturating_add(BET_STEP);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > 1 {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::Trials => {
                app.cfg_trials = app.cfg_trials.saturating_sub(TRIALS_STEP).max(TRIALS_STEP);
            }
            MenuItem::Pot => {
                app.cfg_pot = app.cfg_pot.saturating_sub(POT_STEP);
            }
            MenuItem::Call => {
                app.cfg_call = app.cfg_call.saturating_sub(BET_STEP);
            }
            MenuItem::Raise => {
                app.cfg_raise = app.cfg_raise.saturating_sub(BET_STEP);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            Scene::Menu => Scene::Calculator,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_num_players = self.num_players;
        self.cfg_trials = self.trials;
        self.cfg_pot = self.wager.pot;
        self.cfg_call = self.wager.call;
        self.cfg_raise = self.wager.raise;
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.num_players = self.cfg_num_players.clamp(1, MAX_PLAYERS);
        self.trials = self.cfg_trials.max(1);
        self.wager = Wager::new(self.cfg_pot, self.cfg_call, self.cfg_raise);
        self.scene = Scene::Calculator;
        self.recompute();
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Calculator;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
