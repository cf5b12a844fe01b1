mod calculator;
mod layout;
mod menu;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Calculator => calculator::draw_calculator(f, app),
    }
}
