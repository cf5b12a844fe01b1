use crate::cards::{Card, Suit};
use crate::hand::Street;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_calculator(f: &mut Frame, app: &AppState) {
    let [header_area, cards_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Min(8),
        Constraint::Length(4),
    ])
    .areas(f.area());

    draw_header(f, app, header_area);
    draw_cards(f, app, cards_area);

    let [odds_area, ev_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);
    draw_odds(f, app, odds_area);
    draw_ev(f, app, ev_area);
    draw_status(f, app, status_area);

    if app.help_open() {
        draw_help(f);
    } else if app.entry_active() {
        draw_entry(f, app);
    }
}

fn street_label(app: &AppState) -> &'static str {
    app.report().map_or(Street::PreFlop, |r| r.street).label()
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::from(format!(
            "Players: {}   Trials: {}   Street: {}",
            app.num_players,
            app.trials,
            street_label(app)
        )),
        Line::from(format!(
            "Pot: ${}   Call: ${}   Raise: ${}   Contribution: ${}",
            app.wager.pot,
            app.wager.call,
            app.wager.raise,
            app.wager.contribution()
        )),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("poker-odds").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_cards(f: &mut Frame, app: &AppState, area: Rect) {
    let [hole_area, board_area] =
        Layout::horizontal([Constraint::Ratio(2, 7), Constraint::Ratio(5, 7)]).areas(area);
    let hole_block = Block::default().title("Hole").borders(Borders::ALL);
    let board_block = Block::default().title("Board").borders(Borders::ALL);
    f.render_widget(hole_block, hole_area);
    f.render_widget(board_block, board_area);

    let hole_slots = columns(inner(hole_area), AppState::HOLE_SLOTS);
    let board_slots = columns(inner(board_area), app.slots.len() - AppState::HOLE_SLOTS);
    for (i, slot_area) in hole_slots.into_iter().chain(board_slots).enumerate() {
        let border = if i == app.focus { Some(Color::Yellow) } else { None };
        render_card_widget(f, slot_area, app.slots[i], border);
    }
}

fn draw_odds(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("Chance by the river").borders(Borders::ALL);
    let body = inner(area);
    f.render_widget(block, area);

    let Some(report) = app.report() else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Enter both hole cards to see estimates.",
            Style::default().add_modifier(Modifier::DIM),
        )));
        f.render_widget(hint, body);
        return;
    };

    let bar_width = body.width.saturating_sub(26) as f64;
    let lines: Vec<Line> = report
        .sorted()
        .into_iter()
        .map(|(category, p)| {
            let style = if p >= 1.0 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if p == 0.0 {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default()
            };
            let bar = "█".repeat((p * bar_width).round() as usize);
            Line::from(vec![
                Span::styled(format!("{:<16}{:>7.2}% ", category.name(), p * 100.0), style),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), body);
}

fn draw_ev(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("Expected value").borders(Borders::ALL);
    let lines = match app.ev() {
        Some(res) => {
            let verdict = if res.expected_value > 0.0 {
                Span::styled("calling is +EV", Style::default().fg(Color::Green))
            } else {
                Span::styled("calling is -EV", Style::default().fg(Color::Red))
            };
            vec![
                Line::from(format!("Win:  {:>6.2}%", res.win_probability * 100.0)),
                Line::from(format!("Tie:  {:>6.2}%", res.tie_probability * 100.0)),
                Line::from(format!("Lose: {:>6.2}%", res.loss_probability() * 100.0)),
                Line::from(format!("EV:   ${:.2}", res.expected_value)),
                Line::from(""),
                Line::from(verdict),
                Line::from(Span::styled(
                    format!("{} trials", res.trials),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Press S to simulate.",
            Style::default().add_modifier(Modifier::DIM),
        ))],
    };
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(inner(area));

    let slot_name = if app.focus < AppState::HOLE_SLOTS {
        format!("Hole {}", app.focus + 1)
    } else {
        format!("Board {}", app.focus - AppState::HOLE_SLOTS + 1)
    };
    let mut info = vec![Line::from(format!("Slot: {slot_name}   type a card, e.g. AH or 10D"))];
    if let Some(err) = app.error() {
        info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let keys = vec![Line::from("S simulate • X clear"), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), left);
    f.render_widget(Paragraph::new(keys).alignment(Alignment::Right), right);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Cards:", bold)),
        Line::from("- Type rank then suit (2-10, J, Q, K, A + H/D/C/S)"),
        Line::from("- Enter: open entry / submit"),
        Line::from("- Left / Right, Tab: move between slots"),
        Line::from("- Home: first hole slot"),
        Line::from("- Backspace / Delete: clear slot"),
        Line::from("- X: clear every slot"),
        Line::from(""),
        Line::from(Span::styled("Odds:", bold)),
        Line::from("- Estimates refresh on every card change"),
        Line::from("- S: Monte Carlo win / tie / EV"),
        Line::from("- Hands of equal category split; kickers are ignored"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(40, 25, f.area());
    let current = app.entry_text().unwrap_or("");
    let lines = vec![
        Line::from(Span::styled(
            format!("{current}_"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter submit • Esc cancel"),
    ];
    let block = Block::default().title("Card").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let body = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let (glyph, style) = suit_glyph_and_style(c.suit());
        Line::from(Span::styled(format!("{}{glyph}", c.rank()), style))
    } else {
        Line::from(Span::styled("--", Style::default().add_modifier(Modifier::DIM)))
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), body);
}
