use lazy_static::lazy_static;
use ratatui::prelude::*;

pub const PAST_TITLE: &str = "Passé depuis moins d'une heure";
pub const NEXT_TITLE: &str = "Dans moins d'une heure";
pub const EMPTY_GROUP: &str = "Aucun pays dans cette fenêtre";
pub const LOADING_MESSAGE: &str = "Loading countries...";

lazy_static! {
    pub static ref DARK_CYAN: Color = Color::Rgb(20, 80, 80);
    pub static ref LIGHT_RED: Color = Color::Rgb(255, 150, 150);
    pub static ref STATUS_STYLE: Style = Style::default().fg(Color::White).bg(*DARK_CYAN);
    pub static ref ERROR_STYLE: Style = Style::default().fg(*LIGHT_RED);
    pub static ref TITLE_STYLE: Style = Style::default().fg(Color::White);
    pub static ref FEATURED_STYLE: Style = Style::default()
        .fg(*LIGHT_RED)
        .add_modifier(Modifier::BOLD);
}
