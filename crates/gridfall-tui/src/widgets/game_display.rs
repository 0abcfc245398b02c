use gridfall_engine::{Game, GameState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::widgets::{BoardDisplay, ScoreDisplay, color, style};

/// Top-level game screen: the playfield with the score panel beside it,
/// plus a popup once the game has ended.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    game: &'a Game,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            game,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match self.game.state() {
            GameState::Running => color::WHITE,
            GameState::Over => color::RED,
        };

        let game_board = BoardDisplay::new(self.game.board())
            .falling_piece(self.game.falling_piece())
            .block(Block::bordered().border_style(border_style).style(style));
        let score_panel = ScoreDisplay::new(self.game).block(
            Block::bordered()
                .title(Line::from("SCORE").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );

        let [board_column, score_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(score_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [score_area] =
            Layout::vertical([Constraint::Length(score_panel.height())]).areas(score_column);

        let game_board_width = game_board.width();
        game_board.render(board_area, buf);
        score_panel.render(score_area, buf);

        if self.game.state().is_over() {
            let popup_style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(popup_style);
            let text = Text::styled("GAME OVER!!", popup_style).centered();
            let area =
                board_area.centered(Constraint::Length(game_board_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
