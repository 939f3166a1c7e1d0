//! Main application for the Renju GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{Difficulty, GameConfig, Stone};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameSession};
use super::theme::*;

/// Main Renju application
pub struct RenjuApp {
    session: GameSession,
    board_view: BoardView,
    /// Forbidden rule under the pointer, shown in the side panel
    hover_forbidden: Option<crate::ForbiddenMove>,
    show_debug: bool,
}

impl RenjuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            session: GameSession::new(config, GameMode::default()),
            board_view: BoardView::default(),
            hover_forbidden: None,
            show_debug: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let modes = [
                        ("New Game (PvE - Black)", GameMode::PvE { human_color: Stone::Black }),
                        ("New Game (PvE - White)", GameMode::PvE { human_color: Stone::White }),
                        ("New Game (PvP)", GameMode::PvP),
                        ("New Game (AI vs AI)", GameMode::EvE),
                    ];
                    for (label, mode) in modes {
                        if ui.button(label).clicked() {
                            self.session.restart(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.radio_value(&mut self.session.difficulty, difficulty, difficulty.label());
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} | {}", self.session.mode.label(), self.session.difficulty));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(reason) = self.hover_forbidden {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &format!("Forbidden for Black: {reason}"));
                }

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(winner) = self.session.game.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("RENJU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.session.game.board().size();
            ui.label(RichText::new(format!("{size}x{size}")).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.game.current_player();
            let (fill, text) = if turn == Stone::Black {
                (BLACK_STONE, TEXT_PRIMARY)
            } else {
                (WHITE_STONE, BLACK_STONE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    self.session.game.move_count().to_string(),
                    egui::FontId::proportional(14.0),
                    text,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.session.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("AI to move", STATUS_BUSY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.session.undo();
                }
                if ui.button("New Game (N)").clicked() {
                    self.session.reset();
                }
            });

            ui.add_space(8.0);
            egui::ComboBox::from_label("Difficulty")
                .selected_text(self.session.difficulty.label())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(&mut self.session.difficulty, difficulty, difficulty.label());
                    }
                });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_BUSY),
                );
            }

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{} / {:?}", result.difficulty, result.search_type))
                    .size(11.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{}ms, {} evaluated", result.time_ms, result.evaluated))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            if let Some(pos) = result.best_move {
                let col = (b'A' + pos.x) as char;
                ui.label(
                    RichText::new(format!("-> {col}{}", pos.y + 1))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    if let Some(line) = self.session.game.win_line() {
                        ui.label(
                            RichText::new(format!("{} in a row", line.length))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let accepts_input = self.session.is_human_turn() && !self.session.is_ai_thinking();
            let input = self.board_view.show(ui, &self.session.game, accepts_input);
            self.hover_forbidden = input.hover_forbidden;

            if let Some(pos) = input.clicked {
                self.session.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for RenjuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();
        if self.session.is_ai_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
