mod board;

use common::games::tictactoe::{GameMode, GameSnapshot, SessionCommand};
use eframe::egui;
use tokio::sync::mpsc;

use crate::state::SharedState;
use board::BoardUi;

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    board_ui: BoardUi,
}

impl GameApp {
    const INFO_PANEL_WIDTH: f32 = 220.0;

    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            board_ui: BoardUi::new(),
        }
    }

    fn send(&self, command: SessionCommand) {
        let _ = self.command_tx.send(command);
    }

    fn render_info_panel(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.heading("Tic Tac Toe");
        ui.separator();

        let hvh = ui.radio(snapshot.mode == GameMode::HumanVsHuman, "Two players");
        if hvh.clicked() && snapshot.mode != GameMode::HumanVsHuman {
            self.send(SessionCommand::ChangeMode(GameMode::HumanVsHuman));
        }

        let hvb = ui.radio(snapshot.mode == GameMode::HumanVsBot, "Against the bot");
        if hvb.clicked() && snapshot.mode != GameMode::HumanVsBot {
            self.send(SessionCommand::ChangeMode(GameMode::HumanVsBot));
        }

        if snapshot.mode == GameMode::HumanVsBot {
            ui.label("You: X / Bot: O");
        }

        ui.separator();

        if snapshot.round_active {
            if snapshot.bot_thinking {
                ui.horizontal(|ui| {
                    ui.label("Bot is thinking...");
                    ui.spinner();
                });
            } else {
                ui.colored_label(egui::Color32::GREEN, &snapshot.status_line);
            }
        } else {
            ui.label(egui::RichText::new(&snapshot.status_line).size(16.0).strong());
        }

        ui.separator();
        ui.heading("Score");
        ui.label(format!("X wins: {}", snapshot.score.x_wins));
        ui.label(format!("O wins: {}", snapshot.score.o_wins));
        ui.label(format!("Draws: {}", snapshot.score.draws));

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Restart Round").clicked() {
                self.send(SessionCommand::RestartRound);
            }
            if ui.button("New Game").clicked() {
                self.send(SessionCommand::NewGame);
            }
        });

        ui.separator();
        self.render_event_log(ui);
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        ui.heading("Rounds");

        let events = self.shared_state.get_events();

        egui::ScrollArea::vertical()
            .id_salt("round_log_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No rounds finished yet...")
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                } else {
                    for event in &events {
                        ui.label(event);
                    }
                }
            });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(snapshot) = self.shared_state.get_snapshot() else {
                ui.centered_and_justified(|ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Starting game...");
                        ui.spinner();
                    });
                });
                return;
            };

            let available_width = ui.available_width();
            let available_height = ui.available_height();
            let board_width = available_width - Self::INFO_PANEL_WIDTH;

            ui.horizontal(|ui| {
                ui.allocate_ui(egui::vec2(board_width, available_height), |ui| {
                    self.board_ui
                        .render(ui, &snapshot, &self.command_tx);
                });

                ui.separator();

                ui.vertical(|ui| {
                    self.render_info_panel(ui, &snapshot);
                });
            });
        });
    }
}
