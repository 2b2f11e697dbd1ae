// ui.rs - egui front end drawing one square per cell

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::Duration;

use crate::app::{GameOfLife, GameOfLifeInterface};
use conway::{patterns, WrapPolicy};

/// Largest and smallest drawn cell edge, in points.
const MAX_BOX_SIZE: f32 = 15.0;
const MIN_BOX_SIZE: f32 = 3.0;
const SPACING: f32 = 0.5;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.step_if_due() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    if self.is_running { self.pause(); } else { self.start(); }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Tick")).clicked() {
                    self.update_generation();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("🎞 Animate")).clicked() {
                    self.start_animation();
                }
                ui.add(egui::DragValue::new(&mut self.animate_frames).clamp_range(1..=10_000).suffix(" frames"));

                if ui.button("⏹ Clear").clicked() {
                    self.pause();
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.pause();
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.pause();
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            // Speed, edges, stepping mode and colors
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                let mut wrapped = self.sim().wrap().is_wrapped();
                if ui.checkbox(&mut wrapped, "Wrap edges").changed() {
                    self.set_wrap(WrapPolicy::from(wrapped));
                }

                let mut coro = self.uses_row_coroutines();
                if ui.checkbox(&mut coro, "Row coroutines").changed() {
                    self.set_row_coroutines(coro);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.sim().generation()));
                if let Some(left) = self.frames_remaining() {
                    ui.label(format!("({left} frames left)"));
                }
            });
            ui.label("Click cells to toggle them alive/dead while paused.");

            ui.separator();

            self.draw_grid(ui);

            ui.separator();

            let total = self.sim().grid().rows() * self.sim().grid().cols();
            let live_cells = self.sim().grid().live_count();
            let population = if total == 0 { 0.0 } else { live_cells as f32 / total as f32 * 100.0 };

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", population));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl GameOfLife {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let (rows, cols) = (self.sim().grid().rows(), self.sim().grid().cols());
        if rows == 0 || cols == 0 {
            ui.label("Empty grid");
            return;
        }

        // Shrink cells to fit the window, within limits
        let available = ui.available_size();
        let fit = ((available.x + SPACING) / cols as f32)
            .min((available.y - 40.0 + SPACING) / rows as f32)
            - SPACING;
        let box_size = fit.clamp(MIN_BOX_SIZE, MAX_BOX_SIZE);
        let pitch = box_size + SPACING;

        let total_size = Vec2::new(pitch * cols as f32 - SPACING, pitch * rows as f32 - SPACING);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let start_pos = response.rect.min;

        // Fill background
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for (row, cells) in self.sim().grid().row_slices().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    egui::pos2(start_pos.x + col as f32 * pitch, start_pos.y + row as f32 * pitch),
                    Vec2::splat(box_size),
                );

                // Choose color based on cell state
                let cell_color = if cell.is_alive() { self.live_color } else { self.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Map a click straight to its cell
        if !self.is_running && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - start_pos;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    let col = (offset.x / pitch) as usize;
                    let row = (offset.y / pitch) as usize;
                    self.toggle_cell(row, col);
                }
            }
        }
    }
}
