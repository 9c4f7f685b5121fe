use anyhow::Result;
use eframe::egui::{self, Color32, RichText, ScrollArea, TopBottomPanel, Ui};
use tracing::info;

use crate::alarm::format::TimeDisplayMode;
use crate::ui::screen::{AlarmScreen, ScreenAction};

const ACCENT: Color32 = Color32::from_rgb(74, 144, 226);
const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
const TEXT_MAIN: Color32 = Color32::from_rgb(51, 51, 51);
const TEXT_MUTED: Color32 = Color32::from_rgb(102, 102, 102);
const ALERT: Color32 = Color32::from_rgb(214, 69, 65);

pub fn run_gui(screen: AlarmScreen) -> Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Smart Alarm")
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    info!(events = screen.events().len(), "launching Smart Alarm window");
    let app = SmartAlarmApp { screen };

    eframe::run_native(
        "Smart Alarm",
        native_options,
        Box::new(move |cc| {
            configure_theme(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to launch Smart Alarm GUI: {err}"))?;

    Ok(())
}

fn configure_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(TEXT_MAIN);
    visuals.panel_fill = Color32::from_rgb(245, 245, 245);
    visuals.window_fill = Color32::WHITE;
    visuals.widgets.inactive.weak_bg_fill = ACCENT;
    visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(94, 160, 236);
    visuals.widgets.active.weak_bg_fill = Color32::from_rgb(58, 124, 204);
    visuals.selection.bg_fill = ACCENT;
    ctx.set_visuals(visuals);
}

struct SmartAlarmApp {
    screen: AlarmScreen,
}

impl SmartAlarmApp {
    fn show_header(&mut self, ui: &mut Ui) {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Smart Alarm")
                    .size(32.0)
                    .color(ACCENT)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = match self.screen.display_mode() {
                    TimeDisplayMode::Hour12 => "Switch to 24h",
                    TimeDisplayMode::Hour24 => "Switch to 12h",
                };
                if ui.button(label).clicked() {
                    self.screen.apply(ScreenAction::ToggleDisplayMode);
                }
            });
        });
        ui.label(RichText::new("Calendar-based wake-up assistant").color(TEXT_MUTED));
        ui.add_space(8.0);
    }

    fn show_buffer_section(&mut self, ui: &mut Ui) {
        section(ui, |ui| {
            ui.label(RichText::new("Buffer Time (Minutes)").size(16.0).strong());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("{} min", self.screen.buffer_minutes()))
                        .size(28.0)
                        .color(ACCENT)
                        .strong(),
                );
            });
            ui.columns(2, |columns| {
                if step_button(&mut columns[0], "-15 min").clicked() {
                    self.screen.apply(ScreenAction::DecreaseBuffer);
                }
                if step_button(&mut columns[1], "+15 min").clicked() {
                    self.screen.apply(ScreenAction::IncreaseBuffer);
                }
            });
        });
    }

    fn show_event_list(&self, ui: &mut Ui) {
        section(ui, |ui| {
            ui.label(RichText::new("Upcoming Events").size(16.0).strong());
            let events = self.screen.events();
            if events.is_empty() {
                ui.label(RichText::new("No events in the calendar.").color(ALERT));
                return;
            }
            let shared_date = self.screen.shared_event_date();
            if let Some(date) = &shared_date {
                ui.label(RichText::new(date).size(12.0).color(TEXT_MUTED));
            }
            egui::Grid::new("events_grid")
                .striped(true)
                .num_columns(2)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    for event in events {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&event.title).strong());
                            if shared_date.is_none() {
                                ui.label(
                                    RichText::new(self.screen.format_event_day(event))
                                        .size(11.0)
                                        .color(TEXT_MUTED),
                                );
                            }
                        });
                        ui.label(
                            RichText::new(self.screen.format_time(event))
                                .monospace()
                                .color(TEXT_MUTED),
                        );
                        ui.end_row();
                    }
                });
        });
    }

    fn show_sync_button(&mut self, ui: &mut Ui) {
        section(ui, |ui| {
            let button = egui::Button::new(
                RichText::new("Simulate Calendar Sync")
                    .size(16.0)
                    .color(Color32::WHITE)
                    .strong(),
            )
            .fill(SUCCESS)
            .min_size(egui::vec2(ui.available_width(), 44.0));
            if ui.add(button).clicked() {
                self.screen.apply(ScreenAction::SyncCalendar);
            }
            if let Some(message) = self.screen.status_message() {
                ui.label(RichText::new(message).color(ALERT).strong());
            }
        });
    }

    fn show_result(&self, ui: &mut Ui) {
        let Some(summary) = self.screen.result_summary() else {
            return;
        };
        section(ui, |ui| {
            ui.label(
                RichText::new("CALCULATED ALARM TIME:")
                    .size(12.0)
                    .color(TEXT_MUTED),
            );
            ui.label(
                RichText::new(&summary.alarm_time)
                    .size(42.0)
                    .color(SUCCESS)
                    .strong(),
            );
            ui.separator();
            detail_row(ui, "Earliest Event:", &summary.event_title);
            detail_row(ui, "Event Time:", &summary.event_time);
            detail_row(ui, "Buffer:", &format!("{} minutes", summary.buffer_minutes));
        });
    }

    fn show_how_it_works(&self, ui: &mut Ui) {
        section(ui, |ui| {
            ui.label(RichText::new("How it works:").strong());
            for line in [
                "1. Adjust the buffer time above (or use defaults)",
                "2. Tap \"Simulate Calendar Sync\" to calculate",
                "3. The app finds your earliest event",
                "4. It subtracts the buffer time to set your alarm",
            ] {
                ui.label(RichText::new(line).color(TEXT_MUTED));
            }
        });
    }
}

impl eframe::App for SmartAlarmApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header")
            .resizable(false)
            .show(ctx, |ui| self.show_header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("screen_scroll")
                .show(ui, |ui| {
                    self.show_buffer_section(ui);
                    self.show_event_list(ui);
                    self.show_sync_button(ui);
                    self.show_result(ui);
                    self.show_how_it_works(ui);
                });
        });
    }
}

fn section(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style())
        .fill(Color32::WHITE)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(20, 15))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(10.0);
}

fn step_button(ui: &mut Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).color(Color32::WHITE).strong())
            .fill(ACCENT)
            .min_size(egui::vec2(ui.available_width(), 36.0)),
    )
}

fn detail_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        ui.label(RichText::new(value).strong());
    });
}
