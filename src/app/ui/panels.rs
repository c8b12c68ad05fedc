use eframe::egui::{self, Align, Context, Key, Layout};
use tracing::{debug, info};

use crate::entities::{Entity, EntitySet};
use crate::strip::{MarkerStrip, StripConfig};

use super::super::ViewModel;
use super::search::best_match;

impl ViewModel {
    pub(in crate::app) fn new(entities: Vec<Entity>, config: StripConfig) -> Self {
        Self {
            entities: EntitySet::new(entities),
            strip: MarkerStrip::new(config),
            search: String::new(),
        }
    }

    pub(in crate::app) fn replace_entities(&mut self, entities: Vec<Entity>) {
        info!(count = entities.len(), "replacing entity set");
        self.entities.replace(entities);
    }

    pub(in crate::app) fn set_active(&mut self, index: usize) {
        if self.entities.active_index() == Some(index) {
            return;
        }
        if self.entities.set_active_index(index) {
            debug!(index, "active entity changed");
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source_label: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("score-strip");
                    ui.separator();
                    ui.label(format!("source: {source_label}"));

                    let generate_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Generate new set"));
                    if generate_button.clicked() {
                        *reload_requested = true;
                    }

                    let cycle_button = ui.add_enabled(
                        self.entities.len() > 1,
                        egui::Button::new("Change active element"),
                    );
                    if cycle_button.clicked() {
                        self.entities.next_active();
                    }

                    ui.separator();
                    let search_response = ui.add(
                        egui::TextEdit::singleline(&mut self.search)
                            .hint_text("Find by name (Enter activates)")
                            .desired_width(220.0),
                    );
                    if search_response.lost_focus()
                        && ui.input(|input| input.key_pressed(Key::Enter))
                        && let Some(index) = best_match(self.entities.entities(), &self.search)
                    {
                        self.set_active(index);
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("entities: {}", self.entities.len()));
                        if is_loading {
                            ui.spinner();
                        }
                    });
                });
            });

        egui::SidePanel::right("entities")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_entity_list(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.entities.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label("This set has no entities.");
                });
            }
            self.draw_strip(ui);
        });
    }
}
