use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::util::format_percent;

use super::super::ViewModel;
use super::super::render_utils::certainty_color;
use super::search::matching_indices;

impl ViewModel {
    pub(in crate::app) fn draw_entity_list(&mut self, ui: &mut Ui) {
        ui.heading("Entities");
        ui.add_space(6.0);

        let Some(active) = self
            .entities
            .active_index()
            .and_then(|index| self.entities.entities().get(index))
        else {
            ui.label("Nothing to show yet.");
            return;
        };
        ui.label(RichText::new(active.name.as_str()).strong());
        ui.label(format!(
            "{}  |  {}",
            format_percent(active.value),
            active.certainty.label()
        ));
        if let Some(avatar) = &active.avatar {
            ui.small(avatar.as_str());
        }
        ui.separator();

        let rows = matching_indices(self.entities.entities(), &self.search);
        if rows.is_empty() {
            ui.label("No names match the search.");
            return;
        }

        let mut clicked = None;
        egui::ScrollArea::vertical()
            .id_salt("entity_list_scroll")
            .auto_shrink([false, false])
            .show_rows(ui, 22.0, rows.len(), |ui, row_range| {
                for row in row_range {
                    let Some(&index) = rows.get(row) else {
                        continue;
                    };
                    let Some(entity) = self.entities.entities().get(index) else {
                        continue;
                    };

                    let row_clicked = ui
                        .horizontal(|ui| {
                            ui.colored_label(certainty_color(entity.certainty), "●");
                            let clicked = ui
                                .selectable_label(entity.active, entity.name.as_str())
                                .on_hover_text(entity.certainty.label())
                                .clicked();
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(format_percent(entity.value));
                            });
                            clicked
                        })
                        .inner;

                    if row_clicked {
                        clicked = Some(index);
                    }
                }
            });

        if let Some(index) = clicked {
            self.set_active(index);
        }
    }
}
