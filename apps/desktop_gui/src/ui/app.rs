use std::time::Duration;

use client_core::{DirectoryEvent, ListEntry, SelectControl};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce, ViewState};

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ViewState,
    name_input: String,
    first_name_choice: String,
    last_name_choice: String,
    load_signalled: bool,
}

impl DirectoryApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            view: ViewState::default(),
            name_input: String::new(),
            first_name_choice: String::new(),
            last_name_choice: String::new(),
            load_signalled: false,
        }
    }

    fn send(&mut self, event: DirectoryEvent) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Event(event),
            &mut self.view.status,
        );
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reduce(&mut self.view, event);
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.name_input)
                    .hint_text("name or relation")
                    .desired_width(220.0),
            );
            if response.changed() {
                let value = self.name_input.clone();
                self.send(DirectoryEvent::NameInput(value));
            }

            ui.separator();

            if name_select(
                ui,
                "first_name_select",
                &self.view.document.selectors.first_names,
                &mut self.first_name_choice,
            ) {
                let value = self.first_name_choice.clone();
                self.send(DirectoryEvent::FirstNameSelected(value));
            }
            if name_select(
                ui,
                "last_name_select",
                &self.view.document.selectors.last_names,
                &mut self.last_name_choice,
            ) {
                let value = self.last_name_choice.clone();
                self.send(DirectoryEvent::LastNameSelected(value));
            }
        });
    }

    fn show_list(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("people_list")
                .num_columns(3)
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for entry in self.view.document.list.entries() {
                        show_entry(ui, entry);
                    }
                });
        });
    }
}

/// Dropdown over a selector's placeholder and options. Returns true when the
/// choice changed this frame.
fn name_select(
    ui: &mut egui::Ui,
    id: &str,
    control: &SelectControl,
    choice: &mut String,
) -> bool {
    let previous = choice.clone();
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected_label(control, choice))
        .show_ui(ui, |ui| {
            if let Some(placeholder) = control.placeholder() {
                ui.selectable_value(choice, placeholder.value.clone(), placeholder.label.as_str());
            }
            for option in control.options() {
                ui.selectable_value(choice, option.value.clone(), option.label.as_str());
            }
        });
    *choice != previous
}

fn selected_label(control: &SelectControl, choice: &str) -> String {
    control
        .options()
        .iter()
        .chain(control.placeholder())
        .find(|option| option.value == choice)
        .map(|option| option.label.clone())
        .unwrap_or_default()
}

fn show_entry(ui: &mut egui::Ui, entry: &ListEntry) {
    for cell in &entry.cells {
        if entry.is_header() {
            ui.label(egui::RichText::new(cell.as_str()).strong());
        } else {
            ui.label(cell.as_str());
        }
    }
    ui.end_row();
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.load_signalled {
            self.load_signalled = true;
            self.send(DirectoryEvent::DocumentLoaded);
        }

        self.process_ui_events();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_controls(ui);
            ui.add_space(6.0);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.view.status.as_str());
        });
        egui::CentralPanel::default().show(ctx, |ui| self.show_list(ui));

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::selected_label;
    use client_core::{SelectControl, SelectOption};

    #[test]
    fn selected_label_prefers_matching_option() {
        let mut control = SelectControl::with_placeholder("First Name");
        control.append(SelectOption::new("Jo"));

        assert_eq!(selected_label(&control, "Jo"), "Jo");
        assert_eq!(selected_label(&control, ""), "First Name");
        assert_eq!(selected_label(&control, "Zed"), "");
    }
}
