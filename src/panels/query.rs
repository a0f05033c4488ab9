//! Query Panel
//!
//! Single-question interface to the fraud assistant: input field, Ask /
//! Example / Clear buttons, and the answer with raw diagnostics underneath.

use egui::{CollapsingHeader, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::state::QueryPanelState;

/// Example transaction id used by the Example button.
const EXAMPLE_TXN_ID: u64 = 12345;

/// Actions that can be triggered from the query panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPanelAction {
    None,
    Submit,
    FillExample(u64),
    Clear,
}

/// Render the query panel. Returns the action the user triggered, if any.
pub fn query_panel(ui: &mut Ui, state: &mut QueryPanelState) -> QueryPanelAction {
    let mut action = QueryPanelAction::None;

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Ask the fraud assistant").strong().size(14.0));
            if state.loading {
                ui.spinner();
            }
        });
        ui.add_space(4.0);

        let response = ui.add(
            TextEdit::singleline(&mut state.query)
                .hint_text("e.g. Is txn 12345 fraudulent?")
                .desired_width(ui.available_width()),
        );

        // Send on Enter, same as clicking Ask
        let enter_pressed = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let label = if state.loading { "Thinking..." } else { "Ask" };
            let ask = ui.add_enabled(!state.loading, egui::Button::new(label));
            if (ask.clicked() || enter_pressed) && !state.loading {
                action = QueryPanelAction::Submit;
            }

            if ui.button("Example").clicked() {
                action = QueryPanelAction::FillExample(EXAMPLE_TXN_ID);
            }

            if ui.button("Clear").clicked() {
                action = QueryPanelAction::Clear;
            }
        });

        if let Some(err) = &state.error {
            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new("Error:")
                        .color(Color32::from_rgb(248, 113, 113))
                        .strong(),
                );
                ui.label(RichText::new(err).color(Color32::from_rgb(248, 113, 113)));
            });
        }

        if let Some(resp) = &state.response {
            ui.add_space(8.0);
            egui::Frame::none()
                .fill(Color32::from_rgb(25, 25, 25))
                .rounding(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("Assistant")
                            .color(Color32::from_rgb(134, 239, 172))
                            .strong(),
                    );
                    ui.add_space(4.0);

                    ScrollArea::vertical().show(ui, |ui| {
                        // Answer verbatim, newlines preserved
                        ui.label(RichText::new(&resp.answer).monospace());

                        CollapsingHeader::new("Raw retrieved evidence")
                            .default_open(false)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(pretty_json(&resp.retrieved))
                                        .monospace()
                                        .size(11.0),
                                );
                            });

                        CollapsingHeader::new("Raw API response")
                            .default_open(false)
                            .show(ui, |ui| {
                                ui.label(RichText::new(pretty_json(resp)).monospace().size(11.0));
                            });
                    });
                });
        }
    });

    action
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unserializable>".to_string())
}
