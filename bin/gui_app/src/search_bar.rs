use egui;

// Shared by both views. Returns true when the edit line changed so the
// caller can push the new term into the application state.
pub fn render_search_bar(ui: &mut egui::Ui, search_edit_line: &mut String) -> bool {
    let mut is_changed = false;
    let layout = egui::Layout::right_to_left(egui::Align::Min)
        .with_cross_justify(false)
        .with_main_justify(false)
        .with_main_wrap(false)
        .with_main_align(egui::Align::LEFT);

    ui.with_layout(layout, |ui| {
        if ui.button("Clear").clicked() && !search_edit_line.is_empty() {
            search_edit_line.clear();
            is_changed = true;
        }
        let elem = egui::TextEdit::singleline(search_edit_line).hint_text("Search");
        let size = egui::vec2(
            ui.available_width(),
            ui.spacing().interact_size.y,
        );
        let res = ui.add_sized(size, elem);
        if res.changed() {
            is_changed = true;
        }
    });
    is_changed
}
