use app::app::App;
use app::search::filter_shows;
use egui;
use nanohtml2text;
use std::sync::Arc;
use tokio;
use tvmaze::models::Show;
use crate::search_bar::render_search_bar;

pub struct GuiShowList {
    search_edit_line: String,
}

impl GuiShowList {
    pub fn new() -> Self {
        Self {
            search_edit_line: "".to_string(),
        }
    }
}

impl Default for GuiShowList {
    fn default() -> Self {
        Self::new()
    }
}

fn render_show_card(
    ui: &mut egui::Ui, runtime: &tokio::runtime::Runtime,
    gui: &mut GuiShowList, app: &Arc<App>, show: &Show,
) {
    let name = egui::RichText::new(show.name.as_str()).heading();
    if ui.button(name).clicked() {
        gui.search_edit_line.clear();
        runtime.spawn({
            let app = app.clone();
            let show_id = show.id;
            async move {
                app.select_show(show_id).await
            }
        });
    }

    egui::Grid::new(("show_card", show.id))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Status");
            ui.label(show.status.as_str());
            ui.end_row();

            ui.strong("Rating");
            let label = match show.rating.average {
                Some(average) => format!("{:.1}", average),
                None => "N/A".to_string(),
            };
            ui.label(label);
            ui.end_row();

            ui.strong("Genres");
            ui.label(show.genres.join(", "));
            ui.end_row();

            ui.strong("Runtime");
            let label = match show.runtime {
                Some(minutes) => format!("{} min", minutes),
                None => "?".to_string(),
            };
            ui.label(label);
            ui.end_row();
        });

    if let Some(summary) = show.summary.as_deref() {
        let text = nanohtml2text::html2text(summary);
        let gui_label = egui::Label::new(text.trim().to_string()).wrap(true);
        ui.add(gui_label);
    }
}

pub fn render_show_list(
    ui: &mut egui::Ui, runtime: &tokio::runtime::Runtime,
    gui: &mut GuiShowList, app: &Arc<App>,
) {
    ui.heading("TVMaze Show Catalog");

    if app.get_shows_busy_lock().try_lock().is_err() {
        ui.spinner();
        return;
    }

    let shows = app.get_shows().blocking_read();
    let shows = match shows.as_ref() {
        Some(shows) => shows,
        None => {
            ui.label("Failed to load shows");
            if ui.button("Retry").clicked() {
                runtime.spawn({
                    let app = app.clone();
                    async move {
                        app.load_shows().await
                    }
                });
            }
            return;
        },
    };

    if render_search_bar(ui, &mut gui.search_edit_line) {
        app.get_view_state().blocking_write().set_search_term(gui.search_edit_line.as_str());
    }

    let term = app.get_view_state().blocking_read().get_search_term().to_string();
    let visible = filter_shows(shows.as_slice(), term.as_str());
    ui.label(format!("{} of {} shows", visible.len(), shows.len()));
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let layout = egui::Layout::top_down(egui::Align::Min).with_cross_justify(true);
        ui.with_layout(layout, |ui| {
            for index in visible {
                render_show_card(ui, runtime, gui, app, &shows[index]);
                ui.separator();
            }
        });
    });
}
