use app::app::App;
use app::episode_code::format_episode_code;
use app::search::filter_episodes;
use app::view_state::EpisodeSelection;
use egui;
use nanohtml2text;
use open as cross_open;
use std::sync::Arc;
use tokio;
use tvmaze::models::Episode;
use crate::search_bar::render_search_bar;

pub struct GuiEpisodeList {
    search_edit_line: String,
}

impl GuiEpisodeList {
    pub fn new() -> Self {
        Self {
            search_edit_line: "".to_string(),
        }
    }
}

impl Default for GuiEpisodeList {
    fn default() -> Self {
        Self::new()
    }
}

fn episode_label(episode: &Episode) -> String {
    format!("{} - {}", format_episode_code(episode.season, episode.number), episode.name)
}

fn render_episode_card(ui: &mut egui::Ui, runtime: &tokio::runtime::Runtime, episode: &Episode) {
    ui.horizontal(|ui| {
        ui.strong(episode.name.as_str());
        let code = format_episode_code(episode.season, episode.number);
        if ui.link(code).clicked() {
            runtime.spawn({
                let episode_url = episode.url.clone();
                async move {
                    cross_open::that(episode_url)
                }
            });
        }
    });

    if let Some(airdate) = episode.airdate.as_deref() {
        ui.label(format!("Aired: {}", airdate));
    }

    let summary = match episode.summary.as_deref() {
        Some(summary) => nanohtml2text::html2text(summary).trim().to_string(),
        None => "No summary available".to_string(),
    };
    let gui_label = egui::Label::new(summary).wrap(true);
    ui.add(gui_label);
}

fn render_episode_selector(
    ui: &mut egui::Ui,
    gui: &mut GuiEpisodeList, app: &Arc<App>,
    episodes: &[Episode], selection: EpisodeSelection,
) {
    let mut new_selection = selection;
    let selected_text = match selection {
        EpisodeSelection::All => "All episodes".to_string(),
        EpisodeSelection::One(id) => episodes.iter()
            .find(|episode| episode.id == id)
            .map(episode_label)
            .unwrap_or_else(|| "All episodes".to_string()),
    };

    egui::ComboBox::from_id_source("episode_selector")
        .width(280.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut new_selection, EpisodeSelection::All, "All episodes");
            for episode in episodes.iter() {
                let label = episode_label(episode);
                ui.selectable_value(&mut new_selection, EpisodeSelection::One(episode.id), label);
            }
        });

    // Re-selecting the current entry is a no-op
    if new_selection != selection {
        if let EpisodeSelection::One(_) = new_selection {
            gui.search_edit_line.clear();
        }
        app.get_view_state().blocking_write().select_episode(new_selection);
    }
}

pub fn render_episode_list(
    ui: &mut egui::Ui, runtime: &tokio::runtime::Runtime,
    gui: &mut GuiEpisodeList, app: &Arc<App>,
) {
    let view_state = app.get_view_state().blocking_read().clone();
    let show_id = match view_state.get_selected_show_id() {
        Some(show_id) => show_id,
        None => {
            ui.label("No show selected");
            return;
        },
    };

    let mut is_back_pressed = false;
    ui.horizontal(|ui| {
        if ui.button("Back to shows").clicked() {
            is_back_pressed = true;
        }

        let shows = app.get_shows().blocking_read();
        let show_name = shows.as_ref()
            .and_then(|shows| shows.iter().find(|show| show.id == show_id))
            .map(|show| show.name.clone());
        match show_name {
            Some(name) => { ui.heading(name); },
            None => { ui.heading("Episodes"); },
        };
    });

    if is_back_pressed {
        gui.search_edit_line.clear();
        app.get_view_state().blocking_write().return_to_shows();
        return;
    }

    if app.get_episodes_busy_lock().try_lock().is_err() {
        ui.spinner();
        return;
    }

    let episodes = app.get_episodes().blocking_read();
    let episodes = match episodes.as_ref() {
        Some(episodes) => episodes,
        None => {
            ui.label("Could not load episodes");
            if ui.button("Retry").clicked() {
                runtime.spawn({
                    let app = app.clone();
                    async move {
                        app.select_show(show_id).await
                    }
                });
            }
            return;
        },
    };

    render_episode_selector(ui, gui, app, episodes.as_slice(), view_state.get_episode_selection());

    if render_search_bar(ui, &mut gui.search_edit_line) {
        app.get_view_state().blocking_write().set_search_term(gui.search_edit_line.as_str());
    }

    // Selection and term may have changed above, read them back
    let current = app.get_view_state().blocking_read();
    let visible = filter_episodes(episodes.as_slice(), current.get_episode_selection(), current.get_search_term());
    drop(current);

    ui.label(format!("{} of {} episodes", visible.len(), episodes.len()));
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        let layout = egui::Layout::top_down(egui::Align::Min).with_cross_justify(true);
        ui.with_layout(layout, |ui| {
            for index in visible {
                render_episode_card(ui, runtime, &episodes[index]);
                ui.separator();
            }
        });
    });
}
