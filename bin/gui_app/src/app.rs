use app::app::App;
use app::view_state::ActiveView;
use std::sync::Arc;
use eframe;
use egui;
use open as cross_open;
use tokio;
use crate::episode_list::{GuiEpisodeList, render_episode_list};
use crate::show_list::{GuiShowList, render_show_list};

const TVMAZE_SITE_URL: &str = "https://www.tvmaze.com/";

pub struct GuiApp {
    pub(crate) app: Arc<App>,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) gui_show_list: GuiShowList,
    pub(crate) gui_episode_list: GuiEpisodeList,

    is_busy_watcher_spawned: bool,
}

impl GuiApp {
    pub fn new(app: Arc<App>, runtime: tokio::runtime::Runtime) -> Self {
        Self {
            app,
            runtime,
            gui_show_list: GuiShowList::new(),
            gui_episode_list: GuiEpisodeList::new(),
            is_busy_watcher_spawned: false,
        }
    }
}

fn render_attribution(ui: &mut egui::Ui, runtime: &tokio::runtime::Runtime) {
    ui.horizontal(|ui| {
        ui.label("Episode data is provided by");
        if ui.link("TVMaze.com").clicked() {
            runtime.spawn(async move {
                cross_open::that(TVMAZE_SITE_URL)
            });
        }
    });
}

fn render_errors_list(ui: &mut egui::Ui, errors: &mut Vec<String>) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        let layout = egui::Layout::top_down(egui::Align::Min).with_cross_justify(true);
        ui.with_layout(layout, |ui| {
            let mut selected_index = None;
            for (index, error) in errors.iter().enumerate().rev() {
                if ui.selectable_label(false, error.as_str()).clicked() {
                    selected_index = Some(index);
                }
            }

            if let Some(index) = selected_index {
                errors.remove(index);
            }
        });
    });
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Create a task that refreshes the ui when a fetch starts or finishes
        if !self.is_busy_watcher_spawned {
            self.is_busy_watcher_spawned = true;
            let ctx = ctx.clone();
            let app = self.app.clone();
            self.runtime.spawn(async move {
                let mut old_busy_count = None;
                loop {
                    let mut total_busy = 0;
                    if app.get_shows_busy_lock().try_lock().is_err() {
                        total_busy += 1;
                    }
                    if app.get_episodes_busy_lock().try_lock().is_err() {
                        total_busy += 1;
                    }

                    let is_refresh = old_busy_count != Some(total_busy);
                    old_busy_count = Some(total_busy);
                    if is_refresh {
                        ctx.request_repaint();
                    }
                    let duration = tokio::time::Duration::from_millis(100);
                    tokio::time::sleep(duration).await;
                }
            });
        }

        // The attribution stays on screen in every view
        egui::TopBottomPanel::bottom("attribution")
            .show(ctx, |ui| {
                render_attribution(ui, &self.runtime);
            });

        if let Ok(mut errors) = self.app.get_errors().try_write() {
            if !errors.is_empty() {
                egui::TopBottomPanel::bottom("error_list")
                    .resizable(true)
                    .show(ctx, |ui| {
                        render_errors_list(ui, errors.as_mut());
                    });
            }
        }

        let active_view = self.app.get_view_state().blocking_read().get_active_view();
        egui::CentralPanel::default()
            .show(ctx, |ui| {
                match active_view {
                    ActiveView::Shows => render_show_list(ui, &self.runtime, &mut self.gui_show_list, &self.app),
                    ActiveView::Episodes => render_episode_list(ui, &self.runtime, &mut self.gui_episode_list, &self.app),
                }
            });
    }
}
