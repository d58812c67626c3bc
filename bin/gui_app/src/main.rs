use app::app::App;
use std::sync::Arc;
use gui_app::app::GuiApp;
use tracing_subscriber::EnvFilter;

struct FailedGuiApp {
    message: String,
}

impl FailedGuiApp {
    fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl eframe::App for FailedGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .show(ctx, |ui| {
                let label = egui::RichText::new(self.message.as_str()).color(egui::Color32::DARK_RED);
                ui.heading(label);
            });
    }
}

fn main() -> Result<(), eframe::Error> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let native_options = eframe::NativeOptions {
        maximized: true,
        ..Default::default()
    };

    eframe::run_native(
        "TVMaze Episode Browser",
        native_options,
        Box::new(move |_| {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    let message = format!("Failed to create tokio runtime: {}", err);
                    tracing::error!("{}", message);
                    return Box::new(FailedGuiApp::new(message));
                },
            };

            let app = Arc::new(App::new());
            runtime.spawn({
                let app = app.clone();
                async move {
                    app.load_shows().await
                }
            });

            let gui = GuiApp::new(app, runtime);
            Box::new(gui)
        }),
    )
}
