use reqwest;
use std::sync::Arc;
use tokio;
use tokio::sync::{Mutex, RwLock};
use tracing;
use tvmaze::api::{ApiError, Client};
use tvmaze::models::{Episode, Show};
use crate::episode_cache::EpisodeCache;
use crate::view_state::ViewState;

pub struct App {
    api: Arc<Client>,

    shows: Arc<RwLock<Option<Vec<Show>>>>,
    episodes: Arc<RwLock<Option<Vec<Episode>>>>,
    episode_cache: Arc<RwLock<EpisodeCache>>,
    view_state: Arc<RwLock<ViewState>>,

    shows_busy_lock: Arc<Mutex<()>>,
    episodes_busy_lock: Arc<Mutex<()>>,

    errors: Arc<RwLock<Vec<String>>>,
}

impl App {
    pub fn new() -> App {
        Self::with_api(Client::new(Arc::new(reqwest::Client::new())))
    }

    pub fn with_api(api: Client) -> App {
        App {
            api: Arc::new(api),
            shows: Arc::new(RwLock::new(None)),
            episodes: Arc::new(RwLock::new(None)),
            episode_cache: Arc::new(RwLock::new(EpisodeCache::new())),
            view_state: Arc::new(RwLock::new(ViewState::new())),
            shows_busy_lock: Arc::new(Mutex::new(())),
            episodes_busy_lock: Arc::new(Mutex::new(())),
            errors: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl App {
    pub async fn load_shows(&self) -> Option<()> {
        let _busy_lock = self.shows_busy_lock.lock().await;

        let shows = match self.api.get_shows().await {
            Ok(shows) => shows,
            Err(err) => {
                self.push_error("Failed to load shows", err).await;
                return None;
            },
        };

        tracing::info!("loaded {} shows from the catalog", shows.len());
        *self.shows.write().await = Some(shows);
        Some(())
    }

    pub async fn select_show(&self, show_id: u32) -> Option<()> {
        self.view_state.write().await.select_show(show_id);

        let cached = self.episode_cache.read().await.get(show_id).cloned();
        if let Some(episodes) = cached {
            return self.install_episodes(show_id, episodes).await;
        }

        let _busy_lock = self.episodes_busy_lock.lock().await;
        *self.episodes.write().await = None;

        let episodes = match self.api.get_episodes(show_id).await {
            Ok(episodes) => episodes,
            Err(err) => {
                self.push_error("Could not load episodes", err).await;
                return None;
            },
        };

        tracing::info!("loaded {} episodes for show {}", episodes.len(), show_id);
        self.episode_cache.write().await.insert(show_id, episodes.clone());
        self.install_episodes(show_id, episodes).await
    }

    // A fetch that resolves after the user has navigated elsewhere must not
    // overwrite the episodes belonging to the newer selection.
    async fn install_episodes(&self, show_id: u32, episodes: Vec<Episode>) -> Option<()> {
        let (view_state, mut current_episodes) = tokio::join!(
            self.view_state.read(),
            self.episodes.write(),
        );
        if view_state.get_selected_show_id() != Some(show_id) {
            tracing::debug!("discarding stale episode response for show {}", show_id);
            return None;
        }
        *current_episodes = Some(episodes);
        Some(())
    }

    async fn push_error(&self, message: &str, err: ApiError) {
        tracing::error!("{}: {}", message, err);
        self.errors.write().await.push(format!("{}: {}", message, err));
    }

    pub fn get_shows(&self) -> &Arc<RwLock<Option<Vec<Show>>>> {
        &self.shows
    }

    pub fn get_episodes(&self) -> &Arc<RwLock<Option<Vec<Episode>>>> {
        &self.episodes
    }

    pub fn get_episode_cache(&self) -> &Arc<RwLock<EpisodeCache>> {
        &self.episode_cache
    }

    pub fn get_view_state(&self) -> &Arc<RwLock<ViewState>> {
        &self.view_state
    }

    pub fn get_shows_busy_lock(&self) -> &Arc<Mutex<()>> {
        &self.shows_busy_lock
    }

    pub fn get_episodes_busy_lock(&self) -> &Arc<Mutex<()>> {
        &self.episodes_busy_lock
    }

    pub fn get_errors(&self) -> &Arc<RwLock<Vec<String>>> {
        &self.errors
    }
}
