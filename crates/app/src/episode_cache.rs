use tvmaze::models::Episode;
use std::collections::HashMap;

// Session-scoped: entries are written once per show and never evicted.
pub struct EpisodeCache {
    entries: HashMap<u32, Vec<Episode>>,
}

impl Default for EpisodeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl EpisodeCache {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, show_id: u32) -> Option<&Vec<Episode>> {
        self.entries.get(&show_id)
    }

    pub fn insert(&mut self, show_id: u32, episodes: Vec<Episode>) {
        self.entries.insert(show_id, episodes);
    }
}
