use crate::search::normalize_term;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Shows,
    Episodes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeSelection {
    All,
    One(u32),
}

// Every view mutation goes through the transition methods below so the
// search-vs-selection exclusivity holds no matter which control fired.
#[derive(Debug, Clone)]
pub struct ViewState {
    active_view: ActiveView,
    selected_show_id: Option<u32>,
    episode_selection: EpisodeSelection,
    search_term: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_view: ActiveView::Shows,
            selected_show_id: None,
            episode_selection: EpisodeSelection::All,
            search_term: "".to_string(),
        }
    }

    pub fn get_active_view(&self) -> ActiveView {
        self.active_view
    }

    pub fn get_selected_show_id(&self) -> Option<u32> {
        self.selected_show_id
    }

    pub fn get_episode_selection(&self) -> EpisodeSelection {
        self.episode_selection
    }

    pub fn get_search_term(&self) -> &str {
        self.search_term.as_str()
    }

    pub fn select_show(&mut self, show_id: u32) {
        self.active_view = ActiveView::Episodes;
        self.selected_show_id = Some(show_id);
        self.episode_selection = EpisodeSelection::All;
        self.search_term.clear();
    }

    pub fn return_to_shows(&mut self) {
        self.active_view = ActiveView::Shows;
        self.selected_show_id = None;
        self.episode_selection = EpisodeSelection::All;
        self.search_term.clear();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = normalize_term(term);
        self.episode_selection = EpisodeSelection::All;
    }

    pub fn select_episode(&mut self, selection: EpisodeSelection) {
        self.episode_selection = selection;
        if let EpisodeSelection::One(_) = selection {
            self.search_term.clear();
        }
    }
}
