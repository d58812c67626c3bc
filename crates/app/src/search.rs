use tvmaze::models::{Episode, Show};
use crate::view_state::EpisodeSelection;

pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

fn contains_term(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

// Filters return indices into the original storage so callers render from
// the unfiltered list and its ordering is never disturbed.
pub fn filter_shows(shows: &[Show], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..shows.len()).collect();
    }

    shows.iter()
        .enumerate()
        .filter(|(_, show)| {
            contains_term(show.name.as_str(), term)
                || show.summary.as_deref().map(|summary| contains_term(summary, term)).unwrap_or(false)
                || show.genres.iter().any(|genre| contains_term(genre.as_str(), term))
        })
        .map(|(index, _)| index)
        .collect()
}

pub fn filter_episodes(episodes: &[Episode], selection: EpisodeSelection, term: &str) -> Vec<usize> {
    if let EpisodeSelection::One(id) = selection {
        return episodes.iter()
            .enumerate()
            .filter(|(_, episode)| episode.id == id)
            .map(|(index, _)| index)
            .collect();
    }

    if term.is_empty() {
        return (0..episodes.len()).collect();
    }

    episodes.iter()
        .enumerate()
        .filter(|(_, episode)| {
            contains_term(episode.name.as_str(), term)
                || episode.summary.as_deref().map(|summary| contains_term(summary, term)).unwrap_or(false)
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvmaze::models::Rating;

    fn make_show(id: u32, name: &str, summary: Option<&str>, genres: &[&str]) -> Show {
        Show {
            id,
            url: format!("https://www.tvmaze.com/shows/{}", id),
            name: name.to_string(),
            genres: genres.iter().map(|genre| genre.to_string()).collect(),
            status: "Running".to_string(),
            runtime: Some(60),
            rating: Rating { average: None },
            image: None,
            summary: summary.map(|summary| summary.to_string()),
        }
    }

    fn make_episode(id: u32, name: &str, summary: Option<&str>) -> Episode {
        Episode {
            id,
            url: format!("https://www.tvmaze.com/episodes/{}", id),
            name: name.to_string(),
            season: 1,
            number: id,
            airdate: None,
            image: None,
            summary: summary.map(|summary| summary.to_string()),
        }
    }

    fn sample_shows() -> Vec<Show> {
        vec![
            make_show(82, "Game of Thrones", Some("<p>Noble families of Westeros.</p>"), &["Drama", "Fantasy"]),
            make_show(169, "Breaking Bad", Some("<p>A chemistry teacher turns to crime.</p>"), &["Drama", "Crime"]),
            make_show(118, "House", None, &["Medical"]),
        ]
    }

    #[test]
    fn test_empty_term_returns_full_list_in_order() {
        let shows = sample_shows();
        assert_eq!(filter_shows(shows.as_slice(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let shows = sample_shows();
        let upper = filter_shows(shows.as_slice(), &normalize_term("THRONES"));
        let lower = filter_shows(shows.as_slice(), &normalize_term("thrones"));
        assert_eq!(upper, lower);
        assert_eq!(upper, vec![0]);
    }

    #[test]
    fn test_filter_matches_summary_and_genres() {
        let shows = sample_shows();
        assert_eq!(filter_shows(shows.as_slice(), "westeros"), vec![0]);
        assert_eq!(filter_shows(shows.as_slice(), "drama"), vec![0, 1]);
    }

    #[test]
    fn test_show_without_summary_only_matches_other_fields() {
        let shows = sample_shows();
        assert_eq!(filter_shows(shows.as_slice(), "house"), vec![2]);
        assert_eq!(filter_shows(shows.as_slice(), "teacher"), vec![1]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let shows = sample_shows();
        let first = filter_shows(shows.as_slice(), "drama");
        let survivors: Vec<Show> = first.iter().map(|&index| shows[index].clone()).collect();
        let second = filter_shows(survivors.as_slice(), "drama");
        assert_eq!(second, (0..survivors.len()).collect::<Vec<usize>>());
    }

    #[test]
    fn test_episode_filter_by_term() {
        let episodes = vec![
            make_episode(1, "Winter Is Coming", Some("<p>Lord Stark is summoned.</p>")),
            make_episode(2, "The Kingsroad", None),
        ];
        assert_eq!(filter_episodes(episodes.as_slice(), EpisodeSelection::All, "winter"), vec![0]);
        assert_eq!(filter_episodes(episodes.as_slice(), EpisodeSelection::All, "stark"), vec![0]);
        assert_eq!(filter_episodes(episodes.as_slice(), EpisodeSelection::All, ""), vec![0, 1]);
    }

    #[test]
    fn test_specific_selection_overrides_term() {
        let episodes = vec![
            make_episode(1, "Winter Is Coming", None),
            make_episode(2, "The Kingsroad", None),
        ];
        assert_eq!(filter_episodes(episodes.as_slice(), EpisodeSelection::One(2), "winter"), vec![1]);
    }

    #[test]
    fn test_unknown_selection_yields_empty_list() {
        let episodes = vec![make_episode(1, "Winter Is Coming", None)];
        assert!(filter_episodes(episodes.as_slice(), EpisodeSelection::One(999), "").is_empty());
    }
}
