use serde;

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Image {
    pub medium: String,
    pub original: String,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Rating {
    pub average: Option<f64>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Show {
    pub id: u32,
    pub url: String,
    pub name: String,
    pub genres: Vec<String>,
    pub status: String,
    pub runtime: Option<u32>,
    pub rating: Rating,
    pub image: Option<Image>,
    pub summary: Option<String>,
}

#[derive(serde::Deserialize, serde::Serialize, Debug, Clone)]
pub struct Episode {
    pub id: u32,
    pub url: String,
    pub name: String,
    pub season: u32,
    pub number: u32,
    pub airdate: Option<String>,
    pub image: Option<Image>,
    pub summary: Option<String>,
}

pub fn sort_shows_by_name(shows: &mut [Show]) {
    shows.sort_by(|a, b| {
        let a_name = a.name.to_lowercase();
        let b_name = b.name.to_lowercase();
        a_name.cmp(&b_name)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_show(id: u32, name: &str) -> Show {
        Show {
            id,
            url: format!("https://www.tvmaze.com/shows/{}", id),
            name: name.to_string(),
            genres: Vec::new(),
            status: "Ended".to_string(),
            runtime: None,
            rating: Rating { average: None },
            image: None,
            summary: None,
        }
    }

    #[test]
    fn test_show_deserialize_ignores_unknown_fields() {
        let body = r#"{
            "id": 82,
            "url": "https://www.tvmaze.com/shows/82/game-of-thrones",
            "name": "Game of Thrones",
            "type": "Scripted",
            "language": "English",
            "genres": ["Drama", "Adventure", "Fantasy"],
            "status": "Ended",
            "runtime": 60,
            "premiered": "2011-04-17",
            "rating": {"average": 8.9},
            "weight": 99,
            "image": {
                "medium": "https://static.tvmaze.com/uploads/images/medium_portrait/498/1245274.jpg",
                "original": "https://static.tvmaze.com/uploads/images/original_untouched/498/1245274.jpg"
            },
            "summary": "<p>Seven noble families fight for control of the mythical land of Westeros.</p>"
        }"#;
        let show: Show = serde_json::from_str(body).unwrap();
        assert_eq!(show.id, 82);
        assert_eq!(show.name, "Game of Thrones");
        assert_eq!(show.genres, vec!["Drama", "Adventure", "Fantasy"]);
        assert_eq!(show.status, "Ended");
        assert_eq!(show.runtime, Some(60));
        assert_eq!(show.rating.average, Some(8.9));
        assert!(show.image.is_some());
    }

    #[test]
    fn test_show_deserialize_with_null_optionals() {
        let body = r#"{
            "id": 100,
            "url": "https://www.tvmaze.com/shows/100",
            "name": "Some Obscure Show",
            "genres": [],
            "status": "In Development",
            "runtime": null,
            "rating": {"average": null},
            "image": null,
            "summary": null
        }"#;
        let show: Show = serde_json::from_str(body).unwrap();
        assert!(show.genres.is_empty());
        assert_eq!(show.runtime, None);
        assert_eq!(show.rating.average, None);
        assert!(show.image.is_none());
        assert!(show.summary.is_none());
    }

    #[test]
    fn test_episode_deserialize() {
        let body = r#"{
            "id": 4952,
            "url": "https://www.tvmaze.com/episodes/4952/game-of-thrones-1x01-winter-is-coming",
            "name": "Winter Is Coming",
            "season": 1,
            "number": 1,
            "type": "regular",
            "airdate": "2011-04-17",
            "airtime": "21:00",
            "runtime": 60,
            "image": null,
            "summary": "<p>Lord Eddard Stark is summoned to court.</p>"
        }"#;
        let episode: Episode = serde_json::from_str(body).unwrap();
        assert_eq!(episode.id, 4952);
        assert_eq!(episode.season, 1);
        assert_eq!(episode.number, 1);
        assert_eq!(episode.airdate.as_deref(), Some("2011-04-17"));
    }

    #[test]
    fn test_sort_shows_by_name_is_case_insensitive() {
        let mut shows = vec![
            make_show(1, "the Wire"),
            make_show(2, "Breaking Bad"),
            make_show(3, "archer"),
            make_show(4, "Better Call Saul"),
        ];
        sort_shows_by_name(shows.as_mut_slice());
        let names: Vec<&str> = shows.iter().map(|show| show.name.as_str()).collect();
        assert_eq!(names, vec!["archer", "Better Call Saul", "Breaking Bad", "the Wire"]);
    }
}
