// Padding is a minimum width, not a fixed width, so season or episode
// numbers of 100 and above keep all of their digits.
pub fn format_episode_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}
