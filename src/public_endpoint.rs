use crate::{config::PublicEndpoint, domain::puzzle::PuzzleId};

/// returns url players can share to let others play the same day's puzzle
pub fn get_share_url(conf: &PublicEndpoint, puzzle: PuzzleId) -> String {
    let url = conf.base_url.trim_end_matches('/');
    format!("{url}/?date={puzzle}")
}
