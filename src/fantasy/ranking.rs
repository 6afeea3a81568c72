//! Position-relative ranking and display ordering.

use std::cmp::Ordering;
use tracing::debug;

use super::types::ProjectedPlayerRecord;
use crate::cli::types::UNKNOWN_POSITION;

/// Position literal whose group is left unranked (rank 0).
///
/// Upstream numeric-to-text coercion can turn a missing position into the
/// text `nan`; such rows are kept but never ranked.
pub const SKIPPED_POSITION: &str = "nan";

/// Blank positions are ranked together under `UNK`.
pub fn normalize_position(position: &str) -> &str {
    if position.trim().is_empty() {
        UNKNOWN_POSITION
    } else {
        position
    }
}

/// Descending by value, missing values last.
fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Assign `position_rank` within each position group.
///
/// Ranks by predicted points when any row carries a prediction, otherwise by
/// current fantasy points. Ties keep input order. The returned rows stay in
/// input order; sort them separately for display.
pub fn add_position_ranks(mut pool: Vec<ProjectedPlayerRecord>) -> Vec<ProjectedPlayerRecord> {
    let by_predicted = pool.iter().any(|r| r.predicted_points.is_some());
    let rank_value = |r: &ProjectedPlayerRecord| {
        if by_predicted {
            r.predicted_points
        } else {
            r.fantasy_points
        }
    };

    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (idx, record) in pool.iter_mut().enumerate() {
        record.position_rank = 0;
        let position = normalize_position(&record.stats.position).to_string();
        record.stats.position = position.clone();

        if position == SKIPPED_POSITION {
            continue;
        }
        match groups.iter_mut().find(|(p, _)| *p == position) {
            Some((_, members)) => members.push(idx),
            None => groups.push((position, vec![idx])),
        }
    }

    for (position, mut members) in groups {
        members.sort_by(|&a, &b| descending(rank_value(&pool[a]), rank_value(&pool[b])));
        debug!(%position, players = members.len(), "ranking position group");
        for (rank, idx) in members.into_iter().enumerate() {
            pool[idx].position_rank = rank as u32 + 1;
        }
    }

    pool
}

/// Stable sort by predicted points, highest first (unprojected rows last).
pub fn sort_by_predicted(pool: &mut [ProjectedPlayerRecord]) {
    pool.sort_by(|a, b| descending(a.predicted_points, b.predicted_points));
}
