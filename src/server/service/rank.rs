//! Rank calculations shared by search results, company detail and hierarchy roll-ups.

/// Label shown in place of a rank for a company nobody has voted on
pub const NO_VOTES_LABEL: &str = "No votes";

/// Share of up votes as a percentage rounded to one decimal place
///
/// Returns `"0.0"` when there are no votes at all.
pub fn rank_percentage(up: i64, down: i64) -> String {
    let (up, down) = (up.max(0), down.max(0));
    let total = up + down;
    if total == 0 {
        return "0.0".to_string();
    }

    let percentage = up as f64 / total as f64 * 100.0;
    format!("{:.1}", (percentage * 10.0).round() / 10.0)
}

/// Share of up votes as a whole percentage, rounded half up
///
/// Returns `None` when there are no votes, which is distinct from a rank of 0%.
pub fn individual_rank(up: i64, down: i64) -> Option<u32> {
    let (up, down) = (up.max(0), down.max(0));
    let total = up + down;
    if total == 0 {
        return None;
    }

    Some(((200 * up + total) / (2 * total)) as u32)
}

pub fn rank_label(rank: Option<u32>) -> String {
    match rank {
        Some(percent) => format!("{}%", percent),
        None => NO_VOTES_LABEL.to_string(),
    }
}
