use crate::models::{Dataset, UserTotals};
use std::collections::BTreeMap;

#[derive(Default)]
struct Tally {
    posts: u64,
    likes: u64,
    likes_seen: u64,
    comments: u64,
    comments_seen: u64,
}

/// Per-username totals for the bar charts, ordered by username.
/// Absent counts are left out of both sums and averages.
pub fn summarize(dataset: &Dataset) -> Vec<UserTotals> {
    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in dataset {
        let tally = tallies.entry(record.username.as_str()).or_default();
        tally.posts += 1;
        if let Some(likes) = record.likes {
            tally.likes = tally.likes.saturating_add(likes);
            tally.likes_seen += 1;
        }
        if let Some(comments) = record.comments {
            tally.comments = tally.comments.saturating_add(comments);
            tally.comments_seen += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(username, tally)| UserTotals {
            username: username.to_owned(),
            posts: tally.posts,
            likes: tally.likes,
            comments: tally.comments,
            avg_likes: average(tally.likes, tally.likes_seen),
            avg_comments: average(tally.comments, tally.comments_seen),
        })
        .collect()
}

fn average(sum: u64, seen: u64) -> Option<f64> {
    (seen > 0).then(|| sum as f64 / seen as f64)
}
