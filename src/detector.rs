use std::cmp::Reverse;

use itertools::Itertools;

use crate::opendota::RecentMatch;

/// Start time of the last match we notified about. Lives only in memory,
/// `None` until the first successful poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastNotified(pub Option<i64>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection<'m> {
    /// nothing was recorded yet, the newest match becomes the baseline
    Baseline(&'m RecentMatch),
    /// newest match is not newer than the recorded one
    Unchanged,
    NewMatch(&'m RecentMatch),
}

/// Newest match of the list: a stable sort by descending start time, first
/// element wins. Matches sharing the newest start time keep the feed order.
pub fn newest(matches: &[RecentMatch]) -> Option<&RecentMatch> {
    matches
        .iter()
        .sorted_by_key(|mat| Reverse(mat.start_time))
        .next()
}

/// Compares the newest match of `matches` against `last`. Returns the
/// updated state alongside the outcome; the state moves forward as soon as
/// a newer match is seen, whatever happens to it afterwards.
pub fn detect(
    last: LastNotified,
    matches: &[RecentMatch],
) -> (LastNotified, Option<Detection<'_>>) {
    let Some(candidate) = newest(matches) else {
        return (last, None);
    };
    let detection = match last.0 {
        None => Detection::Baseline(candidate),
        Some(start_time) if candidate.start_time <= start_time => Detection::Unchanged,
        Some(_) => Detection::NewMatch(candidate),
    };
    let last = match detection {
        Detection::Unchanged => last,
        _ => LastNotified(Some(candidate.start_time)),
    };
    (last, Some(detection))
}
