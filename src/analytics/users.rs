use std::collections::BTreeSet;

use super::counter::OrderedCounter;
use crate::models::{BusyUsers, MessageRecord, UserCount, UserShare};

/// Number of senders in the busiest-users ranking
pub const TOP_USERS: usize = 5;

/// Busiest senders over the whole conversation
///
/// `top` holds the [`TOP_USERS`] senders with the most messages; `shares` ranks every sender
/// by their percentage of all messages, rounded to two decimals. Ties keep first-appearance
/// order. Group notifications count like any sender unless `include_notifications` is false,
/// in which case they are left out of both the counts and the total.
pub fn busiest_users(records: &[MessageRecord], include_notifications: bool) -> BusyUsers {
    let counter: OrderedCounter<&str> = records
        .iter()
        .filter(|record| include_notifications || !record.is_group_notification())
        .map(MessageRecord::sender)
        .collect();

    let total = counter.total();
    let ranked = counter.most_common(None);

    let shares = ranked
        .iter()
        .map(|&(user, count)| UserShare { user: user.to_string(), percent: percent(count, total) })
        .collect();
    let top = ranked
        .into_iter()
        .take(TOP_USERS)
        .map(|(user, count)| UserCount { user: user.to_string(), count })
        .collect();

    BusyUsers { top, shares }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}

/// Distinct human senders, sorted alphabetically
pub fn participants(records: &[MessageRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !record.is_group_notification())
        .map(|record| record.sender())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
