use tracing::debug;

use super::emoji::emoji_frequency;
use super::heatmap::activity_heatmap;
use super::overview::overview;
use super::timeline::{daily_timeline, month_activity, monthly_timeline, weekday_activity};
use super::users::busiest_users;
use super::words::{StopWords, top_words, word_cloud};
use crate::filters::{OVERALL, ParticipantFilter};
use crate::models::{MessageRecord, Report};

/// Compute every statistic for one participant selection
///
/// The analytics are independent reads over the same records, so they run as rayon join
/// tasks. The busiest-users ranking only makes sense for the whole group and is `None` when
/// a single sender is selected.
pub fn build_report(
    records: &[MessageRecord],
    filter: &ParticipantFilter,
    stop_words: &StopWords,
) -> Report {
    let ((summary, busy_users), (words, cloud)) = rayon::join(
        || {
            let busy = filter.is_all().then(|| busiest_users(records, true));
            (overview(records, filter), busy)
        },
        || (top_words(records, filter, stop_words), word_cloud(records, filter, stop_words)),
    );

    let ((emojis, heatmap), (timelines, activity)) = rayon::join(
        || rayon::join(|| emoji_frequency(records, filter), || activity_heatmap(records, filter)),
        || {
            rayon::join(
                || (monthly_timeline(records, filter), daily_timeline(records, filter)),
                || (weekday_activity(records, filter), month_activity(records, filter)),
            )
        },
    );

    debug!(
        participant = filter.name().unwrap_or(OVERALL),
        messages = summary.messages,
        "Built report"
    );

    Report {
        participant: filter.name().map(str::to_string),
        overview: summary,
        busy_users,
        top_words: words,
        word_cloud: cloud,
        emojis,
        monthly_timeline: timelines.0,
        daily_timeline: timelines.1,
        weekday_activity: activity.0,
        month_activity: activity.1,
        heatmap,
    }
}
