use crate::filters::ParticipantFilter;
use crate::models::{ActivityHeatmap, MessageRecord};

/// Weekday × hour-bucket counts for the selected participant
///
/// The grid is always 7 × 24; combinations without messages are zero.
pub fn activity_heatmap(records: &[MessageRecord], filter: &ParticipantFilter) -> ActivityHeatmap {
    filter.select(records).fold(ActivityHeatmap::empty(), |mut heatmap, record| {
        heatmap.increment(record.weekday(), record.hour_bucket());
        heatmap
    })
}
