use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator, FilterValue};
use crate::models::MessageRecord;

/// Keep the records matching `filter`, preserving their order
///
/// An empty expression keeps every record.
pub fn apply_filters(records: Vec<MessageRecord>, filter: &FilterExpr) -> Vec<MessageRecord> {
    if filter.is_empty() {
        return records;
    }

    records.into_iter().filter(|record| evaluate_filter(record, filter)).collect()
}

/// Evaluate the expression left to right against one record
pub fn evaluate_filter(record: &MessageRecord, filter: &FilterExpr) -> bool {
    let Some(first) = filter.filters.first() else {
        return true;
    };

    let mut result = evaluate_field_filter(record, first);
    for (operator, next) in filter.operators.iter().zip(filter.filters.iter().skip(1)) {
        let next_result = evaluate_field_filter(record, next);
        result = match operator {
            FilterOperator::And => result && next_result,
            FilterOperator::Or => result || next_result,
        };
    }

    result
}

fn evaluate_field_filter(record: &MessageRecord, filter: &FieldFilter) -> bool {
    match (filter.field, &filter.value) {
        (FilterField::User, FilterValue::Text(name)) => {
            record.sender().to_lowercase() == name.to_lowercase()
        }
        (FilterField::Since, FilterValue::Date(date)) => record.date() >= *date,
        (FilterField::Until, FilterValue::Date(date)) => record.date() <= *date,
        // Mismatched field/value pairs can only be built by hand; they match nothing
        _ => false,
    }
}
