// Word frequency counting: per-category aggregation and overlap resolution.
//
// WordCount and CategorySet are insertion-ordered: the order words and
// categories were first seen decides ties, both when resolving overlaps
// and when picking the top-N rows for output.

pub mod aggregate;
pub mod category;
pub mod count;
pub mod resolve;
