//! Window membership.

use crate::types::MinuteOfDay;

/// `start <= now <= end`, inclusive at both ends.
///
/// There is no wrap past midnight: a window whose start is after its end is
/// never open.
pub fn is_open(now: MinuteOfDay, start: MinuteOfDay, end: MinuteOfDay) -> bool {
    start <= now && now <= end
}
