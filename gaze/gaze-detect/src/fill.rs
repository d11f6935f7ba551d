//! Gap filling: classify the timesteps no detector claimed.

use gaze_types::{Event, EventKind, EventList, Timestep};
use tracing::info;

use crate::error::{DetectError, Result};
use crate::signal::consecutive_runs;

/// Emits one event per maximal span of timesteps not covered by `events`.
///
/// A boolean mask over `timesteps` is marked for every event overlapping
/// the recorded range: the event is clipped to the range bounds, then the
/// timesteps at or after the clipped onset and strictly before the clipped
/// offset are covered. Offsets are exclusive, so an event's offset timestep
/// stays a gap candidate; and because offsets clip to the final timestep
/// value, an event beginning at the final timestep covers nothing. The
/// unmarked timesteps are grouped into maximal consecutive runs; runs
/// spanning less than `minimum_duration` are dropped, the rest become
/// events of `kind`.
///
/// One convention here differs from the sample detectors and is part of
/// this function's contract: emitted gap events span `[onset, offset]`
/// with an INCLUSIVE offset, where onset is the first and offset the last
/// missing timestep.
///
/// A fully covered recording yields an empty list, never a zero-length
/// event.
///
/// # Example
///
/// ```
/// use gaze_detect::fill;
/// use gaze_types::{Event, EventKind, EventList};
///
/// let timesteps: Vec<i64> = (0..100).collect();
/// let mut detected = EventList::new();
/// detected.push(Event::new(EventKind::Fixation, 10, 100)?);
///
/// let gaps = fill(&detected, &timesteps, 1, EventKind::Unclassified)?;
/// assert_eq!(gaps.len(), 1);
/// assert_eq!(gaps.first().map(|e| (e.onset(), e.offset())), Some((0, 9)));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`DetectError::NonPositiveParameter`] if `minimum_duration < 1`
/// and [`DetectError::UnsortedTimesteps`] if `timesteps` is not strictly
/// increasing.
#[allow(clippy::cast_precision_loss)]
pub fn fill(
    events: &EventList,
    timesteps: &[Timestep],
    minimum_duration: i64,
    kind: EventKind,
) -> Result<EventList> {
    if minimum_duration < 1 {
        return Err(DetectError::non_positive(
            "minimum_duration",
            minimum_duration as f64,
        ));
    }
    if let Some(index) = first_unsorted(timesteps) {
        return Err(DetectError::unsorted_timesteps(index));
    }

    let Some((&first, &last)) = timesteps.first().zip(timesteps.last()) else {
        return Ok(EventList::new());
    };

    info!(
        timesteps = timesteps.len(),
        events = events.len(),
        minimum_duration,
        "Starting gap fill"
    );

    let mut covered = vec![false; timesteps.len()];
    for event in events {
        if event.offset() < first || event.onset() > last {
            continue;
        }
        let onset = event.onset().max(first);
        let offset = event.offset().min(last);

        let start = timesteps.partition_point(|&t| t < onset);
        let end = timesteps.partition_point(|&t| t < offset);
        for flag in &mut covered[start..end] {
            *flag = true;
        }
    }

    let candidates: Vec<usize> = covered
        .iter()
        .enumerate()
        .filter(|(_, &flag)| !flag)
        .map(|(index, _)| index)
        .collect();

    let mut gaps = EventList::new();
    for (first_pos, last_pos) in consecutive_runs(&candidates) {
        if timesteps[last_pos] - timesteps[first_pos] < minimum_duration {
            continue;
        }
        gaps.push(Event::new(
            kind.clone(),
            timesteps[first_pos],
            timesteps[last_pos],
        )?);
    }

    info!(gaps = gaps.len(), "Gap fill complete");
    Ok(gaps)
}

/// Returns the index of the first timestep that is not strictly greater
/// than its predecessor.
fn first_unsorted(timesteps: &[Timestep]) -> Option<usize> {
    timesteps
        .windows(2)
        .position(|pair| pair[1] <= pair[0])
        .map(|i| i + 1)
}
