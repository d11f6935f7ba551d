//! Gaze event types.
//!
//! An [`Event`] is a labeled span of a recording: a fixation, a saccade, or
//! an unclassified region. Detectors produce [`EventList`]s, ordered by
//! detection order.

use nalgebra::Point2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GazeTypesError, Result};
use crate::units::{SampleIndex, Timestep};

/// The kind of a gaze event.
///
/// The three built-in kinds cover the standard taxonomy; [`EventKind::Custom`]
/// carries any other label a pipeline wants to attach.
///
/// # Example
///
/// ```
/// use gaze_types::EventKind;
///
/// assert_eq!(EventKind::Fixation.as_str(), "fixation");
/// assert_eq!(EventKind::from("fixation"), EventKind::Fixation);
/// assert_eq!(EventKind::from("blink"), EventKind::Custom("blink".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventKind {
    /// A period of relatively stable gaze position.
    Fixation,
    /// A rapid movement between fixations.
    Saccade,
    /// A span no detector claimed.
    Unclassified,
    /// A user-defined event label.
    Custom(String),
}

impl EventKind {
    /// Returns the canonical label for this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixation => "fixation",
            Self::Saccade => "saccade",
            Self::Unclassified => "unclassified",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "fixation" => Self::Fixation,
            "saccade" => Self::Saccade,
            "unclassified" => Self::Unclassified,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for EventKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "fixation" => Self::Fixation,
            "saccade" => Self::Saccade,
            "unclassified" => Self::Unclassified,
            _ => Self::Custom(name),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected gaze event.
///
/// Spans `[onset, offset)` in the emitting detector's timestep space: sample
/// detectors emit sample indices, the gap-fill detector emits timestep
/// values (with an inclusive offset, documented there). Duration is always
/// derived from the bounds, never stored.
///
/// # Example
///
/// ```
/// use gaze_types::{Event, EventKind};
///
/// let event = Event::new(EventKind::Fixation, 100, 250)?;
/// assert_eq!(event.duration(), 150);
/// assert!(event.position().is_none());
/// # Ok::<(), gaze_types::GazeTypesError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Event {
    kind: EventKind,
    onset: Timestep,
    offset: Timestep,
    position: Option<Point2<f64>>,
}

impl Event {
    /// Creates an event spanning `[onset, offset)`.
    ///
    /// # Errors
    ///
    /// Returns [`GazeTypesError::EmptyInterval`] if `offset <= onset`.
    pub fn new(kind: EventKind, onset: Timestep, offset: Timestep) -> Result<Self> {
        if offset <= onset {
            return Err(GazeTypesError::empty_interval(onset, offset));
        }
        Ok(Self {
            kind,
            onset,
            offset,
            position: None,
        })
    }

    /// Creates an event from sample-index bounds.
    ///
    /// Sample indices double as timestep values for recordings without an
    /// explicit timestep array.
    ///
    /// # Errors
    ///
    /// Returns [`GazeTypesError::EmptyInterval`] if `offset <= onset`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_samples(kind: EventKind, onset: SampleIndex, offset: SampleIndex) -> Result<Self> {
        Self::new(kind, onset as Timestep, offset as Timestep)
    }

    /// Attaches a position attribute (e.g. a fixation centroid).
    #[must_use]
    pub fn with_position(mut self, position: Point2<f64>) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Returns the onset (inclusive).
    #[must_use]
    pub const fn onset(&self) -> Timestep {
        self.onset
    }

    /// Returns the offset.
    ///
    /// Exclusive for sample-detector events; the gap-fill detector emits an
    /// inclusive offset (see `gaze-detect`).
    #[must_use]
    pub const fn offset(&self) -> Timestep {
        self.offset
    }

    /// Returns the duration, derived as `offset - onset`.
    #[must_use]
    pub const fn duration(&self) -> Timestep {
        self.offset - self.onset
    }

    /// Returns the position attribute, if any.
    #[must_use]
    pub const fn position(&self) -> Option<Point2<f64>> {
        self.position
    }
}

/// An ordered collection of gaze events.
///
/// Order is detection order. Events from one detector invocation never
/// overlap; merged lists may.
///
/// # Example
///
/// ```
/// use gaze_types::{Event, EventKind, EventList};
///
/// let mut events = EventList::new();
/// events.push(Event::new(EventKind::Fixation, 0, 50)?);
/// events.push(Event::new(EventKind::Saccade, 50, 60)?);
///
/// assert_eq!(events.len(), 2);
/// assert_eq!(events.of_kind(&EventKind::Fixation).count(), 1);
/// # Ok::<(), gaze_types::GazeTypesError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventList {
    events: Vec<Event>,
}

impl EventList {
    /// Creates an empty event list.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Creates an empty event list with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Appends all events from another list, preserving their order.
    pub fn merge(&mut self, other: Self) {
        self.events.extend(other.events);
    }

    /// Returns the number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Checks if the list contains no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Iterates over the events of one kind.
    pub fn of_kind<'a>(&'a self, kind: &'a EventKind) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    /// Returns the first event, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    /// Returns the last event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Drops all events shorter than `minimum`.
    pub fn retain_min_duration(&mut self, minimum: Timestep) {
        self.events.retain(|event| event.duration() >= minimum);
    }

    /// Consumes the list, returning the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<Event> {
        self.events
    }
}

impl From<Vec<Event>> for EventList {
    fn from(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl FromIterator<Event> for EventList {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EventList {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn event_kind_round_trips_builtin_names() {
        for kind in [
            EventKind::Fixation,
            EventKind::Saccade,
            EventKind::Unclassified,
        ] {
            assert_eq!(EventKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn event_kind_custom_label() {
        let kind = EventKind::from("blink");
        assert_eq!(kind, EventKind::Custom("blink".to_string()));
        assert_eq!(kind.as_str(), "blink");
    }

    #[test]
    fn event_duration_is_derived() {
        let event = Event::new(EventKind::Fixation, 100, 250).unwrap();
        assert_eq!(event.duration(), 150);
    }

    #[test]
    fn event_rejects_empty_interval() {
        assert!(Event::new(EventKind::Fixation, 10, 10).is_err());
        assert!(Event::new(EventKind::Fixation, 10, 5).is_err());
    }

    #[test]
    fn event_from_samples() {
        let event = Event::from_samples(EventKind::Saccade, 3, 8).unwrap();
        assert_eq!(event.onset(), 3);
        assert_eq!(event.offset(), 8);
    }

    #[test]
    fn event_position_attribute() {
        let event = Event::new(EventKind::Fixation, 0, 10)
            .unwrap()
            .with_position(Point2::new(1.5, -2.0));

        let position = event.position().unwrap();
        assert_relative_eq!(position.x, 1.5);
        assert_relative_eq!(position.y, -2.0);
    }

    #[test]
    fn event_list_preserves_order() {
        let mut events = EventList::new();
        events.push(Event::new(EventKind::Saccade, 50, 60).unwrap());
        events.push(Event::new(EventKind::Fixation, 0, 50).unwrap());

        assert_eq!(events.first().unwrap().onset(), 50);
        assert_eq!(events.last().unwrap().onset(), 0);
    }

    #[test]
    fn event_list_merge_appends() {
        let mut a: EventList = vec![Event::new(EventKind::Fixation, 0, 10).unwrap()]
            .into_iter()
            .collect();
        let b: EventList = vec![Event::new(EventKind::Saccade, 10, 20).unwrap()]
            .into_iter()
            .collect();

        a.merge(b);
        assert_eq!(a.len(), 2);
        assert_eq!(*a.last().unwrap().kind(), EventKind::Saccade);
    }

    #[test]
    fn event_list_filter_by_kind() {
        let events: EventList = vec![
            Event::new(EventKind::Fixation, 0, 10).unwrap(),
            Event::new(EventKind::Saccade, 10, 20).unwrap(),
            Event::new(EventKind::Fixation, 20, 30).unwrap(),
        ]
        .into_iter()
        .collect();

        assert_eq!(events.of_kind(&EventKind::Fixation).count(), 2);
        assert_eq!(events.of_kind(&EventKind::Saccade).count(), 1);
        assert_eq!(events.of_kind(&EventKind::Unclassified).count(), 0);
    }

    #[test]
    fn event_list_retain_min_duration() {
        let mut events: EventList = vec![
            Event::new(EventKind::Saccade, 0, 3).unwrap(),
            Event::new(EventKind::Fixation, 3, 12).unwrap(),
            Event::new(EventKind::Saccade, 12, 17).unwrap(),
        ]
        .into_iter()
        .collect();

        events.retain_min_duration(5);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.duration() >= 5));
    }

    #[test]
    fn event_list_iteration() {
        let events: EventList = vec![
            Event::new(EventKind::Fixation, 0, 10).unwrap(),
            Event::new(EventKind::Fixation, 20, 30).unwrap(),
        ]
        .into_iter()
        .collect();

        let onsets: Vec<_> = events.iter().map(Event::onset).collect();
        assert_eq!(onsets, vec![0, 20]);

        let total: i64 = (&events).into_iter().map(Event::duration).sum();
        assert_eq!(total, 20);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn event_serialization_round_trip() {
        let event = Event::new(EventKind::Fixation, 0, 10)
            .unwrap()
            .with_position(Point2::new(0.5, 0.25));

        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
