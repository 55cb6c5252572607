//! Which parts of a relationship item (tracked entity, enrollment or event) to fetch.
//!
//! Field names follow the view layer, e.g. `trackedEntity.attributes`. Only ask for what is
//! exported; every included sub-object costs another lookup.

use serde::Serialize;

const TRACKED_ENTITY: &str = "trackedEntity";
const ENROLLMENTS: &str = "enrollments";
const EVENT: &str = "event";
const ATTRIBUTES: &str = "attributes";
const EVENTS: &str = "events";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipItemFields {
    pub includes_tracked_entity: bool,
    pub tracked_entity_fields: TrackedEntityFields,
    pub includes_enrollment: bool,
    pub enrollment_fields: EnrollmentFields,
    pub includes_event: bool,
    pub event_fields: EventFields,
}

impl RelationshipItemFields {
    /// Evaluates `includes` for every known path, joining nested segments with `separator`.
    pub fn of<F>(includes: F, separator: &str) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let includes_tracked_entity = includes(TRACKED_ENTITY);
        let tracked_entity_fields = if includes_tracked_entity {
            TrackedEntityFields::of(nested(&includes, TRACKED_ENTITY, separator))
        } else {
            TrackedEntityFields::none()
        };

        let includes_enrollment = includes(ENROLLMENTS);
        let enrollment_fields = if includes_enrollment {
            EnrollmentFields::of(nested(&includes, ENROLLMENTS, separator))
        } else {
            EnrollmentFields::none()
        };

        let includes_event = includes(EVENT);
        let event_fields = if includes_event {
            EventFields::of(nested(&includes, EVENT, separator))
        } else {
            EventFields::none()
        };

        Self {
            includes_tracked_entity,
            tracked_entity_fields,
            includes_enrollment,
            enrollment_fields,
            includes_event,
            event_fields,
        }
    }

    /// Fetch nothing beyond the item references.
    pub fn none() -> Self {
        Self::of(|_| false, ".")
    }

    /// Fetch everything. Expensive for items with many enrollments or events.
    pub fn all() -> Self {
        Self::of(|_| true, ".")
    }
}

fn nested<'a, F>(includes: &'a F, parent: &'a str, separator: &'a str) -> impl Fn(&str) -> bool + 'a
where
    F: Fn(&str) -> bool,
{
    move |field: &str| includes(&format!("{parent}{separator}{field}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedEntityFields {
    pub includes_attributes: bool,
    pub includes_enrollments: bool,
}

impl TrackedEntityFields {
    pub fn of<F>(includes: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            includes_attributes: includes(ATTRIBUTES),
            includes_enrollments: includes(ENROLLMENTS),
        }
    }

    pub fn none() -> Self {
        Self::of(|_| false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentFields {
    pub includes_events: bool,
    pub includes_attributes: bool,
}

impl EnrollmentFields {
    pub fn of<F>(includes: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            includes_events: includes(EVENTS),
            includes_attributes: includes(ATTRIBUTES),
        }
    }

    pub fn none() -> Self {
        Self::of(|_| false)
    }
}

/// Events are fetched without nested collections, so there is nothing to select yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EventFields {}

impl EventFields {
    pub fn of<F>(_includes: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {}
    }

    pub fn none() -> Self {
        Self {}
    }
}
