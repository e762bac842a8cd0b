use nesh_core::Aggregate;

use crate::event::Event;

/// Run `command` against `aggregate`: decide, then apply every decided event.
///
/// On error nothing has been applied. The returned events are what the
/// caller should persist or broadcast.
pub fn execute<A>(aggregate: &mut A, command: &A::Command) -> Result<Vec<A::Event>, A::Error>
where
    A: Aggregate,
    A::Event: Event,
{
    let events = aggregate.handle(command)?;
    for event in &events {
        aggregate.apply(event);
        tracing::trace!(
            event_type = event.event_type(),
            version = aggregate.version(),
            "event applied"
        );
    }
    Ok(events)
}
