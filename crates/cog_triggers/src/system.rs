//! Hazard-driven trigger sweeps

use crate::body::Collide;
use crate::error::Result;
use crate::events::ContactEvent;
use crate::trigger::TriggerCollider;

/// Check one hazard against every actor it was handed this tick.
///
/// Inert triggers are skipped without touching their actor. The first
/// callback failure stops the sweep; every actor checked so far keeps its
/// original shape.
pub fn sweep<'a, A, H, I>(hazard: &H, targets: I) -> Result<Vec<ContactEvent>>
where
    A: Collide + 'a,
    H: Collide + 'a,
    I: IntoIterator<Item = (&'a mut A, &'a mut TriggerCollider<A, H>)>,
{
    let mut events = Vec::new();

    for (actor, trigger) in targets {
        if !trigger.active_for_checks() {
            continue;
        }
        if let Some(event) = trigger.check(actor, hazard)? {
            events.push(event);
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use crate::shape::CollisionShape;
    use crate::trigger::TriggerMode;
    use cog_math::Vec2;

    fn crate_at(id: u64, x: f32) -> Body {
        Body::new(id, Vec2::new(x, 0.0)).with_shape(CollisionShape::hitbox(4.0, 4.0))
    }

    #[test]
    fn test_sweep_collects_contacts() {
        let wall = Body::new(100, Vec2::ZERO).with_shape(CollisionShape::hitbox(10.0, 4.0));
        let mut actors = vec![crate_at(1, 2.0), crate_at(2, 50.0), crate_at(3, 8.0)];
        let mut triggers: Vec<TriggerCollider<Body, Body>> = (0..3)
            .map(|_| TriggerCollider::new().on_contact(|_, _| Ok(())))
            .collect();

        let events = sweep(&wall, actors.iter_mut().zip(triggers.iter_mut())).unwrap();
        let hit: Vec<u64> = events.iter().map(|e| e.actor).collect();
        assert_eq!(hit, vec![1, 3]);

        // One-shot triggers that fired are skipped on the next tick
        let events = sweep(&wall, actors.iter_mut().zip(triggers.iter_mut())).unwrap();
        assert!(events.is_empty());
        assert!(triggers[1].active_for_checks());
    }

    #[test]
    fn test_sweep_stops_on_error() {
        let wall = Body::new(100, Vec2::ZERO).with_shape(CollisionShape::hitbox(10.0, 4.0));
        let mut actors = vec![crate_at(1, 2.0), crate_at(2, 3.0)];
        let mut triggers: Vec<TriggerCollider<Body, Body>> = vec![
            TriggerCollider::new()
                .with_mode(TriggerMode::Repeatable)
                .with_shape(CollisionShape::circle(1.0))
                .on_contact(|_, _| Err("steam failure".into())),
            TriggerCollider::new().on_contact(|_, _| Ok(())),
        ];

        assert!(sweep(&wall, actors.iter_mut().zip(triggers.iter_mut())).is_err());
        assert_eq!(actors[0].shape, Some(CollisionShape::hitbox(4.0, 4.0)));
        assert_eq!(triggers[1].fire_count(), 0);
    }
}
