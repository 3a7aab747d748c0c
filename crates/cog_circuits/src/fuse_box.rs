//! Dash fuse box
//!
//! A small solid that breaks open when dashed into from its open side. Breaking
//! it closes every circuit it lists, wakes the listeners on those circuits and
//! leaves it sparking for the rest of its life.
//!
//! State is re-derived whenever the box enters a scene: it starts busted if its
//! own instance flag is set, or if every circuit it lists is already closed.
//! Circuits closing later do not reach an idle box; only a dash does.

use crate::config::FuseBoxConfig;
use crate::context::{CircuitContext, DashOutcome, DashRefill};
use crate::data::{Facing, FuseBoxData};
use crate::door::FuseDoor;
use crate::effects::FuseEffect;
use crate::error::Result;
use cog_math::{Rect, Vec2};
use cog_schedule::{Scheduler, Sparkle, SparkleRoutine, TaskId};
use cog_session::{EntityId, FlagKey, FlagStore};
use cog_signals::ActivationSet;
use cog_triggers::{Body, Collide, CollisionShape, Hitbox};

/// Kind name used for per-instance flags
pub const FUSE_BOX_KIND: &str = "DashFuseBox";

/// Sprite animation played once the box is broken
const BREAK_ANIMATION: &str = "chaos";

/// How far a rider's feet may be from the top edge and still count as standing
const ON_TOP_TOLERANCE: f32 = 0.01;

/// Fuse box state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuseState {
    /// Waiting for a dash
    Idle,
    /// Breaking; only observable from inside the transition
    Triggered,
    /// Broken open
    Busted,
}

impl Default for FuseState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Circuit-activated fuse box
#[derive(Debug)]
pub struct FuseBox {
    entity: EntityId,
    body: Body,
    facing: Facing,
    activation_ids: ActivationSet,
    circuit_keys: Vec<FlagKey>,
    instance_key: FlagKey,
    persistent: bool,
    start_cutscene: bool,
    state: FuseState,
    door: FuseDoor,
    sparkles: Scheduler<Sparkle>,
    sparkle_task: Option<TaskId>,
    sparkle_seed: Option<u64>,
    in_scene: bool,
    config: FuseBoxConfig,
}

impl FuseBox {
    /// Build from level data placed at `offset`
    pub fn from_data(data: &FuseBoxData, offset: Vec2, config: FuseBoxConfig) -> Self {
        let entity = data.entity_id();
        let facing = data.facing();
        let activation_ids = data.activation_set();

        let mut hitbox = Hitbox::new(config.size.x, config.size.y);
        if facing == Facing::Left {
            hitbox = hitbox.with_offset(Vec2::new(-config.left_hitbox_shift, 0.0));
        }
        let body = Body::new(u64::from(data.id), data.position() + offset)
            .with_shape(CollisionShape::Hitbox(hitbox));

        let circuit_keys = activation_ids
            .iter()
            .map(|id| FlagKey::circuit(id.as_str()))
            .collect();
        let instance_key = FlagKey::instance(FUSE_BOX_KIND, &entity);

        Self {
            entity,
            body,
            facing,
            activation_ids,
            circuit_keys,
            instance_key,
            persistent: data.persistent,
            start_cutscene: data.start_cutscene,
            state: FuseState::Idle,
            door: FuseDoor::new(),
            sparkles: Scheduler::new(),
            sparkle_task: None,
            sparkle_seed: None,
            in_scene: false,
            config,
        }
    }

    /// Parse level data from JSON and build
    pub fn from_json(json: &str, offset: Vec2, config: FuseBoxConfig) -> Result<Self> {
        let data = FuseBoxData::from_json(json)?;
        Ok(Self::from_data(&data, offset, config))
    }

    /// Use a fixed seed for spark timing
    pub fn with_sparkle_seed(mut self, seed: u64) -> Self {
        self.sparkle_seed = Some(seed);
        self
    }

    /// Entity identity
    pub fn entity(&self) -> &EntityId {
        &self.entity
    }

    /// Current state
    pub fn state(&self) -> FuseState {
        self.state
    }

    /// Whether the box is broken open
    pub fn is_busted(&self) -> bool {
        self.state == FuseState::Busted
    }

    /// Open side
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Circuits closed by this box
    pub fn activation_ids(&self) -> &ActivationSet {
        &self.activation_ids
    }

    /// Companion door
    pub fn door(&self) -> &FuseDoor {
        &self.door
    }

    /// Whether the sprite outline is drawn
    pub fn outline_visible(&self) -> bool {
        self.state == FuseState::Idle
    }

    /// Whether the box is in a scene
    pub fn in_scene(&self) -> bool {
        self.in_scene
    }

    /// Whether the recurring sparks are scheduled
    pub fn is_sparkling(&self) -> bool {
        self.sparkle_task
            .map_or(false, |task| self.sparkles.is_running(task))
    }

    /// Hitbox, relative to the body position
    pub fn hitbox(&self) -> Option<&Hitbox> {
        self.body.shape.as_ref().and_then(CollisionShape::as_hitbox)
    }

    /// World bounds of the solid
    pub fn bounds(&self) -> Option<Rect> {
        self.body.bounds()
    }

    /// Enter the scene and re-derive the busted state from the flag store.
    ///
    /// A box that is already busted keeps its collider and only resumes sparking.
    pub fn added(&mut self, ctx: &mut CircuitContext<'_>) {
        self.in_scene = true;
        self.door.add();
        ctx.effects.send(FuseEffect::DoorAdded {
            owner: self.entity.clone(),
        });

        if self.state == FuseState::Busted {
            self.start_sparkles();
        } else if ctx.flags.get(&self.instance_key) || self.circuits_closed(&*ctx.flags) {
            self.start_busted(ctx);
        }
    }

    /// Leave the scene, cancelling the sparks and removing the door
    pub fn removed(&mut self, ctx: &mut CircuitContext<'_>) {
        self.sparkles.cancel_all();
        self.sparkle_task = None;
        self.door.remove();
        self.in_scene = false;
        ctx.effects.send(FuseEffect::DoorRemoved {
            owner: self.entity.clone(),
        });
    }

    /// Handle a player dash into the box
    pub fn on_dash(
        &mut self,
        ctx: &mut CircuitContext<'_>,
        player: Option<&mut dyn DashRefill>,
        direction: Vec2,
    ) -> DashOutcome {
        if self.state != FuseState::Idle || !direction.approx_eq(self.facing.press_direction()) {
            log::debug!(
                "Fuse box {} ignored dash {:?} ({:?})",
                self.entity,
                direction,
                self.state
            );
            return DashOutcome::NormalCollision;
        }

        if self.start_cutscene {
            let seen = FlagKey::named(self.config.cutscene_flag.as_str());
            if !ctx.flags.get(&seen) {
                ctx.flags.set(seen, true);
                ctx.effects.send(FuseEffect::StartCutscene {
                    owner: self.entity.clone(),
                });
            }
        }

        self.state = FuseState::Triggered;

        self.door.play();
        self.play_break_animation(ctx);
        if let Some(bounds) = self.body.bounds() {
            ctx.effects.send(FuseEffect::DisplacementBurst {
                center: bounds.center(),
                pulse: self.config.displacement,
            });
        }
        self.open_collider();

        ctx.effects.send(FuseEffect::Sound {
            event: self.config.break_sound.clone(),
            position: self.body.position,
        });

        if self.persistent {
            for key in &self.circuit_keys {
                ctx.flags.set(key.clone(), true);
            }
            ctx.flags.set(self.instance_key.clone(), true);
        }

        let notified = ctx.registry.notify(&self.activation_ids);

        if let Some(player) = player {
            player.refill_dash();
        }

        self.emit_sparks(ctx, self.config.sparkle.initial_burst);
        self.start_sparkles();

        self.state = FuseState::Busted;
        log::info!(
            "Fuse box {} busted, {} listener(s) notified",
            self.entity,
            notified
        );
        DashOutcome::Rebound
    }

    /// Advance sparks and push a rider standing on top off the open side
    pub fn update(&mut self, ctx: &mut CircuitContext<'_>, dt: f32, rider: Option<&mut Rect>) {
        let mut sparkles = Vec::new();
        self.sparkles.tick(dt, &mut sparkles);
        for sparkle in sparkles {
            self.emit_sparks(ctx, sparkle.count);
        }

        if self.state == FuseState::Busted {
            if let Some(rider) = rider {
                self.displace_rider(rider);
            }
        }
    }

    fn circuits_closed(&self, flags: &dyn FlagStore) -> bool {
        !self.circuit_keys.is_empty() && flags.all_set(&self.circuit_keys)
    }

    /// Busted on arrival: no flags written, nobody notified
    fn start_busted(&mut self, ctx: &mut CircuitContext<'_>) {
        self.play_break_animation(ctx);
        self.door.show_open();
        self.open_collider();
        self.start_sparkles();
        self.state = FuseState::Busted;
        log::debug!("Fuse box {} starts busted", self.entity);
    }

    fn play_break_animation(&self, ctx: &mut CircuitContext<'_>) {
        ctx.effects.send(FuseEffect::SpriteAnimation {
            owner: self.entity.clone(),
            animation: BREAK_ANIMATION.to_string(),
        });
    }

    fn open_collider(&mut self) {
        let busted_width = self.config.busted_width;
        if let Some(hitbox) = self.body.shape.as_mut().and_then(CollisionShape::as_hitbox_mut) {
            hitbox.width = busted_width;
        }
        // Left-facing boxes keep their right edge in place
        if self.facing == Facing::Left {
            self.body.position.x += self.config.size.x - busted_width;
        }
    }

    fn start_sparkles(&mut self) {
        if self.is_sparkling() {
            return;
        }
        let config = self.config.sparkle.clone();
        let routine = match self.sparkle_seed {
            Some(seed) => SparkleRoutine::seeded(config, seed),
            None => SparkleRoutine::new(config),
        };
        self.sparkle_task = Some(self.sparkles.spawn(routine));
    }

    fn emit_sparks(&self, ctx: &mut CircuitContext<'_>, count: u32) {
        if !self.in_scene || count == 0 {
            return;
        }
        let Some(hitbox) = self.hitbox() else {
            return;
        };
        ctx.effects.send(FuseEffect::Sparks {
            origin: self.body.position + hitbox.center_right(),
            range: Vec2::new(0.0, hitbox.height / 4.0),
            count,
            direction: self.facing.spark_direction(),
            particles: self.config.sparks.clone(),
        });
    }

    fn displace_rider(&self, rider: &mut Rect) {
        let Some(solid) = self.body.bounds() else {
            return;
        };
        let on_top = (rider.bottom() - solid.top()).abs() <= ON_TOP_TOLERANCE
            && rider.right() > solid.left()
            && rider.left() < solid.right();
        if !on_top {
            return;
        }

        match self.facing {
            Facing::Right if rider.left() >= solid.left() => {
                rider.x = solid.right();
                rider.y += 1.0;
            }
            Facing::Left if rider.right() <= solid.right() => {
                rider.x = solid.left() - rider.width;
                rider.y += 1.0;
            }
            _ => {}
        }
    }
}

impl Collide for FuseBox {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cog_session::SessionFlags;
    use cog_signals::{EventQueue, ListenerRegistry};

    struct Services {
        flags: SessionFlags,
        registry: ListenerRegistry,
        effects: EventQueue<FuseEffect>,
    }

    impl Services {
        fn new() -> Self {
            Self {
                flags: SessionFlags::new(),
                registry: ListenerRegistry::new(),
                effects: EventQueue::new(),
            }
        }

        fn ctx(&mut self) -> CircuitContext<'_> {
            CircuitContext::new(&mut self.flags, &self.registry, &mut self.effects)
        }
    }

    fn fuse_box(facing: Facing) -> FuseBox {
        let data = FuseBoxData::new("lab", 1, Vec2::new(100.0, 50.0))
            .with_activation_ids("a")
            .with_facing(facing);
        FuseBox::from_data(&data, Vec2::ZERO, FuseBoxConfig::default()).with_sparkle_seed(7)
    }

    #[test]
    fn test_right_facing_geometry() {
        let fuse = fuse_box(Facing::Right);
        let bounds = fuse.bounds().unwrap();
        assert_relative_eq!(bounds.left(), 100.0);
        assert_relative_eq!(bounds.right(), 104.0);
        assert_relative_eq!(bounds.bottom(), 66.0);
    }

    #[test]
    fn test_left_facing_geometry() {
        let fuse = fuse_box(Facing::Left);
        let bounds = fuse.bounds().unwrap();
        assert_relative_eq!(bounds.left(), 96.0);
        assert_relative_eq!(bounds.right(), 100.0);
    }

    #[test]
    fn test_busted_collider_right() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);

        let bounds = fuse.bounds().unwrap();
        assert_relative_eq!(bounds.left(), 100.0);
        assert_relative_eq!(bounds.right(), 102.0);
    }

    #[test]
    fn test_busted_collider_left_keeps_right_edge() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Left);
        fuse.added(&mut services.ctx());
        assert_eq!(fuse.on_dash(&mut services.ctx(), None, Vec2::X), DashOutcome::Rebound);

        let bounds = fuse.bounds().unwrap();
        assert_relative_eq!(bounds.left(), 98.0);
        assert_relative_eq!(bounds.right(), 100.0);
        assert_relative_eq!(fuse.body().position.x, 102.0);
    }

    #[test]
    fn test_break_effect_order() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        services.effects.drain();

        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);
        let effects = services.effects.drain();

        assert!(matches!(effects[0], FuseEffect::SpriteAnimation { .. }));
        match &effects[1] {
            FuseEffect::DisplacementBurst { center, .. } => {
                // measured on the intact 4-wide solid
                assert_relative_eq!(center.x, 102.0);
                assert_relative_eq!(center.y, 58.0);
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(matches!(effects[2], FuseEffect::Sound { .. }));
        match &effects[3] {
            FuseEffect::Sparks { origin, range, count, direction, .. } => {
                assert_eq!(*count, 20);
                assert_relative_eq!(origin.x, 102.0);
                assert_relative_eq!(origin.y, 58.0);
                assert_relative_eq!(range.y, 4.0);
                assert_relative_eq!(*direction, 0.0);
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert_eq!(effects.len(), 4);
    }

    #[test]
    fn test_outline_only_while_idle() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        assert!(fuse.outline_visible());
        assert!(!fuse.door().is_visible());

        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);
        assert!(!fuse.outline_visible());
        assert!(fuse.door().is_visible());
    }

    #[test]
    fn test_recurring_sparks_after_break() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);
        services.effects.drain();

        // max idle 4s plus a burst of 6 short gaps
        for _ in 0..300 {
            fuse.update(&mut services.ctx(), 1.0 / 60.0, None);
        }
        let sparks: Vec<_> = services
            .effects
            .drain()
            .into_iter()
            .filter(|effect| matches!(effect, FuseEffect::Sparks { count: 1, .. }))
            .collect();
        assert!(sparks.len() >= 6);
    }

    #[test]
    fn test_removed_cancels_sparks() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);
        assert!(fuse.is_sparkling());

        fuse.removed(&mut services.ctx());
        assert!(!fuse.is_sparkling());
        assert!(!fuse.door().in_scene());
        services.effects.drain();

        for _ in 0..600 {
            fuse.update(&mut services.ctx(), 1.0 / 60.0, None);
        }
        assert!(services.effects.is_empty());
    }

    #[test]
    fn test_readded_busted_box_keeps_collider() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Left);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, Vec2::X);
        let busted = fuse.bounds().unwrap();

        for _ in 0..3 {
            fuse.removed(&mut services.ctx());
            fuse.added(&mut services.ctx());
            assert_eq!(fuse.bounds().unwrap(), busted);
        }
        assert!(fuse.is_busted());
        assert!(fuse.is_sparkling());
        assert_eq!(fuse.door().pose(), crate::door::DoorPose::Opening);
    }

    #[test]
    fn test_rider_pushed_off_right() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, -Vec2::X);

        // solid is now x 100..102, top 50
        let mut rider = Rect::new(100.5, 39.0, 8.0, 11.0);
        fuse.update(&mut services.ctx(), 0.0, Some(&mut rider));
        assert_relative_eq!(rider.left(), 102.0);
        assert_relative_eq!(rider.y, 40.0);
    }

    #[test]
    fn test_rider_pushed_off_left() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Left);
        fuse.added(&mut services.ctx());
        fuse.on_dash(&mut services.ctx(), None, Vec2::X);

        // solid is now x 98..100, top 50
        let mut rider = Rect::new(91.0, 39.0, 8.0, 11.0);
        fuse.update(&mut services.ctx(), 0.0, Some(&mut rider));
        assert_relative_eq!(rider.right(), 98.0);
        assert_relative_eq!(rider.y, 40.0);
    }

    #[test]
    fn test_rider_ignored_while_idle() {
        let mut services = Services::new();
        let mut fuse = fuse_box(Facing::Right);
        fuse.added(&mut services.ctx());

        let mut rider = Rect::new(100.5, 39.0, 8.0, 11.0);
        fuse.update(&mut services.ctx(), 0.0, Some(&mut rider));
        assert_relative_eq!(rider.x, 100.5);
        assert_relative_eq!(rider.y, 39.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"level":"lab","id":4,"x":8,"y":8,"activationIds":"a,b","direction":"Left"}"#;
        let fuse = FuseBox::from_json(json, Vec2::new(16.0, 0.0), FuseBoxConfig::default()).unwrap();
        assert_eq!(fuse.entity(), &EntityId::new("lab", 4));
        assert_eq!(fuse.facing(), Facing::Left);
        assert_eq!(fuse.activation_ids().len(), 2);
        assert_relative_eq!(fuse.body().position.x, 24.0);
        assert_eq!(fuse.state(), FuseState::Idle);
    }
}
