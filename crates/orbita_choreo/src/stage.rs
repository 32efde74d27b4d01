//! Multi-actor stage
//!
//! Holds the choreographers for every animated object in a scene and ticks
//! their clocks together. Actors are fully independent: each carries its own
//! elapsed-time phase for idle spin, and no ordering between them matters.

use crate::choreographer::Choreographer;
use orbita_core::{Pose, ViewportMetrics};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct ActorId;
}

/// One animated object: its choreographer plus its own clock.
#[derive(Clone, Debug)]
pub struct Actor {
    choreographer: Choreographer,
    elapsed: f32,
}

impl Actor {
    pub fn new(choreographer: Choreographer) -> Self {
        Self {
            choreographer,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn choreographer_mut(&mut self) -> &mut Choreographer {
        &mut self.choreographer
    }
}

/// All actors in a scene.
pub struct Stage {
    actors: SlotMap<ActorId, Actor>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
        }
    }

    pub fn add_actor(&mut self, choreographer: Choreographer) -> ActorId {
        self.actors.insert(Actor::new(choreographer))
    }

    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(id)
    }

    pub fn get_actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn get_actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Advance every actor's clock by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        for (_, actor) in self.actors.iter_mut() {
            actor.elapsed += dt;
        }
    }

    /// Derive one actor's pose for the current frame.
    pub fn pose(&mut self, id: ActorId, progress: f32, viewport: ViewportMetrics) -> Option<Pose> {
        let actor = self.actors.get_mut(id)?;
        let elapsed = actor.elapsed;
        Some(actor.choreographer.pose(progress, elapsed, viewport))
    }

    /// Iterate over all actors (immutable).
    pub fn actors_iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors.iter()
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
