use std::collections::HashMap;
use std::time::Duration;

use crate::animation::{Easing, Tween};
use crate::core::Position3;
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderObject, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It records every actor and drives animated moves through deterministic
/// tween stepping so tests can advance a frame clock by hand.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_handle: u64,
    actors: HashMap<u64, ActorRecord>,
}

#[derive(Debug, Clone)]
struct ActorRecord {
    object: RenderObject,
    position: Position3,
    tween: Option<Tween>,
}

impl NullRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn position(&self, handle: u64) -> Option<Position3> {
        self.actors.get(&handle).map(|record| record.position)
    }

    #[must_use]
    pub fn object(&self, handle: u64) -> Option<&RenderObject> {
        self.actors.get(&handle).map(|record| &record.object)
    }

    #[must_use]
    pub fn is_animating(&self, handle: u64) -> bool {
        self.actors
            .get(&handle)
            .is_some_and(|record| record.tween.is_some())
    }

    pub fn objects(&self) -> impl Iterator<Item = &RenderObject> {
        self.actors.values().map(|record| &record.object)
    }

    /// Advances every in-flight animation by a deterministic simulation step.
    ///
    /// Returns the number of actors still animating afterwards.
    pub fn step_animations(&mut self, delta_seconds: f64) -> ChartResult<usize> {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return Err(ChartError::InvalidData(
                "animation delta seconds must be finite and > 0".to_owned(),
            ));
        }

        let mut active = 0;
        for record in self.actors.values_mut() {
            if let Some(tween) = record.tween.as_mut() {
                record.position = tween.step(delta_seconds);
                if tween.is_finished() {
                    record.tween = None;
                } else {
                    active += 1;
                }
            }
        }
        Ok(active)
    }

    fn record_mut(&mut self, handle: u64) -> ChartResult<&mut ActorRecord> {
        self.actors
            .get_mut(&handle)
            .ok_or_else(|| ChartError::NotFound {
                kind: "actor",
                id: handle.to_string(),
            })
    }
}

impl Renderer for NullRenderer {
    type Handle = u64;

    fn create_actor(&mut self, object: &RenderObject) -> ChartResult<u64> {
        let position = match object {
            RenderObject::Point { position, .. } | RenderObject::TickLabel { position, .. } => {
                *position
            }
            RenderObject::AxisLine { from, .. } => *from,
        };

        let handle = self.next_handle;
        self.next_handle += 1;
        self.actors.insert(
            handle,
            ActorRecord {
                object: object.clone(),
                position,
                tween: None,
            },
        );
        Ok(handle)
    }

    fn set_actor_position(&mut self, handle: &u64, position: Position3) -> ChartResult<()> {
        let record = self.record_mut(*handle)?;
        record.tween = None;
        record.position = position;
        Ok(())
    }

    fn remove_actor(&mut self, handle: u64) -> ChartResult<()> {
        match self.actors.remove(&handle) {
            Some(_) => Ok(()),
            None => Err(ChartError::NotFound {
                kind: "actor",
                id: handle.to_string(),
            }),
        }
    }

    fn animate_actor_position(
        &mut self,
        handle: &u64,
        target: Position3,
        duration: Duration,
        easing: Easing,
    ) -> ChartResult<()> {
        let record = self.record_mut(*handle)?;
        record.tween = Some(Tween::new(record.position, target, duration, easing));
        Ok(())
    }
}
