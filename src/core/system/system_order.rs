//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. InputSet (Update): start/reset triggers, player displacement
//! 2. GameplaySet (Update, Running only): fall check -> ramp -> spawn -> cull -> clock tick
//! 3. Rapier step + writeback (PostUpdate, handled by plugin)
//! 4. SyncSet (PostUpdate): physics pose -> visual pose, every phase
//! 5. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GameplaySet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct SyncSet; // after physics writeback, before transform propagation
