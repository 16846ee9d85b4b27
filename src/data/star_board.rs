//! Star board - per-star unlock state mirrored from backend responses.
//!
//! Every star carries an explicit [`StarAppearance`]. The board never decides
//! what can be unlocked: it only applies what the backend answered. The set
//! of stars currently shown as unlockable is an owned [`UnlockCandidates`]
//! value that each operation takes and hands back.

use crate::catalog::{StarCatalog, StarIndex};
use crate::protocol::{BlinkResponse, ResetResponse, StandardResponse};
use std::collections::HashSet;

/// Unlock state of a star as last reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StarAppearance {
    #[default]
    Disabled,
    Unlockable,
    Unlocked,
}

/// What a star looks like on screen, derived from appearance, skill flag and hover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarVisual {
    Disabled,
    DisabledGlow,
    Unlockable,
    UnlockableGlow,
    Unlocked,
    UnlockedGlow,
    Skill,
    SkillGlow,
}

impl StarVisual {
    pub fn is_glow(&self) -> bool {
        matches!(
            self,
            StarVisual::DisabledGlow
                | StarVisual::UnlockableGlow
                | StarVisual::UnlockedGlow
                | StarVisual::SkillGlow
        )
    }
}

/// Grid direction for keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Stars currently shown as unlockable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlockCandidates(HashSet<StarIndex>);

impl UnlockCandidates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, star: StarIndex) -> bool {
        self.0.contains(&star)
    }

    pub fn insert(&mut self, star: StarIndex) {
        self.0.insert(star);
    }

    pub fn remove(&mut self, star: StarIndex) {
        self.0.remove(&star);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StarIndex> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<StarIndex> for UnlockCandidates {
    fn from_iter<I: IntoIterator<Item = StarIndex>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Unlock state for every catalog star
#[derive(Debug, Clone)]
pub struct StarBoard {
    appearances: Vec<StarAppearance>,
    skill: Vec<bool>,
}

impl StarBoard {
    pub fn new(catalog: &StarCatalog) -> Self {
        Self {
            appearances: vec![StarAppearance::Disabled; catalog.len()],
            skill: catalog.stars().iter().map(|s| s.skill).collect(),
        }
    }

    pub fn appearance(&self, star: StarIndex) -> StarAppearance {
        self.appearances.get(star).copied().unwrap_or_default()
    }

    pub fn is_unlocked(&self, star: StarIndex) -> bool {
        self.appearance(star) == StarAppearance::Unlocked
    }

    pub fn unlocked_count(&self) -> usize {
        self.appearances
            .iter()
            .filter(|a| **a == StarAppearance::Unlocked)
            .count()
    }

    fn set(&mut self, star: StarIndex, appearance: StarAppearance) {
        if let Some(slot) = self.appearances.get_mut(star) {
            *slot = appearance;
        }
    }

    /// Screen appearance of a star
    ///
    /// Skill stars keep their own look until they are unlocked.
    pub fn visual(&self, star: StarIndex, hovered: bool) -> StarVisual {
        let is_skill = self.skill.get(star).copied().unwrap_or(false);
        match (self.appearance(star), is_skill, hovered) {
            (StarAppearance::Unlocked, _, false) => StarVisual::Unlocked,
            (StarAppearance::Unlocked, _, true) => StarVisual::UnlockedGlow,
            (_, true, false) => StarVisual::Skill,
            (_, true, true) => StarVisual::SkillGlow,
            (StarAppearance::Unlockable, false, false) => StarVisual::Unlockable,
            (StarAppearance::Unlockable, false, true) => StarVisual::UnlockableGlow,
            (StarAppearance::Disabled, false, false) => StarVisual::Disabled,
            (StarAppearance::Disabled, false, true) => StarVisual::DisabledGlow,
        }
    }

    /// Resolve backend ids to catalog indices, skipping unknown stars
    fn resolve(catalog: &StarCatalog, ids: &[String]) -> HashSet<StarIndex> {
        ids.iter()
            .filter_map(|id| {
                let index = catalog.index_of(id);
                if index.is_none() {
                    tracing::debug!("Backend star '{}' is not in the catalog", id);
                }
                index
            })
            .collect()
    }

    /// Mark every non-unlocked star in `glow` as unlockable
    fn mark_unlockable(&mut self, glow: &HashSet<StarIndex>) {
        for &star in glow {
            if !self.is_unlocked(star) {
                self.set(star, StarAppearance::Unlockable);
            }
        }
    }

    /// Revert candidates that are no longer unlockable
    fn drop_stale(&mut self, candidates: &UnlockCandidates, glow: &HashSet<StarIndex>) {
        for star in candidates.iter() {
            if !glow.contains(&star) && !self.is_unlocked(star) {
                self.set(star, StarAppearance::Disabled);
            }
        }
    }

    /// Apply a standard unlock answer for `star`
    ///
    /// Unlockable stars accumulate until the next lock.
    pub fn apply_standard_unlock(
        &mut self,
        catalog: &StarCatalog,
        star: StarIndex,
        response: &StandardResponse,
        mut candidates: UnlockCandidates,
    ) -> UnlockCandidates {
        if !response.result {
            tracing::debug!("Backend refused to unlock star {}", star);
            return candidates;
        }

        self.set(star, StarAppearance::Unlocked);
        candidates.remove(star);

        let glow = Self::resolve(catalog, &response.to_glow);
        self.mark_unlockable(&glow);
        for index in glow {
            if !self.is_unlocked(index) {
                candidates.insert(index);
            }
        }
        candidates
    }

    /// Apply a standard lock answer for `star`
    ///
    /// The candidate set is rebuilt from scratch on every successful lock.
    pub fn apply_standard_lock(
        &mut self,
        catalog: &StarCatalog,
        star: StarIndex,
        response: &StandardResponse,
        candidates: UnlockCandidates,
    ) -> UnlockCandidates {
        if response.result {
            tracing::debug!("Backend refused to lock star {}", star);
            return candidates;
        }

        let glow = Self::resolve(catalog, &response.to_glow);
        let locked = if glow.contains(&star) {
            StarAppearance::Unlockable
        } else {
            StarAppearance::Disabled
        };
        self.set(star, locked);

        self.drop_stale(&candidates, &glow);
        self.mark_unlockable(&glow);

        glow.into_iter()
            .filter(|index| !self.is_unlocked(*index))
            .collect()
    }

    /// Apply a blink answer: `result` lists every unlocked star
    pub fn apply_blink(
        &mut self,
        catalog: &StarCatalog,
        response: &BlinkResponse,
        candidates: UnlockCandidates,
    ) -> UnlockCandidates {
        let unlocked = Self::resolve(catalog, &response.result);
        let glow = Self::resolve(catalog, &response.to_glow);

        for star in 0..self.appearances.len() {
            if unlocked.contains(&star) {
                self.set(star, StarAppearance::Unlocked);
            } else if self.is_unlocked(star) {
                self.set(star, StarAppearance::Disabled);
            }
        }

        self.drop_stale(&candidates, &glow);
        self.mark_unlockable(&glow);

        glow.into_iter()
            .filter(|index| !self.is_unlocked(*index))
            .collect()
    }

    /// Apply a reset answer; an empty `result` means everything is locked
    pub fn apply_reset(
        &mut self,
        response: &ResetResponse,
        candidates: UnlockCandidates,
    ) -> UnlockCandidates {
        if !response.result.is_empty() {
            tracing::warn!(
                "Reset left {} stars unlocked, keeping board as is",
                response.result.len()
            );
            return candidates;
        }

        for appearance in self.appearances.iter_mut() {
            *appearance = StarAppearance::Disabled;
        }
        UnlockCandidates::new()
    }

    /// Nearest star from `from` in `direction`
    ///
    /// Distance along the direction counts once, sideways offset counts twice.
    pub fn neighbor(
        catalog: &StarCatalog,
        from: StarIndex,
        direction: Direction,
    ) -> Option<StarIndex> {
        let origin = catalog.star(from)?;
        let (ox, oy) = (i32::from(origin.col), i32::from(origin.row));

        catalog
            .stars()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != from)
            .filter_map(|(index, star)| {
                let dx = i32::from(star.col) - ox;
                let dy = i32::from(star.row) - oy;
                let (along, across) = match direction {
                    Direction::Right => (dx, dy),
                    Direction::Left => (-dx, dy),
                    Direction::Down => (dy, dx),
                    Direction::Up => (-dy, dx),
                };
                (along > 0).then_some((along + 2 * across.abs(), index))
            })
            .min()
            .map(|(_, index)| index)
    }

    /// Catalog indices in reading order (row, then column)
    pub fn reading_order(catalog: &StarCatalog) -> Vec<StarIndex> {
        let mut order: Vec<StarIndex> = (0..catalog.len()).collect();
        order.sort_by_key(|&index| {
            catalog
                .star(index)
                .map(|s| (s.row, s.col))
                .unwrap_or_default()
        });
        order
    }
}
