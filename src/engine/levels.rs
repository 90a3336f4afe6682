//! XP and Level system
//!
//! Level N needs `N * 50` XP to advance. XP is stored relative to the
//! current level, so a settled profile always has `xp < threshold`.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Priority, UserProfile};

/// XP needed per level step
pub const XP_PER_LEVEL: u32 = 50;

/// XP needed to advance from `level` to the next one
pub fn xp_required_for_level(level: u32) -> u32 {
    level.max(1).saturating_mul(XP_PER_LEVEL)
}

/// XP rewards for completing quests
pub struct XpRewards;

impl XpRewards {
    pub const HIGH: u32 = 25;
    pub const MEDIUM: u32 = 15;
    pub const LOW: u32 = 10;

    /// Award for anything that is not a recognized priority
    pub const DEFAULT: u32 = 10;

    pub fn for_priority(priority: Priority) -> u32 {
        match priority {
            Priority::High => Self::HIGH,
            Priority::Medium => Self::MEDIUM,
            Priority::Low => Self::LOW,
        }
    }

    /// Award for a raw priority string; unknown values get [`XpRewards::DEFAULT`]
    pub fn for_priority_str(priority: &str) -> u32 {
        priority
            .parse::<Priority>()
            .map(Self::for_priority)
            .unwrap_or(Self::DEFAULT)
    }
}

/// A level up event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Result of awarding XP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpGain {
    /// Settled profile after all level ups
    pub profile: UserProfile,
    /// XP that was added
    pub awarded: u32,
    /// One entry per level crossed, ascending
    pub level_ups: Vec<LevelUp>,
}

/// Award the XP for completing a quest of the given priority
pub fn apply_xp(profile: &UserProfile, priority: Priority) -> XpGain {
    apply_xp_amount(profile, XpRewards::for_priority(priority))
}

/// Award an arbitrary amount of XP and resolve every level crossed
pub fn apply_xp_amount(profile: &UserProfile, award: u32) -> XpGain {
    let mut next = profile.clone();
    next.level = next.level.max(1);
    next.xp = next.xp.saturating_add(award);

    let mut level_ups = Vec::new();
    let mut threshold = xp_required_for_level(next.level);
    while next.xp >= threshold {
        let old_level = next.level;
        next.level += 1;
        next.xp -= threshold;
        threshold = xp_required_for_level(next.level);
        debug!("Level up: {} -> {}", old_level, next.level);
        level_ups.push(LevelUp {
            old_level,
            new_level: next.level,
        });
    }

    XpGain {
        profile: next,
        awarded: award,
        level_ups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(level: u32, xp: u32) -> UserProfile {
        UserProfile {
            level,
            xp,
            ..Default::default()
        }
    }

    #[test]
    fn test_award_table() {
        assert_eq!(XpRewards::for_priority(Priority::High), 25);
        assert_eq!(XpRewards::for_priority(Priority::Medium), 15);
        assert_eq!(XpRewards::for_priority(Priority::Low), 10);
        assert_eq!(XpRewards::for_priority_str("urgent"), 10);
        assert_eq!(XpRewards::for_priority_str("high"), 25);
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let gain = apply_xp(&profile(1, 20), Priority::Medium);
        assert_eq!(gain.profile.level, 1);
        assert_eq!(gain.profile.xp, 35);
        assert!(gain.level_ups.is_empty());
    }

    #[test]
    fn test_exact_threshold_levels_up() {
        let gain = apply_xp(&profile(1, 25), Priority::High);
        assert_eq!(gain.profile.level, 2);
        assert_eq!(gain.profile.xp, 0);
        assert_eq!(
            gain.level_ups,
            vec![LevelUp {
                old_level: 1,
                new_level: 2
            }]
        );
    }

    #[test]
    fn test_large_award_from_level_one() {
        // 130 - 50 = 80, and 80 < 100 so we stop at level 2
        let gain = apply_xp_amount(&profile(1, 0), 130);
        assert_eq!(gain.profile.level, 2);
        assert_eq!(gain.profile.xp, 80);
        assert_eq!(gain.level_ups.len(), 1);
        assert_eq!(gain.level_ups[0].new_level, 2);
    }

    #[test]
    fn test_multi_level_jump_is_ascending() {
        // 50 + 100 + 150 = 300 -> level 4 with 5 left over
        let gain = apply_xp_amount(&profile(1, 0), 305);
        assert_eq!(gain.profile.level, 4);
        assert_eq!(gain.profile.xp, 5);
        let levels: Vec<u32> = gain.level_ups.iter().map(|l| l.new_level).collect();
        assert_eq!(levels, vec![2, 3, 4]);
    }

    #[test]
    fn test_settled_invariant_holds() {
        for level in 1..8 {
            for xp in (0..xp_required_for_level(level)).step_by(7) {
                for award in [0, 1, 10, 15, 25, 49, 50, 51, 500, 5000] {
                    let gain = apply_xp_amount(&profile(level, xp), award);
                    assert!(gain.profile.xp < xp_required_for_level(gain.profile.level));
                    assert!(gain.profile.level >= level);
                }
            }
        }
    }

    #[test]
    fn test_overflowed_input_is_settled() {
        // Profiles loaded from outside may already be over the threshold
        let gain = apply_xp_amount(&profile(1, 120), 0);
        assert_eq!(gain.profile.level, 2);
        assert_eq!(gain.profile.xp, 70);
    }

    #[test]
    fn test_input_profile_untouched() {
        let before = profile(3, 140);
        let _ = apply_xp(&before, Priority::High);
        assert_eq!(before, profile(3, 140));
    }
}
