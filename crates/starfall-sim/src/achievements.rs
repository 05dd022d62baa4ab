//! Achievement tracking: stat accumulation, condition evaluation, and
//! the unlock notification queue.

use std::collections::{HashMap, VecDeque};

use starfall_core::components::AchievementBook;
use starfall_core::constants::ACHIEVEMENT_TOAST_TICKS;
use starfall_core::enums::{AchievementId, EnemyKind};
use starfall_core::events::GameEvent;
use starfall_core::state::AchievementToastView;

/// Named counters mutated by gameplay events.
#[derive(Debug, Clone, Default)]
pub struct StatBundle {
    pub enemies_destroyed: u64,
    pub score: u64,
    pub high_score: u64,
    pub max_level: u32,
    pub bosses_defeated: u32,
    pub power_ups_collected: u32,
    pub damage_taken: u32,
    pub kamikaze_survived: u32,
    pub formations_destroyed: u32,
    pub bullets_dodged: u32,
    pub specials_used: u32,
    pub survival_secs: u64,
}

impl StatBundle {
    /// Ship classes unlocked at the best level reached.
    pub fn ships_unlocked(&self) -> u32 {
        starfall_core::enums::ShipClass::all()
            .iter()
            .filter(|c| c.unlock_level() <= self.max_level.max(1))
            .count() as u32
    }
}

/// Pure condition check for one achievement against the stat bundle.
pub fn is_satisfied(id: AchievementId, stats: &StatBundle) -> bool {
    use AchievementId::*;
    match id {
        FirstBlood => stats.enemies_destroyed >= 1,
        Centurion => stats.high_score.max(stats.score) >= 1_000,
        Veteran => stats.high_score.max(stats.score) >= 5_000,
        Legend => stats.high_score.max(stats.score) >= 10_000,
        LevelFive => stats.max_level >= 5,
        LevelTen => stats.max_level >= 10,
        BossSlayer => stats.bosses_defeated >= 1,
        PowerCollector => stats.power_ups_collected >= 10,
        Untouchable => stats.max_level >= 3 && stats.damage_taken == 0,
        KamikazeWhisperer => stats.kamikaze_survived >= 5,
        FormationBreaker => stats.formations_destroyed >= 1,
        BulletDancer => stats.bullets_dodged >= 50,
        FleetAdmiral => stats.ships_unlocked() >= 4,
        SpecialForces => stats.specials_used >= 10,
        Survivor => stats.survival_secs >= 300,
    }
}

/// Tracks stats, evaluates unlock conditions, and queues toasts shown
/// one at a time.
#[derive(Debug, Default)]
pub struct AchievementTracker {
    pub stats: StatBundle,
    pub book: AchievementBook,
    toast_queue: VecDeque<AchievementId>,
    current_toast: Option<(AchievementId, u32)>,
    /// Per formation group: (destroyed, total members).
    formation_kills: HashMap<u32, (usize, usize)>,
}

impl AchievementTracker {
    pub fn new(book: AchievementBook) -> Self {
        Self {
            book,
            ..Self::default()
        }
    }

    /// Reset per-session stats without touching the persisted book.
    pub fn start_session(&mut self) {
        let high_score = self.stats.high_score;
        let max_level = self.stats.max_level;
        self.stats = StatBundle {
            high_score,
            max_level,
            ..StatBundle::default()
        };
        self.formation_kills.clear();
    }

    pub fn on_enemy_destroyed(&mut self, kind: EnemyKind, formation_group: Option<(u32, usize)>) {
        if kind != EnemyKind::EnemyBullet {
            self.stats.enemies_destroyed += 1;
        }
        if let Some((group, total)) = formation_group {
            let entry = self.formation_kills.entry(group).or_insert((0, total));
            entry.0 += 1;
            if entry.0 >= entry.1 {
                self.stats.formations_destroyed += 1;
                self.formation_kills.remove(&group);
            }
        }
    }

    pub fn on_boss_defeated(&mut self) {
        self.stats.bosses_defeated += 1;
    }

    pub fn on_power_up(&mut self) {
        self.stats.power_ups_collected += 1;
    }

    pub fn on_damage_taken(&mut self) {
        self.stats.damage_taken += 1;
    }

    /// A charging kamikaze left the screen without hitting the player.
    pub fn on_kamikaze_survived(&mut self) {
        self.stats.kamikaze_survived += 1;
    }

    /// An enemy bullet left the screen without hitting the player.
    pub fn on_bullet_dodged(&mut self) {
        self.stats.bullets_dodged += 1;
    }

    pub fn on_special_used(&mut self) {
        self.stats.specials_used += 1;
    }

    pub fn set_progress(&mut self, score: u64, level: u32) {
        self.stats.score = score;
        self.stats.high_score = self.stats.high_score.max(score);
        self.stats.max_level = self.stats.max_level.max(level);
    }

    pub fn set_survival_secs(&mut self, secs: u64) {
        self.stats.survival_secs = secs;
    }

    /// Evaluate all conditions, record new unlocks, and advance the
    /// toast display. Returns true if the book changed (caller saves).
    pub fn evaluate(&mut self, events: &mut Vec<GameEvent>) -> bool {
        let mut changed = false;
        for id in AchievementId::all() {
            if !self.book.is_unlocked(id) && is_satisfied(id, &self.stats) {
                self.book.unlock(id);
                self.toast_queue.push_back(id);
                events.push(GameEvent::AchievementUnlocked { id });
                changed = true;
            }
        }

        // One toast at a time.
        match &mut self.current_toast {
            Some((id, remaining)) => {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    self.book.mark_displayed(*id);
                    self.current_toast = None;
                    changed = true;
                }
            }
            None => {
                if let Some(id) = self.toast_queue.pop_front() {
                    self.current_toast = Some((id, ACHIEVEMENT_TOAST_TICKS));
                }
            }
        }
        changed
    }

    pub fn toast_view(&self) -> Option<AchievementToastView> {
        self.current_toast.map(|(id, remaining)| AchievementToastView {
            id,
            title: id.title().to_string(),
            remaining,
        })
    }
}
