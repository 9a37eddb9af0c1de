//! Simulation report generation.

use serde::Serialize;

use crate::character::Player;
use crate::core::GameState;

/// End state of one simulated run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub won: bool,
    pub died: bool,
    pub timed_out: bool,
    pub final_level: u32,
    pub pages: u32,
    pub gold: u32,
    pub dungeons_cleared: u32,
    pub dungeon_attempts: u32,
    pub bosses_defeated: u32,
    pub enemies_defeated: u32,
    pub achievements: usize,
    pub actions: u32,
    /// Snapshot of the character when the run stopped.
    pub final_player: Player,
}

impl RunStats {
    pub fn from_state(state: &GameState, dungeon_attempts: u32, actions: u32) -> Self {
        let player = &state.player;
        let won = state.final_boss_defeated;
        let died = !player.is_alive();
        Self {
            won,
            died,
            timed_out: !won && !died,
            final_level: player.level,
            pages: player.pages,
            gold: player.gold,
            dungeons_cleared: player.record.dungeons_cleared,
            dungeon_attempts,
            bosses_defeated: player.record.bosses_defeated,
            enemies_defeated: player.record.enemies_defeated,
            achievements: player.achievements.count(),
            actions,
            final_player: player.clone(),
        }
    }

    pub fn ending(&self) -> &'static str {
        if self.won {
            "Victory"
        } else if self.died {
            "Died"
        } else {
            "Timed out"
        }
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_won: u32,
    pub runs_died: u32,
    pub runs_timed_out: u32,

    pub win_rate: f64,
    pub death_rate: f64,

    pub avg_final_level: f64,
    pub avg_pages: f64,
    pub avg_dungeons_cleared: f64,
    pub avg_gold: f64,
    pub avg_bosses_defeated: f64,
    pub avg_enemies_defeated: f64,
    pub avg_achievements: f64,

    /// Level reached by each run that died
    pub death_levels: Vec<u32>,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], field: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(field).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_won = runs.iter().filter(|r| r.won).count() as u32;
        let runs_died = runs.iter().filter(|r| r.died).count() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;
        let rate = |n: u32| {
            if num_runs == 0 {
                0.0
            } else {
                n as f64 / num_runs as f64
            }
        };

        Self {
            num_runs,
            runs_won,
            runs_died,
            runs_timed_out,
            win_rate: rate(runs_won),
            death_rate: rate(runs_died),
            avg_final_level: average(&runs, |r| r.final_level as f64),
            avg_pages: average(&runs, |r| r.pages as f64),
            avg_dungeons_cleared: average(&runs, |r| r.dungeons_cleared as f64),
            avg_gold: average(&runs, |r| r.gold as f64),
            avg_bosses_defeated: average(&runs, |r| r.bosses_defeated as f64),
            avg_enemies_defeated: average(&runs, |r| r.enemies_defeated as f64),
            avg_achievements: average(&runs, |r| r.achievements as f64),
            death_levels: runs
                .iter()
                .filter(|r| r.died)
                .map(|r| r.final_level)
                .collect(),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} won, {} died, {} timed out\n\n",
            self.num_runs, self.runs_won, self.runs_died, self.runs_timed_out
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Win Rate:            {:.1}%\n",
            self.win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Death Rate:          {:.1}%\n\n",
            self.death_rate * 100.0
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Level:     {:.1}\n",
            self.avg_final_level
        ));
        report.push_str(&format!("  Avg Pages:           {:.2}\n", self.avg_pages));
        report.push_str(&format!(
            "  Avg Dungeons:        {:.1}\n",
            self.avg_dungeons_cleared
        ));
        report.push_str(&format!(
            "  Avg Bosses:          {:.1}\n",
            self.avg_bosses_defeated
        ));
        report.push_str(&format!(
            "  Avg Enemies:         {:.1}\n",
            self.avg_enemies_defeated
        ));
        report.push_str(&format!(
            "  Avg Achievements:    {:.1}\n",
            self.avg_achievements
        ));
        report.push_str(&format!("  Avg Final Gold:      {:.0}\n\n", self.avg_gold));

        report.push_str("── DEATH ANALYSIS ───────────────────────────────────────────────\n");
        if self.death_levels.is_empty() {
            report.push_str("  No deaths\n\n");
        } else {
            let mut sorted = self.death_levels.clone();
            sorted.sort_unstable();
            let min = sorted.first().copied().unwrap_or(0);
            let max = sorted.last().copied().unwrap_or(0);
            let median = sorted.get(sorted.len() / 2).copied().unwrap_or(0);
            report.push_str(&format!("  Min Death Level:    {}\n", min));
            report.push_str(&format!("  Median Death Level: {}\n", median));
            report.push_str(&format!("  Max Death Level:    {}\n\n", max));
        }

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.win_rate > 0.9 {
            "TOO EASY - Nearly every run wins"
        } else if self.win_rate > 0.4 {
            "GOOD - Challenging but fair"
        } else if self.win_rate > 0.1 {
            "HARD - Most runs fall short"
        } else {
            "TOO HARD - Wins are rare"
        };
        report.push_str(&format!("  Rating: {}\n", rating));
        if self.avg_pages < 1.0 {
            report.push_str("  ⚠️  Few bosses beaten - early dungeons too hard?\n");
        }
        if self.runs_timed_out > self.num_runs / 2 {
            report.push_str("  ⚠️  Most runs timed out - key income too low?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
