pub mod champion_stats;
pub mod correlation;
pub mod group;
pub mod names;
pub mod player;
pub mod sort;
