//! One-way reveal-on-scroll for sections and content blocks.

use std::time::Duration;

use tracing::trace;

use crate::config::RevealConfig;
use crate::viewport::{Region, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction that reveals the block.
    pub threshold: f32,
    /// Added to the viewport's bottom edge before intersecting.
    pub bottom_margin: f32,
    /// Downward offset while hidden, in page units.
    pub hidden_offset: f32,
    /// How long the fade/slide takes once revealed.
    pub transition: Duration,
}

impl RevealOptions {
    /// Cards, project items, stats: slide 30 units, trigger 50 units early.
    pub fn content(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: config.bottom_margin,
            hidden_offset: 30.0,
            transition: Duration::from_millis(600),
        }
    }

    /// Whole sections: slide 50 units, no margin.
    pub fn section(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold,
            bottom_margin: 0.0,
            hidden_offset: 50.0,
            transition: Duration::from_millis(800),
        }
    }
}

/// Index of a registered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(usize);

/// Rendering parameters for a block at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 hidden .. 1.0 fully shown.
    pub opacity: f32,
    /// Remaining downward offset in page units.
    pub offset_y: f32,
}

#[derive(Debug, Clone)]
struct Block {
    region: Region,
    options: RevealOptions,
    revealed_at: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    blocks: Vec<Block>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing a block; it begins hidden.
    pub fn register(&mut self, region: Region, options: RevealOptions) -> BlockId {
        self.blocks.push(Block {
            region,
            options,
            revealed_at: None,
        });
        BlockId(self.blocks.len() - 1)
    }

    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.blocks
            .get(id.0)
            .is_some_and(|block| block.revealed_at.is_some())
    }

    /// Check every hidden block against the viewport. Returns the blocks
    /// revealed by this call; revealed blocks never hide again.
    pub fn observe(&mut self, viewport: &Viewport, now: Duration) -> Vec<BlockId> {
        let mut revealed = Vec::new();
        for (index, block) in self.blocks.iter_mut().enumerate() {
            if block.revealed_at.is_some() {
                continue;
            }
            let ratio = viewport.intersection_ratio(&block.region, block.options.bottom_margin);
            if ratio > 0.0 && ratio >= block.options.threshold {
                block.revealed_at = Some(now);
                revealed.push(BlockId(index));
            }
        }
        if !revealed.is_empty() {
            trace!(count = revealed.len(), "reveal: blocks revealed");
        }
        revealed
    }

    pub fn style(&self, id: BlockId, now: Duration) -> RevealStyle {
        let Some(block) = self.blocks.get(id.0) else {
            return RevealStyle {
                opacity: 1.0,
                offset_y: 0.0,
            };
        };
        let progress = match block.revealed_at {
            None => 0.0,
            Some(_) if block.options.transition.is_zero() => 1.0,
            Some(at) => {
                let elapsed = now.saturating_sub(at).as_secs_f32();
                (elapsed / block.options.transition.as_secs_f32()).min(1.0)
            }
        };
        RevealStyle {
            opacity: progress,
            offset_y: block.options.hidden_offset * (1.0 - progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn block_below_fold_stays_hidden() {
        let mut animator = RevealAnimator::new();
        let options = RevealOptions::content(&RevealConfig::default());
        let id = animator.register(Region::new(1_000.0, 200.0), options);

        assert!(animator.observe(&Viewport::new(0.0, 600.0), ms(0)).is_empty());
        assert!(!animator.is_revealed(id));
        let style = animator.style(id, ms(0));
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.offset_y, 30.0);
    }

    #[test]
    fn bottom_margin_delays_reveal() {
        let mut animator = RevealAnimator::new();
        let options = RevealOptions::content(&RevealConfig::default());
        // 40 units peek into the viewport, all inside the -50 margin.
        let id = animator.register(Region::new(560.0, 200.0), options);
        assert!(animator.observe(&Viewport::new(0.0, 600.0), ms(0)).is_empty());

        // Scroll so 80 units clear the margin: 80 / 200 >= 0.1.
        assert_eq!(animator.observe(&Viewport::new(90.0, 600.0), ms(0)), vec![id]);
    }

    #[test]
    fn reveal_is_one_way_and_animates() {
        let mut animator = RevealAnimator::new();
        let options = RevealOptions::section(&RevealConfig::default());
        let id = animator.register(Region::new(0.0, 400.0), options);

        assert_eq!(animator.observe(&Viewport::new(0.0, 600.0), ms(1_000)), vec![id]);
        assert!(animator.observe(&Viewport::new(5_000.0, 600.0), ms(1_200)).is_empty());
        assert!(animator.is_revealed(id));

        let halfway = animator.style(id, ms(1_400));
        assert!((halfway.opacity - 0.5).abs() < 1e-4);
        assert!((halfway.offset_y - 25.0).abs() < 1e-3);

        let done = animator.style(id, ms(5_000));
        assert_eq!(done.opacity, 1.0);
        assert_eq!(done.offset_y, 0.0);
    }
}
