//! Bindings from content indices to revealable page elements.
//!
//! Animation steps address elements by slide/card index. A binding can
//! be absent (the page never attached that element); every such lookup
//! is a silent skip, never a fault, so a partially-built page degrades
//! to reduced animation instead of a broken schedule.

use std::time::Duration;

use petal_motion::reveal::{RevealPose, RevealStyle};
use tracing::debug;

/// One revealable element: its style, current pose, and the page-clock
/// instant its reveal was triggered (if any).
#[derive(Debug, Clone)]
pub struct RevealTarget {
    style: RevealStyle,
    pose: RevealPose,
    started: Option<Duration>,
}

impl RevealTarget {
    pub fn new(style: RevealStyle) -> Self {
        Self {
            style,
            // Hidden start state until triggered or settled.
            pose: style.sample(Duration::ZERO),
            started: None,
        }
    }

    /// Jump straight to the fully-visible end state (no animation).
    pub fn settle(&mut self) {
        self.pose = RevealPose::settled();
        self.started = None;
    }

    /// Begin the reveal at page-clock `now`. Re-triggering restarts it,
    /// which is what the cyclic re-reveal of slide 0 relies on.
    pub fn trigger(&mut self, now: Duration) {
        self.started = Some(now);
        self.pose = self.style.sample(Duration::ZERO);
    }

    /// Advance the pose to page-clock `now`.
    pub fn update(&mut self, now: Duration) {
        if let Some(started) = self.started {
            let since = now.saturating_sub(started);
            self.pose = self.style.sample(since);
            if self.style.is_finished(since) {
                self.started = None;
                self.pose = RevealPose::settled();
            }
        }
    }

    pub fn pose(&self) -> RevealPose {
        self.pose
    }
}

/// Index-addressed bindings for the whole page.
#[derive(Debug, Clone)]
pub struct PageStage {
    headings: Vec<Option<RevealTarget>>,
    bodies: Vec<Option<RevealTarget>>,
    cards: Vec<Option<RevealTarget>>,
    trending_section: Option<RevealTarget>,
    trending: Vec<Option<RevealTarget>>,
}

impl PageStage {
    /// Bind every slide's heading/body, every showcase card, and every
    /// trending card. Slide 0 starts settled: the page presents it
    /// fully revealed with no transition delay.
    pub fn new(slide_count: usize, card_count: usize, trending_count: usize) -> Self {
        let mut headings: Vec<_> = (0..slide_count)
            .map(|_| Some(RevealTarget::new(RevealStyle::heading())))
            .collect();
        let mut bodies: Vec<_> = (0..slide_count)
            .map(|_| Some(RevealTarget::new(RevealStyle::body())))
            .collect();
        if let Some(Some(h)) = headings.get_mut(0) {
            h.settle();
        }
        if let Some(Some(b)) = bodies.get_mut(0) {
            b.settle();
        }
        Self {
            headings,
            bodies,
            cards: (0..card_count)
                .map(|_| Some(RevealTarget::new(RevealStyle::card())))
                .collect(),
            trending_section: (trending_count > 0)
                .then(|| RevealTarget::new(RevealStyle::section_entrance())),
            trending: (0..trending_count)
                .map(|i| {
                    Some(RevealTarget::new(
                        RevealStyle::trending_card().stagger_delay(i as u32),
                    ))
                })
                .collect(),
        }
    }

    /// Detach a slide's elements, as if the page never attached them.
    pub fn unbind_slide(&mut self, index: usize) {
        if let Some(slot) = self.headings.get_mut(index) {
            *slot = None;
        }
        if let Some(slot) = self.bodies.get_mut(index) {
            *slot = None;
        }
    }

    /// Trigger the two-part text reveal for a slide that just arrived.
    /// Unbound or out-of-range elements are skipped silently.
    pub fn reveal_slide(&mut self, index: usize, now: Duration) {
        match self.headings.get_mut(index) {
            Some(Some(heading)) => heading.trigger(now),
            Some(None) => debug!(slide = index, "heading unbound, skipping reveal"),
            None => debug!(slide = index, "slide not on stage, skipping reveal"),
        }
        if let Some(Some(body)) = self.bodies.get_mut(index) {
            body.trigger(now);
        }
    }

    /// Trigger a showcase card's entrance reveal.
    pub fn reveal_card(&mut self, index: usize, now: Duration) {
        match self.cards.get_mut(index) {
            Some(Some(card)) => card.trigger(now),
            _ => debug!(card = index, "card unbound, skipping reveal"),
        }
    }

    /// Start the trending strip's entrance: the section slides up and
    /// each card follows with its own stagger delay.
    pub fn reveal_trending(&mut self, now: Duration) {
        if let Some(section) = &mut self.trending_section {
            section.trigger(now);
        }
        for slot in self.trending.iter_mut().flatten() {
            slot.trigger(now);
        }
    }

    /// Advance every bound element to page-clock `now`.
    pub fn update(&mut self, now: Duration) {
        for target in self
            .headings
            .iter_mut()
            .chain(self.bodies.iter_mut())
            .chain(self.cards.iter_mut())
            .chain(self.trending.iter_mut())
            .flatten()
            .chain(self.trending_section.iter_mut())
        {
            target.update(now);
        }
    }

    pub fn heading_pose(&self, index: usize) -> Option<RevealPose> {
        self.headings.get(index)?.as_ref().map(RevealTarget::pose)
    }

    pub fn body_pose(&self, index: usize) -> Option<RevealPose> {
        self.bodies.get(index)?.as_ref().map(RevealTarget::pose)
    }

    pub fn card_pose(&self, index: usize) -> Option<RevealPose> {
        self.cards.get(index)?.as_ref().map(RevealTarget::pose)
    }

    pub fn trending_pose(&self, index: usize) -> Option<RevealPose> {
        self.trending.get(index)?.as_ref().map(RevealTarget::pose)
    }

    pub fn trending_section_pose(&self) -> Option<RevealPose> {
        self.trending_section.as_ref().map(RevealTarget::pose)
    }
}
