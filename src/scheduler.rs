use std::time::Duration;

use crate::state::Step;

/// Deferred execution: run `step` once, at least `delay` from now.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, step: Step);
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    seq: u64, // Keeps insertion order for equal deadlines
    step: Step,
}

/// Frame-driven timer queue.
///
/// The clock only moves when [`TimerQueue::advance`] is called. Steps fire in
/// deadline order and the clock is set to each step's deadline while it runs,
/// so anything scheduled from inside a step is measured from the moment that
/// step was due rather than from the end of the frame.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves the clock forward by `dt`, handing every step that falls due to `fire`.
    pub fn advance<F>(&mut self, dt: Duration, mut fire: F)
    where
        F: FnMut(Step, &mut Self),
    {
        let target = self.now + dt;
        while let Some(pending) = self.pop_due(target) {
            self.now = pending.due;
            fire(pending.step, self);
        }
        self.now = target;
    }

    fn pop_due(&mut self, until: Duration) -> Option<Pending> {
        let (position, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))?;
        Some(self.pending.swap_remove(position))
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, step: Step) {
        let due = self.now + delay;
        tracing::trace!(?step, due_ms = due.as_millis() as u64, "scheduled");
        self.pending.push(Pending { due, seq: self.next_seq, step });
        self.next_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn step_fires_once_after_its_delay() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(500), Step::FadeIn);

        let mut fired = Vec::new();
        queue.advance(ms(499), |step, _| fired.push(step));
        assert!(fired.is_empty());

        queue.advance(ms(1), |step, _| fired.push(step));
        assert_eq!(fired, vec![Step::FadeIn]);

        queue.advance(ms(10_000), |step, _| fired.push(step));
        assert_eq!(fired.len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn steps_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(300), Step::FadeIn);
        queue.schedule(ms(100), Step::FadeOut);
        queue.schedule(ms(300), Step::FadeOut);

        let mut fired = Vec::new();
        queue.advance(ms(1000), |step, q| fired.push((q.now(), step)));
        assert_eq!(
            fired,
            vec![
                (ms(100), Step::FadeOut),
                (ms(300), Step::FadeIn),
                (ms(300), Step::FadeOut),
            ]
        );
        assert_eq!(queue.now(), ms(1000));
    }

    #[test]
    fn chained_steps_are_measured_from_their_deadline() {
        let mut queue = TimerQueue::new();
        queue.schedule(ms(100), Step::FadeOut);

        let mut fired = Vec::new();
        // One large tick covers both the first step and the one it chains.
        queue.advance(ms(1000), |step, q| {
            fired.push((q.now(), step));
            if step == Step::FadeOut {
                q.schedule(ms(500), Step::FadeIn);
            }
        });
        assert_eq!(fired, vec![(ms(100), Step::FadeOut), (ms(600), Step::FadeIn)]);
    }
}
