// animation.rs - Explicit per-frame update pass.
//
// Instead of implicit re-render semantics, the scene keeps an explicit
// list of nodes that animate and visits only those once per frame.

/// A scene node driven by elapsed time.
pub trait Animated {
    /// Receive the current elapsed time in seconds.
    /// Must be O(1) and allocation-free; runs on the frame loop.
    fn tick(&mut self, time: f32);
}

/// Visit every registered node with the time sample.
///
/// A missing sample (`None`) skips the pass entirely: the nodes keep
/// whatever state the previous frame wrote, freezing the animation for
/// one frame rather than erroring.
pub fn advance(nodes: &mut [&mut dyn Animated], sample: Option<f32>) {
    let Some(time) = sample else {
        return;
    };
    for node in nodes.iter_mut() {
        node.tick(time);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
        last_time: f32,
    }

    impl Animated for Counter {
        fn tick(&mut self, time: f32) {
            self.ticks += 1;
            self.last_time = time;
        }
    }

    #[test]
    fn advance_visits_every_node() {
        let mut a = Counter { ticks: 0, last_time: 0.0 };
        let mut b = Counter { ticks: 0, last_time: 0.0 };

        advance(&mut [&mut a, &mut b], Some(1.5));

        assert_eq!(a.ticks, 1);
        assert_eq!(b.ticks, 1);
        assert_eq!(a.last_time, 1.5);
        assert_eq!(b.last_time, 1.5);
    }

    #[test]
    fn missing_sample_skips_the_pass() {
        let mut node = Counter { ticks: 0, last_time: 0.0 };

        advance(&mut [&mut node], Some(2.0));
        advance(&mut [&mut node], None);

        assert_eq!(node.ticks, 1, "no tick for a missing time sample");
        assert_eq!(node.last_time, 2.0, "previous state is retained");
    }

    #[test]
    fn removed_node_receives_no_further_ticks() {
        let mut kept = Counter { ticks: 0, last_time: 0.0 };
        let mut removed = Counter { ticks: 0, last_time: 0.0 };

        advance(&mut [&mut kept, &mut removed], Some(1.0));

        // Node torn down - it no longer appears in the pass
        advance(&mut [&mut kept], Some(2.0));

        assert_eq!(kept.ticks, 2);
        assert_eq!(removed.ticks, 1, "torn-down node must not be ticked again");
    }
}
