use tracing::trace;

use super::{StringLayout, StringSet};
use crate::landmark::Point;

/// Remembers where the strum point was last frame and reports which
/// strings it has crossed since.
#[derive(Clone, Debug)]
pub struct StrumTracker {
    layout: StringLayout,
    previous: Option<Point>,
}

impl StrumTracker {
    pub fn new(layout: StringLayout) -> Self {
        Self {
            layout,
            previous: None,
        }
    }

    /// Feed this frame's strum point (or `None` when nothing was detected).
    ///
    /// Crossings are reported only when both this and the previous frame
    /// had a point, `armed` is set (a chord is active), and the current
    /// point lies inside the string band. The previous point is replaced on
    /// every call regardless, so a frame without a point breaks the motion
    /// and the next point starts fresh.
    pub fn update(&mut self, current: Option<Point>, armed: bool) -> StringSet {
        let crossed = match (self.previous, current) {
            (Some(prev), Some(cur)) if armed && self.layout.contains_x(cur.x) => {
                self.layout.crossed(prev.y, cur.y)
            }
            _ => StringSet::empty(),
        };

        if !crossed.is_empty() {
            trace!("strum {:?} -> {:?} crossed {:?}", self.previous, current, crossed);
        }

        self.previous = current;
        crossed
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    pub fn layout(&self) -> &StringLayout {
        &self.layout
    }

    /// Forget the previous point.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Band 0..=200, lines at 15, 30, 45, 60, 75, 90.
    fn tracker() -> StrumTracker {
        StrumTracker::new(StringLayout::for_frame(200, 120, (0.0, 1.0), 15))
    }

    fn at(y: i32) -> Option<Point> {
        Some(Point::new(100, y))
    }

    #[test]
    fn crossing_reported_once() {
        let mut t = tracker();
        assert_eq!(t.layout().line_y(3), 60);

        assert!(t.update(at(50), true).is_empty());
        let crossed = t.update(at(70), true);
        assert_eq!(crossed.iter().collect::<Vec<_>>(), vec![3]);
        let crossed = t.update(at(90), true);
        assert!(!crossed.contains(3));
        assert_eq!(crossed.iter().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn outside_band_never_crosses_but_still_moves() {
        let mut t = StrumTracker::new(StringLayout::new(100, 200, 15, 15));
        t.update(Some(Point::new(150, 50)), true);
        assert!(t.update(Some(Point::new(250, 70)), true).is_empty());
        assert_eq!(t.previous(), Some(Point::new(250, 70)));

        // Back inside: compared against the out-of-band point, not y=50.
        let crossed = t.update(Some(Point::new(150, 80)), true);
        assert_eq!(crossed.iter().collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn first_update_and_gaps_report_nothing() {
        let mut t = tracker();
        assert!(t.update(at(10), true).is_empty());
        assert!(t.update(None, true).is_empty());
        assert_eq!(t.previous(), None);
        // No previous point after the gap.
        assert!(t.update(at(100), true).is_empty());
    }

    #[test]
    fn unarmed_tracks_without_reporting() {
        let mut t = tracker();
        t.update(at(10), false);
        assert!(t.update(at(100), false).is_empty());
        assert_eq!(t.previous(), at(100));
        assert_eq!(t.update(at(10), true).len(), 6);
    }

    #[test]
    fn reset_forgets_previous() {
        let mut t = tracker();
        t.update(at(10), true);
        t.reset();
        assert!(t.update(at(100), true).is_empty());
    }
}
