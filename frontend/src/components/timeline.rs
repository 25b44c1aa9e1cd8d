use yew::prelude::*;

use crate::content::Milestone;

/// A point on the timeline, in percent of the container box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineLine {
    pub start: Point,
    pub end: Point,
}

/// Diagonal drawn across the journey section, bottom-left to top-right.
pub const JOURNEY_LINE: TimelineLine = TimelineLine {
    start: Point { x: 12.0, y: 85.0 },
    end: Point { x: 92.0, y: 12.0 },
};

impl TimelineLine {
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        Point {
            x: self.start.x + t * (self.end.x - self.start.x),
            y: self.start.y + t * (self.end.y - self.start.y),
        }
    }

    /// One point per milestone. Breakpoints are used as-is when there is one
    /// per milestone, otherwise the milestones are spread evenly.
    pub fn layout(&self, count: usize, breakpoints: &[f64]) -> Vec<Point> {
        if breakpoints.len() == count {
            return breakpoints.iter().map(|t| self.point_at(*t)).collect();
        }
        (0..count)
            .map(|i| {
                let t = if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };
                self.point_at(t)
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct DiagonalTimelineProps {
    pub milestones: &'static [Milestone],
    pub breakpoints: &'static [f64],
}

#[function_component(DiagonalTimeline)]
pub fn diagonal_timeline(props: &DiagonalTimelineProps) -> Html {
    let line = JOURNEY_LINE;
    let points = line.layout(props.milestones.len(), props.breakpoints);

    html! {
        <div class="timeline-box">
            <svg class="timeline-svg">
                <line
                    x1={format!("{}%", line.start.x)}
                    y1={format!("{}%", line.start.y)}
                    x2={format!("{}%", line.end.x)}
                    y2={format!("{}%", line.end.y)}
                    stroke="#0A2A6B"
                    stroke-width="4"
                />
            </svg>
            { for props.milestones.iter().zip(points).map(|(item, p)| html! {
                <div
                    key={item.year}
                    class="timeline-node"
                    style={format!("left: {:.2}%; top: {:.2}%;", p.x, p.y)}
                >
                    <div class="timeline-dot"></div>
                    <div class="timeline-year">{item.year}</div>
                    <div class="timeline-card">
                        <h3>{item.title}</h3>
                        if !item.description.is_empty() {
                            <p>{item.description}</p>
                        }
                    </div>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn endpoints_match_line() {
        let start = JOURNEY_LINE.point_at(0.0);
        let end = JOURNEY_LINE.point_at(1.0);
        assert_eq!(start, Point { x: 12.0, y: 85.0 });
        assert_eq!(end, Point { x: 92.0, y: 12.0 });
    }

    #[test]
    fn interpolates_linearly() {
        let mid = JOURNEY_LINE.point_at(0.5);
        assert!(close(mid.x, 52.0));
        assert!(close(mid.y, 48.5));
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(JOURNEY_LINE.point_at(-1.0), JOURNEY_LINE.point_at(0.0));
        assert_eq!(JOURNEY_LINE.point_at(3.0), JOURNEY_LINE.point_at(1.0));
    }

    #[test]
    fn layout_uses_matching_breakpoints() {
        let points = JOURNEY_LINE.layout(3, &[0.0, 0.25, 1.0]);
        assert_eq!(points.len(), 3);
        assert!(close(points[1].x, 32.0));
        assert!(close(points[1].y, 66.75));
    }

    #[test]
    fn layout_spreads_evenly_on_mismatch() {
        let points = JOURNEY_LINE.layout(5, &[0.0, 1.0]);
        assert_eq!(points.len(), 5);
        assert!(close(points[2].x, 52.0));
        assert_eq!(points[4], JOURNEY_LINE.point_at(1.0));

        let single = JOURNEY_LINE.layout(1, &[]);
        assert_eq!(single, vec![JOURNEY_LINE.point_at(0.0)]);
        assert!(JOURNEY_LINE.layout(0, &[0.5]).is_empty());
    }

    #[test]
    fn every_point_lies_on_the_line() {
        let slope = (JOURNEY_LINE.end.y - JOURNEY_LINE.start.y) / (JOURNEY_LINE.end.x - JOURNEY_LINE.start.x);
        for p in JOURNEY_LINE.layout(7, crate::content::JOURNEY_BREAKPOINTS) {
            let expected_y = JOURNEY_LINE.start.y + slope * (p.x - JOURNEY_LINE.start.x);
            assert!(close(p.y, expected_y));
        }
    }
}
