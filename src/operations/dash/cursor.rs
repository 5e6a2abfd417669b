use crate::geometry::{segments, Segment};
use crate::math::{Point2, TOLERANCE};
use crate::style::DashPattern;

use super::{DashCarry, DashSpan};

/// Walks a dash pattern along a polyline, one segment at a time.
///
/// The carry returned for a segment is the input for the next one, so the
/// dash phase continues through vertices as if the path were straight.
#[derive(Debug, Clone, Copy)]
pub struct DashCursor<'a> {
    pattern: &'a DashPattern,
}

impl<'a> DashCursor<'a> {
    /// Creates a cursor over `pattern`.
    #[must_use]
    pub fn new(pattern: &'a DashPattern) -> Self {
        Self { pattern }
    }

    /// Emits the spans for the segment `start → end`, resuming from `carry`.
    ///
    /// A solid pattern yields one visible span and passes `carry` through.
    #[must_use]
    pub fn segment(
        &self,
        start: &Point2,
        end: &Point2,
        carry: DashCarry,
    ) -> (Vec<DashSpan>, DashCarry) {
        self.walk(&Segment::new(*start, *end), carry)
    }

    /// Emits the spans for a whole point sequence, threading the carry
    /// through every vertex. Returns the carry left after the last segment.
    #[must_use]
    pub fn path(&self, points: &[Point2], carry: DashCarry) -> (Vec<DashSpan>, DashCarry) {
        let mut spans = Vec::new();
        let mut carry = carry;
        for segment in segments(points) {
            let (walked, next) = self.walk(&segment, carry);
            spans.extend(walked);
            carry = next;
        }
        (spans, carry)
    }

    fn walk(&self, segment: &Segment, carry: DashCarry) -> (Vec<DashSpan>, DashCarry) {
        if self.pattern.is_solid() {
            return (
                vec![DashSpan::new(*segment.start(), *segment.end(), true)],
                carry,
            );
        }

        // Non-solid patterns cycle over at least `TOLERANCE`.
        let total = self.pattern.total_length();

        let distance = segment.length();
        let mut spans = Vec::new();
        let mut walked = 0.0;
        let mut index = carry.pattern_index;

        // Finish the entry left open by the previous segment. An odd index
        // means the open entry is a dash.
        let resume = carry.offset_remaining.rem_euclid(total);
        if resume > TOLERANCE {
            let take = resume.min(distance);
            push_span(&mut spans, segment, 0.0, take, index % 2 == 1);
            walked = take;
            if resume - take > TOLERANCE {
                return (
                    spans,
                    DashCarry {
                        offset_remaining: resume - take,
                        pattern_index: index,
                    },
                );
            }
        }

        let mut left = 0.0;
        while distance - walked > TOLERANCE {
            let Some(entry) = self.pattern.entry(index) else {
                break;
            };
            let next = walked + entry;
            let stop = next.min(distance);
            push_span(&mut spans, segment, walked, stop, DashPattern::is_draw(index));
            left = next - stop;
            walked = stop;
            index += 1;
        }

        (
            spans,
            DashCarry {
                offset_remaining: left,
                pattern_index: index,
            },
        )
    }
}

/// Pushes the span between arc lengths `from` and `to` of `segment`,
/// dropping pieces shorter than [`TOLERANCE`].
fn push_span(spans: &mut Vec<DashSpan>, segment: &Segment, from: f64, to: f64, visible: bool) {
    if to - from < TOLERANCE {
        return;
    }
    let start = segment.point_at(from);
    let end = if (segment.length() - to).abs() < TOLERANCE {
        *segment.end()
    } else {
        segment.point_at(to)
    };
    spans.push(DashSpan::new(start, end, visible));
}
