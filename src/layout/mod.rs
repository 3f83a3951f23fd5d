//! Track layout derived from loaded properties.
//!
//! Converts the trajectory into lengths along the track, and works out where each
//! pattern element sits on each segment. The pattern is laid out once per
//! distinct element ("variant"); as the track advances by one element pitch the
//! host switches to the next variant instead of moving geometry around the loop.
//!
//! Pure geometry: nothing here creates links or joints or steps the simulation.

use crate::error::{LayoutError, Result};
use crate::model::{JointHandle, KinematicModel};
use crate::properties::{Properties, Segment};

/// Largest `elements_per_round` a layout accepts.
pub const MAX_ELEMENTS_PER_ROUND: usize = 1 << 20;

/// Length-related quantities of one trajectory segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayout {
    /// Segment joint.
    pub joint: JointHandle,
    /// Scale from joint position to length along the track.
    ///
    /// 1 for a translational joint, the rotation radius for a rotational one.
    pub joint_to_track: f64,
    /// Length of the segment along the track.
    pub length: f64,
}

/// One pattern element placed on a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Segment index.
    pub segment: usize,
    /// Position of this placement among those on the same segment.
    pub step: usize,
    /// Index of the pattern element placed here.
    pub element: usize,
    /// Segment joint position at which the element sits.
    pub joint_position: f64,
}

/// Lengths and element placement of a whole track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackLayout {
    sprocket_joint_to_track: f64,
    segments: Vec<SegmentLayout>,
    perimeter: f64,
    elements_per_round: usize,
    variant_count: usize,
}

impl TrackLayout {
    /// Compute the layout of a track.
    ///
    /// Rotational segments need the model's joint geometry to find their radius.
    ///
    /// # Errors
    ///
    /// Returns a layout error if a rotational segment has no geometry, a zero-length
    /// axis, or a child link lying on its axis. Also fails if `elements_per_round`
    /// exceeds [`MAX_ELEMENTS_PER_ROUND`] or the element pitch is not a positive
    /// finite length.
    pub fn compose<M>(properties: &Properties, model: &M) -> Result<Self>
    where
        M: KinematicModel + ?Sized,
    {
        let segments = properties
            .trajectory()
            .iter()
            .map(|segment| segment_layout(segment, model))
            .collect::<Result<Vec<_>>>()?;

        let perimeter: f64 = segments.iter().map(|s| s.length).sum();
        let pattern = properties.pattern();

        if pattern.elements_per_round > MAX_ELEMENTS_PER_ROUND {
            return Err(LayoutError::TooManyElements {
                elements_per_round: pattern.elements_per_round,
                max: MAX_ELEMENTS_PER_ROUND,
            }
            .into());
        }

        let pitch = perimeter / pattern.elements_per_round as f64;
        if !(pitch.is_finite() && pitch > 0.0) {
            return Err(LayoutError::InvalidPitch {
                perimeter,
                elements_per_round: pattern.elements_per_round,
            }
            .into());
        }

        tracing::debug!(perimeter, segments = segments.len(), "composed track layout");

        Ok(Self {
            sprocket_joint_to_track: properties.sprocket().pitch_radius().0,
            segments,
            perimeter,
            elements_per_round: pattern.elements_per_round,
            variant_count: pattern.len(),
        })
    }

    /// Per-segment lengths, in traversal order.
    pub fn segments(&self) -> &[SegmentLayout] {
        &self.segments
    }

    /// Total length of the track loop.
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Distance between adjacent elements along the track.
    pub fn element_pitch(&self) -> f64 {
        self.perimeter / self.elements_per_round as f64
    }

    /// Number of variants (one per distinct pattern element).
    pub fn variant_count(&self) -> usize {
        self.variant_count
    }

    /// Scale from sprocket joint position to length along the track.
    pub fn sprocket_joint_to_track(&self) -> f64 {
        self.sprocket_joint_to_track
    }

    /// Element placements of one variant, in traversal order.
    ///
    /// Variant `v` starts with element `n - 1 - v`, half a pitch into the first
    /// segment, and keeps cycling through the elements; length left over at the
    /// end of a segment carries into the next.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::VariantOutOfRange` if `variant >= variant_count()`.
    pub fn placements(&self, variant: usize) -> Result<Vec<Placement>> {
        if variant >= self.variant_count {
            return Err(LayoutError::VariantOutOfRange {
                variant,
                count: self.variant_count,
            }
            .into());
        }

        let pitch = self.element_pitch();
        let mut placements = Vec::with_capacity(self.elements_per_round);

        let mut len_left = -pitch / 2.0;
        let mut len_traveled = pitch / 2.0;
        let mut element = self.variant_count - 1 - variant;

        for (index, segment) in self.segments.iter().enumerate() {
            len_left += segment.length;

            let mut step = 0;
            while len_left >= 0.0 {
                placements.push(Placement {
                    segment: index,
                    step,
                    element,
                    joint_position: len_traveled / segment.joint_to_track,
                });

                len_left -= pitch;
                len_traveled += pitch;
                element = (element + 1) % self.variant_count;
                step += 1;
            }

            len_traveled -= segment.length;
        }

        Ok(placements)
    }

    /// Length along the track for a sprocket joint position.
    pub fn track_position(&self, sprocket_position: f64) -> f64 {
        sprocket_position * self.sprocket_joint_to_track
    }

    /// Variant to enable at a track position.
    pub fn variant_at(&self, track_position: f64) -> usize {
        let pitch = self.element_pitch();
        let span = pitch * self.variant_count as f64;
        let folded = track_position - span * (track_position / span).floor();

        // folded / pitch can round up to variant_count right at the end of the span
        ((folded / pitch).floor() as usize).min(self.variant_count - 1)
    }

    /// Segment joint position that shows the track at `track_position`.
    ///
    /// The track position is folded into `[-pitch / 2, pitch / 2)` around the
    /// element the variant places there.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SegmentOutOfRange` for an unknown segment.
    pub fn segment_joint_position(&self, segment: usize, track_position: f64) -> Result<f64> {
        let layout = self.segment(segment)?;
        let pitch = self.element_pitch();
        let folded = track_position - pitch * (track_position / pitch).floor() - pitch / 2.0;
        Ok(folded / layout.joint_to_track)
    }

    /// Segment joint velocity matching a track velocity.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::SegmentOutOfRange` for an unknown segment.
    pub fn segment_joint_velocity(&self, segment: usize, track_velocity: f64) -> Result<f64> {
        Ok(track_velocity / self.segment(segment)?.joint_to_track)
    }

    fn segment(&self, segment: usize) -> Result<&SegmentLayout> {
        self.segments.get(segment).ok_or_else(|| {
            LayoutError::SegmentOutOfRange {
                segment,
                count: self.segments.len(),
            }
            .into()
        })
    }
}

fn segment_layout<M>(segment: &Segment, model: &M) -> Result<SegmentLayout>
where
    M: KinematicModel + ?Sized,
{
    let end_position = segment.end_position.0;

    if segment.joint.is_translational() {
        return Ok(SegmentLayout {
            joint: segment.joint.clone(),
            joint_to_track: 1.0,
            length: end_position,
        });
    }

    let joint = || segment.joint.name().to_owned();
    let geometry = model
        .joint_geometry(segment.joint.id)
        .ok_or_else(|| LayoutError::MissingGeometry { joint: joint() })?;
    let radius = geometry
        .distance_to_axis()
        .ok_or_else(|| LayoutError::DegenerateAxis { joint: joint() })?;

    if radius <= f64::EPSILON {
        return Err(LayoutError::ZeroRadius { joint: joint() }.into());
    }

    Ok(SegmentLayout {
        joint: segment.joint.clone(),
        joint_to_track: radius,
        length: radius * end_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigDocument;
    use crate::error::Error;
    use crate::model::{JointGeometry, JointKind, JointTable};
    use nalgebra::{Point3, Vector3};

    fn properties(
        model: &JointTable,
        segments: &[(&str, f64)],
        per_round: usize,
        elements: usize,
    ) -> Properties {
        let mut content = String::from("[sprocket]\njoint = \"drive\"\npitch_diameter = 0.2\n");
        for (joint, end) in segments {
            content.push_str(&format!(
                "[[trajectory.segment]]\njoint = \"{}\"\nend_position = {:?}\n",
                joint, end
            ));
        }
        content.push_str(&format!("[pattern]\nelements_per_round = {}\n", per_round));
        for _ in 0..elements {
            content.push_str("[[pattern.element]]\n");
        }

        let document = ConfigDocument::parse(&content).unwrap();
        Properties::load(model, &document).unwrap()
    }

    fn sliders() -> JointTable {
        JointTable::new()
            .with_joint("drive", JointKind::Revolute)
            .with_joint("lower", JointKind::Prismatic)
            .with_joint("upper", JointKind::Prismatic)
    }

    #[test]
    fn test_translational_lengths() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0), ("upper", 1.0)], 4, 2);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        assert_eq!(layout.perimeter(), 2.0);
        assert_eq!(layout.element_pitch(), 0.5);
        assert_eq!(layout.variant_count(), 2);
        assert!((layout.sprocket_joint_to_track() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_placements_cycle_elements() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0), ("upper", 1.0)], 4, 2);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        let first = layout.placements(0).unwrap();
        let summary: Vec<_> = first
            .iter()
            .map(|p| (p.segment, p.step, p.element, p.joint_position))
            .collect();
        assert_eq!(
            summary,
            [
                (0, 0, 1, 0.25),
                (0, 1, 0, 0.75),
                (1, 0, 1, 0.25),
                (1, 1, 0, 0.75),
            ]
        );

        let second = layout.placements(1).unwrap();
        let elements: Vec<_> = second.iter().map(|p| p.element).collect();
        assert_eq!(elements, [0, 1, 0, 1]);

        assert!(matches!(
            layout.placements(2),
            Err(Error::Layout(LayoutError::VariantOutOfRange { variant: 2, count: 2 }))
        ));
    }

    #[test]
    fn test_leftover_carries_to_next_segment() {
        let model = sliders();
        let props = properties(&model, &[("lower", 0.75), ("upper", 1.25)], 4, 1);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        let placements = layout.placements(0).unwrap();
        let summary: Vec<_> = placements
            .iter()
            .map(|p| (p.segment, p.joint_position))
            .collect();
        assert_eq!(summary, [(0, 0.25), (0, 0.75), (1, 0.5), (1, 1.0)]);
    }

    #[test]
    fn test_rotational_radius() {
        let geometry = JointGeometry {
            anchor: Point3::new(0.0, 0.0, 0.0),
            axis: Vector3::new(0.0, 1.0, 0.0),
            child_origin: Point3::new(0.0, 0.0, 0.5),
        };
        let model = sliders().with_geometry("front", JointKind::Revolute, geometry);
        let props = properties(&model, &[("front", std::f64::consts::PI), ("lower", 1.0)], 10, 1);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        let front = &layout.segments()[0];
        assert!((front.joint_to_track - 0.5).abs() < 1e-12);
        assert!((front.length - 0.5 * std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(layout.segments()[1].joint_to_track, 1.0);
    }

    #[test]
    fn test_rotational_without_geometry() {
        let model = sliders().with_joint("front", JointKind::Revolute);
        let props = properties(&model, &[("front", 1.0)], 10, 1);
        assert!(matches!(
            TrackLayout::compose(&props, &model),
            Err(Error::Layout(LayoutError::MissingGeometry { ref joint })) if joint == "front"
        ));
    }

    #[test]
    fn test_child_on_axis() {
        let geometry = JointGeometry {
            anchor: Point3::origin(),
            axis: Vector3::new(0.0, 0.0, 1.0),
            child_origin: Point3::new(0.0, 0.0, 2.0),
        };
        let model = sliders().with_geometry("front", JointKind::Revolute, geometry);
        let props = properties(&model, &[("front", 1.0)], 10, 1);
        assert!(matches!(
            TrackLayout::compose(&props, &model),
            Err(Error::Layout(LayoutError::ZeroRadius { .. }))
        ));
    }

    #[test]
    fn test_huge_elements_per_round() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0)], i64::MAX as usize, 1);
        assert!(matches!(
            TrackLayout::compose(&props, &model),
            Err(Error::Layout(LayoutError::TooManyElements { max, .. })) if max == MAX_ELEMENTS_PER_ROUND
        ));
    }

    #[test]
    fn test_largest_element_count_terminates() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0), ("upper", 1.0)], MAX_ELEMENTS_PER_ROUND, 1);
        let layout = TrackLayout::compose(&props, &model).unwrap();
        assert_eq!(layout.placements(0).unwrap().len(), MAX_ELEMENTS_PER_ROUND);
    }

    #[test]
    fn test_overflowing_perimeter() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1e308), ("upper", 1e308)], 4, 1);
        assert!(matches!(
            TrackLayout::compose(&props, &model),
            Err(Error::Layout(LayoutError::InvalidPitch { .. }))
        ));
    }

    #[test]
    fn test_variant_selection() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0), ("upper", 1.0)], 4, 2);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        assert_eq!(layout.variant_at(0.1), 0);
        assert_eq!(layout.variant_at(0.6), 1);
        assert_eq!(layout.variant_at(1.1), 0);
        assert_eq!(layout.variant_at(-0.1), 1);
    }

    #[test]
    fn test_segment_joint_motion() {
        let model = sliders();
        let props = properties(&model, &[("lower", 1.0), ("upper", 1.0)], 4, 2);
        let layout = TrackLayout::compose(&props, &model).unwrap();

        assert!((layout.segment_joint_position(0, 0.3).unwrap() - 0.05).abs() < 1e-12);
        assert!((layout.segment_joint_position(1, 0.7).unwrap() + 0.05).abs() < 1e-12);
        assert_eq!(layout.segment_joint_velocity(1, 0.4).unwrap(), 0.4);
        assert!((layout.track_position(2.0) - 0.2).abs() < 1e-12);
        assert!(matches!(
            layout.segment_joint_position(5, 0.0),
            Err(Error::Layout(LayoutError::SegmentOutOfRange { segment: 5, count: 2 }))
        ));
    }
}
