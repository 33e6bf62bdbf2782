use std::str::FromStr;

/// Anchor along an element or the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Start,
    Center,
    End,
}

impl Edge {
    #[inline]
    pub fn fraction(self) -> f32 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

impl FromStr for Edge {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            _ => Err(()),
        }
    }
}

/// "`element` edge meets `viewport` edge", e.g. `"start start"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub element: Edge,
    pub viewport: Edge,
}

impl Intersection {
    pub const fn new(element: Edge, viewport: Edge) -> Self {
        Self { element, viewport }
    }

    /// Parse `"<element-edge> <viewport-edge>"`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut it = s.split_whitespace();
        let element = it.next()?.parse().ok()?;
        let viewport = it.next()?.parse().ok()?;
        if it.next().is_some() {
            return None;
        }
        Some(Self { element, viewport })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionOffsets {
    pub enter: Intersection,
    pub exit: Intersection,
}

impl Default for RegionOffsets {
    /// Element top at viewport top through element bottom at viewport top.
    fn default() -> Self {
        Self {
            enter: Intersection::new(Edge::Start, Edge::Start),
            exit: Intersection::new(Edge::End, Edge::Start),
        }
    }
}

impl RegionOffsets {
    /// Parse `"<enter>, <exit>"`, e.g. `"start end, end start"`. Empty input
    /// gives the default.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return Some(Self::default());
        }
        let (enter, exit) = raw.split_once(',')?;
        Some(Self {
            enter: Intersection::parse(enter)?,
            exit: Intersection::parse(exit)?,
        })
    }
}

/// Scroll offsets bounding a tracked region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub start: f32,
    pub end: f32,
}

impl ScrollRegion {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Region for an element at document offset `top` with `height`.
    pub fn from_element(top: f32, height: f32, viewport_height: f32, offsets: RegionOffsets) -> Self {
        let at = |i: Intersection| {
            top + i.element.fraction() * height - i.viewport.fraction() * viewport_height
        };
        Self {
            start: at(offsets.enter),
            end: at(offsets.exit),
        }
    }

    /// How far `offset` has advanced through the region, in `[0, 1]`.
    pub fn progress_at(&self, offset: f32) -> f32 {
        if !offset.is_finite() || offset <= self.start {
            return 0.0;
        }
        if offset >= self.end {
            return 1.0;
        }
        ((offset - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}
