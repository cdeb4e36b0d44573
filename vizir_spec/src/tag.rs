// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node type tags.
//!
//! Every node carries a [`TypeTag`]: a category plus a variant within that category. The set of
//! variants is closed, one enum per category, so merge and slot rules are total over a known
//! finite tag set. Variant strings are the names the rendering engine expects in the `type` field
//! of a specification. The same string can appear in two categories (`pack` is both a mark and a
//! transform); the category disambiguates.

use core::fmt;

macro_rules! kinds {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $str:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                #[doc = concat!("`", $str, "`")]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Returns the variant string written to the `type` field.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }

            /// Parses a variant string. Matching is exact and case-sensitive.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($str => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

kinds! {
    /// Composite layout containers (views and compositions).
    ViewKind {
        View => "view",
        GeoView => "geoView",
        GeoPath => "geoPath",
        SpaceLayer => "spaceLayer",
        SpaceFlex => "spaceFlex",
        FacetRect => "facetRect",
        RepeatMatrix => "repeatMatrix",
        FacetCircle => "facetCircle",
        TimingKeyframe => "timingKeyframe",
    }
}

kinds! {
    /// Data sources.
    ///
    /// A `fetch` source is a descriptor (locator and format); loading is left to the engine.
    DataKind {
        Inline => "inline",
        Fetch => "fetch",
    }
}

kinds! {
    /// Graphical marks.
    MarkKind {
        Interval => "interval",
        Rect => "rect",
        Line => "line",
        Point => "point",
        Text => "text",
        LineX => "lineX",
        LineY => "lineY",
        Range => "range",
        RangeX => "rangeX",
        RangeY => "rangeY",
        Connector => "connector",
        Cell => "cell",
        Area => "area",
        Node => "node",
        Edge => "edge",
        Link => "link",
        Image => "image",
        Polygon => "polygon",
        Box => "box",
        BoxPlot => "boxplot",
        Shape => "shape",
        Vector => "vector",
        Sankey => "sankey",
        Path => "path",
        Treemap => "treemap",
        Pack => "pack",
        ForceGraph => "forceGraph",
        Tree => "tree",
        WordCloud => "wordCloud",
        Gauge => "gauge",
        Density => "density",
        Heatmap => "heatmap",
        Liquid => "liquid",
        Custom => "custom",
    }
}

kinds! {
    /// Visual-encoding rules.
    EncodeKind {
        Constant => "constant",
        Field => "field",
        Column => "column",
        Transform => "transform",
        Custom => "custom",
    }
}

kinds! {
    /// Mark-level data transforms.
    TransformKind {
        DodgeX => "dodgeX",
        StackY => "stackY",
        NormalizeY => "normalizeY",
        Jitter => "jitter",
        JitterX => "jitterX",
        StackEnter => "stackEnter",
        SymmetryY => "symmetryY",
        DiffY => "diffY",
        Select => "select",
        SelectX => "selectX",
        SelectY => "selectY",
        SortColor => "sortColor",
        SortX => "sortX",
        SortY => "sortY",
        FlexX => "flexX",
        Pack => "pack",
        GroupX => "groupX",
        GroupY => "groupY",
        GroupColor => "groupColor",
        Group => "group",
        BinX => "binX",
        Bin => "bin",
        Sample => "sample",
        Filter => "filter",
    }
}

kinds! {
    /// Coordinate systems.
    CoordinateKind {
        Polar => "polar",
        Helix => "helix",
        Radar => "radar",
        Theta => "theta",
        Radial => "radial",
        Cartesian => "cartesian",
        Cartesian3D => "cartesian3D",
        Parallel => "parallel",
        Geo => "geo",
    }
}

kinds! {
    /// Decorative components (guides and interaction widgets).
    ComponentKind {
        AxisX => "axisX",
        AxisY => "axisY",
        AxisZ => "axisZ",
        Title => "title",
        Legends => "legends",
        Slider => "slider",
        Scrollbar => "scrollbar",
        Tooltip => "tooltip",
    }
}

/// The category half of a [`TypeTag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Views and compositions.
    View,
    /// Data sources.
    Data,
    /// Marks.
    Mark,
    /// Encodings.
    Encode,
    /// Transforms.
    Transform,
    /// Coordinates.
    Coordinate,
    /// Components.
    Component,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::View,
        Self::Data,
        Self::Mark,
        Self::Encode,
        Self::Transform,
        Self::Coordinate,
        Self::Component,
    ];

    /// Returns the lowercase category name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Data => "data",
            Self::Mark => "mark",
            Self::Encode => "encode",
            Self::Transform => "transform",
            Self::Coordinate => "coordinate",
            Self::Component => "component",
        }
    }
}

/// A node's category and variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeTag {
    /// A view or composition.
    View(ViewKind),
    /// A data source.
    Data(DataKind),
    /// A mark.
    Mark(MarkKind),
    /// An encoding.
    Encode(EncodeKind),
    /// A transform.
    Transform(TransformKind),
    /// A coordinate system.
    Coordinate(CoordinateKind),
    /// A component.
    Component(ComponentKind),
}

impl TypeTag {
    /// The tag used for the implicit wrapper around bare top-level nodes.
    pub const DEFAULT_VIEW: Self = Self::View(ViewKind::View);

    /// Returns the tag's category.
    pub const fn category(self) -> Category {
        match self {
            Self::View(_) => Category::View,
            Self::Data(_) => Category::Data,
            Self::Mark(_) => Category::Mark,
            Self::Encode(_) => Category::Encode,
            Self::Transform(_) => Category::Transform,
            Self::Coordinate(_) => Category::Coordinate,
            Self::Component(_) => Category::Component,
        }
    }

    /// Returns the variant string written to the `type` field.
    pub const fn variant(self) -> &'static str {
        match self {
            Self::View(k) => k.name(),
            Self::Data(k) => k.name(),
            Self::Mark(k) => k.name(),
            Self::Encode(k) => k.name(),
            Self::Transform(k) => k.name(),
            Self::Coordinate(k) => k.name(),
            Self::Component(k) => k.name(),
        }
    }

    /// Returns `true` for views and compositions.
    pub const fn is_view(self) -> bool {
        matches!(self, Self::View(_))
    }

    /// Parses a variant string within a category.
    pub fn parse(category: Category, variant: &str) -> Option<Self> {
        Some(match category {
            Category::View => Self::View(ViewKind::from_name(variant)?),
            Category::Data => Self::Data(DataKind::from_name(variant)?),
            Category::Mark => Self::Mark(MarkKind::from_name(variant)?),
            Category::Encode => Self::Encode(EncodeKind::from_name(variant)?),
            Category::Transform => Self::Transform(TransformKind::from_name(variant)?),
            Category::Coordinate => Self::Coordinate(CoordinateKind::from_name(variant)?),
            Category::Component => Self::Component(ComponentKind::from_name(variant)?),
        })
    }

    /// Iterates every tag of every category.
    pub fn all() -> impl Iterator<Item = Self> {
        ViewKind::ALL
            .iter()
            .copied()
            .map(Self::View)
            .chain(DataKind::ALL.iter().copied().map(Self::Data))
            .chain(MarkKind::ALL.iter().copied().map(Self::Mark))
            .chain(EncodeKind::ALL.iter().copied().map(Self::Encode))
            .chain(TransformKind::ALL.iter().copied().map(Self::Transform))
            .chain(CoordinateKind::ALL.iter().copied().map(Self::Coordinate))
            .chain(ComponentKind::ALL.iter().copied().map(Self::Component))
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category().name(), self.variant())
    }
}

impl From<ViewKind> for TypeTag {
    fn from(kind: ViewKind) -> Self {
        Self::View(kind)
    }
}

impl From<DataKind> for TypeTag {
    fn from(kind: DataKind) -> Self {
        Self::Data(kind)
    }
}

impl From<MarkKind> for TypeTag {
    fn from(kind: MarkKind) -> Self {
        Self::Mark(kind)
    }
}

impl From<EncodeKind> for TypeTag {
    fn from(kind: EncodeKind) -> Self {
        Self::Encode(kind)
    }
}

impl From<TransformKind> for TypeTag {
    fn from(kind: TransformKind) -> Self {
        Self::Transform(kind)
    }
}

impl From<CoordinateKind> for TypeTag {
    fn from(kind: CoordinateKind) -> Self {
        Self::Coordinate(kind)
    }
}

impl From<ComponentKind> for TypeTag {
    fn from(kind: ComponentKind) -> Self {
        Self::Component(kind)
    }
}
