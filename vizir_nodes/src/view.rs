// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Views and compositions.
//!
//! Child views and marks of a composition land in its `children` collection.

constructors! {
    ViewKind {
        view => View,
        geo_view => GeoView,
        geo_path => GeoPath,
        space_layer => SpaceLayer,
        space_flex => SpaceFlex,
        facet_rect => FacetRect,
        repeat_matrix => RepeatMatrix,
        facet_circle => FacetCircle,
        timing_keyframe => TimingKeyframe,
    }
}
