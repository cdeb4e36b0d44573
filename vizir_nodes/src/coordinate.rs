// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate systems. A mark or view holds one, in its `coordinate` slot.

constructors! {
    CoordinateKind {
        polar => Polar,
        helix => Helix,
        radar => Radar,
        theta => Theta,
        radial => Radial,
        cartesian => Cartesian,
        cartesian_3d => Cartesian3D,
        parallel => Parallel,
        geo => Geo,
    }
}
