// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks.

constructors! {
    MarkKind {
        interval => Interval,
        rect => Rect,
        line => Line,
        point => Point,
        text => Text,
        line_x => LineX,
        line_y => LineY,
        range => Range,
        range_x => RangeX,
        range_y => RangeY,
        connector => Connector,
        cell => Cell,
        area => Area,
        node => Node,
        edge => Edge,
        link => Link,
        image => Image,
        polygon => Polygon,
        box_mark => Box,
        box_plot => BoxPlot,
        shape => Shape,
        vector => Vector,
        sankey => Sankey,
        path => Path,
        treemap => Treemap,
        pack => Pack,
        force_graph => ForceGraph,
        tree => Tree,
        word_cloud => WordCloud,
        gauge => Gauge,
        density => Density,
        heatmap => Heatmap,
        liquid => Liquid,
        custom => Custom,
    }
}
