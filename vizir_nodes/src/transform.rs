// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark transforms.
//!
//! Transforms land in the mark's `transform` collection and are applied by the engine in
//! declaration order. Options are plain properties:
//!
//! ```
//! let sort = vizir_nodes::transform::sort_x()
//!     .with_prop("by", "y")
//!     .with_prop("reverse", true);
//! assert_eq!(sort.tag().variant(), "sortX");
//! ```

constructors! {
    TransformKind {
        dodge_x => DodgeX,
        stack_y => StackY,
        normalize_y => NormalizeY,
        jitter => Jitter,
        jitter_x => JitterX,
        stack_enter => StackEnter,
        symmetry_y => SymmetryY,
        diff_y => DiffY,
        select => Select,
        select_x => SelectX,
        select_y => SelectY,
        sort_color => SortColor,
        sort_x => SortX,
        sort_y => SortY,
        flex_x => FlexX,
        pack => Pack,
        group_x => GroupX,
        group_y => GroupY,
        group_color => GroupColor,
        group => Group,
        bin_x => BinX,
        bin => Bin,
        sample => Sample,
        filter => Filter,
    }
}
