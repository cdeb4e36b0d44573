// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `vizir_chart`.
//!
//! Declares a layered letter-frequency chart, mounts it on an engine that prints every pushed
//! specification as JSON, then changes the tree and tears the chart down.
//!
//! Set `RUST_LOG=vizir_spec=trace,vizir_chart=debug` to see the compiler and lifecycle logs.

use tracing_subscriber::EnvFilter;
use vizir_chart::{
    ChartOptions, ChartRoot, Container, Engine, Hooks, Interaction, Surface, SurfaceError,
};
use vizir_nodes::data::DataFormat;
use vizir_nodes::{component, coordinate, data, encode, mark, transform, view};
use vizir_spec::{Node, Value};

const LETTERS_CSV: &str =
    "https://gw.alipayobjects.com/os/bmw-prod/fb9db6b7-23a5-4c23-bbef-c54a55fee580.csv";

#[derive(Debug, Default)]
struct JsonEngine {
    pushes: usize,
}

impl Engine for JsonEngine {
    fn options(&mut self, spec: Value) {
        self.pushes += 1;
        match serde_json::to_string_pretty(&spec) {
            Ok(json) => println!("options #{}:\n{json}", self.pushes),
            Err(err) => eprintln!("options #{}: unserializable spec: {err}", self.pushes),
        }
    }

    fn render(&mut self) {
        println!("render #{}", self.pushes);
    }

    fn destroy(&mut self) {
        println!("destroy after {} pushes", self.pushes);
    }
}

#[derive(Debug)]
struct Stdout;

impl Surface for Stdout {
    type Engine = JsonEngine;

    fn create_engine(&mut self, container: &Container) -> Result<JsonEngine, SurfaceError> {
        println!(
            "create {}x{} in <div class=\"{}\">",
            container.size.width, container.size.height, container.class_name
        );
        Ok(JsonEngine::default())
    }
}

fn letters_chart(sorted: bool) -> Node {
    let mut bars = mark::interval().with_children([
        component::title("test title").with_prop("align", "center"),
        encode::encode("x", "letter"),
        encode::encode("y", "frequency"),
        encode::field("color", "letter"),
    ]);
    if sorted {
        bars = bars.with_child(
            transform::sort_x()
                .with_prop("reverse", true)
                .with_prop("by", "y"),
        );
    }

    let pie = mark::interval()
        .with_props([("x", 300), ("y", 65), ("width", 300), ("height", 300)])
        .with_prop("legend", false)
        .with_children([
            encode::field("y", "frequency"),
            encode::encode("color", "letter"),
            transform::stack_y(),
            coordinate::theta(),
        ]);

    view::space_layer().with_children([
        data::fetch(LETTERS_CSV).format(DataFormat::Csv).into_node(),
        bars,
        pie,
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let hooks = Hooks::default()
        .on_before_render(|spec| {
            let kind = spec.get("type").and_then(Value::as_str).unwrap_or("?");
            println!("before render: {kind}");
        })
        .on_after_render(|| println!("after render"))
        .on_element_interaction(|i| println!("element {}: {:?} {:?}", i.event, i.mark, i.datum));

    let mut chart = ChartRoot::new(ChartOptions::default().with_size(640.0, 480.0)).with_hooks(hooks);
    chart.mount(&mut Stdout)?;

    // No tree yet: mounting alone pushes nothing.
    chart.set_children(letters_chart(true))?;
    chart.dispatch_interaction(
        &Interaction::new("click")
            .with_mark("interval")
            .with_datum([("letter", "E")].into_iter().collect::<Value>()),
    )?;

    // Redeclare without the sort transform.
    chart.set_children(letters_chart(false))?;

    // Bare marks at the top level get an implicit view.
    let sales: Value = [
        ("Sports", 275),
        ("Strategy", 115),
        ("Action", 120),
        ("Shooter", 350),
        ("Other", 150),
    ]
    .into_iter()
    .map(|(genre, sold)| {
        [("genre", Value::from(genre)), ("sold", Value::from(sold))]
            .into_iter()
            .collect::<Value>()
    })
    .collect::<Vec<_>>()
    .into();
    chart.set_children(
        mark::interval()
            .with_prop("data", sales)
            .with_children([encode::field("x", "genre"), encode::field("y", "sold")]),
    )?;

    chart.unmount()?;
    Ok(())
}
