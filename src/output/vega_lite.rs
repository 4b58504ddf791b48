//! Vega-Lite v5 encoder.
//!
//! Turns built charts and layouts into Vega-Lite JSON documents. Leaf charts
//! inline their data as `data.values` records. The theme becomes the
//! top-level `config` block and is written once, at the root.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::grammar::{
    Axis, AxisTitle, BuiltChart, BuiltLayer, DataFrame, DataValue, Facet, GeomType, Header,
    Interpolate, Stack, Stat, Theme,
};
use crate::layout::{CompositeLayout, LayoutNode, Resolve};

/// Schema URL written to every document.
pub const SCHEMA_URL: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Standard-normal sample from two uniforms (Box-Muller), evaluated by the
/// renderer per row.
const GAUSSIAN_JITTER_EXPR: &str = "sqrt(-2*log(random()))*cos(2*PI*random())";

/// Vega-Lite document encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct VegaLiteEncoder;

impl VegaLiteEncoder {
    /// Create an encoder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Encode a single chart as a complete document.
    #[must_use]
    pub fn encode_chart(&self, chart: &BuiltChart) -> Value {
        root_document(encode_chart(chart), &Theme::default())
    }

    /// Encode a layout as a complete document.
    #[must_use]
    pub fn encode_layout(&self, layout: &CompositeLayout) -> Value {
        root_document(encode_node(layout.root()), layout.theme())
    }
}

impl BuiltChart {
    /// This chart as a Vega-Lite document.
    #[must_use]
    pub fn to_vega_lite(&self) -> Value {
        VegaLiteEncoder::new().encode_chart(self)
    }
}

impl CompositeLayout {
    /// This figure as a Vega-Lite document.
    #[must_use]
    pub fn to_vega_lite(&self) -> Value {
        VegaLiteEncoder::new().encode_layout(self)
    }
}

/// Write `value` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_json<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!("wrote chart spec to {}", path.display());
    Ok(())
}

fn root_document(body: Map<String, Value>, theme: &Theme) -> Value {
    let mut doc = Map::new();
    doc.insert("$schema".into(), json!(SCHEMA_URL));
    doc.extend(body);
    if let Some(background) = theme.background {
        doc.insert("background".into(), json!(background.to_hex()));
    }
    let config = theme_config(theme);
    if !config.is_empty() {
        doc.insert("config".into(), Value::Object(config));
    }
    Value::Object(doc)
}

fn theme_config(theme: &Theme) -> Map<String, Value> {
    let mut config = Map::new();
    if !theme.show_view_stroke {
        config.insert("view".into(), json!({ "stroke": null }));
    }
    let mut axis = Map::new();
    if !theme.show_axis_domain {
        axis.insert("domain".into(), json!(false));
    }
    if !theme.show_ticks {
        axis.insert("ticks".into(), json!(false));
    }
    if !theme.show_grid {
        axis.insert("grid".into(), json!(false));
    }
    if !axis.is_empty() {
        config.insert("axis".into(), Value::Object(axis));
    }
    if let Some(spacing) = theme.facet_spacing {
        config.insert("facet".into(), json!({ "spacing": spacing }));
    }
    config
}

// ============================================================================
// Layout tree
// ============================================================================

fn encode_node(node: &LayoutNode) -> Map<String, Value> {
    match node {
        LayoutNode::Leaf(chart) => encode_chart(chart),
        LayoutNode::VConcat { children, spacing, resolve } => {
            encode_concat("vconcat", children, *spacing, *resolve)
        }
        LayoutNode::HConcat { children, spacing, resolve } => {
            encode_concat("hconcat", children, *spacing, *resolve)
        }
    }
}

fn encode_concat(
    key: &str,
    children: &[LayoutNode],
    spacing: Option<i32>,
    resolve: Resolve,
) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert(
        key.into(),
        Value::Array(children.iter().map(|c| Value::Object(encode_node(c))).collect()),
    );
    if let Some(spacing) = spacing {
        out.insert("spacing".into(), json!(spacing));
    }
    if !resolve.is_empty() {
        let mut scale = Map::new();
        if let Some(mode) = resolve.x {
            scale.insert("x".into(), json!(mode.as_str()));
        }
        if let Some(mode) = resolve.y {
            scale.insert("y".into(), json!(mode.as_str()));
        }
        out.insert("resolve".into(), json!({ "scale": scale }));
    }
    out
}

// ============================================================================
// Charts
// ============================================================================

fn encode_chart(chart: &BuiltChart) -> Map<String, Value> {
    let mut out = Map::new();
    if let Some(title) = &chart.title {
        out.insert("title".into(), json!(title));
    }

    match &chart.facet {
        Facet::None => {
            insert_size(&mut out, chart);
            if let [layer] = chart.layers.as_slice() {
                out.insert("data".into(), encode_data(&layer.data));
                out.extend(encode_layer(chart, layer));
            } else {
                let layers = chart
                    .layers
                    .iter()
                    .map(|layer| {
                        let mut unit = Map::new();
                        unit.insert("data".into(), encode_data(&layer.data));
                        unit.extend(encode_layer(chart, layer));
                        Value::Object(unit)
                    })
                    .collect();
                out.insert("layer".into(), Value::Array(layers));
            }
        }
        Facet::Col { var, header } | Facet::Row { var, header } => {
            let channel = if matches!(chart.facet, Facet::Col { .. }) { "column" } else { "row" };
            if let Some(first) = chart.layers.first() {
                out.insert("data".into(), encode_data(&first.data));
            }
            let mut facet = Map::new();
            facet.insert(
                channel.into(),
                json!({ "field": var, "type": "nominal", "header": encode_header(header) }),
            );
            out.insert("facet".into(), Value::Object(facet));

            let mut spec = Map::new();
            insert_size(&mut spec, chart);
            if let [layer] = chart.layers.as_slice() {
                spec.extend(encode_layer(chart, layer));
            } else {
                let layers = chart
                    .layers
                    .iter()
                    .map(|layer| Value::Object(encode_layer(chart, layer)))
                    .collect();
                spec.insert("layer".into(), Value::Array(layers));
            }
            out.insert("spec".into(), Value::Object(spec));
        }
    }
    out
}

fn insert_size(out: &mut Map<String, Value>, chart: &BuiltChart) {
    if let Some(width) = chart.width {
        out.insert("width".into(), json!(width));
    }
    if let Some(height) = chart.height {
        out.insert("height".into(), json!(height));
    }
}

fn encode_data(data: &DataFrame) -> Value {
    let names = data.columns();
    let records = (0..data.nrow())
        .map(|row| {
            let record: Map<String, Value> = names
                .iter()
                .map(|name| {
                    let value = data.value(row, name).map_or(Value::Null, data_value);
                    ((*name).to_string(), value)
                })
                .collect();
            Value::Object(record)
        })
        .collect();
    json!({ "values": Value::Array(records) })
}

fn data_value(value: &DataValue) -> Value {
    match value {
        DataValue::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
        DataValue::Text(s) => Value::String(s.clone()),
        DataValue::Null => Value::Null,
    }
}

// ============================================================================
// Layers
// ============================================================================

fn encode_layer(chart: &BuiltChart, layer: &BuiltLayer) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("mark".into(), encode_mark(chart, layer));

    let flip = chart.coord.flip;
    let (x_channel, y_channel) = if flip { ("y", "x") } else { ("x", "y") };
    let aes = &layer.aes;
    let mut encoding = Map::new();

    if let Some(field) = &aes.x {
        let mut def = position(field, &chart.x_axis);
        insert_scale(&mut def, chart.coord.xlim.map(|d| d.to_array()), chart.coord.zero_x);
        encoding.insert(x_channel.into(), Value::Object(def));
    }
    if let Some(field) = &aes.x2 {
        encoding.insert(format!("{x_channel}2"), json!({ "field": field }));
    }
    if let Some(field) = &aes.y {
        let mut def = position(field, &chart.y_axis);
        insert_scale(&mut def, chart.coord.ylim.map(|d| d.to_array()), chart.coord.zero_y);
        if let Some(stack) = layer.geom.stack {
            let value = match stack {
                Stack::Overlap => Value::Null,
                Stack::Zero => json!("zero"),
            };
            def.insert("stack".into(), value);
        }
        encoding.insert(y_channel.into(), Value::Object(def));
    }
    if let Some(field) = &aes.y2 {
        encoding.insert(format!("{y_channel}2"), json!({ "field": field }));
    }
    if let Some(field) = &aes.color {
        let mut def = Map::new();
        def.insert("field".into(), json!(field));
        def.insert("type".into(), json!("nominal"));
        if let Some(scale) = &aes.color_scale {
            let range: Vec<String> = scale.range.iter().map(|c| c.to_hex()).collect();
            def.insert("scale".into(), json!({ "domain": scale.domain, "range": range }));
        }
        if aes.legend == Some(false) {
            def.insert("legend".into(), Value::Null);
        }
        encoding.insert("color".into(), Value::Object(def));
    }
    out.insert("encoding".into(), Value::Object(encoding));

    if let Some(Stat::Jitter { field }) = &layer.geom.stat {
        out.insert(
            "transform".into(),
            json!([{ "calculate": GAUSSIAN_JITTER_EXPR, "as": field }]),
        );
    }
    out
}

fn encode_mark(chart: &BuiltChart, layer: &BuiltLayer) -> Value {
    let geom_type = &layer.geom.geom_type;
    let mut mark = Map::new();
    mark.insert("type".into(), json!(geom_type.mark_name()));

    match geom_type {
        GeomType::Point { filled } => {
            mark.insert("filled".into(), json!(filled));
        }
        GeomType::Area { interpolate, filled } => {
            insert_interpolate(&mut mark, *interpolate);
            mark.insert("filled".into(), json!(filled));
        }
        GeomType::Line { interpolate } => insert_interpolate(&mut mark, *interpolate),
        GeomType::Circle | GeomType::Bar => {}
    }
    if chart.coord.flip && matches!(geom_type, GeomType::Area { .. } | GeomType::Line { .. }) {
        mark.insert("orient".into(), json!("horizontal"));
    }

    let aes = &layer.aes;
    if let Some(alpha) = aes.alpha_value {
        mark.insert("opacity".into(), json!(alpha));
    }
    if aes.color.is_none() {
        if let Some(color) = aes.color_value {
            mark.insert("color".into(), json!(color.to_hex()));
        }
    }
    if let Some(size) = aes.size_value {
        mark.insert("size".into(), json!(size));
    }
    Value::Object(mark)
}

fn insert_interpolate(mark: &mut Map<String, Value>, interpolate: Interpolate) {
    if interpolate != Interpolate::Linear {
        mark.insert("interpolate".into(), json!(interpolate.as_str()));
    }
}

fn position(field: &str, axis: &Axis) -> Map<String, Value> {
    let mut def = Map::new();
    def.insert("field".into(), json!(field));
    def.insert("type".into(), json!("quantitative"));
    def.insert("axis".into(), encode_axis(axis));
    def
}

fn insert_scale(def: &mut Map<String, Value>, domain: Option<[f64; 2]>, zero: Option<bool>) {
    let mut scale = Map::new();
    if let Some(domain) = domain {
        scale.insert("domain".into(), json!(domain));
    }
    if let Some(zero) = zero {
        scale.insert("zero".into(), json!(zero));
    }
    if !scale.is_empty() {
        def.insert("scale".into(), Value::Object(scale));
    }
}

fn encode_axis(axis: &Axis) -> Value {
    if !axis.visible {
        return Value::Null;
    }
    let mut out = Map::new();
    insert_title(&mut out, &axis.title);
    for (key, value) in [
        ("labels", axis.labels),
        ("ticks", axis.ticks),
        ("grid", axis.grid),
        ("domain", axis.domain),
    ] {
        if let Some(value) = value {
            out.insert(key.into(), json!(value));
        }
    }
    if let Some(values) = &axis.values {
        out.insert("values".into(), json!(values));
    }
    Value::Object(out)
}

fn encode_header(header: &Header) -> Value {
    let mut out = Map::new();
    insert_title(&mut out, &header.title);
    if let Some(labels) = header.labels {
        out.insert("labels".into(), json!(labels));
    }
    if let Some(angle) = header.label_angle {
        out.insert("labelAngle".into(), json!(angle));
    }
    if let Some(orient) = header.title_orient {
        out.insert("titleOrient".into(), json!(orient.as_str()));
    }
    if let Some(orient) = header.label_orient {
        out.insert("labelOrient".into(), json!(orient.as_str()));
    }
    if let Some(align) = header.label_align {
        out.insert("labelAlign".into(), json!(align));
    }
    if let Some(padding) = header.label_padding {
        out.insert("labelPadding".into(), json!(padding));
    }
    Value::Object(out)
}

fn insert_title(out: &mut Map<String, Value>, title: &AxisTitle) {
    match title {
        AxisTitle::Auto => {}
        AxisTitle::Hidden => {
            out.insert("title".into(), Value::Null);
        }
        AxisTitle::Text(text) => {
            out.insert("title".into(), json!(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::config::{JointOptions, MarginalKind};
    use crate::grammar::{Aes, Chart, Coord, Geom};
    use crate::plots::{histogram, jointplot, stripplot, HistogramOptions, StripOptions};

    fn example() -> DataFrame {
        DataFrame::from_xy(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 4.0, 3.0, 2.0, 1.0])
    }

    #[test]
    fn test_single_chart_document() {
        let chart = Chart::new()
            .data_xy(&[1.0, 2.0], &[3.0, 4.0])
            .aes(Aes::new().x("x").y("y").color_value(Rgba::STEEL_BLUE).alpha_value(0.5))
            .geom(Geom::point())
            .size(200, 100)
            .title("points")
            .build()
            .unwrap();
        let doc = chart.to_vega_lite();
        assert_eq!(doc["$schema"], SCHEMA_URL);
        assert_eq!(doc["title"], "points");
        assert_eq!(doc["width"], 200);
        assert_eq!(doc["mark"]["type"], "point");
        assert_eq!(doc["mark"]["color"], "#4c78a8");
        assert_eq!(doc["mark"]["opacity"], 0.5);
        assert_eq!(doc["encoding"]["x"]["field"], "x");
        assert_eq!(doc["encoding"]["y"]["type"], "quantitative");
        assert_eq!(doc["data"]["values"][1]["y"], 4.0);
        assert!(doc.get("config").is_none());
    }

    #[test]
    fn test_record_keys_follow_column_order() {
        let doc = Chart::new().data_xy(&[1.0], &[2.0]).geom(Geom::point()).build().unwrap().to_vega_lite();
        let keys: Vec<&String> = doc["data"]["values"][0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["x", "y"]);
        let top: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(top[0], "$schema");
    }

    #[test]
    fn test_missing_values_are_null() {
        let df = DataFrame::new()
            .with_column("x", vec![1.0.into(), 2.0.into()])
            .with_column("label", vec![DataValue::Null, "b".into()]);
        let doc = Chart::new()
            .data(df)
            .aes(Aes::new().x("x"))
            .geom(Geom::point())
            .build()
            .unwrap()
            .to_vega_lite();
        assert!(doc["data"]["values"][0]["label"].is_null());
    }

    #[test]
    fn test_histogram_document() {
        let doc = histogram("x", &example(), &HistogramOptions::default().with_maxbins(4))
            .unwrap()
            .to_vega_lite();
        assert_eq!(doc["mark"]["type"], "bar");
        assert_eq!(doc["encoding"]["x"]["field"], "bin_start");
        assert_eq!(doc["encoding"]["x2"]["field"], "bin_end");
        assert_eq!(doc["encoding"]["y"]["field"], "count");
        assert_eq!(doc["encoding"]["x"]["axis"]["title"], "x");
        assert_eq!(doc["encoding"]["y"]["axis"]["title"], "Count");
        assert_eq!(doc["data"]["values"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_joint_document_shape() {
        let options = JointOptions::default().with_padding_fraction(0.2).with_stripped_borders(true);
        let doc = jointplot(&example(), "x", "y", &options).unwrap().to_vega_lite();

        assert_eq!(doc["$schema"], SCHEMA_URL);
        assert_eq!(doc["resolve"]["scale"]["x"], "shared");
        let vconcat = doc["vconcat"].as_array().unwrap();
        assert_eq!(vconcat.len(), 2);
        let hconcat = vconcat[1]["hconcat"].as_array().unwrap();
        assert_eq!(hconcat.len(), 2);
        assert_eq!(vconcat[1]["resolve"]["scale"]["y"], "shared");

        let domain = &hconcat[0]["encoding"]["x"]["scale"]["domain"];
        assert!((domain[0].as_f64().unwrap() - 0.2).abs() < 1e-12);
        assert!((domain[1].as_f64().unwrap() - 5.8).abs() < 1e-12);

        // right marginal is flipped: its value field sits on y
        let right = &hconcat[1];
        assert_eq!(right["encoding"]["y"]["field"], "bin_start");
        assert_eq!(right["encoding"]["y2"]["field"], "bin_end");
        assert_eq!(right["encoding"]["x"]["field"], "count");
        assert!(right["encoding"]["x"]["stack"].is_null());

        // only the root carries config
        assert_eq!(doc["config"]["view"]["stroke"], Value::Null);
        assert_eq!(doc["config"]["axis"]["grid"], false);
        assert!(vconcat[0].get("config").is_none());
        assert!(hconcat[0].get("config").is_none());
    }

    #[test]
    fn test_flipped_density_is_horizontal() {
        let options = JointOptions::default().with_marginal_kind(MarginalKind::DensityArea).with_steps(10);
        let doc = jointplot(&example(), "x", "y", &options).unwrap().to_vega_lite();
        let right = &doc["vconcat"][1]["hconcat"][1];
        assert_eq!(right["mark"]["type"], "area");
        assert_eq!(right["mark"]["orient"], "horizontal");
        assert_eq!(right["encoding"]["y"]["field"], "value");
        assert_eq!(right["encoding"]["x"]["field"], "density");
        let top = &doc["vconcat"][0];
        assert!(top["mark"].get("orient").is_none());
        assert!(top["encoding"]["x"]["axis"]["title"].is_null());
        assert_eq!(top["encoding"]["y"]["axis"]["labels"], false);
    }

    #[test]
    fn test_stripplot_document() {
        let df = example().with_column(
            "g",
            vec!["a".into(), "a".into(), "b".into(), "b".into(), "c".into()],
        );
        let doc = stripplot(Some("g"), "y", &df, &StripOptions::default()).unwrap().to_vega_lite();
        assert_eq!(doc["facet"]["column"]["field"], "g");
        assert_eq!(doc["facet"]["column"]["header"]["labelAngle"], -90.0);
        assert_eq!(doc["facet"]["column"]["header"]["titleOrient"], "top");
        assert_eq!(doc["spec"]["width"], 40);
        assert_eq!(doc["spec"]["mark"]["type"], "circle");
        assert_eq!(doc["spec"]["mark"]["size"], 8.0);
        assert_eq!(doc["spec"]["transform"][0]["as"], "jitter");
        assert_eq!(doc["spec"]["encoding"]["x"]["axis"]["values"], json!([0.0]));
        assert!(doc["spec"]["encoding"]["color"]["legend"].is_null());
        assert_eq!(doc["config"]["facet"]["spacing"], 0.0);
        assert!(doc["config"]["view"]["stroke"].is_null());
        assert!(doc["data"]["values"].is_array());
    }

    #[test]
    fn test_hidden_axis_and_zero_scale() {
        let chart = Chart::new()
            .data_xy(&[1.0, 2.0], &[3.0, 4.0])
            .geom(Geom::point())
            .coord(Coord::cartesian().zero_y(true))
            .x_axis(Axis::hidden())
            .build()
            .unwrap();
        let doc = chart.to_vega_lite();
        assert!(doc["encoding"]["x"]["axis"].is_null());
        assert_eq!(doc["encoding"]["y"]["scale"]["zero"], true);
        assert!(doc["encoding"]["x"].get("scale").is_none());
    }

    #[test]
    fn test_multi_layer_document() {
        let chart = Chart::new()
            .data_xy(&[1.0, 2.0], &[3.0, 4.0])
            .geom(Geom::point())
            .geom(Geom::line())
            .build()
            .unwrap();
        let doc = chart.to_vega_lite();
        let layers = doc["layer"].as_array().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[1]["mark"]["type"], "line");
        assert!(layers[0]["data"]["values"].is_array());
    }

    #[test]
    fn test_background_and_theme_config() {
        let layout = CompositeLayout::from(
            Chart::new().data_xy(&[1.0], &[1.0]).geom(Geom::point()).build().unwrap(),
        )
        .with_theme(Theme::classic().background(Rgba::WHITE));
        let doc = layout.to_vega_lite();
        assert_eq!(doc["background"], "#ffffff");
        assert_eq!(doc["config"]["axis"]["grid"], false);
        assert!(doc["config"]["axis"].get("ticks").is_none());
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let doc = histogram("x", &example(), &HistogramOptions::default()).unwrap().to_vega_lite();
        write_json(&path, &doc).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_write_json_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.json");
        assert!(write_json(path, &json!({})).is_err());
    }
}
