//! Encoders turning a [`ClusterMap`] into the output formats: plain text,
//! JSON, GeoJSON, CSV, and a standalone HTML map page.

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use serde_json::{json, Map, Number, Value};

use crate::cluster::{ClusterMap, CoordinatePoint};

/// A clustering result rendered into every supported format.
pub struct Encoded {
    pub text: String,
    pub json: String,
    pub geojson: String,
    pub csv: String,
}

/// Encodes a clustering result in all formats at once.
pub fn encode_clusters(clusters: &ClusterMap) -> Result<Encoded> {
    Ok(Encoded {
        text: encode_text(clusters),
        json: encode_json(clusters)?,
        geojson: encode_geojson(clusters)?,
        csv: encode_csv(clusters)?,
    })
}

/// Maps a raw attribute string to a JSON value, keeping numbers numeric.
/// Empty fields become null.
fn attribute_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = raw.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(raw.to_string())
}

/// A point as a JSON object: attributes in column order, then lat and lon.
fn point_object(point: &CoordinatePoint) -> Map<String, Value> {
    let mut obj = Map::new();
    for (name, value) in &point.attributes {
        obj.insert(name.clone(), attribute_value(value));
    }
    obj.insert("lat".into(), json!(point.latitude));
    obj.insert("lon".into(), json!(point.longitude));
    obj
}

/// Plain-text rendering: a `Cluster N` heading, one line per member, blank
/// line between clusters.
fn encode_text(clusters: &ClusterMap) -> String {
    let mut lines = Vec::new();

    for (id, members) in clusters {
        lines.push(format!("Cluster {}", id));
        for point in members {
            let mut fields: Vec<String> = point
                .attributes
                .iter()
                .map(|(name, value)| format!("{} {}", name, value))
                .collect();
            fields.push(format!("lat {}", point.latitude));
            fields.push(format!("lon {}", point.longitude));
            lines.push(fields.join(", "));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[derive(Serialize)]
struct ClusterRecord {
    cluster_id: usize,
    points: Vec<Map<String, Value>>,
}

/// JSON rendering: an array of `{cluster_id, points}` objects.
fn encode_json(clusters: &ClusterMap) -> Result<String> {
    let records: Vec<ClusterRecord> = clusters
        .iter()
        .map(|(&id, members)| ClusterRecord {
            cluster_id: id,
            points: members.iter().map(point_object).collect(),
        })
        .collect();

    serde_json::to_string(&records).context("encoding JSON output")
}

/// GeoJSON rendering: a FeatureCollection of Point features, with the
/// member's attributes and its cluster id as feature properties.
fn encode_geojson(clusters: &ClusterMap) -> Result<String> {
    let mut features = Vec::new();

    for (&id, members) in clusters {
        for point in members {
            let mut properties = Map::new();
            for (name, value) in &point.attributes {
                properties.insert(name.clone(), attribute_value(value));
            }
            properties.insert("cluster_id".into(), json!(id));

            features.push(json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [point.longitude, point.latitude],
                },
                "properties": properties,
            }));
        }
    }

    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    serde_json::to_string(&collection).context("encoding GeoJSON output")
}

/// CSV rendering: `cluster_id`, the original columns, then `lat`,`lon`.
/// Non-numeric fields are quoted.
fn encode_csv(clusters: &ClusterMap) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(Vec::new());

    let mut wrote_header = false;
    for (&id, members) in clusters {
        for point in members {
            if !wrote_header {
                let mut header = vec!["cluster_id".to_string()];
                header.extend(point.attributes.iter().map(|(name, _)| name.clone()));
                header.push("lat".into());
                header.push("lon".into());
                writer.write_record(&header).context("writing CSV header")?;
                wrote_header = true;
            }

            let mut row = vec![id.to_string()];
            row.extend(point.attributes.iter().map(|(_, value)| value.clone()));
            row.push(point.latitude.to_string());
            row.push(point.longitude.to_string());
            writer.write_record(&row).context("writing CSV row")?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV output: {e}"))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

/// Renders a self-contained HTML map page with the GeoJSON result embedded.
pub fn render_map(geojson: &str) -> String {
    MAP_TEMPLATE.replace("__GEOJSON__", geojson)
}

// Self-contained Leaflet page coloring markers by cluster id. Tiles come
// from OSM at view time; the cluster data itself is embedded.
const MAP_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>geocluster result</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var data = __GEOJSON__;
var map = L.map('map');
L.tileLayer('https://tile.openstreetmap.org/{z}/{x}/{y}.png', {
  attribution: '&copy; OpenStreetMap contributors'
}).addTo(map);
var palette = ['#e41a1c', '#377eb8', '#4daf4a', '#984ea3',
               '#ff7f00', '#a65628', '#f781bf', '#999999'];
var layer = L.geoJSON(data, {
  pointToLayer: function (feature, latlng) {
    var color = palette[feature.properties.cluster_id % palette.length];
    return L.circleMarker(latlng, {
      radius: 6, color: color, fillColor: color, fillOpacity: 0.7
    }).bindPopup('cluster ' + feature.properties.cluster_id);
  }
}).addTo(map);
if (data.features.length > 0) {
  map.fitBounds(layer.getBounds().pad(0.2));
} else {
  map.setView([0, 0], 2);
}
</script>
</body>
</html>
"#;
