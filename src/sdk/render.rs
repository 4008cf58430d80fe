//! Rendering surfaces for the session's display model.
//!
//! Map drawing itself is out of scope; these surfaces print what a map
//! widget would show.

use crate::sdk::session::SessionView;
use serde::Serialize;
use std::io::Write;

pub trait RenderSurface {
    /// Called with the whole current view after every change.
    fn render(&mut self, view: &SessionView<'_>);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub size: [u32; 2],
    pub anchor: [u32; 2],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapStyle {
    pub start_icon: MarkerIcon,
    pub end_icon: MarkerIcon,
    pub route_color: &'static str,
    pub route_weight: u32,
}

pub const DEFAULT_STYLE: MapStyle = MapStyle {
    start_icon: MarkerIcon {
        url: "https://cdn-icons-png.flaticon.com/512/64/64113.png",
        size: [32, 32],
        anchor: [16, 32],
    },
    end_icon: MarkerIcon {
        url: "https://cdn-icons-png.flaticon.com/512/149/149059.png",
        size: [32, 32],
        anchor: [16, 32],
    },
    route_color: "red",
    route_weight: 5,
};

/// Prints markers, the distance label and the directions panel as text.
pub struct TextSurface<W> {
    out: W,
    style: MapStyle,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self::with_style(out, DEFAULT_STYLE)
    }

    pub fn with_style(out: W, style: MapStyle) -> Self {
        Self { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &SessionView<'_>) -> std::io::Result<()> {
        let selection = view.selection;
        if let Some(start) = selection.start() {
            writeln!(self.out, "Start marker: {} [{}]", start, self.style.start_icon.url)?;
        }
        if let Some(end) = selection.end() {
            writeln!(self.out, "End marker:   {} [{}]", end, self.style.end_icon.url)?;
        }

        let Some(display) = view.display else {
            return Ok(());
        };

        writeln!(
            self.out,
            "Route: {} points ({}, weight {})",
            display.polyline.len(),
            self.style.route_color,
            self.style.route_weight
        )?;
        if let Some(mid) = display.midpoint {
            writeln!(
                self.out,
                "Total Distance: {} km (label at {})",
                display.total_distance_label(),
                mid
            )?;
        }

        if !display.instructions.is_empty() {
            writeln!(self.out, "Directions")?;
            for (n, step) in display.instructions.iter().enumerate() {
                writeln!(
                    self.out,
                    "{:>3}. {} ({} km)",
                    n + 1,
                    step.text,
                    step.distance_label()
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    fn render(&mut self, view: &SessionView<'_>) {
        let result = self
            .write_view(view)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::error!("Failed to write route view: {}", e);
        }
    }
}

/// Emits each view as one line of JSON.
pub struct JsonSurface<W> {
    out: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for JsonSurface<W> {
    fn render(&mut self, view: &SessionView<'_>) {
        let result = serde_json::to_writer(&mut self.out, view)
            .map_err(std::io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            log::error!("Failed to write route view as JSON: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::geo::GeoPoint;
    use crate::sdk::routing::route::{Leg, Maneuver, RawRoute, Step};
    use crate::sdk::session::RouteSession;
    use pretty_assertions::assert_eq;

    fn routed_session() -> RouteSession {
        let mut session = RouteSession::new();
        session.click(GeoPoint::new(12.9716, 77.5946));
        let request = session.click(GeoPoint::new(13.0, 77.6)).unwrap();
        session.apply(
            request,
            Ok(RawRoute {
                geometry: vec![GeoPoint::new(12.9716, 77.5946), GeoPoint::new(13.0, 77.6)],
                distance_m: 12345.0,
                duration_s: 600.0,
                legs: vec![Leg {
                    distance_m: 12345.0,
                    summary: String::new(),
                    steps: vec![
                        Step::new(Some(Maneuver::new("depart")), 120.0),
                        Step::new(Some(Maneuver::new("turn").with_modifier("left")), 12225.0),
                        Step::new(Some(Maneuver::new("arrive")), 0.0),
                    ],
                }],
            }),
        );
        session
    }

    #[test]
    fn test_text_surface_prints_panel() {
        let session = routed_session();
        let mut surface = TextSurface::new(Vec::new());
        surface.render(&session.view());

        let text = String::from_utf8(surface.into_inner()).unwrap();
        let expected = "\
Start marker: 12.97160,77.59460 [https://cdn-icons-png.flaticon.com/512/64/64113.png]
End marker:   13.00000,77.60000 [https://cdn-icons-png.flaticon.com/512/149/149059.png]
Route: 2 points (red, weight 5)
Total Distance: 12.35 km (label at 13.00000,77.60000)
Directions
  1. Start (0.12 km)
  2. Turn left (12.23 km)
  3. You have arrived (0.00 km)

";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_surface_markers_only_while_idle() {
        let mut session = RouteSession::new();
        session.click(GeoPoint::new(1.0, 2.0));
        let mut surface = TextSurface::new(Vec::new());
        surface.render(&session.view());

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(
            text,
            "Start marker: 1.00000,2.00000 [https://cdn-icons-png.flaticon.com/512/64/64113.png]\n\n"
        );
    }

    #[test]
    fn test_json_surface_writes_one_line_per_view() {
        let session = routed_session();
        let mut surface = JsonSurface::new(Vec::new());
        surface.render(&session.view());
        surface.render(&session.view());

        let text = String::from_utf8(surface.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["state"], "Routed");
        assert_eq!(value["display"]["instructions"][1]["text"], "Turn left");
        assert_eq!(value["selection"]["points"][0]["latitude"], 12.9716);
    }
}
