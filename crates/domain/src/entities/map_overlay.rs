//! Map overlay derivation
//!
//! Turns the two endpoints of an estimate into a descriptor the map renderer
//! can draw: a green "A" marker at the origin, a red "B" marker at the
//! destination and a blue path between them. Deriving the overlay is pure and
//! infallible, so the same pair of coordinates always yields the same value.

use serde::Serialize;

use crate::value_objects::Coordinate;

/// Colour and label of a map marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    /// Marker colour name understood by the map renderer
    pub color: &'static str,
    /// Single-character marker label
    pub label: char,
}

/// Style of the origin marker
pub const ORIGIN_MARKER: MarkerStyle = MarkerStyle {
    color: "green",
    label: 'A',
};

/// Style of the destination marker
pub const DESTINATION_MARKER: MarkerStyle = MarkerStyle {
    color: "red",
    label: 'B',
};

/// Colour of the connecting path (24-bit RGB, hex)
pub const PATH_COLOR: &str = "0x0000ff";

/// Stroke weight of the connecting path in pixels
pub const PATH_WEIGHT: u8 = 5;

/// A styled marker placed on the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    /// Marker style
    pub style: MarkerStyle,
    /// Marker position
    pub position: Coordinate,
}

/// Straight path from origin to destination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoutePath {
    /// Path colour
    pub color: &'static str,
    /// Stroke weight in pixels
    pub weight: u8,
    /// Path vertices, origin first
    pub points: [Coordinate; 2],
}

/// Everything needed to draw an estimate on a static map
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapOverlay {
    /// Path connecting both endpoints
    pub path: RoutePath,
    /// Origin marker ("A")
    pub origin: Marker,
    /// Destination marker ("B")
    pub destination: Marker,
}

impl MapOverlay {
    /// Origin coordinate
    #[must_use]
    pub const fn origin_coordinate(&self) -> Coordinate {
        self.origin.position
    }

    /// Destination coordinate
    #[must_use]
    pub const fn destination_coordinate(&self) -> Coordinate {
        self.destination.position
    }

    /// Markers in drawing order
    #[must_use]
    pub const fn markers(&self) -> [Marker; 2] {
        [self.origin, self.destination]
    }
}

/// Build the overlay for a route between `origin` and `destination`
#[must_use]
pub const fn build_overlay(origin: Coordinate, destination: Coordinate) -> MapOverlay {
    MapOverlay {
        path: RoutePath {
            color: PATH_COLOR,
            weight: PATH_WEIGHT,
            points: [origin, destination],
        },
        origin: Marker {
            style: ORIGIN_MARKER,
            position: origin,
        },
        destination: Marker {
            style: DESTINATION_MARKER,
            position: destination,
        },
    }
}
