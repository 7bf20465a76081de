//! Conversion from a TransXChange document to a line record.
//!
//! Only the first route section, first service and first line are read.
//! Each route link contributes the first location of its track mapping; the
//! final link also contributes its last location, which is where the
//! schema places the terminating stop. N links therefore yield N+1 stops.

use roxmltree::Document;

use crate::domain::{Coordinate, ServiceCode, ServiceDescriptor};

use super::error::ExtractError;
use super::query::Element;
use super::schema::SchemaConfig;

/// Outcome of reading one schedule document.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The document carries serviced organisations and is not read further.
    Skipped,
    /// The document produced a line record.
    Extracted(ServiceDescriptor),
}

/// Parse one schedule document.
///
/// A root-level `ServicedOrganisations` element, even an empty one, makes
/// the document a skip. Any other missing element is an error and no
/// partial record is returned.
pub fn parse_document(xml: &str, schema: &SchemaConfig) -> Result<Extraction, ExtractError> {
    let doc = Document::parse(xml)?;
    let root = Element::root(&doc, &schema.namespace);

    if root.child("ServicedOrganisations").is_some() {
        return Ok(Extraction::Skipped);
    }

    let stops = read_stops(root)?;
    read_service(root, stops).map(Extraction::Extracted)
}

fn read_stops(root: Element<'_, '_>) -> Result<Vec<Coordinate>, ExtractError> {
    let section = root.require("RouteSections")?.require("RouteSection")?;
    let links = section.children("RouteLink");
    if links.is_empty() {
        return Err(section.missing("RouteLink"));
    }

    let last_idx = links.len() - 1;
    let mut stops = Vec::with_capacity(links.len() + 1);

    for (idx, link) in links.iter().enumerate() {
        let mapping = link.require("Track")?.require("Mapping")?;
        stops.push(read_location(mapping.require("Location")?)?);

        if idx == last_idx {
            stops.push(read_location(mapping.require_last("Location")?)?);
        }
    }

    Ok(stops)
}

fn read_location(location: Element<'_, '_>) -> Result<Coordinate, ExtractError> {
    let lat = read_degrees(location.require("Latitude")?)?;
    let lng = read_degrees(location.require("Longitude")?)?;
    Ok(Coordinate::new(lat, lng))
}

fn read_degrees(element: Element<'_, '_>) -> Result<f64, ExtractError> {
    let text = element.text();
    text.trim()
        .parse()
        .map_err(|_| ExtractError::InvalidCoordinate {
            path: element.path(),
            value: text.to_string(),
        })
}

fn read_service(
    root: Element<'_, '_>,
    stops: Vec<Coordinate>,
) -> Result<ServiceDescriptor, ExtractError> {
    let service = root.require("Services")?.require("Service")?;

    let code = service.require("ServiceCode")?;
    let service_code =
        ServiceCode::new(code.text().to_string()).map_err(|_| ExtractError::SchemaViolation {
            path: code.path(),
        })?;

    let line_name = service
        .require("Lines")?
        .require("Line")?
        .require("LineName")?
        .text()
        .to_string();

    let standard = service.require("StandardService")?;
    let origin = standard.require("Origin")?.text().to_string();
    let destination = standard.require("Destination")?.text().to_string();

    Ok(ServiceDescriptor {
        service_code,
        line_name,
        origin,
        destination,
        stops,
    })
}
