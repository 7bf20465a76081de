//! Builders for synthetic schedule documents used in tests.

use std::fmt::Write;

use super::schema::TRANSXCHANGE_NAMESPACE;

/// A minimal TransXChange document with configurable route links.
///
/// Each link is a list of `(lat, lng)` locations under its mapping.
pub struct DocumentBuilder {
    namespace: String,
    service_code: String,
    line_name: String,
    origin: String,
    destination: String,
    links: Vec<Vec<(f64, f64)>>,
    serviced_organisations: Option<String>,
    include_services: bool,
}

impl DocumentBuilder {
    pub fn new(service_code: &str) -> Self {
        Self {
            namespace: TRANSXCHANGE_NAMESPACE.to_string(),
            service_code: service_code.to_string(),
            line_name: "40".to_string(),
            origin: "Leven".to_string(),
            destination: "St Andrews".to_string(),
            links: vec![vec![(51.0, -2.0)], vec![(51.1, -2.1), (51.2, -2.2)]],
            serviced_organisations: None,
            include_services: true,
        }
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    pub fn links(mut self, links: Vec<Vec<(f64, f64)>>) -> Self {
        self.links = links;
        self
    }

    pub fn labels(mut self, line_name: &str, origin: &str, destination: &str) -> Self {
        self.line_name = line_name.to_string();
        self.origin = origin.to_string();
        self.destination = destination.to_string();
        self
    }

    /// Add a `ServicedOrganisations` element with the given inner XML.
    pub fn serviced_organisations(mut self, inner: &str) -> Self {
        self.serviced_organisations = Some(inner.to_string());
        self
    }

    pub fn without_services(mut self) -> Self {
        self.include_services = false;
        self
    }

    pub fn build(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = write!(xml, r#"<TransXChange xmlns="{}">"#, self.namespace);

        if let Some(inner) = &self.serviced_organisations {
            let _ = write!(xml, "<ServicedOrganisations>{inner}</ServicedOrganisations>");
        }

        xml.push_str(r#"<RouteSections><RouteSection id="RS1">"#);
        for (i, link) in self.links.iter().enumerate() {
            let _ = write!(
                xml,
                r#"<RouteLink id="RL{i}"><Distance>100</Distance><Track><Mapping>"#
            );
            for (j, (lat, lng)) in link.iter().enumerate() {
                let _ = write!(
                    xml,
                    r#"<Location id="L{i}-{j}"><Longitude>{lng}</Longitude><Latitude>{lat}</Latitude></Location>"#
                );
            }
            xml.push_str("</Mapping></Track></RouteLink>");
        }
        xml.push_str("</RouteSection></RouteSections>");

        if self.include_services {
            let _ = write!(
                xml,
                concat!(
                    "<Services><Service><ServiceCode>{}</ServiceCode>",
                    r#"<Lines><Line id="1"><LineName>{}</LineName></Line></Lines>"#,
                    "<StandardService><Origin>{}</Origin><Destination>{}</Destination>",
                    "</StandardService></Service></Services>"
                ),
                self.service_code, self.line_name, self.origin, self.destination
            );
        }

        xml.push_str("</TransXChange>");
        xml
    }
}
