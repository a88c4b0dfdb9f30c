use crate::domains::geophysics::Region;

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// KML 2.2 document with one placemark per region
pub fn render_kml(regions: &[&Region]) -> String {
    let mut kml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <kml xmlns=\"http://www.opengis.net/kml/2.2\">\n\
         <Document>\n",
    );

    for region in regions {
        kml.push_str(&format!(
            "  <Placemark>\n    <name>{}</name>\n    <Point>\n      <coordinates>{},{}</coordinates>\n    </Point>\n  </Placemark>\n",
            xml_escape(region.id),
            region.lng,
            region.lat
        ));
    }

    kml.push_str("</Document>\n</kml>\n");
    kml
}
