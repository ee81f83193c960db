//! Traffic report rendering
//!
//! Turns a decoded distance-matrix response into the text printed to the
//! user. Nothing here writes to stdout.

use crate::{
    core::response::{DistanceMatrixResponse, Element},
    error::{Result, TrafficError},
};
use std::fmt::Write;

/// Render the fixed-layout text report
///
/// Shows the first origin and destination address, then the first element
/// of every row.
pub fn render(resp: &DistanceMatrixResponse) -> Result<String> {
    let origin = resp
        .origin_addrs
        .first()
        .ok_or_else(|| TrafficError::render("response has no origin address"))?;
    let destination = resp
        .destination_addrs
        .first()
        .ok_or_else(|| TrafficError::render("response has no destination address"))?;

    let mut out = String::new();
    write_header(&mut out, origin, destination).map_err(fmt_error)?;

    for (index, row) in resp.rows.iter().enumerate() {
        let element = row
            .elements
            .first()
            .ok_or_else(|| TrafficError::render(format!("row {index} has no elements")))?;
        write_element(&mut out, element).map_err(fmt_error)?;
    }
    writeln!(out).map_err(fmt_error)?;

    Ok(out)
}

/// Render the response as pretty-printed JSON
pub fn render_json(resp: &DistanceMatrixResponse) -> Result<String> {
    if let Some(missing) = resp.missing_section() {
        return Err(TrafficError::render(format!("response has {missing}")));
    }

    serde_json::to_string_pretty(resp).map_err(|e| TrafficError::render(e.to_string()))
}

fn write_header(out: &mut String, origin: &str, destination: &str) -> std::fmt::Result {
    write!(
        out,
        r#"
Traffic Information:
--------------------

Origin:         {origin}

Destination:    {destination}

"#
    )
}

fn write_element(out: &mut String, element: &Element) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "    *Distance:  {}", element.distance.text)?;
    writeln!(out)?;
    writeln!(out, "    *Duration:  {}", element.duration.text)?;
    writeln!(out)?;

    if let Some(in_traffic) = &element.duration_in_traffic {
        writeln!(out, "    *In traffic: {}", in_traffic.text)?;
        writeln!(out)?;
    }
    if let Some(fare) = &element.fare {
        writeln!(out, "    *Fare:      {} ({})", fare.text, fare.currency)?;
        writeln!(out)?;
    }

    writeln!(out, "    *Status:    {}", element.status)
}

fn fmt_error(e: std::fmt::Error) -> TrafficError {
    TrafficError::render(e.to_string())
}
