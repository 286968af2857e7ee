//! Decode, lint, and reprint CAP documents

use std::io;

use anyhow::Context;
use chrono::{Duration, Utc};
use log::{debug, info, warn};

use capgeo::{decode_circle, decode_polygon, encode_circle, encode_polygon};
use capgeo::{GeoPoint, ProjectedPoint};
use capwire::{Alert, Certainty, Severity, Status, Urgency};

use crate::cli::Args;

/// Run the application
///
/// Reads one CAP document from `input`, or generates one in demo
/// mode, and prints its normalized XML or JSON rendition to
/// standard output. Geometry strings are checked along the way;
/// findings go to the log, never to standard output.
pub fn run<R>(args: &Args, mut input: R) -> anyhow::Result<()>
where
    R: io::Read,
{
    let alert = if args.demo {
        warn!("demonstration (--demo) mode: the following message is NOT LIVE!");
        demo_alert()?
    } else {
        let mut xml = String::new();
        input
            .read_to_string(&mut xml)
            .context("unable to read input")?;
        Alert::from_xml(&xml).context("input is not a well-formed CAP document")?
    };

    describe(&alert);
    lint_geometry(&alert);

    if args.quiet {
        return Ok(());
    }
    if args.json {
        println!("{}", alert.to_json()?);
    } else {
        println!("{}", alert.to_xml()?);
    }

    Ok(())
}

/// Log a short summary of the decoded alert
fn describe(alert: &Alert) {
    info!(
        "alert {:?} from {:?}, sent {:?}",
        alert.identifier(),
        alert.sender(),
        alert.sent()
    );

    let now = Utc::now();
    for info in alert.infos() {
        info!(
            "{:#} {:#} event {:?}: {:?}",
            alert.status(),
            alert.msg_type(),
            info.event(),
            info.headline()
        );
        if info.is_expired_at(&now) {
            warn!("this message expired at {}", info.expires());
        }
    }
}

/// Check every polygon and circle string in the alert
///
/// Geometry that does not decode is reported but is not fatal; the
/// document is passed through as-is.
fn lint_geometry(alert: &Alert) {
    for info in alert.infos() {
        for area in info.areas() {
            for polygon in area.polygons() {
                match decode_polygon(polygon) {
                    Ok(vertices) => debug!(
                        "area {:?}: polygon with {} vertices",
                        area.area_desc(),
                        vertices.len()
                    ),
                    Err(err) => warn!("area {:?}: bad polygon: {}", area.area_desc(), err),
                }
            }
            for circle in area.circles() {
                match decode_circle(circle) {
                    Ok((_center, radius)) => {
                        debug!("area {:?}: circle of {} m", area.area_desc(), radius)
                    }
                    Err(err) => warn!("area {:?}: bad circle: {}", area.area_desc(), err),
                }
            }
        }
    }
}

/// Build the `--demo` alert
///
/// The message is marked [`Status::Test`] and describes a
/// fictitious practice event over downtown Pittsburgh, with one
/// polygon and one circle produced by the geometry codec.
fn demo_alert() -> anyhow::Result<Alert> {
    let now = Utc::now();

    let downtown = GeoPoint::new(40.4406, -79.9959);
    let center = downtown.to_plane();
    // Mercator meters run long by 1/cos(lat); scale the offset so
    // the circle's geodesic radius comes out an even 5 km
    let edge = ProjectedPoint::new(
        center.x + 5_000.0 / downtown.lat.to_radians().cos(),
        center.y,
    );
    let triangle = [
        GeoPoint::new(40.45, -80.01).to_plane(),
        GeoPoint::new(40.45, -79.98).to_plane(),
        GeoPoint::new(40.42, -79.995).to_plane(),
    ];

    let mut alert = Alert::new();
    alert
        .with_identifier(format!("DEMO-{}", now.format("%Y%m%d%H%M%S")))
        .with_sender("capdec@example.org")
        .with_sent_datetime(&now)
        .with_status(Status::Test)
        .with_note("Demonstration message generated by capdec --demo.");

    let info = alert.add_info();
    info.with_language("en-US")
        .with_event("Practice/Demo Warning")
        .with_urgency(Urgency::Future)
        .with_severity(Severity::Minor)
        .with_certainty(Certainty::Observed)
        .with_headline("Demonstration message")
        .with_instruction("This is only a test. No action is required.")
        .with_expires_datetime(&(now + Duration::minutes(30)));
    info.add_category("Safety");
    info.add_event_code("SAME", "DMO");

    let area = info.add_area("Downtown Pittsburgh, Pennsylvania");
    area.add_polygon(encode_polygon(&triangle)?)
        .add_circle(encode_circle(center, edge))
        .add_geocode("SAME", "042003");

    Ok(alert)
}
