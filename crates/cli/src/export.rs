//! SVG export of a point cloud and its hull.
//!
//! Points are drawn at their integer pixel projection, shifted so the bounds'
//! minimum corner maps to the image origin. Hull edges are red lines, points
//! small black circles on a white background.

use anyhow::{Context, Result};
use hull2::cloud::Bounds;
use hull2::{Hull, Point2};
use std::fs;
use std::path::Path;

fn offset(p: &Point2, bounds: &Bounds) -> (i32, i32) {
    let (x, y) = p.pixel();
    (x - bounds.min_x as i32, y - bounds.min_y as i32)
}

/// Render `points` and the edges of `hull` as a standalone SVG document.
pub fn render_svg(points: &[Point2], hull: &Hull<'_>, bounds: &Bounds) -> String {
    let w = (bounds.width() as i32).max(1);
    let h = (bounds.height() as i32).max(1);
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    out.push_str("<g fill=\"none\" stroke=\"black\" stroke-width=\"1\">\n");
    for p in points {
        let (x, y) = offset(p, bounds);
        out.push_str(&format!("<circle cx=\"{x}\" cy=\"{y}\" r=\"1.5\"/>\n"));
    }
    out.push_str("</g>\n");

    out.push_str("<g stroke=\"red\" stroke-width=\"1\">\n");
    for (a, b) in hull.segments() {
        let (x1, y1) = offset(a, bounds);
        let (x2, y2) = offset(b, bounds);
        out.push_str(&format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"/>\n"
        ));
    }
    out.push_str("</g>\n</svg>\n");
    out
}

/// Write the SVG to `path`, creating parent directories.
pub fn write_svg<P: AsRef<Path>>(
    path: P,
    points: &[Point2],
    hull: &Hull<'_>,
    bounds: &Bounds,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating export dir {}", parent.display()))?;
        }
    }
    fs::write(path, render_svg(points, hull, bounds))
        .with_context(|| format!("writing {}", path.display()))
}
