//! Layout of the rain-chance bar chart.
//!
//! Geometry is a pure function of the sample list: bar `i` sits at
//! `i * BAR_SPACING + BAR_OFFSET`, grows up from the bottom edge of the
//! canvas and carries its day label centred on the bar.

use serde::Serialize;

use crate::model::RainChanceSample;

pub const CANVAS_WIDTH: f64 = 350.0;
pub const CANVAS_HEIGHT: f64 = 200.0;
pub const BAR_SPACING: f64 = 45.0;
pub const BAR_OFFSET: f64 = 20.0;
pub const BAR_WIDTH: f64 = 30.0;
pub const BAR_RADIUS: f64 = 5.0;
pub const LABEL_BASELINE: f64 = 190.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub label: Label,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: &'static str,
}

pub fn layout_bars(samples: &[RainChanceSample]) -> Vec<Bar> {
    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let x = index as f64 * BAR_SPACING + BAR_OFFSET;
            Bar {
                x,
                y: CANVAS_HEIGHT - sample.height,
                width: BAR_WIDTH,
                height: sample.height,
                fill: sample.color,
                label: Label { x: x + BAR_WIDTH / 2.0, y: LABEL_BASELINE, text: sample.day },
            }
        })
        .collect()
}

/// Standalone SVG document for a laid-out chart.
pub fn render_svg(bars: &[Bar]) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{CANVAS_WIDTH}" height="{CANVAS_HEIGHT}" viewBox="0 0 {CANVAS_WIDTH} {CANVAS_HEIGHT}">"#
    );
    svg.push('\n');
    svg.push_str(r##"  <rect width="100%" height="100%" fill="#fff" rx="10"/>"##);
    svg.push('\n');

    for bar in bars {
        svg.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="{BAR_RADIUS}"/>"#,
            bar.x, bar.y, bar.width, bar.height, bar.fill
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"  <text x="{}" y="{}" font-size="{LABEL_FONT_SIZE}" fill="black" text-anchor="middle">{}</text>"#,
            bar.label.x, bar.label.y, bar.label.text
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

/// Column chart for terminals: one row per `row_unit` of bar height.
pub fn render_text(bars: &[Bar], row_unit: f64) -> String {
    let rows = (CANVAS_HEIGHT / row_unit).round() as usize;
    let filled: Vec<usize> =
        bars.iter().map(|bar| (bar.height / row_unit).round() as usize).collect();

    let mut out = String::new();
    for row in (1..=rows).rev() {
        let line: Vec<&str> =
            filled.iter().map(|&n| if n >= row { " ### " } else { "     " }).collect();
        let line = line.concat();
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            out.push_str(trimmed);
            out.push('\n');
        }
    }

    let labels: Vec<String> = bars.iter().map(|bar| format!("{:^5}", bar.label.text)).collect();
    out.push_str(labels.concat().trim_end());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::rain_chance_samples;

    #[test]
    fn bars_follow_fixed_spacing() {
        let bars = layout_bars(rain_chance_samples());

        let xs: Vec<f64> = bars.iter().map(|b| b.x).collect();
        assert_eq!(xs, [20.0, 65.0, 110.0, 155.0, 200.0, 245.0, 290.0]);

        let heights: Vec<f64> = bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, [40.0, 90.0, 60.0, 90.0, 90.0, 120.0, 130.0]);

        assert_eq!(bars[0].y, 160.0);
        assert_eq!(bars[6].y, 70.0);
        assert!(bars.iter().all(|b| b.width == BAR_WIDTH));
    }

    #[test]
    fn labels_are_centred_on_bars() {
        let bars = layout_bars(rain_chance_samples());
        assert_eq!(bars[0].label, Label { x: 35.0, y: 190.0, text: "Sun" });
        assert_eq!(bars[6].label.x, 305.0);
        assert_eq!(bars[5].fill, "#007BFF");
    }

    #[test]
    fn layout_is_deterministic() {
        let first = layout_bars(rain_chance_samples());
        let second = layout_bars(rain_chance_samples());
        assert_eq!(first, second);
        assert_eq!(render_svg(&first), render_svg(&second));
    }

    #[test]
    fn empty_sample_list_gives_empty_chart() {
        let bars = layout_bars(&[]);
        assert!(bars.is_empty());
        let svg = render_svg(&bars);
        assert!(svg.starts_with("<svg"));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn svg_has_one_rect_and_label_per_sample() {
        let svg = render_svg(&layout_bars(rain_chance_samples()));
        // Plus one background rect.
        assert_eq!(svg.matches("<rect").count(), 8);
        assert_eq!(svg.matches("<text").count(), 7);
        assert!(svg.contains(r##"<rect x="290" y="70" width="30" height="130" fill="#FF1493" rx="5"/>"##));
        assert!(svg.contains(r#">Sat</text>"#));
    }

    #[test]
    fn text_chart_tallest_bar_reaches_top_row() {
        let text = render_text(&layout_bars(rain_chance_samples()), 20.0);
        let lines: Vec<&str> = text.lines().collect();

        // Sat is 130 high: round(6.5) = 7 rows.
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].trim(), "###");
        assert!(lines[7].starts_with(" Sun "));
        assert!(lines[7].ends_with("Sat"));
    }
}
