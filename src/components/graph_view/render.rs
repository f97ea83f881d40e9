//! Canvas rendering for the graph view.
//!
//! Paints a [`Frame`] onto a 2D canvas context in two passes:
//! 1. Background and edge lines
//! 2. Node circles (fill, then outline) with their labels, in index order

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scene::{Frame, LineSegment, NodeGlyph};

/// Paints the complete frame to the canvas.
pub fn paint(frame: &Frame, ctx: &CanvasRenderingContext2d, width: f64, height: f64, font: &str) {
	ctx.set_fill_style_str(&frame.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	for line in &frame.lines {
		draw_line(ctx, line);
	}

	ctx.set_font(font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for node in &frame.nodes {
		draw_node(ctx, node);
	}
}

fn draw_line(ctx: &CanvasRenderingContext2d, line: &LineSegment) {
	ctx.set_stroke_style_str(&line.color.to_css());
	ctx.set_line_width(line.width);
	ctx.begin_path();
	ctx.move_to(line.from.0, line.from.1);
	ctx.line_to(line.to.0, line.to.1);
	ctx.stroke();
}

fn draw_node(ctx: &CanvasRenderingContext2d, node: &NodeGlyph) {
	let (x, y) = node.center;

	ctx.begin_path();
	let _ = ctx.arc(x, y, node.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.fill.to_css());
	ctx.fill();

	ctx.set_stroke_style_str(&node.outline.to_css());
	ctx.set_line_width(node.outline_width);
	ctx.stroke();

	ctx.set_fill_style_str(&node.label_color.to_css());
	let _ = ctx.fill_text(&node.label, x, y);
}
