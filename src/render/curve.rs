//! Zeichnet den Profil-Plot: Gitter, Achsen, Kurven, Kontrollpunkte, Legende.
//!
//! Vollständig deterministisch in (Design, Edit-Zustand, Optionen,
//! Viewport-Größe); pro Frame wird komplett neu gezeichnet, ohne Diffing.

use glam::DVec2;

use crate::app::EditState;
use crate::core::picking::control_point_px;
use crate::core::{AirfoilDesign, PlotViewport, PointRef, Surface, SurfaceSide};
use crate::shared::options::{CURVE_SAMPLE_COUNT, GRID_DIVISIONS_X, GRID_DIVISIONS_Y};
use crate::shared::EditorOptions;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(18, 22, 28);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(38, 44, 52);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 100, 110);
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 178, 186);

/// Marker-Radius idle / aktiv (Hover oder Drag).
const MARKER_RADIUS: f32 = 5.0;
const MARKER_RADIUS_ACTIVE: f32 = 7.5;

/// Zeichnet den kompletten Profil-Plot in `rect`.
pub fn paint_airfoil_plot(
    painter: &egui::Painter,
    rect: egui::Rect,
    design: &AirfoilDesign,
    edit: &EditState,
    options: &EditorOptions,
) {
    let viewport = PlotViewport::new(rect.width() as f64, rect.height() as f64);
    let ctx = PaintContext {
        painter,
        rect,
        viewport,
    };

    ctx.painter.rect_filled(rect, egui::CornerRadius::ZERO, BACKGROUND_COLOR);
    paint_grid(&ctx);
    paint_axes(&ctx);
    paint_tick_labels(&ctx);
    paint_title(&ctx);

    let upper = crate::core::cst::generate_curve(&design.upper.weights(), CURVE_SAMPLE_COUNT);
    let lower = crate::core::cst::generate_curve(&design.lower.weights(), CURVE_SAMPLE_COUNT);

    if options.fill_airfoil {
        paint_fill(&ctx, &upper, &lower, color32(options.fill_color));
    }

    paint_curve(&ctx, &upper, color32(options.upper_curve_color));
    paint_curve(&ctx, &lower, color32(options.lower_curve_color));

    if options.show_control_points {
        paint_control_points(&ctx, design, edit, options);
    }
    paint_legend(&ctx, options);
}

/// Bündelt Painter, Ziel-Rechteck und Abbildung für einen Render-Durchlauf.
struct PaintContext<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    viewport: PlotViewport,
}

impl PaintContext<'_> {
    /// Normierter Kurvenpunkt → absolute Bildschirmposition.
    fn to_screen(&self, p: DVec2) -> egui::Pos2 {
        let px = self.viewport.to_px(p);
        egui::pos2(self.rect.min.x + px.x as f32, self.rect.min.y + px.y as f32)
    }

    /// Plot-lokale Pixelposition → absolute Bildschirmposition.
    fn local_to_screen(&self, px: DVec2) -> egui::Pos2 {
        egui::pos2(self.rect.min.x + px.x as f32, self.rect.min.y + px.y as f32)
    }
}

fn paint_grid(ctx: &PaintContext) {
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let y_half = PlotViewport::Y_RANGE / 2.0;

    for i in 0..=GRID_DIVISIONS_X {
        let x = i as f64 / GRID_DIVISIONS_X as f64;
        let top = ctx.to_screen(DVec2::new(x, y_half));
        let bottom = ctx.to_screen(DVec2::new(x, -y_half));
        ctx.painter.line_segment([top, bottom], stroke);
    }

    for j in 0..=GRID_DIVISIONS_Y {
        let y = -y_half + j as f64 * PlotViewport::Y_RANGE / GRID_DIVISIONS_Y as f64;
        let left = ctx.to_screen(DVec2::new(0.0, y));
        let right = ctx.to_screen(DVec2::new(1.0, y));
        ctx.painter.line_segment([left, right], stroke);
    }
}

fn paint_axes(ctx: &PaintContext) {
    let stroke = egui::Stroke::new(1.5, AXIS_COLOR);
    // Sehnenachse (y = 0)
    ctx.painter.line_segment(
        [
            ctx.to_screen(DVec2::new(0.0, 0.0)),
            ctx.to_screen(DVec2::new(1.0, 0.0)),
        ],
        stroke,
    );
    // Vorderkante (x = 0)
    let y_half = PlotViewport::Y_RANGE / 2.0;
    ctx.painter.line_segment(
        [
            ctx.to_screen(DVec2::new(0.0, y_half)),
            ctx.to_screen(DVec2::new(0.0, -y_half)),
        ],
        stroke,
    );
}

fn paint_tick_labels(ctx: &PaintContext) {
    let font = egui::FontId::proportional(10.0);
    let y_half = PlotViewport::Y_RANGE / 2.0;

    // x-Beschriftung unterhalb des Plotbereichs, jede zweite Unterteilung
    for i in (0..=GRID_DIVISIONS_X).step_by(2) {
        let x = i as f64 / GRID_DIVISIONS_X as f64;
        let anchor = ctx.to_screen(DVec2::new(x, -y_half)) + egui::vec2(0.0, 4.0);
        ctx.painter.text(
            anchor,
            egui::Align2::CENTER_TOP,
            format!("{:.1}", x),
            font.clone(),
            TEXT_COLOR,
        );
    }

    // y-Beschriftung links neben dem Plotbereich, jede dritte Unterteilung
    for j in (0..=GRID_DIVISIONS_Y).step_by(3) {
        let y = -y_half + j as f64 * PlotViewport::Y_RANGE / GRID_DIVISIONS_Y as f64;
        let anchor = ctx.to_screen(DVec2::new(0.0, y)) - egui::vec2(6.0, 0.0);
        ctx.painter.text(
            anchor,
            egui::Align2::RIGHT_CENTER,
            format!("{:.2}", y),
            font.clone(),
            TEXT_COLOR,
        );
    }
}

fn paint_title(ctx: &PaintContext) {
    ctx.painter.text(
        egui::pos2(ctx.rect.center().x, ctx.rect.min.y + 4.0),
        egui::Align2::CENTER_TOP,
        "CST-Profilschnitt",
        egui::FontId::proportional(14.0),
        TEXT_COLOR,
    );
}

/// Füllt die Fläche zwischen Ober- und Unterseite.
///
/// egui tesselliert nur konvexe Polygone zuverlässig; die Füllung wird
/// deshalb als Trapezstreifen pro Abtastintervall gezeichnet.
fn paint_fill(ctx: &PaintContext, upper: &[DVec2], lower: &[DVec2], color: egui::Color32) {
    debug_assert_eq!(upper.len(), lower.len());
    for i in 0..upper.len().saturating_sub(1) {
        let quad = vec![
            ctx.to_screen(upper[i]),
            ctx.to_screen(upper[i + 1]),
            ctx.to_screen(lower[i + 1]),
            ctx.to_screen(lower[i]),
        ];
        ctx.painter
            .add(egui::Shape::convex_polygon(quad, color, egui::Stroke::NONE));
    }
}

fn paint_curve(ctx: &PaintContext, samples: &[DVec2], color: egui::Color32) {
    let points: Vec<egui::Pos2> = samples.iter().map(|&p| ctx.to_screen(p)).collect();
    ctx.painter
        .add(egui::Shape::line(points, egui::Stroke::new(2.0, color)));
}

fn paint_control_points(
    ctx: &PaintContext,
    design: &AirfoilDesign,
    edit: &EditState,
    options: &EditorOptions,
) {
    let active = edit.active_point();
    paint_surface_points(
        ctx,
        &design.upper,
        SurfaceSide::Upper,
        color32(options.upper_curve_color),
        active,
        options.show_labels,
    );
    paint_surface_points(
        ctx,
        &design.lower,
        SurfaceSide::Lower,
        color32(options.lower_curve_color),
        active,
        options.show_labels,
    );
}

fn paint_surface_points(
    ctx: &PaintContext,
    surface: &Surface,
    side: SurfaceSide,
    color: egui::Color32,
    active: Option<PointRef>,
    show_labels: bool,
) {
    let count = surface.len();
    for (index, point) in surface.points().iter().enumerate() {
        let pos = ctx.local_to_screen(control_point_px(&ctx.viewport, index, count, point.value));
        let is_active = active == Some(PointRef { side, id: point.id });
        let radius = if is_active {
            MARKER_RADIUS_ACTIVE
        } else {
            MARKER_RADIUS
        };

        // Oberseite als Kreis, Unterseite als Raute — auf einen Blick unterscheidbar
        match side {
            SurfaceSide::Upper => {
                ctx.painter.circle_filled(pos, radius, color);
            }
            SurfaceSide::Lower => paint_diamond(ctx.painter, pos, radius + 1.0, color),
        }
        if is_active {
            ctx.painter
                .circle_stroke(pos, radius + 2.5, egui::Stroke::new(1.5, egui::Color32::WHITE));
        }

        if show_labels {
            ctx.painter.text(
                pos - egui::vec2(0.0, radius + 4.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{:.3}", point.value),
                egui::FontId::proportional(10.0),
                TEXT_COLOR,
            );
        }
    }
}

/// Zeichnet eine gefüllte Raute (Unterseiten-Marker).
fn paint_diamond(painter: &egui::Painter, center: egui::Pos2, size: f32, color: egui::Color32) {
    let points = vec![
        egui::pos2(center.x, center.y - size),
        egui::pos2(center.x + size, center.y),
        egui::pos2(center.x, center.y + size),
        egui::pos2(center.x - size, center.y),
    ];
    painter
        .add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
}

fn paint_legend(ctx: &PaintContext, options: &EditorOptions) {
    let size = egui::vec2(132.0, 44.0);
    let origin = egui::pos2(ctx.rect.max.x - size.x - 12.0, ctx.rect.min.y + 24.0);
    let legend_rect = egui::Rect::from_min_size(origin, size);

    ctx.painter.rect_filled(
        legend_rect,
        egui::CornerRadius::same(3),
        egui::Color32::from_rgba_unmultiplied(30, 36, 44, 220),
    );

    let entries = [
        ("Oberseite", color32(options.upper_curve_color)),
        ("Unterseite", color32(options.lower_curve_color)),
    ];
    let font = egui::FontId::proportional(11.0);
    for (row, (label, color)) in entries.iter().enumerate() {
        let y = origin.y + 13.0 + row as f32 * 18.0;
        ctx.painter.line_segment(
            [
                egui::pos2(origin.x + 8.0, y),
                egui::pos2(origin.x + 30.0, y),
            ],
            egui::Stroke::new(2.0, *color),
        );
        ctx.painter.text(
            egui::pos2(origin.x + 38.0, y),
            egui::Align2::LEFT_CENTER,
            *label,
            font.clone(),
            TEXT_COLOR,
        );
    }
}

/// RGBA-Float-Farbe (Options-Format) → egui-Farbe.
pub fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}
