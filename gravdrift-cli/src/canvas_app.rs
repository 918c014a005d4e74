//! Interactive window for gravdrift
//!
//! Steps the simulation once per repaint, feeds the primary pointer button in
//! as press/drag/release events and paints the frame views with egui.

use eframe::egui;
use gravdrift_core::views::frame_view;
use gravdrift_core::{
    apply_pointer_event, step_world, Canvas, FrameView, PointerEvent, Rgb, Ring, SimConfig, World,
};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 10, 20);
const ORB_OUTLINE_WIDTH: f32 = 2.0;
const FIELD_STROKE_WIDTH: f32 = 1.0;

pub struct CanvasApp {
    world: World,
    pointer: PointerTracker,
}

/// Primary-button state for one frame, with the pointer in canvas space.
#[derive(Debug, Clone, Copy, Default)]
struct ButtonInput {
    pressed: bool,
    down: bool,
    released: bool,
    /// Whether the pointer is over the canvas.
    inside: bool,
    point: Option<glam::Vec2>,
}

/// Turns per-frame button state into press/drag/release events.
#[derive(Debug, Default)]
struct PointerTracker {
    held: bool,
    last_point: Option<glam::Vec2>,
}

impl PointerTracker {
    fn events(&mut self, input: ButtonInput) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        if let Some(point) = input.point {
            self.last_point = Some(point);
        }

        if input.pressed && input.inside {
            if let Some(point) = input.point {
                self.held = true;
                events.push(PointerEvent::Press(point));
            }
        } else if input.down && self.held {
            if let Some(point) = input.point {
                events.push(PointerEvent::Drag(point));
            }
        }

        // A release seen outside the window, or missed entirely, lands on the
        // last known point.
        if self.held && (input.released || !input.down) {
            self.held = false;
            if let Some(point) = self.last_point {
                events.push(PointerEvent::Release(point));
            }
        }
        events
    }
}

impl CanvasApp {
    pub fn new(config: SimConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            world: World::new(&config),
            pointer: PointerTracker::default(),
        }
    }

    /// Translates the primary button into pointer events in canvas space.
    fn handle_pointer(&mut self, ctx: &egui::Context, rect: egui::Rect, now: f64) {
        let input = ctx.input(|i| {
            let pos = i.pointer.interact_pos().or(i.pointer.latest_pos());
            ButtonInput {
                pressed: i.pointer.primary_pressed(),
                down: i.pointer.primary_down(),
                released: i.pointer.primary_released(),
                inside: pos.is_some_and(|p| rect.contains(p)),
                point: pos.map(|p| {
                    let local = p - rect.min;
                    glam::Vec2::new(local.x, local.y)
                }),
            }
        });

        for event in self.pointer.events(input) {
            let outcome = apply_pointer_event(&mut self.world, event, now);
            if let Some(id) = outcome.spawned_orb {
                tracing::debug!(orb = id.0, consumed = outcome.consumed, "release condensed an orb");
            }
        }
    }

    fn sync_canvas(&mut self, rect: egui::Rect) {
        // Minimised windows report an empty rect; keep the last good bounds.
        if let Ok(canvas) = Canvas::new(rect.width(), rect.height()) {
            if canvas != self.world.canvas {
                tracing::debug!(width = canvas.width(), height = canvas.height(), "canvas resized");
                self.world.set_canvas(canvas);
            }
        }
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time) * 1000.0;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let _response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

                self.sync_canvas(rect);
                self.handle_pointer(ctx, rect, now);
                step_world(&mut self.world, now);

                paint_frame(ui.painter(), rect.min, &frame_view(&self.world));
            });

        ctx.request_repaint();
    }
}

fn to_color32(color: Rgb, alpha: f32) -> egui::Color32 {
    let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(alpha),
    )
}

fn fill_ring(painter: &egui::Painter, center: egui::Pos2, ring: &Ring) {
    painter.circle_filled(center, ring.diameter * 0.5, to_color32(ring.color, ring.alpha));
}

fn stroke_ring(painter: &egui::Painter, center: egui::Pos2, ring: &Ring, width: f32) {
    painter.circle_stroke(
        center,
        ring.diameter * 0.5,
        egui::Stroke::new(width, to_color32(ring.color, ring.alpha)),
    );
}

/// Paints pointer field, orbs, then particles, offset to the canvas origin.
fn paint_frame(painter: &egui::Painter, origin: egui::Pos2, view: &FrameView) {
    let at = |p: glam::Vec2| origin + egui::vec2(p.x, p.y);

    if let Some(pointer) = &view.pointer {
        let center = at(pointer.pos);
        stroke_ring(painter, center, &pointer.outline, FIELD_STROKE_WIDTH);
        for ring in &pointer.field {
            stroke_ring(painter, center, ring, FIELD_STROKE_WIDTH);
        }
    }

    for orb in &view.orbs {
        let center = at(orb.pos);
        for ring in orb.glow.iter().chain(&orb.gradient) {
            fill_ring(painter, center, ring);
        }
        stroke_ring(painter, center, &orb.outline, ORB_OUTLINE_WIDTH);
        for ring in &orb.field {
            stroke_ring(painter, center, ring, FIELD_STROKE_WIDTH);
        }
    }

    for particle in &view.particles {
        for point in &particle.trail {
            let center = at(point.pos);
            for ring in &point.glow {
                fill_ring(painter, center, ring);
            }
            painter.circle_filled(center, point.diameter * 0.5, to_color32(point.color, point.alpha));
        }

        let center = at(particle.pos);
        for ring in &particle.glow {
            fill_ring(painter, center, ring);
        }
        painter.circle_filled(
            center,
            particle.diameter * 0.5,
            to_color32(particle.color, particle.alpha),
        );
    }
}
