//! SeqBox Demo - reference sequencer host
//!
//! A small eframe timeline with strips on channels, wired up as a host for
//! the box-select operator: ctrl+click starts a quick drag, ctrl+B arms a
//! waiting drag that extends the current selection, shift at release
//! deselects, escape or right click cancels.

use anyhow::Result;
use eframe::egui::{self, Color32, Pos2, Rect, Rounding, Stroke, Vec2};
use seqbox_core::{ScreenPos, SequencerView, Strip, StripSelection, TimelinePoint};
use seqbox_tool::{
    Binding, BindingId, BindingRegistry, BoxSelectOperator, InputEvent, Key, Keymap, Modifiers,
    MouseButton, Transition,
};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

const CHANNEL_COUNT: i32 = 6;
const LANE_HEIGHT: f32 = 36.0;
const RULER_HEIGHT: f32 = 20.0;
const PX_PER_FRAME: f32 = 4.0;
const HANDLE_WIDTH: f32 = 4.0;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("SeqBox demo starting...");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 420.0])
            .with_title("SeqBox Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "SeqBox Demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    Ok(())
}

// ── Strip data ───────────────────────────────────────────────────

struct DemoStrip {
    name: String,
    channel: i32,
    frame_start: f64,
    frame_end: f64,
    color: Color32,
    selection: StripSelection,
}

impl DemoStrip {
    fn new(name: &str, channel: i32, frame_start: f64, frame_end: f64, color: Color32) -> Self {
        Self {
            name: name.into(),
            channel,
            frame_start,
            frame_end,
            color,
            selection: StripSelection::NONE,
        }
    }
}

impl Strip for DemoStrip {
    fn channel(&self) -> i32 {
        self.channel
    }
    fn frame_start(&self) -> f64 {
        self.frame_start
    }
    fn frame_end(&self) -> f64 {
        self.frame_end
    }
    fn selection(&self) -> StripSelection {
        self.selection
    }
    fn set_selection(&mut self, selection: StripSelection) {
        self.selection = selection;
    }
}

// ── Sequencer view ───────────────────────────────────────────────

/// The timeline panel: strips plus the view transform of the current frame.
struct SequencerPanel {
    strips: Vec<DemoStrip>,
    /// Paint rect of the lanes area, updated every frame before events
    /// are dispatched.
    view_rect: Rect,
    /// Screen y of channel 0's lane bottom (one lane below the panel).
    lanes_bottom: f32,
    /// Set when the operator asks for the drag affordance.
    overlay_armed: bool,
}

impl SequencerPanel {
    fn demo_strips() -> Vec<DemoStrip> {
        vec![
            DemoStrip::new("Intro", 1, 10.0, 60.0, Color32::from_rgb(90, 140, 220)),
            DemoStrip::new("Body", 1, 55.0, 150.0, Color32::from_rgb(90, 140, 220)),
            DemoStrip::new("Outro", 1, 150.0, 210.0, Color32::from_rgb(90, 140, 220)),
            DemoStrip::new("Title", 2, 20.0, 80.0, Color32::from_rgb(200, 160, 80)),
            DemoStrip::new("Lower third", 2, 120.0, 170.0, Color32::from_rgb(200, 160, 80)),
            DemoStrip::new("Music", 3, 0.0, 200.0, Color32::from_rgb(110, 190, 120)),
            DemoStrip::new("VO", 4, 30.0, 130.0, Color32::from_rgb(190, 110, 150)),
        ]
    }

    /// Screen rect a strip occupies.
    fn strip_rect(&self, strip: &DemoStrip) -> Rect {
        let left = self.view_rect.left() + strip.frame_start as f32 * PX_PER_FRAME;
        let right = self.view_rect.left() + strip.frame_end as f32 * PX_PER_FRAME;
        let top = self.lanes_bottom - (strip.channel + 1) as f32 * LANE_HEIGHT + 3.0;
        Rect::from_min_max(Pos2::new(left, top), Pos2::new(right, top + LANE_HEIGHT - 6.0))
    }
}

impl SequencerView for SequencerPanel {
    type Strip = DemoStrip;

    fn view_to_timeline(&self, pos: ScreenPos) -> TimelinePoint {
        let frame = (pos.x - self.view_rect.left()) / PX_PER_FRAME;
        let channel = (self.lanes_bottom - pos.y) / LANE_HEIGHT;
        TimelinePoint::new(frame as f64, channel as f64)
    }

    fn strips_mut(&mut self) -> &mut [DemoStrip] {
        &mut self.strips
    }

    fn deselect_all(&mut self) {
        for strip in &mut self.strips {
            strip.selection = StripSelection::NONE;
        }
    }

    fn show_drag_overlay(&mut self, _wait_for_input: bool) {
        self.overlay_armed = true;
    }
}

// ── Binding registry ─────────────────────────────────────────────

#[derive(Default)]
struct InstalledBindings {
    entries: Vec<(BindingId, Binding)>,
}

impl BindingRegistry for InstalledBindings {
    fn add_binding(&mut self, binding: Binding) -> BindingId {
        let id = BindingId::new();
        self.entries.push((id, binding));
        id
    }

    fn remove_binding(&mut self, id: BindingId) -> seqbox_core::Result<()> {
        let idx = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(seqbox_core::SeqBoxError::BindingNotFound(id.as_uuid()))?;
        self.entries.remove(idx);
        Ok(())
    }
}

// ── App ──────────────────────────────────────────────────────────

struct DemoApp {
    panel: SequencerPanel,
    bindings: InstalledBindings,
    keymap: Option<Keymap>,
    operator: Option<BoxSelectOperator>,
    /// Screen anchor of the active drag, for the rubber band.
    drag_anchor: Option<Pos2>,
}

impl DemoApp {
    fn new() -> Self {
        let mut bindings = InstalledBindings::default();
        let keymap = Keymap::install(&mut bindings, MouseButton::Left);

        Self {
            panel: SequencerPanel {
                strips: SequencerPanel::demo_strips(),
                view_rect: Rect::NOTHING,
                lanes_bottom: 0.0,
                overlay_armed: false,
            },
            bindings,
            keymap: Some(keymap),
            operator: None,
            drag_anchor: None,
        }
    }

    /// Translate this frame's egui input into tool events.
    fn collect_events(ctx: &egui::Context) -> Vec<InputEvent> {
        ctx.input(|i| {
            let modifiers = Modifiers {
                ctrl: i.modifiers.ctrl || i.modifiers.command,
                shift: i.modifiers.shift,
            };
            let pos = i
                .pointer
                .latest_pos()
                .map(|p| ScreenPos::new(p.x, p.y))
                .unwrap_or_default();

            let mut events = Vec::new();
            if i.pointer.primary_pressed() {
                events.push(InputEvent::MousePress {
                    button: MouseButton::Left,
                    pos,
                    modifiers,
                });
            }
            if i.pointer.secondary_pressed() {
                events.push(InputEvent::MousePress {
                    button: MouseButton::Right,
                    pos,
                    modifiers,
                });
            }
            if i.pointer.primary_released() {
                events.push(InputEvent::MouseRelease {
                    button: MouseButton::Left,
                    pos,
                    modifiers,
                });
            }
            if i.pointer.secondary_released() {
                events.push(InputEvent::MouseRelease {
                    button: MouseButton::Right,
                    pos,
                    modifiers,
                });
            }
            if i.key_pressed(egui::Key::B) {
                events.push(InputEvent::KeyPress {
                    key: Key::B,
                    modifiers,
                });
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(InputEvent::KeyPress {
                    key: Key::Escape,
                    modifiers,
                });
            }
            events
        })
    }

    fn dispatch(&mut self, events: &[InputEvent]) {
        for event in events {
            if let Some(op) = self.operator.as_mut() {
                match op.modal(&mut self.panel, event) {
                    Transition::Finished | Transition::Cancelled => {
                        self.operator = None;
                        self.drag_anchor = None;
                        self.panel.overlay_armed = false;
                        continue;
                    }
                    Transition::RunningModal => {}
                    Transition::PassThrough => {
                        // Not ours; fall through to host handling below.
                        self.handle_host_event(event);
                    }
                }
            } else if let Some(mut op) = self
                .keymap
                .as_ref()
                .and_then(|keymap| keymap.operator_for(event))
            {
                if op.invoke(&mut self.panel, event) == Transition::RunningModal {
                    self.operator = Some(op);
                } else {
                    self.panel.overlay_armed = false;
                }
            } else {
                self.handle_host_event(event);
            }

            // Anchor the rubber band at the press that started the drag.
            if self.drag_anchor.is_none() {
                if let Some(op) = &self.operator {
                    if op.state() == seqbox_tool::OperatorState::Dragging {
                        if let Some(p) = event.pos() {
                            self.drag_anchor = Some(Pos2::new(p.x, p.y));
                        }
                    }
                }
            }
        }
    }

    /// Default host behavior when no operator owns the event: plain click
    /// selects the strip under the pointer, or clears the selection.
    fn handle_host_event(&mut self, event: &InputEvent) {
        let InputEvent::MousePress {
            button: MouseButton::Left,
            pos,
            modifiers,
        } = *event
        else {
            return;
        };
        if modifiers.ctrl {
            return;
        }

        let screen = Pos2::new(pos.x, pos.y);
        if !self.panel.view_rect.contains(screen) {
            return;
        }

        let hit = self
            .panel
            .strips
            .iter()
            .position(|s| self.panel.strip_rect(s).contains(screen));
        self.panel.deselect_all();
        if let Some(idx) = hit {
            self.panel.strips[idx].selection = StripSelection::BODY;
        }
    }

    // ── Painting ─────────────────────────────────────────────────

    fn draw_panel(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available, egui::Sense::click_and_drag());
        let rect = response.rect;

        // Lanes area below the ruler; channel 0's band sits one lane
        // below the visible bottom so channel 1 is the lowest lane.
        let lanes_rect = Rect::from_min_max(
            Pos2::new(rect.left(), rect.top() + RULER_HEIGHT),
            rect.max,
        );
        self.panel.view_rect = lanes_rect;
        self.panel.lanes_bottom = lanes_rect.bottom() + LANE_HEIGHT;

        painter.rect_filled(rect, 0.0, Color32::from_gray(24));

        self.draw_ruler(&painter, rect);
        self.draw_lanes(&painter, lanes_rect);
        self.draw_strips(&painter);
        self.draw_rubber_band(&painter, ui.ctx());
    }

    fn draw_ruler(&self, painter: &egui::Painter, rect: Rect) {
        let ruler_rect =
            Rect::from_min_size(rect.min, Vec2::new(rect.width(), RULER_HEIGHT));
        painter.rect_filled(ruler_rect, 0.0, Color32::from_gray(32));

        let tick_spacing = 10.0 * PX_PER_FRAME;
        let ticks = (rect.width() / tick_spacing) as i32 + 1;
        for i in 0..ticks {
            let x = rect.left() + i as f32 * tick_spacing;
            let major = i % 5 == 0;
            let height = if major { 10.0 } else { 4.0 };
            painter.line_segment(
                [
                    Pos2::new(x, ruler_rect.bottom() - height),
                    Pos2::new(x, ruler_rect.bottom()),
                ],
                Stroke::new(1.0, Color32::from_gray(if major { 110 } else { 60 })),
            );
            if major {
                painter.text(
                    Pos2::new(x + 2.0, ruler_rect.top() + 2.0),
                    egui::Align2::LEFT_TOP,
                    format!("{}", i * 10),
                    egui::FontId::monospace(9.0),
                    Color32::from_gray(140),
                );
            }
        }
    }

    fn draw_lanes(&self, painter: &egui::Painter, lanes_rect: Rect) {
        for channel in 1..=CHANNEL_COUNT {
            let top = self.panel.lanes_bottom - (channel + 1) as f32 * LANE_HEIGHT;
            let lane_rect = Rect::from_min_size(
                Pos2::new(lanes_rect.left(), top),
                Vec2::new(lanes_rect.width(), LANE_HEIGHT),
            );
            if channel % 2 == 0 {
                painter.rect_filled(lane_rect, 0.0, Color32::from_gray(28));
            }
            painter.line_segment(
                [
                    Pos2::new(lane_rect.left(), lane_rect.bottom()),
                    Pos2::new(lane_rect.right(), lane_rect.bottom()),
                ],
                Stroke::new(1.0, Color32::from_gray(40)),
            );
            painter.text(
                Pos2::new(lane_rect.left() + 4.0, lane_rect.center().y),
                egui::Align2::LEFT_CENTER,
                format!("{channel}"),
                egui::FontId::monospace(9.0),
                Color32::from_gray(90),
            );
        }
    }

    fn draw_strips(&self, painter: &egui::Painter) {
        for strip in &self.panel.strips {
            let strip_rect = self.panel.strip_rect(strip);
            let sel = strip.selection;

            let fill = if sel.body {
                strip.color.gamma_multiply(0.6)
            } else {
                strip.color.gamma_multiply(0.25)
            };
            painter.rect_filled(strip_rect, Rounding::same(3.0), fill);

            let border = if sel.body {
                Stroke::new(1.5, Color32::WHITE)
            } else {
                Stroke::new(1.0, strip.color.gamma_multiply(0.5))
            };
            painter.rect_stroke(strip_rect, Rounding::same(3.0), border);

            // Selected handles drawn as bright edge bars.
            if sel.left_handle {
                let handle = Rect::from_min_size(
                    strip_rect.min,
                    Vec2::new(HANDLE_WIDTH, strip_rect.height()),
                );
                painter.rect_filled(handle, 0.0, Color32::WHITE);
            }
            if sel.right_handle {
                let handle = Rect::from_min_size(
                    Pos2::new(strip_rect.right() - HANDLE_WIDTH, strip_rect.top()),
                    Vec2::new(HANDLE_WIDTH, strip_rect.height()),
                );
                painter.rect_filled(handle, 0.0, Color32::WHITE);
            }

            painter.text(
                Pos2::new(strip_rect.left() + HANDLE_WIDTH + 3.0, strip_rect.center().y),
                egui::Align2::LEFT_CENTER,
                &strip.name,
                egui::FontId::proportional(10.0),
                Color32::from_gray(220),
            );
        }
    }

    fn draw_rubber_band(&self, painter: &egui::Painter, ctx: &egui::Context) {
        if !self.panel.overlay_armed {
            return;
        }
        let Some(anchor) = self.drag_anchor else {
            return;
        };
        let Some(pointer) = ctx.input(|i| i.pointer.latest_pos()) else {
            return;
        };
        let band = Rect::from_two_pos(anchor, pointer);
        painter.rect_filled(band, 0.0, Color32::from_rgba_unmultiplied(120, 170, 255, 24));
        painter.rect_stroke(band, 0.0, Stroke::new(1.0, Color32::from_rgb(120, 170, 255)));
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("help").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("ctrl+drag: box select handles");
                ui.separator();
                ui.label("ctrl+B then drag: extend selection");
                ui.separator();
                ui.label("shift at release: deselect");
                ui.separator();
                ui.label("esc / right click: cancel");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_panel(ui);
        });

        let events = Self::collect_events(ctx);
        if !events.is_empty() {
            self.dispatch(&events);
        }

        if self.operator.is_some() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(keymap) = self.keymap.take() {
            if let Err(e) = keymap.remove(&mut self.bindings) {
                warn!("failed to remove keymap: {e}");
            }
        }
    }
}
