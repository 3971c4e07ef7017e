//! Interactive road graph view.

use eframe::egui::{self, Color32, CursorIcon, Frame, Sense, Stroke};
use geo::Point;
use petgraph::visit::EdgeRef;
use roadgraph_core::model::RoadGraph;

use crate::camera::Camera;

const BACKGROUND: Color32 = Color32::WHITE;
const EDGE_COLOR: Color32 = Color32::from_gray(128);
const NODE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const INTERSECTION_COLOR: Color32 = Color32::from_rgb(214, 39, 40);
const HOVER_COLOR: Color32 = Color32::from_rgb(255, 165, 0);

const NODE_RADIUS: f32 = 1.0;
const INTERSECTION_RADIUS: f32 = 3.0;
/// Pointer snap radius for intersection picking, in pixels
const HOVER_RADIUS_PX: f64 = 8.0;

pub struct ViewerApp {
    network: RoadGraph,
    camera: Camera,
}

impl ViewerApp {
    pub fn new(network: RoadGraph) -> Self {
        Self {
            network,
            camera: Camera::new(),
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Nodes: {}", self.network.node_count()));
                ui.separator();
                ui.label(format!("Edges: {}", self.network.edge_count()));
                ui.separator();
                ui.label(format!(
                    "Intersections: {}",
                    self.network.intersection_count()
                ));
                ui.separator();
                ui.label(format!("Streets: {}", self.network.names().street_count()));
            });
        });

        egui::CentralPanel::default()
            .frame(Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let viewport = response.rect;

                self.camera.fit_if_needed(self.network.bounds(), viewport);

                if response.dragged() {
                    self.camera.pan(response.drag_delta());
                }
                if let Some(pointer) = response.hover_pos() {
                    let (zoom, scroll) =
                        ui.input(|input| (input.zoom_delta(), input.smooth_scroll_delta.y));
                    let factor = f64::from(zoom) * (f64::from(scroll) / 250.0).exp();
                    if (factor - 1.0).abs() > f64::EPSILON {
                        self.camera.zoom_at(pointer, viewport, factor);
                    }
                }

                for edge in self.network.graph.edge_references() {
                    let a = self.network.node(edge.source()).geometry;
                    let b = self.network.node(edge.target()).geometry;
                    painter.line_segment(
                        [
                            self.camera.to_screen((a.x(), a.y()), viewport),
                            self.camera.to_screen((b.x(), b.y()), viewport),
                        ],
                        Stroke::new(1.0, EDGE_COLOR),
                    );
                }

                for node in self.network.graph.node_weights() {
                    let screen = self
                        .camera
                        .to_screen((node.geometry.x(), node.geometry.y()), viewport);
                    painter.circle_filled(screen, NODE_RADIUS, NODE_COLOR);
                }

                for index in self.network.intersections() {
                    let node = self.network.node(index);
                    let screen = self
                        .camera
                        .to_screen((node.geometry.x(), node.geometry.y()), viewport);
                    painter.circle_filled(screen, INTERSECTION_RADIUS, INTERSECTION_COLOR);
                }

                if let Some(pointer) = response.hover_pos() {
                    let world = self.camera.to_world(pointer, viewport);
                    let tolerance = self.camera.px_to_world(HOVER_RADIUS_PX);
                    let hovered = self
                        .network
                        .nearest_intersection(Point::new(world.0, world.1), tolerance);

                    if let Some(index) = hovered {
                        let node = self.network.node(index);
                        let screen = self
                            .camera
                            .to_screen((node.geometry.x(), node.geometry.y()), viewport);
                        painter.circle_stroke(
                            screen,
                            INTERSECTION_RADIUS + 2.0,
                            Stroke::new(1.5, HOVER_COLOR),
                        );

                        ctx.set_cursor_icon(CursorIcon::PointingHand);
                        let pos = pointer + egui::vec2(14.0, 14.0);
                        egui::Area::new(egui::Id::new("intersection_hover_overlay"))
                            .order(egui::Order::Foreground)
                            .fixed_pos(pos)
                            .show(ctx, |ui| {
                                egui::Frame::popup(ui.style()).show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(format!("Node {}", node.id)).strong(),
                                    );
                                    ui.label(format!("degree: {}", self.network.degree(index)));
                                    let names = self.network.names().names_for(node.id);
                                    if names.is_empty() {
                                        ui.label("unnamed roads");
                                    } else {
                                        for name in names {
                                            ui.label(name);
                                        }
                                    }
                                });
                            });
                    }
                }
            });
    }
}
