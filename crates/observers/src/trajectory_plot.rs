use attractor_core::Trajectory;
use eframe::egui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::render::{DisplayMode, Renderer, project};

/// A [`Renderer`] that opens a native window with one scatter panel per
/// display mode.
///
/// Each call to [`render`][Renderer::render] blocks until the window is
/// closed.
///
/// # Example
///
/// ```ignore
/// let trajectory = euler::solve_for(&lorenz, 50.0);
/// TrajectoryPlot::new().render("Lorenz", &trajectory, &DisplayMode::overview())?;
/// ```
pub struct TrajectoryPlot {
    point_radius: f32,
}

impl TrajectoryPlot {
    /// Creates a renderer with small, dense markers.
    #[must_use]
    pub fn new() -> Self {
        Self { point_radius: 0.8 }
    }

    /// Sets the marker radius in screen points.
    #[must_use]
    pub fn point_radius(mut self, radius: f32) -> Self {
        self.point_radius = radius;
        self
    }
}

impl Default for TrajectoryPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TrajectoryPlot {
    type Error = eframe::Error;

    fn render(
        &mut self,
        name: &str,
        trajectory: &Trajectory,
        modes: &[DisplayMode],
    ) -> Result<(), Self::Error> {
        let panels: Vec<Panel> = modes
            .iter()
            .map(|mode| {
                let (x_label, y_label) = mode.axis_labels();
                Panel {
                    title: mode.title(),
                    x_label,
                    y_label,
                    points: project(trajectory, mode),
                }
            })
            .collect();

        let app = TrajectoryApp {
            name: name.to_owned(),
            panels,
            radius: self.point_radius,
        };

        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
    }
}

struct Panel {
    title: String,
    x_label: &'static str,
    y_label: &'static str,
    points: Vec<[f64; 2]>,
}

/// The egui [`eframe::App`] that lays panels out side by side.
struct TrajectoryApp {
    name: String,
    panels: Vec<Panel>,
    radius: f32,
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.panels.is_empty() {
                ui.label("Nothing to display.");
                return;
            }
            ui.columns(self.panels.len(), |columns| {
                for (i, (ui, panel)) in columns.iter_mut().zip(&self.panels).enumerate() {
                    ui.heading(&panel.title);
                    Plot::new(("trajectory_plot", i))
                        .data_aspect(1.0)
                        .x_axis_label(panel.x_label)
                        .y_axis_label(panel.y_label)
                        .show(ui, |plot_ui| {
                            let points: PlotPoints = panel.points.iter().copied().collect();
                            plot_ui.points(
                                Points::new(points)
                                    .radius(self.radius)
                                    .name(&self.name),
                            );
                        });
                }
            });
        });
    }
}
