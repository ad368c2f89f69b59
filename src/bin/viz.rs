use eframe::egui;
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, Points};

use projectile_lab::params::{parse_field, presets, LaunchParams, ParamError, STANDARD_GRAVITY};
use projectile_lab::plot::trajectory_series;
use projectile_lab::results::ResultLog;
use projectile_lab::sim::simulate;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Projectile Flight Lab",
        options,
        Box::new(|_| Ok(Box::new(LabApp::default()))),
    )
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Raw form text, parsed only when the user presses Run.
struct ParamForm {
    speed: String,
    angle: String,
    mass: String,
    air_density: String,
    cd: String,
    area: String,
    dt: String,
}

impl Default for ParamForm {
    fn default() -> Self {
        let p = presets::lab_default();
        Self {
            speed: p.speed.to_string(),
            angle: p.angle_deg.to_string(),
            mass: p.mass.to_string(),
            air_density: p.air_density.to_string(),
            cd: p.cd.to_string(),
            area: p.area.to_string(),
            dt: p.dt.to_string(),
        }
    }
}

impl ParamForm {
    fn parse(&self) -> Result<LaunchParams, ParamError> {
        let params = LaunchParams {
            speed: parse_field("initial speed", &self.speed)?,
            angle_deg: parse_field("launch angle", &self.angle)?,
            mass: parse_field("mass", &self.mass)?,
            air_density: parse_field("air density", &self.air_density)?,
            cd: parse_field("drag coefficient", &self.cd)?,
            area: parse_field("cross-sectional area", &self.area)?,
            dt: parse_field("integration step", &self.dt)?,
            gravity: STANDARD_GRAVITY,
        };
        params.validate()?;
        Ok(params)
    }
}

/// One open dialog at a time, matching the blocking message boxes of a
/// classic desktop form.
#[derive(Clone)]
enum Modal {
    Error(String),
    ConfirmRerun(LaunchParams),
    ConfirmClear,
}

#[derive(Default)]
struct LabApp {
    form: ParamForm,
    log: ResultLog,
    modal: Option<Modal>,
}

impl LabApp {
    fn on_run(&mut self) {
        match self.form.parse() {
            Ok(params) => {
                if self.log.contains_dt(params.dt) {
                    self.modal = Some(Modal::ConfirmRerun(params));
                } else {
                    self.log.push(simulate(&params));
                }
            }
            Err(e) => self.modal = Some(Modal::Error(e.to_string())),
        }
    }

    fn show_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.modal.clone() else {
            return;
        };
        match modal {
            Modal::Error(message) => {
                dialog("Input error").show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.modal = None;
                    }
                });
            }
            Modal::ConfirmRerun(params) => {
                dialog("Confirm").show(ctx, |ui| {
                    ui.label(format!(
                        "A run with step {} s already exists. Run it again?",
                        params.dt
                    ));
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            self.log.push(simulate(&params));
                            self.modal = None;
                        }
                        if ui.button("No").clicked() {
                            self.modal = None;
                        }
                    });
                });
            }
            Modal::ConfirmClear => {
                dialog("Confirm").show(ctx, |ui| {
                    ui.label("Clear all simulation results?");
                    ui.horizontal(|ui| {
                        if ui.button("Yes").clicked() {
                            self.log.clear();
                            self.modal = None;
                        }
                        if ui.button("No").clicked() {
                            self.modal = None;
                        }
                    });
                });
            }
        }
    }
}

fn dialog(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

// ---------------------------------------------------------------------------
// UI
// ---------------------------------------------------------------------------

impl eframe::App for LabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(230.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading("Launch Parameters");
                ui.add_space(8.0);

                let dialog_open = self.modal.is_some();
                ui.add_enabled_ui(!dialog_open, |ui| {
                    egui::Grid::new("param_form")
                        .num_columns(2)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            for (label, field) in [
                                ("Speed (m/s)", &mut self.form.speed),
                                ("Angle (deg)", &mut self.form.angle),
                                ("Mass (kg)", &mut self.form.mass),
                                ("Air density (kg/m³)", &mut self.form.air_density),
                                ("Drag coefficient", &mut self.form.cd),
                                ("Area (m²)", &mut self.form.area),
                            ] {
                                ui.label(label);
                                ui.add(egui::TextEdit::singleline(field).desired_width(80.0));
                                ui.end_row();
                            }
                        });

                    // The step field stands apart from the body parameters
                    ui.add_space(14.0);
                    ui.horizontal(|ui| {
                        ui.strong("Step Δt (s)");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.form.dt).desired_width(80.0),
                        );
                    });

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui.button("Run simulation").clicked() {
                            self.on_run();
                        }
                        if ui.button("Clear results").clicked() {
                            self.modal = Some(Modal::ConfirmClear);
                        }
                    });
                });
            });

        egui::TopBottomPanel::bottom("results")
            .resizable(true)
            .default_height(170.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Results");
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("results_table")
                        .striped(true)
                        .num_columns(5)
                        .spacing([24.0, 4.0])
                        .show(ui, |ui| {
                            ui.strong("Δt (s)");
                            ui.strong("Range (m)");
                            ui.strong("Max height (m)");
                            ui.strong("Final speed (m/s)");
                            ui.strong("Flight time (s)");
                            ui.end_row();
                            for run in self.log.runs() {
                                ui.label(format!("{:.6}", run.dt));
                                ui.label(format!("{:.2}", run.range));
                                ui.label(format!("{:.2}", run.max_height));
                                ui.label(format!("{:.2}", run.final_speed));
                                ui.label(format!("{:.2}", run.flight_time()));
                                ui.end_row();
                            }
                        });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let series = trajectory_series(self.log.runs());

            Plot::new("trajectories")
                .legend(Legend::default().position(Corner::RightTop))
                .x_axis_label("Range (m)")
                .y_axis_label("Height (m)")
                .include_x(0.0)
                .include_y(0.0)
                .show(ui, |plot_ui| {
                    for s in &series {
                        let color = egui::Color32::from_rgb(s.color.0, s.color.1, s.color.2);

                        // Long runs get thinned for drawing; the landing
                        // sample is always kept.
                        let step = (s.points.len() / 2000).max(1);
                        let mut points: Vec<[f64; 2]> =
                            s.points.iter().copied().step_by(step).collect();
                        if points.last() != Some(&s.landing) {
                            points.push(s.landing);
                        }

                        plot_ui.line(
                            Line::new(s.label.clone(), points).color(color).width(2.0),
                        );
                        plot_ui.points(
                            Points::new("", vec![s.landing])
                                .color(color)
                                .filled(true)
                                .radius(4.0)
                                .shape(MarkerShape::Circle),
                        );
                    }
                });
        });

        self.show_modal(ctx);
    }
}
