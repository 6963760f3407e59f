//! Interactive viewer for the particle sandbox
//!
//! Draws a front view (x/y plane) of the box, the obstacles and the particles,
//! with a parameters panel. When started with a config file, the file is watched
//! and the simulation restarts whenever it changes.

use eframe::egui;
use glam::Vec3;
use notify::{Event, RecommendedWatcher, Watcher};
use particlebox_core::{RenderSink, Simulation, SimulationConfig};
use std::path::PathBuf;
use std::sync::mpsc;

/// Geometry received from the simulation, ready to draw
#[derive(Debug, Default)]
struct ViewerSink {
    sphere: Option<(Vec3, f32)>,
    capsule: Option<(Vec3, Vec3, f32)>,
    positions: Vec<Vec3>,
}

impl RenderSink for ViewerSink {
    fn update_sphere(&mut self, center: Vec3, radius: f32) {
        self.sphere = Some((center, radius));
    }

    fn update_capsule(&mut self, a: Vec3, b: Vec3, radius: f32) {
        self.capsule = Some((a, b, radius));
    }

    fn update_particles(&mut self, start: usize, positions: &[Vec3]) {
        let end = start + positions.len();
        if self.positions.len() < end {
            self.positions.resize(end, Vec3::ZERO);
        }
        self.positions[start..end].copy_from_slice(positions);
    }
}

/// Which primitives get drawn
struct RenderToggles {
    sphere: bool,
    capsule: bool,
    particles: bool,
}

/// Maps world x/y onto the canvas
struct Projection {
    origin: egui::Pos2,
    world_center: Vec3,
    scale: f32,
}

impl Projection {
    fn fit(rect: egui::Rect, config: &SimulationConfig) -> Self {
        let extent = config.bounds.max - config.bounds.min;
        let scale_x = rect.width() / extent.x.max(1e-3);
        let scale_y = rect.height() / extent.y.max(1e-3);
        let scale = scale_x.min(scale_y) * 0.9;
        Self {
            origin: rect.center(),
            world_center: (config.bounds.min + config.bounds.max) * 0.5,
            scale,
        }
    }

    fn to_screen(&self, p: Vec3) -> egui::Pos2 {
        let local = p - self.world_center;
        self.origin + egui::vec2(local.x * self.scale, -local.y * self.scale)
    }

    fn length(&self, len: f32) -> f32 {
        len * self.scale
    }
}

pub struct ViewerApp {
    config: SimulationConfig,
    /// Edited in the parameters panel, applied on restart
    pending: SimulationConfig,
    sim_opt: Option<Simulation>,
    sink: ViewerSink,
    last_error: Option<String>,
    playing: bool,
    toggles: RenderToggles,
    config_path: Option<PathBuf>,
    overrides: Box<dyn Fn(&mut SimulationConfig)>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
}

impl ViewerApp {
    pub fn new(
        config: SimulationConfig,
        config_path: Option<PathBuf>,
        overrides: Box<dyn Fn(&mut SimulationConfig)>,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let watcher = config_path.as_ref().and_then(|path| {
            let mut watcher = notify::recommended_watcher(move |res| {
                let _ = tx.send(res);
            })
            .map_err(|e| log::warn!("config watching unavailable: {}", e))
            .ok()?;
            watcher
                .watch(path, notify::RecursiveMode::NonRecursive)
                .map_err(|e| log::warn!("cannot watch {}: {}", path.display(), e))
                .ok()?;
            Some(watcher)
        });

        let mut app = Self {
            pending: config.clone(),
            config,
            sim_opt: None,
            sink: ViewerSink::default(),
            last_error: None,
            playing: true,
            toggles: RenderToggles {
                sphere: true,
                capsule: true,
                particles: true,
            },
            config_path,
            overrides,
            file_watcher: watcher,
            file_receiver: rx,
        };

        app.restart();
        app
    }

    /// Tear down the running simulation and start over from `self.config`
    fn restart(&mut self) {
        if let Some(sim) = self.sim_opt.take() {
            sim.teardown();
        }
        self.sink = ViewerSink::default();
        match Simulation::init(self.config.clone(), &mut self.sink) {
            Ok(sim) => {
                self.sim_opt = Some(sim);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
    }

    fn check_file_changes(&mut self) {
        let mut needs_reload = false;
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    ..
                }) => needs_reload = true,
                Ok(_) => {}
                Err(e) => log::warn!("config watcher error: {}", e),
            }
        }

        if needs_reload {
            self.reload_config();
        }
    }

    fn reload_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        match crate::read_config(&path) {
            Ok(mut config) => {
                (self.overrides)(&mut config);
                log::info!("reloaded {}", path.display());
                self.pending = config.clone();
                self.config = config;
                self.restart();
            }
            Err(e) => self.last_error = Some(format!("{}: {}", path.display(), e)),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                self.playing = !self.playing;
            }
            if ui.button("⏮ Reset").clicked() {
                self.restart();
            }
            if ui.button("⏭ Step").clicked() {
                if let Some(sim) = self.sim_opt.as_mut() {
                    sim.update(1.0 / 60.0, &mut self.sink);
                }
            }

            ui.separator();

            let dt = ui.ctx().input(|i| i.stable_dt).max(1e-6);
            ui.label(format!("{:.3} ms/frame ({:.1} FPS)", dt * 1000.0, 1.0 / dt));

            if let Some(sim) = &self.sim_opt {
                ui.separator();
                ui.label(format!("Frame: {}  t = {:.2}s", sim.frame(), sim.sim_time()));
            }
        });
    }

    fn parameters(&mut self, ui: &mut egui::Ui) {
        ui.heading("Physics Parameters");
        let pending = &mut self.pending;
        ui.add(egui::Slider::new(&mut pending.gravity_magnitude, 0.0..=30.0).text("gravity"));
        ui.add(egui::Slider::new(&mut pending.bounce_elasticity, 0.0..=1.0).text("elasticity"));
        ui.add(egui::Slider::new(&mut pending.friction_factor, 0.0..=1.0).text("friction"));
        ui.add(egui::Slider::new(&mut pending.time_factor, 0.0..=2.0).text("time factor"));
        ui.add(egui::Slider::new(&mut pending.particle_count, 1..=5000).text("particles"));

        if ui.button("Apply & restart").clicked() {
            self.config = self.pending.clone();
            self.restart();
        }

        ui.separator();
        ui.checkbox(&mut self.toggles.sphere, "Sphere");
        ui.checkbox(&mut self.toggles.capsule, "Capsule");
        ui.checkbox(&mut self.toggles.particles, "Particles");
    }

    fn draw_scene(&self, ui: &egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();
        let proj = Projection::fit(rect, &self.config);

        let bounds = egui::Rect::from_two_pos(
            proj.to_screen(self.config.bounds.min),
            proj.to_screen(self.config.bounds.max),
        );
        painter.rect_stroke(bounds, 0.0, egui::Stroke::new(1.0, egui::Color32::GRAY));

        if self.toggles.sphere {
            if let Some((center, radius)) = self.sink.sphere {
                painter.circle_stroke(
                    proj.to_screen(center),
                    proj.length(radius),
                    egui::Stroke::new(2.0, egui::Color32::LIGHT_RED),
                );
            }
        }

        if self.toggles.capsule {
            if let Some((a, b, radius)) = self.sink.capsule {
                let stroke = egui::Stroke::new(2.0, egui::Color32::LIGHT_GREEN);
                let (sa, sb) = (proj.to_screen(a), proj.to_screen(b));
                let r = proj.length(radius);
                let side = (sb - sa).normalized().rot90() * r;
                painter.line_segment([sa + side, sb + side], stroke);
                painter.line_segment([sa - side, sb - side], stroke);
                painter.circle_stroke(sa, r, stroke);
                painter.circle_stroke(sb, r, stroke);
            }
        }

        if self.toggles.particles {
            for &p in &self.sink.positions {
                painter.circle_filled(proj.to_screen(p), 2.0, egui::Color32::LIGHT_BLUE);
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        egui::SidePanel::right("parameters").show(ctx, |ui| self.parameters(ui));

        if let Some(error) = &self.last_error {
            let error = error.clone();
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
                );
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| self.draw_scene(ui));

        if self.playing {
            let frame_dt = ctx.input(|i| i.stable_dt);
            if let Some(sim) = self.sim_opt.as_mut() {
                sim.update(frame_dt, &mut self.sink);
            }
            ctx.request_repaint();
        }
    }
}
